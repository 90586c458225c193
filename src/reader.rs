use crate::error::{FormatError, IoContext, ParseError, ParseErrorKind};
use crate::policy::{ErrorPolicy, ReaderOptions};
use crate::record::Read;
use crate::util::{looks_like_gzip, open_file};

use std::io::{BufRead, BufReader};
use std::path::Path;

const BUF_CAP: usize = 256 * 1024;

#[inline]
fn is_header(line: &[u8]) -> bool {
    matches!(line.first(), Some(b'>' | b'@'))
}

/// Streaming FASTA/FASTQ reader (plain/.gz) yielding input [`Read`]s.
///
/// Format is decided per record from the header sigil, so mixed files are
/// accepted. Lines are handled as raw bytes; sequences need not be UTF-8.
/// FASTQ qualities are checked for length and then dropped.
pub struct FastxReader {
    rdr: Box<dyn BufRead + Send>,
    opts: ReaderOptions,
    pos: IoContext,
    // header line already consumed while scanning the previous record
    lookahead: Option<Vec<u8>>,
}

impl FastxReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: ReaderOptions) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let start = IoContext {
            byte_pos: 0,
            line_num: 0,
        };
        let at_start = |kind: ParseErrorKind| ParseError { ctx: start, kind };
        let f = open_file(path).map_err(|e| at_start(e.into()))?;

        let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
            || looks_like_gzip(&f).unwrap_or(false);

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                let dec = flate2::read::MultiGzDecoder::new(f);
                Box::new(BufReader::with_capacity(BUF_CAP, dec))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(at_start(FormatError::GzipDisabled.into()));
            }
        } else {
            #[cfg(feature = "mmap")]
            {
                // SAFETY: the mapping is read-only and owned by the reader; the
                // file must not be truncated while it is being read.
                let mmap = unsafe { memmap2::Mmap::map(&f) }.map_err(|e| at_start(e.into()))?;
                Box::new(std::io::Cursor::new(mmap))
            }
            #[cfg(not(feature = "mmap"))]
            {
                Box::new(BufReader::with_capacity(BUF_CAP, f))
            }
        };
        Ok(Self::with_reader(rdr, opts))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory data, ...).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: ReaderOptions) -> Self {
        Self::with_reader(Box::new(reader), opts)
    }

    fn with_reader(rdr: Box<dyn BufRead + Send>, opts: ReaderOptions) -> Self {
        Self {
            rdr,
            opts,
            pos: IoContext {
                byte_pos: 0,
                line_num: 0,
            },
            lookahead: None,
        }
    }

    fn error(&self, kind: impl Into<ParseErrorKind>) -> ParseError {
        ParseError {
            ctx: self.pos,
            kind: kind.into(),
        }
    }

    /// Next line without its terminator into `buf`; `false` at EOF.
    fn line_into(&mut self, buf: &mut Vec<u8>) -> Result<bool, ParseError> {
        buf.clear();
        let n = self
            .rdr
            .read_until(b'\n', buf)
            .map_err(|e| self.error(e))?;
        if n == 0 {
            return Ok(false);
        }
        self.pos.line_num += 1;
        self.pos.byte_pos += n as u64;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(true)
    }

    fn required_line(&mut self, buf: &mut Vec<u8>) -> Result<(), ParseError> {
        if self.line_into(buf)? {
            Ok(())
        } else {
            Err(self.error(FormatError::UnexpectedEof))
        }
    }

    fn parse_record(&mut self) -> Result<Option<Read>, ParseError> {
        let mut header = match self.lookahead.take() {
            Some(h) => h,
            None => Vec::with_capacity(128),
        };
        // blank lines between records are tolerated
        while header.is_empty() {
            if !self.line_into(&mut header)? {
                return Ok(None);
            }
        }

        let id = header[1..]
            .split(|b| b.is_ascii_whitespace())
            .next()
            .map(|tok| String::from_utf8_lossy(tok).into_owned())
            .unwrap_or_default();

        match header[0] {
            b'>' => self.fasta_sequence(id).map(Some),
            b'@' => self.fastq_sequence(id).map(Some),
            _ => Err(self.error(FormatError::MissingHeader)),
        }
    }

    fn fasta_sequence(&mut self, id: String) -> Result<Read, ParseError> {
        let mut seq = Vec::with_capacity(256);
        let mut line = Vec::with_capacity(256);
        while self.line_into(&mut line)? {
            if is_header(&line) {
                self.lookahead = Some(line);
                break;
            }
            seq.extend(line.iter().copied().filter(|b| !b.is_ascii_whitespace()));
        }
        Ok(Read { id: Some(id), seq })
    }

    fn fastq_sequence(&mut self, id: String) -> Result<Read, ParseError> {
        let mut seq = Vec::with_capacity(256);
        self.required_line(&mut seq)?;

        let mut line = Vec::with_capacity(256);
        self.required_line(&mut line)?;
        if line.first() != Some(&b'+') {
            return Err(self.error(FormatError::MissingPlus));
        }

        self.required_line(&mut line)?;
        if line.len() != seq.len() {
            return Err(self.error(FormatError::LengthMismatch {
                seq: seq.len(),
                qual: line.len(),
            }));
        }
        Ok(Read { id: Some(id), seq })
    }

    /// Drop lines up to the next header; `false` if input ran out first.
    fn skip_to_header(&mut self) -> bool {
        let mut line = Vec::with_capacity(256);
        loop {
            match self.line_into(&mut line) {
                Ok(true) if is_header(&line) => {
                    self.lookahead = Some(line);
                    return true;
                }
                Ok(true) => {}
                Ok(false) | Err(_) => return false,
            }
        }
    }
}

impl Iterator for FastxReader {
    type Item = Result<Read, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.parse_record() {
                Ok(rec) => return rec.map(Ok),
                Err(err) if self.opts.error_policy == ErrorPolicy::Skip => {
                    log::warn!("skipping malformed record: {err}");
                    if !self.skip_to_header() {
                        return None;
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Load a whole FASTA/FASTQ file, failing on the first malformed record.
pub fn load_reads<P: AsRef<Path>>(path: P) -> Result<Vec<Read>, ParseError> {
    FastxReader::from_path(
        path,
        ReaderOptions {
            error_policy: ErrorPolicy::Return,
        },
    )?
    .collect()
}

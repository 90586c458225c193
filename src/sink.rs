use crate::error::WriteError;
use crate::policy::RecordFormat;
use crate::record::SimRecord;
use crate::util::open_output;

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

enum Inner {
    Plain(BufWriter<File>),
    Gz(GzEncoder<BufWriter<File>>),
}

/// Open FASTA/FASTQ output file (plain or gzip), created or appended.
///
/// Appending to a gzip file adds a new gzip member; readers must use a
/// multi-member decoder (`flate2::read::MultiGzDecoder`). Dropping the sink
/// without [`RecordSink::finish`] still closes the stream, but errors are lost.
pub struct RecordSink {
    path: PathBuf,
    inner: Inner,
    format: RecordFormat,
    written: u64,
}

impl RecordSink {
    pub fn open<P: AsRef<Path>>(
        path: P,
        format: RecordFormat,
        compress: Option<Compression>,
        append: bool,
    ) -> Result<Self, WriteError> {
        let path = path.as_ref().to_path_buf();
        let f = open_output(&path, append).map_err(|e| WriteError::io_err(e, &path))?;
        let buf = BufWriter::with_capacity(256 * 1024, f);
        let inner = match compress {
            Some(level) => Inner::Gz(GzEncoder::new(buf, level)),
            None => Inner::Plain(buf),
        };
        Ok(Self {
            path,
            inner,
            format,
            written: 0,
        })
    }

    pub fn write_record(&mut self, rec: &SimRecord) -> Result<(), WriteError> {
        let res = match &mut self.inner {
            Inner::Plain(w) => encode(w, rec, self.format),
            Inner::Gz(w) => encode(w, rec, self.format),
        };
        res.map_err(|e| WriteError::io_err(e, &self.path))?;
        self.written += 1;
        Ok(())
    }

    /// Records written through this handle.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush, close the gzip member if any, and release the file.
    pub fn finish(self) -> Result<(), WriteError> {
        let path = self.path;
        let res = match self.inner {
            Inner::Plain(mut w) => w.flush(),
            Inner::Gz(enc) => enc.finish().and_then(|mut w| w.flush()),
        };
        res.map_err(|e| WriteError::io_err(e, path))
    }
}

fn encode<W: Write>(w: &mut W, rec: &SimRecord, format: RecordFormat) -> io::Result<()> {
    match format {
        RecordFormat::Fastq => {
            w.write_all(b"@")?;
            w.write_all(rec.id.as_bytes())?;
            w.write_all(b"\n")?;
            w.write_all(&rec.seq)?;
            w.write_all(b"\n+\n")?;
            w.write_all(&rec.qual)?;
            w.write_all(b"\n")
        }
        RecordFormat::Fasta => {
            w.write_all(b">")?;
            w.write_all(rec.id.as_bytes())?;
            w.write_all(b"\n")?;
            w.write_all(&rec.seq)?;
            w.write_all(b"\n")
        }
    }
}

/// Write all `records` to `path` in one go.
pub fn write_records<P: AsRef<Path>>(
    records: &[SimRecord],
    path: P,
    format: RecordFormat,
    compress: Option<Compression>,
    append: bool,
) -> Result<(), WriteError> {
    let mut sink = RecordSink::open(path, format, compress, append)?;
    for rec in records {
        sink.write_record(rec)?;
    }
    log::debug!("wrote {} records to {:?}", sink.written(), sink.path);
    sink.finish()
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("read numbering offset must be >= 1, got {offset}")]
    InvalidOffset { offset: u64 },
    #[error("numbering {count} reads/pairs from {offset} exceeds u64::MAX")]
    NumberingOverflow { offset: u64, count: usize },
    #[error("paired mode needs an even number of interleaved reads, got {count}")]
    UnpairedReads { count: usize },
    #[error("I/O error writing {path:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}

impl WriteError {
    pub(crate) fn io_err(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected '>' or '@' at start of record")]
    MissingHeader,
    #[error("missing '+' separator line")]
    MissingPlus,
    #[error("unexpected EOF inside record")]
    UnexpectedEof,
    #[error("quality length ({qual}) does not match sequence length ({seq})")]
    LengthMismatch { seq: usize, qual: usize },
    #[error("gzip input but crate built without the `gzip` feature")]
    GzipDisabled,
}

/// What went wrong while reading input records.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Input failure, positioned at the line/byte where it was noticed.
#[derive(Debug, Error)]
#[error("line {}, byte {}: {kind}", .ctx.line_num, .ctx.byte_pos)]
pub struct ParseError {
    pub ctx: IoContext,
    #[source]
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn is_format(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Format(_))
    }
}

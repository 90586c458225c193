//! Writes simulated sequencing reads as FASTQ/FASTA files.
//!
//! - Single-end (`<name>.fasta`) or paired-end (`<name>_1.fasta`, `<name>_2.fasta`).
//! - Reads numbered `read<N>/<id>` from a caller-supplied offset; offset 1
//!   creates the files, larger offsets append, so output can be built in chunks.
//! - Optional shuffle that leaves the caller's RNG untouched.
//! - Random printable-ASCII qualities drawn from the caller's RNG.
//! - Optional gzip output (`.gz` suffix); `zlib` feature for system-zlib parity.
//! - Streaming FASTA/FASTQ input reader (plain and `.gz`, optional `mmap`).

pub mod error;
pub mod output;
pub mod policy;
pub mod quality;
pub mod reader;
pub mod record;
pub mod sink;
mod util;
pub mod writer;

pub use crate::error::{FormatError, IoContext, ParseError, ParseErrorKind, WriteError};
pub use crate::output::{OpenMode, OutputDescriptor};
pub use crate::policy::{ErrorPolicy, ReaderOptions, RecordFormat, WriteOptions};
pub use crate::quality::{QualityGenerator, random_qualities};
pub use crate::reader::{FastxReader, load_reads};
pub use crate::record::{Read, SimRecord};
pub use crate::sink::{RecordSink, write_records};
pub use crate::writer::{ChunkedWriter, ReadWriter, write_reads};

pub use flate2::Compression;

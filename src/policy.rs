use flate2::Compression;

/// Record layout handed to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// `@id`, sequence, `+`, quality.
    Fastq,
    /// `>id`, sequence. Qualities are still drawn so the RNG advances identically.
    Fasta,
}

/// How `write_reads` lays out and encodes its output.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Split the collection into interleaved mates and write `_1`/`_2` files.
    pub paired: bool,
    /// Gzip every output file and append `.gz` to its name.
    pub compress: bool,
    /// Permute reads (or mate pairs) before writing, without disturbing the RNG.
    pub shuffle: bool,
    pub format: RecordFormat,
    pub level: Compression,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            paired: false,
            compress: false,
            shuffle: false,
            format: RecordFormat::Fastq,
            level: Compression::default(),
        }
    }
}

/// Error handling policy for the input reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Skip malformed records and continue.
    Skip,
    /// Return the first error to the caller (strict).
    Return,
}

#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub error_policy: ErrorPolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Skip,
        }
    }
}

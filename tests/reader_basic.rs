use kira_simreads_writer::{ErrorPolicy, FastxReader, Read, ReaderOptions};
use std::fs::File;
use std::io::{BufReader, Write};
use tempfile::tempdir;

const MIXED: &str = "\
>chr1 first contig
ACGT
ACG

@read7/x desc
ACGTN
+
!!!!!
>empty
>last
TT
";

fn strict() -> ReaderOptions {
    ReaderOptions {
        error_policy: ErrorPolicy::Return,
    }
}

#[test]
fn fasta_and_fastq_records() {
    let rdr = FastxReader::from_bufread(BufReader::new(MIXED.as_bytes()), strict());
    let reads: Vec<Read> = rdr.collect::<Result<_, _>>().unwrap();
    assert_eq!(
        reads,
        vec![
            Read::new("chr1", "ACGTACG"),
            Read::new("read7/x", "ACGTN"),
            Read::new("empty", ""),
            Read::new("last", "TT"),
        ]
    );
}

#[test]
fn length_mismatch_strict_and_skip() {
    let bad = "\
@r1
ACGT
+
###
@r2
A
+
#";
    let mut fq = FastxReader::from_bufread(BufReader::new(bad.as_bytes()), strict());
    let err = fq.next().unwrap().unwrap_err();
    assert!(err.is_format(), "expected format error, got {err}");
    assert_eq!(err.ctx.line_num, 4);

    let mut fq = FastxReader::from_bufread(BufReader::new(bad.as_bytes()), ReaderOptions::default());
    let r = fq.next().unwrap().unwrap();
    assert_eq!(r, Read::new("r2", "A"));
    assert!(fq.next().is_none());
}

#[cfg(feature = "gzip")]
#[test]
fn gz_detected_by_magic() {
    let dir = tempdir().unwrap();
    // no .gz extension: detection falls back to the magic bytes
    let path = dir.path().join("sample.fasta");
    {
        let f = File::create(&path).unwrap();
        let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
        writeln!(enc, ">x").unwrap();
        writeln!(enc, "ACGT").unwrap();
        enc.finish().unwrap();
    }

    let reads = kira_simreads_writer::load_reads(&path).expect("open gz");
    assert_eq!(reads, vec![Read::new("x", "ACGT")]);
}

#[test]
fn non_utf8_sequence_bytes_survive() {
    let data: Vec<u8> = b"@r\x01\n\xFFA\xC3\n+\n!!!\n>f\nN\xFE\n".to_vec();
    let rdr = FastxReader::from_bufread(std::io::Cursor::new(data), strict());
    let reads: Vec<Read> = rdr.collect::<Result<_, _>>().unwrap();
    assert_eq!(reads[0].seq, vec![0xFF, b'A', 0xC3]);
    assert_eq!(reads[1], Read::new("f", vec![b'N', 0xFE]));
}

#[test]
fn truncated_fastq_reports_eof() {
    let mut fq = FastxReader::from_bufread(BufReader::new("@r1\nACGT\n+\n".as_bytes()), strict());
    let err = fq.next().unwrap().unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().contains("unexpected EOF"));
}

use crate::error::WriteError;
use crate::output::OutputDescriptor;
use crate::policy::WriteOptions;
use crate::quality::QualityGenerator;
use crate::record::{Read, SimRecord};
use crate::sink::write_records;

use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// Writes read collections as numbered, quality-annotated FASTQ/FASTA files.
#[derive(Debug, Clone, Default)]
pub struct ReadWriter {
    opts: WriteOptions,
    quality: QualityGenerator,
}

impl ReadWriter {
    pub fn new(opts: WriteOptions) -> Self {
        Self {
            opts,
            quality: QualityGenerator::new(),
        }
    }

    pub fn options(&self) -> &WriteOptions {
        &self.opts
    }

    /// Write `reads` under `base_name`, numbering from `offset`.
    ///
    /// `offset == 1` truncates the output files, a larger offset appends to
    /// them, so successive chunks of one collection can be written with
    /// offsets `1`, `1 + pairs_in_chunk_1`, ... and numbering stays global.
    ///
    /// In paired mode reads must be interleaved mates (`A1, B1, A2, B2, ...`);
    /// an odd count is rejected before anything is opened.
    ///
    /// Shuffling draws its permutation from `rng` and then rewinds `rng`, so
    /// the qualities written depend only on the RNG state on entry, not on
    /// whether shuffling was requested. `rng` must be an owned generator whose
    /// clone is an independent copy of its state, hence the `SeedableRng`
    /// bound (`ThreadRng` clones share state and are rejected).
    pub fn write_reads<P, R>(
        &self,
        reads: &[Read],
        base_name: P,
        offset: u64,
        rng: &mut R,
    ) -> Result<OutputDescriptor, WriteError>
    where
        P: AsRef<Path>,
        R: Rng + SeedableRng + Clone,
    {
        if offset < 1 {
            return Err(WriteError::InvalidOffset { offset });
        }
        if self.opts.paired && reads.len() % 2 != 0 {
            return Err(WriteError::UnpairedReads { count: reads.len() });
        }

        let sides = split_mates(reads, self.opts.paired);
        let n = sides[0].len();
        last_number(offset, n)?;

        let out =
            OutputDescriptor::resolve(base_name, self.opts.paired, self.opts.compress, offset);
        log::debug!(
            "writing {} reads from #{offset} to {:?} ({:?})",
            reads.len(),
            out.paths,
            out.mode
        );

        // numbered in input order, before any shuffle
        let mut named: Vec<Vec<(String, &[u8])>> = sides
            .into_iter()
            .map(|side| {
                side.into_iter()
                    .enumerate()
                    .map(|(i, r)| {
                        (
                            read_name(offset + i as u64, r.id_or_empty()),
                            r.seq.as_slice(),
                        )
                    })
                    .collect()
            })
            .collect();

        if self.opts.shuffle {
            let order = permutation_preserving_state(n, rng);
            log::trace!("shuffle order {order:?}");
            for side in named.iter_mut() {
                *side = order.iter().map(|&i| side[i].clone()).collect();
            }
        }

        // mate-interleaved so chunked calls draw exactly like one big call
        let slots: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (0..named.len()).map(move |side| (side, i)))
            .collect();
        let lengths: Vec<usize> = slots
            .iter()
            .map(|&(side, i)| named[side][i].1.len())
            .collect();
        let quals = self.quality.generate(&lengths, lengths.len(), rng);
        debug_assert_eq!(quals.len(), slots.len());

        let mut records: Vec<Vec<SimRecord>> =
            named.iter().map(|_| Vec::with_capacity(n)).collect();
        for ((side, i), qual) in slots.into_iter().zip(quals) {
            let (id, seq) = &named[side][i];
            records[side].push(SimRecord {
                id: id.clone(),
                seq: seq.to_vec(),
                qual,
            });
        }

        let level = self.opts.compress.then_some(self.opts.level);
        for (recs, path) in records.iter().zip(&out.paths) {
            write_records(recs, path, self.opts.format, level, out.mode.is_append())?;
        }
        Ok(out)
    }
}

/// Free-function form of [`ReadWriter::write_reads`].
pub fn write_reads<P, R>(
    reads: &[Read],
    base_name: P,
    offset: u64,
    opts: &WriteOptions,
    rng: &mut R,
) -> Result<OutputDescriptor, WriteError>
where
    P: AsRef<Path>,
    R: Rng + SeedableRng + Clone,
{
    ReadWriter::new(opts.clone()).write_reads(reads, base_name, offset, rng)
}

/// Number of the last read/pair when `count` are numbered from `offset`.
fn last_number(offset: u64, count: usize) -> Result<u64, WriteError> {
    let span = (count as u64).saturating_sub(1);
    offset
        .checked_add(span)
        .ok_or(WriteError::NumberingOverflow { offset, count })
}

/// `read<N>/<id>`; the slash stays even when `id` is empty.
pub fn read_name(number: u64, id: &str) -> String {
    format!("read{number}/{id}")
}

/// Random permutation of `0..n`, leaving `rng` exactly as it was found.
pub fn permutation_preserving_state<R>(n: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + SeedableRng + Clone,
{
    let snapshot = rng.clone();
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    *rng = snapshot;
    order
}

// Paired: odd 1-based positions left, even right. Single: one side, everything.
fn split_mates(reads: &[Read], paired: bool) -> Vec<Vec<&Read>> {
    if paired {
        vec![
            reads.iter().step_by(2).collect(),
            reads.iter().skip(1).step_by(2).collect(),
        ]
    } else {
        vec![reads.iter().collect()]
    }
}

/// Writes one logical output incrementally, chunk by chunk.
///
/// The first chunk creates the files; later chunks append, numbered after
/// the last read (or pair) already written.
#[derive(Debug)]
pub struct ChunkedWriter {
    writer: ReadWriter,
    base_name: PathBuf,
    next_offset: u64,
}

impl ChunkedWriter {
    pub fn new<P: AsRef<Path>>(base_name: P, opts: WriteOptions) -> Self {
        Self::starting_at(base_name, opts, 1)
    }

    /// Resume an output whose first `offset - 1` reads/pairs already exist.
    pub fn starting_at<P: AsRef<Path>>(base_name: P, opts: WriteOptions, offset: u64) -> Self {
        Self {
            writer: ReadWriter::new(opts),
            base_name: base_name.as_ref().to_path_buf(),
            next_offset: offset,
        }
    }

    pub fn next_offset(&self) -> u64 {
        self.next_offset
    }

    pub fn push<R: Rng + SeedableRng + Clone>(
        &mut self,
        reads: &[Read],
        rng: &mut R,
    ) -> Result<OutputDescriptor, WriteError> {
        let units = if self.writer.opts.paired {
            reads.len() / 2
        } else {
            reads.len()
        };
        let next = self
            .next_offset
            .checked_add(units as u64)
            .ok_or(WriteError::NumberingOverflow {
                offset: self.next_offset,
                count: units,
            })?;
        let out = self
            .writer
            .write_reads(reads, &self.base_name, self.next_offset, rng)?;
        self.next_offset = next;
        Ok(out)
    }
}

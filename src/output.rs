use std::path::{Path, PathBuf};

/// Extension used for every output file, whatever the record format.
pub const OUTPUT_EXT: &str = "fasta";
pub const GZ_EXT: &str = "gz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Truncate or create; first chunk.
    Create,
    /// Append to what earlier chunks wrote.
    Append,
}

impl OpenMode {
    /// Offset 1 starts a fresh file, anything later continues one.
    pub fn from_offset(offset: u64) -> Self {
        if offset > 1 { Self::Append } else { Self::Create }
    }

    #[inline]
    pub fn is_append(self) -> bool {
        self == Self::Append
    }
}

/// Files a single `write_reads` call produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescriptor {
    pub paths: Vec<PathBuf>,
    pub mode: OpenMode,
}

impl OutputDescriptor {
    /// `<base>.fasta`, or `<base>_1.fasta` + `<base>_2.fasta` when paired; `.gz` appended if compressed.
    pub fn resolve<P: AsRef<Path>>(base: P, paired: bool, compress: bool, offset: u64) -> Self {
        let base = base.as_ref();
        let paths = if paired {
            vec![
                with_suffix(base, "_1", compress),
                with_suffix(base, "_2", compress),
            ]
        } else {
            vec![with_suffix(base, "", compress)]
        };
        Self {
            paths,
            mode: OpenMode::from_offset(offset),
        }
    }

    pub fn is_paired(&self) -> bool {
        self.paths.len() == 2
    }
}

// Appends to the raw file name so dotted base names are left intact.
fn with_suffix(base: &Path, mate: &str, compress: bool) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(mate);
    name.push(".");
    name.push(OUTPUT_EXT);
    if compress {
        name.push(".");
        name.push(GZ_EXT);
    }
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_end_names() {
        let d = OutputDescriptor::resolve("out/sim", false, false, 1);
        assert_eq!(d.paths, vec![PathBuf::from("out/sim.fasta")]);
        assert_eq!(d.mode, OpenMode::Create);
        assert!(!d.is_paired());
    }

    #[test]
    fn paired_compressed_names() {
        let d = OutputDescriptor::resolve("sim.v2", true, true, 11);
        assert_eq!(
            d.paths,
            vec![
                PathBuf::from("sim.v2_1.fasta.gz"),
                PathBuf::from("sim.v2_2.fasta.gz")
            ]
        );
        assert_eq!(d.mode, OpenMode::Append);
    }
}

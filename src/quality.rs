use rand::Rng;
use rand::distributions::Uniform;

/// Lowest printable quality symbol (`!`).
pub const QUAL_MIN: u8 = 0x21;
/// Highest printable quality symbol (`~`).
pub const QUAL_MAX: u8 = 0x7E;

/// Uniform random quality strings over the printable ASCII range.
///
/// Holds no RNG of its own: every call draws from the generator it is given,
/// so the caller owns seeding and the resulting state trajectory.
#[derive(Debug, Clone)]
pub struct QualityGenerator {
    dist: Uniform<u8>,
}

impl Default for QualityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityGenerator {
    pub fn new() -> Self {
        Self {
            dist: Uniform::new_inclusive(QUAL_MIN, QUAL_MAX),
        }
    }

    /// One quality string per read, for the first `count` entries of `lengths`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        lengths: &[usize],
        count: usize,
        rng: &mut R,
    ) -> Vec<Vec<u8>> {
        lengths
            .iter()
            .take(count)
            .map(|&len| self.one(len, rng))
            .collect()
    }

    #[inline]
    pub fn one<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<u8> {
        (0..len).map(|_| rng.sample(self.dist)).collect()
    }
}

pub fn random_qualities<R: Rng + ?Sized>(lengths: &[usize], rng: &mut R) -> Vec<Vec<u8>> {
    QualityGenerator::new().generate(lengths, lengths.len(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lengths_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let quals = random_qualities(&[0, 1, 150, 33], &mut rng);
        assert_eq!(
            quals.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![0, 1, 150, 33]
        );
        assert!(
            quals
                .iter()
                .flatten()
                .all(|&q| (QUAL_MIN..=QUAL_MAX).contains(&q))
        );
    }

    #[test]
    fn count_limits_output() {
        let mut rng = StdRng::seed_from_u64(7);
        let quals = QualityGenerator::new().generate(&[4, 4, 4], 2, &mut rng);
        assert_eq!(quals.len(), 2);
    }

    #[test]
    fn same_state_same_qualities() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = a.clone();
        assert_eq!(
            random_qualities(&[20, 5], &mut a),
            random_qualities(&[20, 5], &mut b)
        );
    }

    #[test]
    fn covers_most_of_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = QualityGenerator::new().one(20_000, &mut rng);
        let mut seen = [false; 256];
        for b in q {
            seen[b as usize] = true;
        }
        let distinct = seen.iter().filter(|s| **s).count();
        assert_eq!(distinct, (QUAL_MAX - QUAL_MIN + 1) as usize);
    }
}

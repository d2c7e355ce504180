//! Nucleic acid alphabet detection

/// Nucleic acid alphabet of a raw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    /// Best-effort guess: a sequence with U and no T is RNA, everything else DNA.
    pub fn detect(seq: &str) -> Alphabet {
        let mut has_t = false;
        let mut has_u = false;
        for c in seq.chars() {
            match c.to_ascii_uppercase() {
                'T' => has_t = true,
                'U' => has_u = true,
                _ => {}
            }
        }

        if has_u && !has_t {
            Alphabet::Rna
        } else {
            Alphabet::Dna
        }
    }

    /// Whether every character is a canonical base of this alphabet.
    pub fn is_valid(self, seq: &str) -> bool {
        seq.chars().all(|c| match (self, c.to_ascii_uppercase()) {
            (_, 'A' | 'C' | 'G') => true,
            (Alphabet::Dna, 'T') | (Alphabet::Rna, 'U') => true,
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Alphabet::detect("AUGGC"), Alphabet::Rna);
        assert_eq!(Alphabet::detect("augc"), Alphabet::Rna);
        assert_eq!(Alphabet::detect("ATGGC"), Alphabet::Dna);
        assert_eq!(Alphabet::detect("AGGC"), Alphabet::Dna);
        assert_eq!(Alphabet::detect("ATU"), Alphabet::Dna);
        assert_eq!(Alphabet::detect(""), Alphabet::Dna);
    }

    #[test]
    fn test_is_valid() {
        assert!(Alphabet::Dna.is_valid("acgtACGT"));
        assert!(!Alphabet::Dna.is_valid("ACGU"));
        assert!(Alphabet::Rna.is_valid("ACGU"));
        assert!(!Alphabet::Rna.is_valid("ACGN"));
    }
}

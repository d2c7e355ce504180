use std::fmt;

use log::{debug, warn};

use crate::error::{BiogenError, Result};
use crate::policy::Policy;
use crate::sequence::codon::{rna_codon_to_symbol, CodonSymbol};
use crate::sequence::conversion::Strand;

/// Outcome of translating one RNA sequence at frame 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub protein: String,
    /// The stop codon that ended translation, if one was reached.
    pub stop_codon: Option<String>,
    /// Codons that could not be looked up, with their offset in the input.
    /// Only populated under `Policy::Lenient`.
    pub skipped: Vec<(usize, String)>,
    /// Length of the trailing partial codon that was not translated.
    pub discarded: usize,
}

impl Translation {
    pub fn stopped(&self) -> bool {
        self.stop_codon.is_some()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.protein)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    policy: Policy,
}

impl Translator {
    pub fn new(policy: Policy) -> Self {
        Translator { policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn translate(&self, rna: &str) -> Result<Translation> {
        let rna: Vec<char> = rna.to_uppercase().chars().collect();
        let mut translation = Translation::default();

        for (n, window) in rna.chunks(3).enumerate() {
            if window.len() < 3 {
                translation.discarded = window.len();
                break;
            }

            let codon: String = window.iter().collect();
            match rna_codon_to_symbol(&codon) {
                Some(CodonSymbol::Stop) => {
                    debug!("Translation stopped at codon {codon}");
                    translation.stop_codon = Some(codon);
                    break;
                }
                Some(CodonSymbol::AminoAcid(aa)) => translation.protein.push(aa),
                None => {
                    let position = n * 3;
                    if !self.policy.is_lenient() {
                        return Err(BiogenError::UnrecognizedCodon { codon, position });
                    }
                    warn!("Skipping unrecognized codon '{codon}' at position {position}");
                    translation.skipped.push((position, codon));
                }
            }
        }

        Ok(translation)
    }
}

/// Translate an RNA sequence at frame 0 with the default (strict) policy.
pub fn translate(rna: &str) -> Result<Translation> {
    Translator::default().translate(rna)
}

/// Transcribe a DNA strand and translate the resulting RNA.
pub fn translate_dna(dna: &str, strand: Strand, policy: Policy) -> Result<Translation> {
    Translator::new(policy).translate(&strand.transcribe(dna))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_codon_terminates() {
        let t = translate("AUGUAAUUU").unwrap();
        assert_eq!(t.protein, "M");
        assert_eq!(t.stop_codon.as_deref(), Some("UAA"));
        assert!(t.stopped());
    }

    #[test]
    fn test_trailing_fragment_discarded() {
        let t = translate("AUGA").unwrap();
        assert_eq!(t.protein, "M");
        assert_eq!(t.discarded, 1);
        assert!(!t.stopped());

        let t = translate("AUGGC").unwrap();
        assert_eq!(t.protein, "M");
        assert_eq!(t.discarded, 2);
    }

    #[test]
    fn test_short_and_empty_input() {
        assert_eq!(translate("").unwrap().protein, "");
        assert_eq!(translate("AU").unwrap().protein, "");
        assert_eq!(translate("UGA").unwrap().protein, "");
    }

    #[test]
    fn test_lowercase_input() {
        assert_eq!(translate("auguuuggg").unwrap().to_string(), "MFG");
    }

    #[test]
    fn test_deterministic() {
        let rna = "AUGGCCAUUGUAAUGGGCCGCUGAAAGGGUGCCCGAUAG";
        let first = translate(rna).unwrap();
        let second = translate(rna).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.protein, "MAIVMGR");
        assert_eq!(first.stop_codon.as_deref(), Some("UGA"));
    }

    #[test]
    fn test_strict_rejects_unrecognized_codon() {
        let err = translate("AUGANGUUU").unwrap_err();
        match err {
            BiogenError::UnrecognizedCodon { codon, position } => {
                assert_eq!(codon, "ANG");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_skips_unrecognized_codon() {
        let t = Translator::new(Policy::Lenient).translate("AUGANGUUU").unwrap();
        assert_eq!(t.protein, "MF");
        assert_eq!(t.skipped, vec![(3, "ANG".to_string())]);
    }

    #[test]
    fn test_dna_input_is_unrecognized_in_rna_translation() {
        let t = Translator::new(Policy::Lenient).translate("ATGTTT").unwrap();
        assert_eq!(t.protein, "");
        assert_eq!(t.skipped.len(), 2);
    }

    #[test]
    fn test_translate_dna() {
        // template TAC pairs to AUG
        let t = translate_dna("TACAAAATT", Strand::Template, Policy::Strict).unwrap();
        assert_eq!(t.protein, "MF");
        assert_eq!(t.stop_codon.as_deref(), Some("UAA"));

        let t = translate_dna("ATGTTTTAA", Strand::Coding, Policy::Strict).unwrap();
        assert_eq!(t.protein, "MF");
    }
}

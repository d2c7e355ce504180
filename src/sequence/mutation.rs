//! Point mutation detection between two aligned sequences

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::policy::Policy;
use crate::sequence::alphabet::Alphabet;
use crate::sequence::conversion::Strand;
use crate::sequence::translation::{Translation, Translator};

/// Placeholder for a position one sequence does not reach.
pub const GAP: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Purine to purine, or pyrimidine to pyrimidine.
    Transition,
    Transversion,
    Insertion,
    Deletion,
}

impl MutationKind {
    pub fn is_substitution(self) -> bool {
        matches!(self, MutationKind::Transition | MutationKind::Transversion)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub position: usize,
    pub original: char,
    pub mutated: char,
    pub kind: MutationKind,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}>{} ({:?})", self.position + 1, self.original, self.mutated, self.kind)
    }
}

fn is_purine(base: char) -> bool {
    matches!(base, 'A' | 'G')
}

fn is_pyrimidine(base: char) -> bool {
    matches!(base, 'C' | 'T' | 'U')
}

fn classify(original: char, mutated: char) -> MutationKind {
    if original == GAP {
        MutationKind::Insertion
    } else if mutated == GAP {
        MutationKind::Deletion
    } else if (is_purine(original) && is_purine(mutated))
        || (is_pyrimidine(original) && is_pyrimidine(mutated))
    {
        MutationKind::Transition
    } else {
        MutationKind::Transversion
    }
}

/// Compare two sequences position by position (no alignment).
///
/// Comparison is case-insensitive. Where one sequence is longer, the extra
/// bases are reported as insertions or deletions against a gap.
pub fn detect_mutations(original: &str, mutated: &str) -> Vec<Mutation> {
    let original: Vec<char> = original.to_uppercase().chars().collect();
    let mutated: Vec<char> = mutated.to_uppercase().chars().collect();
    let len = original.len().max(mutated.len());

    (0..len)
        .filter_map(|i| {
            let a = original.get(i).copied().unwrap_or(GAP);
            let b = mutated.get(i).copied().unwrap_or(GAP);
            (a != b).then(|| Mutation {
                position: i,
                original: a,
                mutated: b,
                kind: classify(a, b),
            })
        })
        .collect()
}

/// Effect of a set of mutations on the encoded protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Same protein.
    Silent,
    /// A stop codon now ends the protein earlier.
    Nonsense,
    /// Sequence length changed by a number of bases that is not a multiple of three.
    Frameshift,
    /// Protein changed without any of the above.
    Missense,
}

impl Impact {
    pub fn description(self) -> &'static str {
        match self {
            Impact::Silent => "No change in protein sequence",
            Impact::Nonsense => "Premature stop codon introduced",
            Impact::Frameshift => "Frameshift mutation affecting protein length",
            Impact::Missense => "Amino acid sequence changed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationImpact {
    pub impact: Impact,
    pub original: Translation,
    pub mutated: Translation,
}

fn as_rna(seq: &str, alphabet: Alphabet) -> String {
    match alphabet {
        Alphabet::Dna => Strand::Coding.transcribe(seq),
        Alphabet::Rna => seq.to_uppercase(),
    }
}

/// Translate both sequences at frame 0 and classify how the protein changed.
///
/// DNA input is read as the coding strand.
pub fn analyze_mutation_impact(
    original: &str,
    mutated: &str,
    alphabet: Alphabet,
    policy: Policy,
) -> Result<MutationImpact> {
    let translator = Translator::new(policy);
    let before = translator.translate(&as_rna(original, alphabet))?;
    let after = translator.translate(&as_rna(mutated, alphabet))?;

    let length_change = original.chars().count().abs_diff(mutated.chars().count());
    let impact = if before.protein == after.protein {
        Impact::Silent
    } else if after.stopped() && after.protein.len() < before.protein.len() {
        Impact::Nonsense
    } else if length_change % 3 != 0 {
        Impact::Frameshift
    } else {
        Impact::Missense
    };
    debug!("Mutation impact: {impact:?} ({} -> {})", before.protein, after.protein);

    Ok(MutationImpact { impact, original: before, mutated: after })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BiogenError;

    fn strict_dna(original: &str, mutated: &str) -> MutationImpact {
        analyze_mutation_impact(original, mutated, Alphabet::Dna, Policy::Strict).unwrap()
    }

    #[test]
    fn test_identical_sequences() {
        assert!(detect_mutations("ATGC", "atgc").is_empty());
        assert!(detect_mutations("", "").is_empty());
    }

    #[test]
    fn test_substitutions_are_classified() {
        let mutations = detect_mutations("ATGC", "GCTC");
        let kinds: Vec<MutationKind> = mutations.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MutationKind::Transition, MutationKind::Transition, MutationKind::Transversion]
        );
        assert_eq!(mutations[2].position, 2);
        assert_eq!(mutations[2].to_string(), "3G>T (Transversion)");
        assert!(mutations.iter().all(|m| m.kind.is_substitution()));
    }

    #[test]
    fn test_length_differences() {
        let insertion = detect_mutations("ATG", "ATGCC");
        assert_eq!(insertion.len(), 2);
        assert_eq!(insertion[0].kind, MutationKind::Insertion);
        assert_eq!(insertion[0].original, GAP);
        assert_eq!(insertion[0].mutated, 'C');

        let deletion = detect_mutations("ATGC", "AT");
        assert_eq!(deletion.len(), 2);
        assert!(deletion.iter().all(|m| m.kind == MutationKind::Deletion));
        assert!(!deletion[0].kind.is_substitution());
    }

    #[test]
    fn test_silent() {
        // CTT and CTC both encode leucine
        let result = strict_dna("ATGCTT", "ATGCTC");
        assert_eq!(result.impact, Impact::Silent);
        assert_eq!(result.mutated.protein, "ML");
    }

    #[test]
    fn test_nonsense() {
        let result = strict_dna("ATGTGGAAA", "ATGTGAAAA");
        assert_eq!(result.impact, Impact::Nonsense);
        assert_eq!(result.mutated.protein, "M");
        assert_eq!(result.mutated.stop_codon.as_deref(), Some("UGA"));
    }

    #[test]
    fn test_frameshift() {
        let result = strict_dna("ATGAAAGGG", "ATGAAGGG");
        assert_eq!(result.impact, Impact::Frameshift);
    }

    #[test]
    fn test_missense() {
        let result =
            analyze_mutation_impact("AUGAAA", "AUGAGA", Alphabet::Rna, Policy::Strict).unwrap();
        assert_eq!(result.impact, Impact::Missense);
        assert_eq!(result.original.protein, "MK");
        assert_eq!(result.mutated.protein, "MR");
        assert_eq!(result.impact.description(), "Amino acid sequence changed");
    }

    #[test]
    fn test_policy_applies_to_both_translations() {
        let err =
            analyze_mutation_impact("ATGAAA", "ATGNAA", Alphabet::Dna, Policy::Strict).unwrap_err();
        assert!(matches!(err, BiogenError::UnrecognizedCodon { position: 3, .. }));

        let result =
            analyze_mutation_impact("ATGAAA", "ATGNAA", Alphabet::Dna, Policy::Lenient).unwrap();
        assert_eq!(result.impact, Impact::Missense);
        assert_eq!(result.mutated.skipped.len(), 1);
    }
}

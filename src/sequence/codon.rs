//! The standard genetic code over RNA codons

use std::fmt;

/// What a single codon encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonSymbol {
    AminoAcid(char),
    Stop,
}

impl fmt::Display for CodonSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodonSymbol::AminoAcid(aa) => write!(f, "{aa}"),
            CodonSymbol::Stop => write!(f, "STOP"),
        }
    }
}

use CodonSymbol::{AminoAcid as Aa, Stop};

/// Standard genetic code, indexed by `codon_index` (bases ordered U, C, A, G).
pub const STANDARD_CODON_TABLE: [(&str, CodonSymbol); 64] = [
    ("UUU", Aa('F')), ("UUC", Aa('F')), ("UUA", Aa('L')), ("UUG", Aa('L')),
    ("UCU", Aa('S')), ("UCC", Aa('S')), ("UCA", Aa('S')), ("UCG", Aa('S')),
    ("UAU", Aa('Y')), ("UAC", Aa('Y')), ("UAA", Stop),    ("UAG", Stop),
    ("UGU", Aa('C')), ("UGC", Aa('C')), ("UGA", Stop),    ("UGG", Aa('W')),
    ("CUU", Aa('L')), ("CUC", Aa('L')), ("CUA", Aa('L')), ("CUG", Aa('L')),
    ("CCU", Aa('P')), ("CCC", Aa('P')), ("CCA", Aa('P')), ("CCG", Aa('P')),
    ("CAU", Aa('H')), ("CAC", Aa('H')), ("CAA", Aa('Q')), ("CAG", Aa('Q')),
    ("CGU", Aa('R')), ("CGC", Aa('R')), ("CGA", Aa('R')), ("CGG", Aa('R')),
    ("AUU", Aa('I')), ("AUC", Aa('I')), ("AUA", Aa('I')), ("AUG", Aa('M')),
    ("ACU", Aa('T')), ("ACC", Aa('T')), ("ACA", Aa('T')), ("ACG", Aa('T')),
    ("AAU", Aa('N')), ("AAC", Aa('N')), ("AAA", Aa('K')), ("AAG", Aa('K')),
    ("AGU", Aa('S')), ("AGC", Aa('S')), ("AGA", Aa('R')), ("AGG", Aa('R')),
    ("GUU", Aa('V')), ("GUC", Aa('V')), ("GUA", Aa('V')), ("GUG", Aa('V')),
    ("GCU", Aa('A')), ("GCC", Aa('A')), ("GCA", Aa('A')), ("GCG", Aa('A')),
    ("GAU", Aa('D')), ("GAC", Aa('D')), ("GAA", Aa('E')), ("GAG", Aa('E')),
    ("GGU", Aa('G')), ("GGC", Aa('G')), ("GGA", Aa('G')), ("GGG", Aa('G')),
];

fn base_index(base: char) -> Option<usize> {
    match base {
        'U' => Some(0),
        'C' => Some(1),
        'A' => Some(2),
        'G' => Some(3),
        _ => None,
    }
}

fn codon_index(codon: &str) -> Option<usize> {
    let mut chars = codon.chars();
    let (b1, b2, b3) = (chars.next()?, chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    Some(base_index(b1)? * 16 + base_index(b2)? * 4 + base_index(b3)?)
}

/// Look up an uppercase RNA codon. Returns `None` for anything that is not
/// exactly three of A/C/G/U.
pub fn rna_codon_to_symbol(codon: &str) -> Option<CodonSymbol> {
    codon_index(codon).map(|i| STANDARD_CODON_TABLE[i].1)
}

/// Split a sequence into complete codons at frame 0; a trailing partial codon is dropped.
pub fn split_into_codons(seq: &str) -> Vec<String> {
    let chars: Vec<char> = seq.to_uppercase().chars().collect();
    chars
        .chunks_exact(3)
        .map(|codon| codon.iter().collect())
        .collect()
}

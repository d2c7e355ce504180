//! Base conversion functions for DNA/RNA sequences

/// Convert a DNA base to its corresponding mRNA base (template strand pairing).
/// Bases outside A/T/G/C pass through unchanged, uppercased.
pub fn dna_to_mrna(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'U',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// Transcribe a template DNA strand into RNA.
///
/// Each base is paired: A→U, T→A, C→G, G→C. Anything else is kept as is.
pub fn to_rna(dna: &str) -> String {
    dna.chars().map(dna_to_mrna).collect()
}

/// Rewrite a coding DNA strand as RNA (T→U), keeping every other base.
pub fn coding_to_rna(dna: &str) -> String {
    dna.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'T' => 'U',
            other => other,
        })
        .collect()
}

/// Which DNA strand a sequence represents when it is transcribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strand {
    #[default]
    Template,
    Coding,
}

impl Strand {
    pub fn transcribe(self, dna: &str) -> String {
        match self {
            Strand::Template => to_rna(dna),
            Strand::Coding => coding_to_rna(dna),
        }
    }
}

use crate::error::{BiogenError, Result};

/// Base counts and percentages for a nucleotide sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    pub length: usize,
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub u: usize,
    /// Anything that is not A/C/G/T/U.
    pub other: usize,
}

impl Composition {
    pub fn count(&self, base: char) -> usize {
        match base.to_ascii_uppercase() {
            'A' => self.a,
            'C' => self.c,
            'G' => self.g,
            'T' => self.t,
            'U' => self.u,
            _ => self.other,
        }
    }

    pub fn percent(&self, base: char) -> f64 {
        percent_of(self.count(base), self.length)
    }

    pub fn gc_percent(&self) -> f64 {
        percent_of(self.g + self.c, self.length)
    }

    pub fn at_percent(&self) -> f64 {
        percent_of(self.a + self.t + self.u, self.length)
    }
}

// length is never zero once a Composition exists
fn percent_of(count: usize, length: usize) -> f64 {
    (count as f64 / length as f64) * 100.0
}

pub fn composition(seq: &str) -> Result<Composition> {
    let mut comp = Composition::default();

    for base in seq.chars() {
        comp.length += 1;
        match base.to_ascii_uppercase() {
            'A' => comp.a += 1,
            'C' => comp.c += 1,
            'G' => comp.g += 1,
            'T' => comp.t += 1,
            'U' => comp.u += 1,
            _ => comp.other += 1,
        }
    }

    if comp.length == 0 {
        return Err(BiogenError::ZeroLength);
    }

    Ok(comp)
}

pub fn gc_content(seq: &str) -> Result<f64> {
    composition(seq).map(|comp| comp.gc_percent())
}

/// A+T (or A+U for RNA) share of the sequence.
pub fn at_content(seq: &str) -> Result<f64> {
    composition(seq).map(|comp| comp.at_percent())
}

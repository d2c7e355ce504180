//! biogen - nucleic acid sequence toolkit
//!
//! Converts DNA to RNA, translates RNA into protein with the standard
//! codon table, computes base composition, and parses multi-record FASTA
//! files for batch conversion.

pub mod batch;
pub mod error;
pub mod fasta;
pub mod logging;
pub mod policy;
pub mod sequence;

// Re-export main types for convenience
pub use error::{BiogenError, Result};
pub use fasta::{parse, parse_str, read_fasta, FastaRecord, RecordSet};
pub use policy::Policy;
pub use sequence::{composition, to_rna, translate, Translation, Translator};

//! Error types shared by the parser, translator and batch driver

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for biogen operations
pub type Result<T> = std::result::Result<T, BiogenError>;

#[derive(Debug, Error)]
pub enum BiogenError {
    /// The input file is missing or could not be read
    #[error("cannot read input {}: {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read failure on a reader that has no path attached (stdin, in-memory)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sequence data before the first FASTA header (strict mode only)
    #[error("sequence data on line {line} appears before any FASTA header")]
    MalformedRecord { line: usize },

    /// Codon outside the standard table (strict mode only)
    #[error("unrecognized codon '{codon}' at position {position}")]
    UnrecognizedCodon { codon: String, position: usize },

    #[error("cannot compute base composition of an empty sequence")]
    ZeroLength,

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl BiogenError {
    /// Attach a path to a bare I/O failure.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            BiogenError::Io(source) => BiogenError::InputAccess {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_path_only_wraps_io() {
        let err = BiogenError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .with_path("reads.fasta");
        match err {
            BiogenError::InputAccess { path, .. } => assert_eq!(path, PathBuf::from("reads.fasta")),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = BiogenError::ZeroLength.with_path("reads.fasta");
        assert!(matches!(err, BiogenError::ZeroLength));
    }

    #[test]
    fn test_messages() {
        let err = BiogenError::UnrecognizedCodon { codon: "ANG".to_string(), position: 6 };
        assert_eq!(err.to_string(), "unrecognized codon 'ANG' at position 6");
        assert_eq!(
            BiogenError::MalformedRecord { line: 1 }.to_string(),
            "sequence data on line 1 appears before any FASTA header"
        );
    }
}

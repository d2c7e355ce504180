//! Strictness policy for malformed input

/// How the parser and translator react to input they cannot interpret.
///
/// `Strict` fails with a typed error. `Lenient` drops the offending piece,
/// logs a warning and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    #[default]
    Strict,
    Lenient,
}

impl Policy {
    pub fn is_lenient(self) -> bool {
        self == Policy::Lenient
    }
}

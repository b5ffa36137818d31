/// Broad classification of domain errors, used by callers to decide how to react.
/// Use code-style identifiers for all variants for i18n compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Duplicate,
    NotFound,
    Empty,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Duplicate => write!(f, "duplicate"),
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Empty => write!(f, "empty"),
        }
    }
}

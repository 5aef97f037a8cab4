//! Rule table loading errors.

use std::path::PathBuf;

/// Error returned when a rule table cannot be loaded.
///
/// Resolution itself never fails; only reading stylesheet text or files does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    /// YAML or JSON parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// A selector maps to something other than a mapping of style properties.
    InvalidFragment {
        /// The selector text whose fragment was rejected.
        selector: String,
        /// Description of what was wrong.
        message: String,
    },

    /// The file extension is not a recognized stylesheet format.
    UnsupportedExtension { path: PathBuf },

    /// File loading error.
    Load { path: PathBuf, message: String },
}

impl std::fmt::Display for RuleTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleTableError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse rule table {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse rule table: {}", message)
                }
            }
            RuleTableError::InvalidFragment { selector, message } => {
                write!(f, "Invalid style fragment for '{}': {}", selector, message)
            }
            RuleTableError::UnsupportedExtension { path } => {
                write!(f, "Unsupported rule table extension: {}", path.display())
            }
            RuleTableError::Load { path, message } => {
                write!(f, "Failed to load rule table {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RuleTableError {}

//! Resource location resolution
//!
//! This module describes where a schema document comes from: a file on
//! disk or text already held in memory.

use std::fmt;
use std::path::PathBuf;

/// Resource location - a file path or an in-memory schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// File system path
    Path(PathBuf),
    /// Schema text held in memory
    String(String),
}

impl Location {
    /// Create a location from a string (auto-detect type)
    ///
    /// Text that starts with `<` is taken to be the schema itself,
    /// anything else is a path.
    pub fn parse(s: &str) -> Self {
        if s.trim_start().starts_with('<') {
            Location::String(s.to_string())
        } else {
            Location::Path(PathBuf::from(s))
        }
    }

    /// Check if this is a local file
    pub fn is_file(&self) -> bool {
        matches!(self, Location::Path(_))
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Location::Path(path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(p) => write!(f, "{}", p.display()),
            Location::String(_) => f.write_str("<in-memory schema>"),
        }
    }
}

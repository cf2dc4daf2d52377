//! Limits and constraints for schema processing
//!
//! This module defines the limits applied while loading a schema and
//! walking its type graph. Traversal depth is unbounded unless a
//! maximum is configured, so a self-referential schema recurses until
//! the stack runs out.

use crate::error::{Error, Result};

/// Global limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum schema file size in bytes
    pub max_schema_size: usize,

    /// Maximum traversal depth (None = unbounded)
    pub max_depth: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_schema_size: 100 * 1024 * 1024, // 100 MB
            max_depth: None,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_schema_size: 10 * 1024 * 1024, // 10 MB
            max_depth: Some(256),
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_schema_size: 1024 * 1024 * 1024, // 1 GB
            max_depth: None,
        }
    }

    /// Set the maximum schema size
    pub fn with_max_schema_size(mut self, size: usize) -> Self {
        self.max_schema_size = size;
        self
    }

    /// Set the maximum traversal depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Check if schema size is within limits
    pub fn check_schema_size(&self, size: usize) -> Result<()> {
        if size > self.max_schema_size {
            Err(Error::LimitExceeded(format!(
                "schema size {} bytes exceeds maximum {} bytes",
                size, self.max_schema_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if traversal depth is within limits
    pub fn check_depth(&self, depth: usize) -> Result<()> {
        match self.max_depth {
            Some(max) if depth > max => Err(Error::LimitExceeded(format!(
                "traversal depth {} exceeds maximum {}",
                depth, max
            ))),
            _ => Ok(()),
        }
    }
}

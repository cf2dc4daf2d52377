//! Occurrence classification
//!
//! Classifies the raw `minOccurs`/`maxOccurs` attribute strings of an
//! element into the categories used for cardinality annotation.
//!
//! | minOccurs | maxOccurs | classification |
//! |---|---|---|
//! | absent | absent | `Nothing` |
//! | 0 | 0 | `Empty` |
//! | 0 | 1 | `OptionalSingle` |
//! | 1 | 1 | `MandatorySingle` |
//! | 0 | >1 | `OptionalArrayLimited` |
//! | 1 | >1 | `MandatoryArrayLimited` |
//! | 0 | `unbounded` | `OptionalArrayUnlimited` |
//! | 1 | `unbounded` | `MandatoryArrayUnlimited` |
//! | numeric | other non-numeric | `Warning` |
//!
//! Every other combination is left unclassified.

use tracing::warn;

use crate::documents::SchemaNode;

/// Literal `maxOccurs` value for an unbounded upper limit
pub const UNBOUNDED: &str = "unbounded";

/// Occurrence category of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// Neither bound declared
    Nothing,
    /// (0, 0)
    Empty,
    /// (0, 1)
    OptionalSingle,
    /// (1, 1)
    MandatorySingle,
    /// (0, n) with n > 1
    OptionalArrayLimited,
    /// (1, n) with n > 1
    MandatoryArrayLimited,
    /// (0, unbounded)
    OptionalArrayUnlimited,
    /// (1, unbounded)
    MandatoryArrayUnlimited,
    /// Numeric minimum with an unrecognised maximum
    Warning,
}

impl Occurrence {
    /// Classify a raw `minOccurs`/`maxOccurs` pair
    ///
    /// Returns `None` for combinations outside the table above.
    pub fn classify(min_occurs: Option<&str>, max_occurs: Option<&str>) -> Option<Self> {
        let (min, max) = match (min_occurs, max_occurs) {
            (None, None) => return Some(Occurrence::Nothing),
            (Some(min), Some(max)) => (min, max),
            _ => return None,
        };
        let min = parse_numeric(min)?;

        let occurrence = match parse_numeric(max) {
            Some(max) => match (min, max) {
                (0, 0) => Occurrence::Empty,
                (0, 1) => Occurrence::OptionalSingle,
                (1, 1) => Occurrence::MandatorySingle,
                (0, _) if max > 1 => Occurrence::OptionalArrayLimited,
                (1, _) if max > 1 => Occurrence::MandatoryArrayLimited,
                _ => return None,
            },
            None if max == UNBOUNDED => match min {
                0 => Occurrence::OptionalArrayUnlimited,
                1 => Occurrence::MandatoryArrayUnlimited,
                _ => return None,
            },
            None => Occurrence::Warning,
        };
        Some(occurrence)
    }

    /// Classify the occurrence attributes of a schema node
    ///
    /// A `Warning` classification is logged, never raised.
    pub fn of(node: &SchemaNode<'_, '_>) -> Option<Self> {
        let occurrence = Self::classify(node.min_occurs(), node.max_occurs());
        if occurrence == Some(Occurrence::Warning) {
            warn!(
                name = node.name().unwrap_or_default(),
                line = node.line(),
                min_occurs = node.min_occurs().unwrap_or_default(),
                max_occurs = node.max_occurs().unwrap_or_default(),
                "unrecognised maxOccurs value"
            );
        }
        occurrence
    }

    /// Whether the particle can repeat
    pub fn is_array(self) -> bool {
        matches!(
            self,
            Occurrence::OptionalArrayLimited
                | Occurrence::MandatoryArrayLimited
                | Occurrence::OptionalArrayUnlimited
                | Occurrence::MandatoryArrayUnlimited
        )
    }
}

/// Render the cardinality annotation appended to a path
pub fn bracket(min_occurs: &str, max_occurs: &str) -> String {
    format!("[{},{}]", min_occurs, max_occurs)
}

fn parse_numeric(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

//! Leaf type descriptors and emitted path entries

use std::fmt;

use crate::documents::{Construct, SchemaNode};
use crate::namespaces::xsd_attrs;

/// The type a leaf path resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A type name taken verbatim from the `type` attribute
    Named(String),
    /// A restriction of `base` to an ordered set of facet values
    Enumerated {
        /// Name of the node holding the restriction
        name: String,
        /// The restriction's `base` attribute
        base: String,
        /// Facet `value` attributes in document order
        values: Vec<String>,
    },
}

impl TypeDescriptor {
    /// Derive the descriptor of a leaf node
    ///
    /// A direct `restriction` child wins over the `type` attribute. Returns
    /// `None` when neither yields anything, in which case no path is emitted.
    pub fn of_leaf(node: &SchemaNode<'_, '_>) -> Option<Self> {
        if let Some(restriction) = node.first_child(Construct::Restriction) {
            let values = restriction
                .child_elements()
                .map(|facet| facet.attribute(xsd_attrs::VALUE).unwrap_or_default().to_string())
                .collect();
            return Some(TypeDescriptor::Enumerated {
                name: node.name().unwrap_or_default().to_string(),
                base: restriction
                    .attribute(xsd_attrs::BASE)
                    .unwrap_or_default()
                    .to_string(),
                values,
            });
        }

        node.type_name()
            .filter(|name| !name.is_empty())
            .map(|name| TypeDescriptor::Named(name.to_string()))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Named(name) => f.write_str(name),
            TypeDescriptor::Enumerated { name, base, values } => {
                write!(f, "{}::{} <= [[", name, base)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}'", value)?;
                }
                f.write_str("]]")
            }
        }
    }
}

/// One leaf field: its path and resolved type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Accumulated path, including any cardinality brackets
    pub path: String,
    /// Type of the leaf
    pub descriptor: TypeDescriptor,
}

impl PathEntry {
    /// Create a new path entry
    pub fn new(path: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            path: path.into(),
            descriptor,
        }
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [@type='{}']", self.path, self.descriptor)
    }
}

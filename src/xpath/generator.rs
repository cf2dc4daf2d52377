//! Schema traversal producing leaf paths

use std::borrow::Cow;

use tracing::{debug, trace, warn};

use super::descriptors::{PathEntry, TypeDescriptor};
use crate::documents::{Construct, SchemaNode};
use crate::error::Result;
use crate::index::SchemaIndex;
use crate::limits::Limits;
use crate::occurs::{bracket, Occurrence};

/// Options controlling path generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Append `[min,max]` to elements that repeat and resolve to a named type
    pub annotate_occurrence: bool,
    /// Resource limits
    pub limits: Limits,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            annotate_occurrence: true,
            limits: Limits::default(),
        }
    }
}

impl GeneratorOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable cardinality annotation
    pub fn with_annotate_occurrence(mut self, annotate: bool) -> Self {
        self.annotate_occurrence = annotate;
        self
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Walks the type graph of an indexed schema
///
/// Starting from a root element the generator descends, in this order,
/// into the elements of the first `choice`, the elements of the first
/// `sequence`, and the first inline `complexType`. It then resolves the
/// node's `type` attribute: a named type is descended into with the same
/// path, anything else makes the node a leaf. Both groups are walked when
/// a node has a `choice` and a `sequence`.
///
/// There is no cycle detection. A type that refers back to itself recurses
/// until [`Limits::max_depth`] is hit, or the stack overflows if no
/// maximum is set.
#[derive(Debug)]
pub struct XPathGenerator<'i, 'a, 'input> {
    index: &'i SchemaIndex<'a, 'input>,
    options: GeneratorOptions,
}

impl<'i, 'a, 'input: 'a> XPathGenerator<'i, 'a, 'input> {
    /// Create a generator over an index
    pub fn new(index: &'i SchemaIndex<'a, 'input>, options: GeneratorOptions) -> Self {
        Self { index, options }
    }

    /// Generate the leaf paths reachable from the named root element
    ///
    /// An unknown root yields an empty list.
    pub fn generate(&self, root: &str) -> Result<Vec<PathEntry>> {
        let mut entries = Vec::new();

        match self.index.find_root_element(root) {
            Some(node) => {
                let prefix = format!("/{}", root);
                self.descend(node, &prefix, 0, &mut entries)?;
                debug!(root, paths = entries.len(), "generated paths");
            }
            None => warn!(root, "root element not found in schema"),
        }

        Ok(entries)
    }

    fn descend(
        &self,
        node: SchemaNode<'a, 'input>,
        prefix: &str,
        depth: usize,
        out: &mut Vec<PathEntry>,
    ) -> Result<()> {
        self.options.limits.check_depth(depth)?;
        trace!(prefix, depth, construct = node.local_name(), "descend");

        for group in [Construct::Choice, Construct::Sequence] {
            let Some(group) = node.first_child(group) else {
                continue;
            };
            for child in group.children(Construct::Element) {
                let path = format!("{}/{}", prefix, child.name().unwrap_or_default());
                self.descend(child, &path, depth + 1, out)?;
            }
        }

        if let Some(inline) = node.first_child(Construct::ComplexType) {
            self.descend(inline, prefix, depth + 1, out)?;
        }

        let type_name = node.type_name().unwrap_or_default();
        if let Some(resolved) = self.index.find_type(type_name) {
            let prefix = self.annotate(&node, prefix);
            return self.descend(resolved, &prefix, depth + 1, out);
        }

        if let Some(descriptor) = TypeDescriptor::of_leaf(&node) {
            out.push(PathEntry::new(prefix, descriptor));
        }
        Ok(())
    }

    fn annotate<'p>(&self, node: &SchemaNode<'a, 'input>, prefix: &'p str) -> Cow<'p, str> {
        if !self.options.annotate_occurrence {
            return Cow::Borrowed(prefix);
        }
        match (Occurrence::of(node), node.min_occurs(), node.max_occurs()) {
            (Some(occurrence), Some(min), Some(max)) if occurrence.is_array() => {
                Cow::Owned(format!("{}{}", prefix, bracket(min, max)))
            }
            _ => Cow::Borrowed(prefix),
        }
    }
}

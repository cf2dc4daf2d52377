//! Global lookup of schema definitions
//!
//! The index is a flat namespace: every `element`, `complexType` and
//! `simpleType` carrying a `name` is registered under that name no matter
//! how deeply it is nested. When a name is declared more than once, the
//! first declaration in document order wins.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::documents::{Construct, SchemaDocument, SchemaNode};

/// Definition map - maps names to schema nodes, in document order
pub type DefinitionMap<'a, 'input> = IndexMap<&'a str, SchemaNode<'a, 'input>>;

/// Name-based lookup over one [`SchemaDocument`]
#[derive(Debug)]
pub struct SchemaIndex<'a, 'input> {
    elements: DefinitionMap<'a, 'input>,
    complex_types: DefinitionMap<'a, 'input>,
    simple_types: DefinitionMap<'a, 'input>,
}

impl<'a, 'input: 'a> SchemaIndex<'a, 'input> {
    /// Build the index for a document
    pub fn new(document: &'a SchemaDocument<'input>) -> Self {
        let mut index = Self {
            elements: IndexMap::new(),
            complex_types: IndexMap::new(),
            simple_types: IndexMap::new(),
        };

        for node in document.constructs() {
            let map = match node.construct() {
                Some(Construct::Element) => &mut index.elements,
                Some(Construct::ComplexType) => &mut index.complex_types,
                Some(Construct::SimpleType) => &mut index.simple_types,
                _ => continue,
            };
            let Some(name) = node.name().filter(|n| !n.is_empty()) else {
                continue;
            };
            match map.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
                Entry::Occupied(first) => {
                    debug!(
                        name,
                        line = node.line(),
                        first_line = first.get().line(),
                        "duplicate {} definition ignored",
                        node.local_name()
                    );
                }
            }
        }

        debug!(
            elements = index.elements.len(),
            complex_types = index.complex_types.len(),
            simple_types = index.simple_types.len(),
            "indexed schema"
        );
        index
    }

    /// First `element` declared with this name
    pub fn find_root_element(&self, name: &str) -> Option<SchemaNode<'a, 'input>> {
        self.elements.get(name).copied()
    }

    /// First `complexType` declared with this name
    pub fn find_complex_type(&self, name: &str) -> Option<SchemaNode<'a, 'input>> {
        self.complex_types.get(name).copied()
    }

    /// First `simpleType` declared with this name
    pub fn find_simple_type(&self, name: &str) -> Option<SchemaNode<'a, 'input>> {
        self.simple_types.get(name).copied()
    }

    /// Resolve a type reference, preferring a complex type over a simple one
    pub fn find_type(&self, name: &str) -> Option<SchemaNode<'a, 'input>> {
        self.find_complex_type(name)
            .or_else(|| self.find_simple_type(name))
    }

    /// Names of all complex types, in document order
    pub fn complex_type_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.complex_types.keys().copied()
    }

    /// Names of all simple types, in document order
    pub fn simple_type_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.simple_types.keys().copied()
    }
}

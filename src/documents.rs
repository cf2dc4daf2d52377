//! Schema document handling
//!
//! [`SchemaDocument`] owns the parsed XML tree of an XSD file and
//! [`SchemaNode`] is a read-only handle onto one schema construct in it.

use crate::error::Result;
use crate::namespaces::{is_xsd, xsd_attrs, xsd_elements, XSD_NAMESPACE};

/// The schema constructs the path generator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `xs:element`
    Element,
    /// `xs:complexType`
    ComplexType,
    /// `xs:simpleType`
    SimpleType,
    /// `xs:sequence`
    Sequence,
    /// `xs:choice`
    Choice,
    /// `xs:restriction`
    Restriction,
}

impl Construct {
    /// Local name of the construct in the XSD namespace
    pub fn local_name(self) -> &'static str {
        match self {
            Construct::Element => xsd_elements::ELEMENT,
            Construct::ComplexType => xsd_elements::COMPLEX_TYPE,
            Construct::SimpleType => xsd_elements::SIMPLE_TYPE,
            Construct::Sequence => xsd_elements::SEQUENCE,
            Construct::Choice => xsd_elements::CHOICE,
            Construct::Restriction => xsd_elements::RESTRICTION,
        }
    }

    fn from_local_name(name: &str) -> Option<Self> {
        match name {
            xsd_elements::ELEMENT => Some(Construct::Element),
            xsd_elements::COMPLEX_TYPE => Some(Construct::ComplexType),
            xsd_elements::SIMPLE_TYPE => Some(Construct::SimpleType),
            xsd_elements::SEQUENCE => Some(Construct::Sequence),
            xsd_elements::CHOICE => Some(Construct::Choice),
            xsd_elements::RESTRICTION => Some(Construct::Restriction),
            _ => None,
        }
    }
}

/// A parsed XSD document
#[derive(Debug)]
pub struct SchemaDocument<'input> {
    tree: roxmltree::Document<'input>,
}

impl<'input> SchemaDocument<'input> {
    /// Parse a schema document from its text
    pub fn parse(text: &'input str) -> Result<Self> {
        let tree = roxmltree::Document::parse(text)?;
        Ok(Self { tree })
    }

    /// Get the document element (normally `xs:schema`)
    pub fn root(&self) -> SchemaNode<'_, 'input> {
        SchemaNode::new(self.tree.root_element())
    }

    /// All XSD-namespace elements of the document, in document order
    pub fn constructs(&self) -> impl Iterator<Item = SchemaNode<'_, 'input>> {
        self.tree
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().namespace() == Some(XSD_NAMESPACE))
            .map(SchemaNode::new)
    }
}

/// Read-only handle onto one element of a [`SchemaDocument`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaNode<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input: 'a> SchemaNode<'a, 'input> {
    fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Which schema construct this node is, if any we understand
    pub fn construct(&self) -> Option<Construct> {
        if self.node.tag_name().namespace() != Some(XSD_NAMESPACE) {
            return None;
        }
        Construct::from_local_name(self.node.tag_name().name())
    }

    /// Local name of the underlying XML element
    pub fn local_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// The `name` attribute
    pub fn name(&self) -> Option<&'a str> {
        self.attribute(xsd_attrs::NAME)
    }

    /// The `type` attribute
    pub fn type_name(&self) -> Option<&'a str> {
        self.attribute(xsd_attrs::TYPE)
    }

    /// The raw `minOccurs` attribute
    pub fn min_occurs(&self) -> Option<&'a str> {
        self.attribute(xsd_attrs::MIN_OCCURS)
    }

    /// The raw `maxOccurs` attribute
    pub fn max_occurs(&self) -> Option<&'a str> {
        self.attribute(xsd_attrs::MAX_OCCURS)
    }

    /// First direct child of the given construct
    pub fn first_child(&self, construct: Construct) -> Option<SchemaNode<'a, 'input>> {
        self.children(construct).next()
    }

    /// Direct children of the given construct, in document order
    pub fn children(
        &self,
        construct: Construct,
    ) -> impl Iterator<Item = SchemaNode<'a, 'input>> + 'a {
        self.node
            .children()
            .filter(move |n| is_xsd(*n, construct.local_name()))
            .map(SchemaNode::new)
    }

    /// All direct element children, whatever their namespace
    pub fn child_elements(&self) -> impl Iterator<Item = SchemaNode<'a, 'input>> + 'a {
        self.node
            .children()
            .filter(|n| n.is_element())
            .map(SchemaNode::new)
    }

    /// 1-based line of the node in the source text
    pub fn line(&self) -> u32 {
        self.node.document().text_pos_at(self.node.range().start).row
    }
}

//! XML Schema namespace and vocabulary
//!
//! Only elements in the XSD namespace are schema constructs; the prefix
//! bound to it in a given document does not matter.

/// XSD 1.0 namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XSD element local names
pub mod xsd_elements {
    /// `xs:schema`
    pub const SCHEMA: &str = "schema";
    /// `xs:element`
    pub const ELEMENT: &str = "element";
    /// `xs:complexType`
    pub const COMPLEX_TYPE: &str = "complexType";
    /// `xs:simpleType`
    pub const SIMPLE_TYPE: &str = "simpleType";
    /// `xs:sequence`
    pub const SEQUENCE: &str = "sequence";
    /// `xs:choice`
    pub const CHOICE: &str = "choice";
    /// `xs:restriction`
    pub const RESTRICTION: &str = "restriction";
}

/// XSD attribute names
pub mod xsd_attrs {
    /// Declared name of an element or type
    pub const NAME: &str = "name";
    /// Type reference of an element
    pub const TYPE: &str = "type";
    /// Base type of a restriction
    pub const BASE: &str = "base";
    /// Facet value
    pub const VALUE: &str = "value";
    /// Lower occurrence bound
    pub const MIN_OCCURS: &str = "minOccurs";
    /// Upper occurrence bound
    pub const MAX_OCCURS: &str = "maxOccurs";
}

/// Check whether an XML node is the XSD construct with the given local name
pub fn is_xsd(node: roxmltree::Node<'_, '_>, local_name: &str) -> bool {
    let tag = node.tag_name();
    node.is_element() && tag.namespace() == Some(XSD_NAMESPACE) && tag.name() == local_name
}

//! # xsd2xpath
//!
//! Lists the leaf data fields described by an XML Schema (XSD) as XPath-like
//! path expressions, each annotated with its resolved type.
//!
//! ## Features
//!
//! - Walks `choice` and `sequence` groups, inline complex types, and named
//!   complex or simple type references
//! - Renders restrictions as their base type plus enumerated values
//! - Annotates repeating elements with their `[minOccurs,maxOccurs]`
//! - Recovers from malformed input with an empty result and a single report
//!
//! ## Example
//!
//! ```rust
//! use xsd2xpath::{SchemaDocument, SchemaIndex, XPathGenerator, GeneratorOptions};
//!
//! let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
//!   <xs:element name="Document">
//!     <xs:complexType>
//!       <xs:sequence>
//!         <xs:element name="Id" type="xs:string"/>
//!       </xs:sequence>
//!     </xs:complexType>
//!   </xs:element>
//! </xs:schema>"#;
//!
//! let document = SchemaDocument::parse(xsd)?;
//! let index = SchemaIndex::new(&document);
//! let paths = XPathGenerator::new(&index, GeneratorOptions::default()).generate("Document")?;
//!
//! assert_eq!(paths[0].to_string(), "/Document/Id [@type='xs:string']");
//! # Ok::<(), xsd2xpath::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules - Foundation
pub mod error;
pub mod limits;

// Core modules - Utilities
pub mod namespaces;
pub mod locations;

// Core modules - Resource Loading
pub mod loaders;
pub mod documents;

// Schema index and traversal
pub mod index;
pub mod occurs;
pub mod xpath;

// Re-exports for convenience
pub use documents::{Construct, SchemaDocument, SchemaNode};
pub use error::{Error, ErrorKind, Result};
pub use index::SchemaIndex;
pub use limits::Limits;
pub use locations::Location;
pub use occurs::Occurrence;
pub use xpath::{
    generate_xpaths, generate_xpaths_reporting, try_generate_xpaths, GeneratorOptions, PathEntry,
    TypeDescriptor, XPathGenerator, DEFAULT_ROOT_ELEMENT,
};

/// Version of the xsd2xpath library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! XPath generation from XML Schema
//!
//! This module turns an indexed schema into one path expression per leaf
//! field reachable from a root element, for example:
//!
//! ```text
//! /Document/Header/MessageId [@type='xs:string']
//! /Document/Payment[1,unbounded]/Currency [@type='CurrencyCode::xs:string <= [['EUR', 'USD']]']
//! ```
//!
//! [`try_generate_xpaths`] propagates failures. [`generate_xpaths`] and
//! [`generate_xpaths_reporting`] are the recovered entry points: they
//! report a failure once and return an empty list instead.

mod descriptors;
mod generator;

pub use descriptors::{PathEntry, TypeDescriptor};
pub use generator::{GeneratorOptions, XPathGenerator};

use tracing::error;

use crate::documents::SchemaDocument;
use crate::error::{Error, ErrorKind, Result};
use crate::index::SchemaIndex;
use crate::loaders::Loader;
use crate::locations::Location;

/// Root element used when the caller does not name one
pub const DEFAULT_ROOT_ELEMENT: &str = "Document";

/// Load, index and walk a schema, propagating any failure
pub fn try_generate_xpaths(
    location: &Location,
    root: &str,
    options: &GeneratorOptions,
) -> Result<Vec<String>> {
    let text = Loader::new()
        .with_limits(options.limits.clone())
        .load(location)?;
    let document = SchemaDocument::parse(&text)?;
    let index = SchemaIndex::new(&document);
    let entries = XPathGenerator::new(&index, options.clone()).generate(root)?;

    Ok(entries.iter().map(ToString::to_string).collect())
}

/// Like [`try_generate_xpaths`], but hands a failure to `report` and
/// returns an empty list
pub fn generate_xpaths_reporting<F>(
    location: &Location,
    root: &str,
    options: &GeneratorOptions,
    mut report: F,
) -> Vec<String>
where
    F: FnMut(&Error),
{
    match try_generate_xpaths(location, root, options) {
        Ok(paths) => paths,
        Err(err) => {
            report(&err);
            Vec::new()
        }
    }
}

/// Generate paths with default options, logging any failure
pub fn generate_xpaths(location: &Location, root: &str) -> Vec<String> {
    generate_xpaths_reporting(location, root, &GeneratorOptions::default(), |err| {
        match err.kind() {
            ErrorKind::MalformedDocument => error!(%location, "error parsing XSD file: {}", err),
            ErrorKind::UnexpectedFailure => error!(%location, "unexpected failure: {}", err),
        }
    })
}

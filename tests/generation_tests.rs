//! Library integration tests
//!
//! These tests run the whole load/index/generate pipeline against the
//! schemas under `tests/fixtures`.

use std::fmt::Write as _;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use xsd2xpath::{
    generate_xpaths, generate_xpaths_reporting, try_generate_xpaths, ErrorKind, GeneratorOptions,
    Location, SchemaDocument, SchemaIndex, XPathGenerator, DEFAULT_ROOT_ELEMENT,
};

fn fixture(name: &str) -> Location {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    Location::Path(path)
}

// ============================================================================
// Fixture schemas
// ============================================================================

#[test]
fn test_payment_schema() {
    let paths = generate_xpaths(&fixture("payment.xsd"), DEFAULT_ROOT_ELEMENT);

    assert_eq!(
        paths,
        vec![
            "/Document/Header/MessageId [@type='xs:string']",
            "/Document/Header/CreatedAt [@type='xs:dateTime']",
            "/Document/Payment[1,unbounded]/Amount [@type='xs:decimal']",
            "/Document/Payment[1,unbounded]/Currency [@type='CurrencyCode::xs:string <= [['EUR', 'USD']]']",
            "/Document/Payment[1,unbounded]/Tags[0,3]/Tag [@type='xs:token']",
            "/Document/Note [@type='xs:string']",
        ]
    );
}

#[test]
fn test_payment_schema_without_occurrence() {
    let options = GeneratorOptions::new().with_annotate_occurrence(false);
    let paths = try_generate_xpaths(&fixture("payment.xsd"), "Document", &options).unwrap();

    assert!(paths.iter().all(|p| !p.contains("[1,") && !p.contains("[0,")));
    assert_eq!(paths.len(), 6);
}

#[test]
fn test_order_schema_with_other_prefix() {
    let paths = generate_xpaths(&fixture("order.xsd"), "Order");

    assert_eq!(
        paths,
        vec![
            "/Order/Card/Number [@type='xsd:string']",
            "/Order/Card/Expiry [@type='xsd:gYearMonth']",
            "/Order/Cash [@type='xsd:decimal']",
            "/Order/Id [@type='xsd:int']",
            "/Order/Status [@type='StatusCode::xsd:string <= [['NEW', 'PAID', 'SHIPPED']]']",
        ]
    );
}

#[test]
fn test_nested_element_as_root() {
    let paths = generate_xpaths(&fixture("payment.xsd"), "Payment");

    assert_eq!(
        paths,
        vec![
            "/Payment[1,unbounded]/Amount [@type='xs:decimal']",
            "/Payment[1,unbounded]/Currency [@type='CurrencyCode::xs:string <= [['EUR', 'USD']]']",
            "/Payment[1,unbounded]/Tags[0,3]/Tag [@type='xs:token']",
        ]
    );
}

#[test]
fn test_unknown_root() {
    assert!(generate_xpaths(&fixture("payment.xsd"), "Invoice").is_empty());
}

#[test]
fn test_malformed_fixture() {
    let mut reported = Vec::new();
    let paths = generate_xpaths_reporting(
        &fixture("malformed.xsd"),
        DEFAULT_ROOT_ELEMENT,
        &GeneratorOptions::default(),
        |err| reported.push((err.kind(), err.to_string())),
    );

    assert!(paths.is_empty());
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].0, ErrorKind::MalformedDocument);
}

#[test]
fn test_repeated_runs_are_identical() {
    let location = fixture("order.xsd");
    let first = generate_xpaths(&location, "Order");

    for _ in 0..5 {
        assert_eq!(generate_xpaths(&location, "Order"), first);
    }
}

// ============================================================================
// Synthetic schemas
// ============================================================================

#[derive(Debug, Clone)]
enum Field {
    Leaf(String, &'static str),
    Group {
        name: String,
        choice: bool,
        children: Vec<Field>,
    },
}

fn field_strategy() -> impl Strategy<Value = Field> {
    let leaf = (
        "[A-Z][a-z]{0,6}",
        prop::sample::select(vec!["xs:string", "xs:int", "xs:date", "xs:boolean"]),
    )
        .prop_map(|(name, ty)| Field::Leaf(name, ty));

    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            "[A-Z][a-z]{0,6}",
            any::<bool>(),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(name, choice, children)| Field::Group {
                name,
                choice,
                children,
            })
    })
}

fn render(field: &Field, out: &mut String) {
    match field {
        Field::Leaf(name, ty) => {
            write!(out, r#"<xs:element name="{}" type="{}"/>"#, name, ty).unwrap();
        }
        Field::Group {
            name,
            choice,
            children,
        } => {
            let group = if *choice { "choice" } else { "sequence" };
            write!(out, r#"<xs:element name="{}"><xs:complexType><xs:{}>"#, name, group).unwrap();
            for child in children {
                render(child, out);
            }
            write!(out, "</xs:{}></xs:complexType></xs:element>", group).unwrap();
        }
    }
}

fn expected(field: &Field, prefix: &str, out: &mut Vec<String>) {
    match field {
        Field::Leaf(name, ty) => out.push(format!("{}/{} [@type='{}']", prefix, name, ty)),
        Field::Group { name, children, .. } => {
            let prefix = format!("{}/{}", prefix, name);
            for child in children {
                expected(child, &prefix, out);
            }
        }
    }
}

fn root_name(field: &Field) -> &str {
    match field {
        Field::Leaf(name, _) => name,
        Field::Group { name, .. } => name,
    }
}

fn generate(text: &str, root: &str) -> Vec<String> {
    let document = SchemaDocument::parse(text).unwrap();
    let index = SchemaIndex::new(&document);
    XPathGenerator::new(&index, GeneratorOptions::default())
        .generate(root)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

proptest! {
    #[test]
    fn synthetic_schemas_match_structure(field in field_strategy()) {
        let mut text = String::from(r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">"#);
        render(&field, &mut text);
        text.push_str("</xs:schema>");

        let mut want = Vec::new();
        expected(&field, "", &mut want);

        let first = generate(&text, root_name(&field));
        let second = generate(&text, root_name(&field));

        prop_assert_eq!(&first, &want);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|p| !p.contains("[0,") && !p.contains("[1,")));
    }
}

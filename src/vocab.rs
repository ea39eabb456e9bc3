//! Well-known namespaces and ontology terms for the webshop graph.
//!
//! Local terms live under the `ex:` namespace; product properties reuse
//! schema.org. The constants are spelled out as full IRIs so they can be
//! used as `NamedNodeRef` without any allocation.

use oxigraph::model::{NamedNode, NamedNodeRef};

/// Base IRI of the local webshop ontology (`ex:`).
pub const EX: &str = "http://example.org/webshop#";

/// Base IRI of the schema.org vocabulary (`schema:`).
pub const SCHEMA: &str = "http://schema.org/";

/// XML Schema datatypes (`xsd:`).
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// RDF Schema (`rdfs:`).
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// RDF syntax namespace (`rdf:`).
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Prefixes bound when serializing the graph, in output order.
pub const PREFIXES: [(&str, &str); 5] = [
    ("ex", EX),
    ("schema", SCHEMA),
    ("xsd", XSD),
    ("rdfs", RDFS),
    ("rdf", RDF),
];

// Classes
pub const PRODUCT: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://example.org/webshop#Product");
pub const BRAND: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://example.org/webshop#Brand");
pub const CATEGORY: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://example.org/webshop#Category");

// Relations
pub const HAS_BRAND: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://example.org/webshop#hasBrand");
pub const IN_CATEGORY: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://example.org/webshop#inCategory");

// schema.org properties asserted for every item
pub const SCHEMA_URL: NamedNodeRef<'static> = NamedNodeRef::new_unchecked("http://schema.org/url");
pub const SCHEMA_RATING_VALUE: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://schema.org/ratingValue");

/// Product subclasses of `ex:Product` seeded into every graph.
pub const PRODUCT_SUBTYPES: [&str; 7] = [
    "Mouse",
    "Keyboard",
    "Combo",
    "TabletAccessory",
    "Speaker",
    "Webcam",
    "VideoConferencing",
];

/// Build an `ex:` IRI from a local name.
///
/// Returns `None` when the result is not a valid IRI (e.g. the local name
/// contains spaces).
pub fn ex(local: &str) -> Option<NamedNode> {
    NamedNode::new(format!("{EX}{local}")).ok()
}

/// Build a `schema:` IRI from a local name.
pub fn schema(local: &str) -> Option<NamedNode> {
    NamedNode::new(format!("{SCHEMA}{local}")).ok()
}

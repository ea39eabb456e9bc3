//! Identifier resolution for item and predicate cells.

use oxigraph::model::NamedNode;

use crate::vocab::{EX, SCHEMA};

/// Resolve a raw cell into an IRI.
///
/// Recognized forms, checked in order:
/// - `schema:price` → `http://schema.org/price`
/// - `ex:prod001` → `http://example.org/webshop#prod001`
/// - `http://…` / `https://…` → used verbatim
/// - anything else is treated as a bare `ex:` local name
///
/// Blank input, or input that does not produce a syntactically valid IRI,
/// yields `None`.
pub fn resolve_identifier(raw: &str) -> Option<NamedNode> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let iri = if let Some(local) = s.strip_prefix("schema:") {
        format!("{SCHEMA}{local}")
    } else if let Some(local) = s.strip_prefix("ex:") {
        format!("{EX}{local}")
    } else if s.starts_with("http://") || s.starts_with("https://") {
        s.to_string()
    } else {
        format!("{EX}{s}")
    };

    NamedNode::new(iri).ok()
}

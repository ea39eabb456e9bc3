//! Field mapping: raw catalog cells to RDF terms.
//!
//! Everything here is a pure function. Nothing fails: unrecognized or
//! unusable input degrades to `None` (the statement is omitted) or to a
//! documented default.
//!
//! - [`identifier`]: cell text → IRI (`ex:`/`schema:` short forms, absolute IRIs)
//! - [`literal`]: cell text → typed literal (decimal, integer, date, string)
//! - [`category`]: product URL → (product type, subcategory)

pub mod category;
pub mod identifier;
pub mod literal;

pub use category::{CategoryAssignment, infer_category};
pub use identifier::resolve_identifier;
pub use literal::coerce_literal;

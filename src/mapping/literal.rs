//! Best-effort literal typing from a cell's surface form.

use std::sync::LazyLock;

use oxigraph::model::Literal;
use oxigraph::model::vocab::xsd;
use regex::Regex;

// Full-string patterns, checked in this order. The first one only accepts
// exactly two fractional digits, so it wins for currency-like values.
static RE_CENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").unwrap());

static RE_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static RE_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").unwrap());

static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Coerce a raw cell into a typed literal.
///
/// | surface form        | datatype       | lexical value              |
/// |---------------------|----------------|----------------------------|
/// | `19.99`, `007.50`   | `xsd:decimal`  | reformatted to 2 decimals  |
/// | `42`                | `xsd:integer`  | as given                   |
/// | `-3.5`, `0.125`     | `xsd:decimal`  | as given                   |
/// | `2024-03-01`        | `xsd:date`     | as given                   |
/// | anything else       | plain string   | trimmed                    |
///
/// Missing or blank cells yield `None`.
pub fn coerce_literal(raw: Option<&str>) -> Option<Literal> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }

    if RE_CENTS.is_match(s) {
        return Some(Literal::new_typed_literal(normalize_cents(s), xsd::DECIMAL));
    }
    if RE_INTEGER.is_match(s) {
        return Some(Literal::new_typed_literal(s, xsd::INTEGER));
    }
    if RE_DECIMAL.is_match(s) {
        return Some(Literal::new_typed_literal(s, xsd::DECIMAL));
    }
    if RE_DATE.is_match(s) {
        return Some(Literal::new_typed_literal(s, xsd::DATE));
    }
    Some(Literal::new_simple_literal(s))
}

/// Canonical two-decimal form of a cents-matching value: leading zeros of
/// the integer part dropped (keeping one), fraction untouched.
fn normalize_cents(s: &str) -> String {
    let (int, frac) = s.split_once('.').unwrap_or((s, "00"));
    let int = int.trim_start_matches('0');
    let int = if int.is_empty() { "0" } else { int };
    format!("{int}.{frac}")
}

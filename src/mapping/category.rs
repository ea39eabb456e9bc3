//! Product type and subcategory inference from a product page URL.
//!
//! Rules are case-insensitive substring matches on the URL path and are
//! checked in table order; the first hit wins. `/products/ipad` must stay
//! ahead of `/products/tablet`, and new rules must not be added above a
//! narrower pattern they would shadow.

use std::sync::LazyLock;

use oxigraph::model::NamedNode;
use regex::Regex;
use url::Url;

use crate::vocab;

/// Product type and subcategory assigned to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryAssignment {
    /// `ex:` local name of the product class (e.g. `Mouse`).
    pub product_type: &'static str,
    /// `ex:` local name of the category node (e.g. `ComputerMice`).
    pub subcategory: &'static str,
}

impl CategoryAssignment {
    /// Fallback for URLs that do not parse or match no rule.
    pub const DEFAULT: Self = Self {
        product_type: "Product",
        subcategory: "Miscellaneous",
    };

    /// IRI of the product class.
    pub fn type_iri(&self) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", vocab::EX, self.product_type))
    }

    /// IRI of the category node.
    pub fn subcategory_iri(&self) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", vocab::EX, self.subcategory))
    }

    /// Whether this is the fallback assignment.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

/// (path pattern, product type, subcategory), in check order.
const RULES: [(&str, &str, &str); 8] = [
    ("/products/mice", "Mouse", "ComputerMice"),
    ("/products/keyboards", "Keyboard", "Keyboards"),
    ("/products/combos", "Combo", "KeyboardMouseCombos"),
    ("/products/ipad", "TabletAccessory", "iPadAccessories"),
    ("/products/tablet", "TabletAccessory", "TabletAccessories"),
    ("/products/speakers", "Speaker", "Speakers"),
    ("/products/webcams", "Webcam", "Webcams"),
    (
        "/products/video-conferencing",
        "VideoConferencing",
        "ConferenceCameras",
    ),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, CategoryAssignment)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(pattern, product_type, subcategory)| {
            let re = Regex::new(&format!("(?i){}", regex::escape(pattern))).unwrap();
            (
                re,
                CategoryAssignment {
                    product_type,
                    subcategory,
                },
            )
        })
        .collect()
});

// Relative references (`/products/...`, `www.host/...`) resolve against this.
static BASE_URL: LazyLock<Url> = LazyLock::new(|| Url::parse("http://localhost/").unwrap());

/// Infer the product type and subcategory from a product page URL.
///
/// Only the path takes part in matching, so host, query string and fragment
/// never change the outcome. Scheme-less input is read as a relative
/// reference, so its host (if any) becomes part of the path. Unparseable
/// URLs fall back to [`CategoryAssignment::DEFAULT`].
pub fn infer_category(url: &str) -> CategoryAssignment {
    let Ok(parsed) = Url::options().base_url(Some(&*BASE_URL)).parse(url.trim()) else {
        return CategoryAssignment::DEFAULT;
    };
    let path = parsed.path();

    COMPILED_RULES
        .iter()
        .find(|(re, _)| re.is_match(path))
        .map(|(_, assignment)| *assignment)
        .unwrap_or(CategoryAssignment::DEFAULT)
}

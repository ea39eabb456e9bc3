//! Graph assembly: ontology seeding and per-row triple mapping.
//!
//! Orchestrates, for every catalog row: item IRI → product typing →
//! category node → brand link → label/URL → synthetic rating → attribute
//! statements.

use std::collections::BTreeSet;

use oxigraph::model::vocab::{rdf, rdfs, xsd};
use oxigraph::model::{Literal, NamedNode};

use crate::catalog::ProductRow;
use crate::error::{GraphError, IngestError, WebshopResult};
use crate::mapping::{coerce_literal, infer_category, resolve_identifier};
use crate::vocab;

use super::rating::{RatingSource, rating_lexical};
use super::ProductGraph;

/// Default brand asserted for every item.
pub const DEFAULT_BRAND: &str = "Logitech";

/// Statistics gathered while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Rows turned into items.
    pub rows: usize,
    /// Attribute statements asserted.
    pub attributes: usize,
    /// Attribute groups skipped because the predicate or value did not resolve.
    pub attributes_skipped: usize,
    /// Category IRIs created, sorted.
    pub categories: BTreeSet<String>,
}

/// Single writer of the product graph.
///
/// Create it with [`GraphBuilder::new`] (which seeds the ontology), feed it
/// rows in order with [`GraphBuilder::add_row`], then call
/// [`GraphBuilder::finish`] to hand the graph to readers.
pub struct GraphBuilder {
    graph: ProductGraph,
    brand: NamedNode,
    stats: BuildStats,
}

impl GraphBuilder {
    /// Create a builder with a freshly seeded ontology for `brand`.
    pub fn new(brand: &str) -> WebshopResult<Self> {
        let brand_label = brand.trim();
        let brand_iri = vocab::ex(brand_label)
            .filter(|_| !brand_label.is_empty())
            .ok_or_else(|| GraphError::InvalidBrand {
                brand: brand.to_string(),
            })?;

        let builder = Self {
            graph: ProductGraph::in_memory()?,
            brand: brand_iri,
            stats: BuildStats::default(),
        };
        builder.seed_ontology(brand_label)?;
        Ok(builder)
    }

    fn seed_ontology(&self, brand_label: &str) -> WebshopResult<()> {
        let g = &self.graph;

        g.insert(vocab::PRODUCT, rdf::TYPE, rdfs::CLASS)?;
        for local in vocab::PRODUCT_SUBTYPES {
            let class = NamedNode::new_unchecked(format!("{}{local}", vocab::EX));
            g.insert(class.as_ref(), rdf::TYPE, rdfs::CLASS)?;
            g.insert(class.as_ref(), rdfs::SUB_CLASS_OF, vocab::PRODUCT)?;
        }

        g.insert(vocab::BRAND, rdf::TYPE, rdfs::CLASS)?;
        g.insert(vocab::CATEGORY, rdf::TYPE, rdfs::CLASS)?;
        g.insert(vocab::HAS_BRAND, rdf::TYPE, rdf::PROPERTY)?;
        g.insert(vocab::IN_CATEGORY, rdf::TYPE, rdf::PROPERTY)?;

        g.insert(self.brand.as_ref(), rdf::TYPE, vocab::BRAND)?;
        g.insert(
            self.brand.as_ref(),
            rdfs::LABEL,
            Literal::new_simple_literal(brand_label).as_ref(),
        )?;

        tracing::debug!(brand = %self.brand, "seeded ontology");
        Ok(())
    }

    /// Map one catalog row into the graph.
    ///
    /// An unresolvable `Item URI` aborts with
    /// [`IngestError::MissingItemIdentifier`]; every other field degrades by
    /// omitting its statement.
    pub fn add_row(
        &mut self,
        row: &ProductRow,
        ratings: &mut dyn RatingSource,
    ) -> WebshopResult<NamedNode> {
        let item = resolve_identifier(&row.item_uri).ok_or_else(|| {
            IngestError::MissingItemIdentifier {
                line: row.line,
                raw: row.item_uri.clone(),
            }
        })?;
        let item_ref = item.as_ref();
        let g = &self.graph;

        g.insert(item_ref, rdf::TYPE, vocab::PRODUCT)?;

        let assignment = infer_category(&row.url);
        let type_iri = assignment.type_iri();
        let category = assignment.subcategory_iri();
        g.insert(item_ref, rdf::TYPE, type_iri.as_ref())?;

        // Category nodes are created lazily; re-asserting is a no-op.
        g.insert(category.as_ref(), rdf::TYPE, vocab::CATEGORY)?;
        g.insert(
            category.as_ref(),
            rdfs::LABEL,
            Literal::new_simple_literal(assignment.subcategory).as_ref(),
        )?;
        g.insert(item_ref, vocab::IN_CATEGORY, category.as_ref())?;
        self.stats.categories.insert(category.as_str().to_string());

        g.insert(
            item_ref,
            rdfs::LABEL,
            Literal::new_simple_literal(row.name.trim()).as_ref(),
        )?;
        match NamedNode::new(row.url.trim()) {
            Ok(url) => {
                g.insert(item_ref, vocab::SCHEMA_URL, url.as_ref())?;
            }
            Err(e) => {
                tracing::warn!(line = row.line, url = %row.url, error = %e, "skipping schema:url, not an IRI");
            }
        }
        g.insert(item_ref, vocab::HAS_BRAND, self.brand.as_ref())?;

        let rating = Literal::new_typed_literal(rating_lexical(ratings.next_rating()), xsd::DECIMAL);
        g.insert(item_ref, vocab::SCHEMA_RATING_VALUE, rating.as_ref())?;

        for slot in &row.attributes {
            let predicate = resolve_identifier(&slot.schema_uri);
            let value = coerce_literal(Some(&slot.value));
            match (predicate, value) {
                (Some(p), Some(v)) => {
                    g.insert(item_ref, p.as_ref(), v.as_ref())?;
                    self.stats.attributes += 1;
                }
                _ => {
                    if !slot.value.trim().is_empty() || !slot.schema_uri.trim().is_empty() {
                        tracing::debug!(
                            line = row.line,
                            attribute = slot.index,
                            name = %slot.name,
                            "attribute skipped"
                        );
                    }
                    self.stats.attributes_skipped += 1;
                }
            }
        }

        self.stats.rows += 1;
        tracing::debug!(
            line = row.line,
            item = %item,
            category = assignment.subcategory,
            "ingested row"
        );
        Ok(item)
    }

    /// Map every row in order, stopping at the first fatal error.
    pub fn add_rows(
        &mut self,
        rows: &[ProductRow],
        ratings: &mut dyn RatingSource,
    ) -> WebshopResult<()> {
        for row in rows {
            self.add_row(row, ratings)?;
        }
        Ok(())
    }

    /// Brand IRI asserted for every item.
    pub fn brand(&self) -> &NamedNode {
        &self.brand
    }

    /// Statistics so far.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Read access to the graph while building.
    pub fn graph(&self) -> &ProductGraph {
        &self.graph
    }

    /// Hand the finished graph and statistics over to readers.
    pub fn finish(self) -> (ProductGraph, BuildStats) {
        (self.graph, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeSlot;

    struct FixedRating(f64);

    impl RatingSource for FixedRating {
        fn next_rating(&mut self) -> f64 {
            self.0
        }
    }

    fn ex(local: &str) -> NamedNode {
        vocab::ex(local).unwrap()
    }

    fn slot(index: usize, name: &str, value: &str, schema_uri: &str) -> AttributeSlot {
        AttributeSlot {
            index,
            name: name.into(),
            value: value.into(),
            schema_uri: schema_uri.into(),
        }
    }

    fn mouse_row() -> ProductRow {
        ProductRow {
            line: 2,
            item_uri: "ex:prod001".into(),
            name: " MX Master 3S ".into(),
            url: "https://www.logitech.com/en-us/products/mice/mx-master".into(),
            attributes: vec![
                slot(1, "Price", "19.99", "schema:price"),
                slot(2, "Color", "Graphite", "schema:color"),
                slot(3, "Weight", "", "schema:weight"),
                slot(4, "Unmapped", "x", ""),
            ],
        }
    }

    #[test]
    fn seeds_class_hierarchy_and_brand() {
        let builder = GraphBuilder::new("Logitech").unwrap();
        let g = builder.graph();

        assert!(g.contains(vocab::PRODUCT, rdf::TYPE, rdfs::CLASS).unwrap());
        for local in vocab::PRODUCT_SUBTYPES {
            assert!(
                g.contains(ex(local).as_ref(), rdfs::SUB_CLASS_OF, vocab::PRODUCT)
                    .unwrap()
            );
        }
        assert!(g.contains(vocab::HAS_BRAND, rdf::TYPE, rdf::PROPERTY).unwrap());
        assert!(g.contains(ex("Logitech").as_ref(), rdf::TYPE, vocab::BRAND).unwrap());
        assert!(
            g.contains(
                ex("Logitech").as_ref(),
                rdfs::LABEL,
                Literal::new_simple_literal("Logitech").as_ref()
            )
            .unwrap()
        );
        // 1 + 7*2 + 4 + 2
        assert_eq!(g.len().unwrap(), 21);
    }

    #[test]
    fn invalid_brand_is_rejected() {
        assert!(GraphBuilder::new("Acme Inc").is_err());
        assert!(GraphBuilder::new("  ").is_err());
    }

    #[test]
    fn mouse_row_yields_typed_categorized_item() {
        let mut builder = GraphBuilder::new(DEFAULT_BRAND).unwrap();
        let item = builder.add_row(&mouse_row(), &mut FixedRating(4.5)).unwrap();
        assert_eq!(item, ex("prod001"));

        let g = builder.graph();
        let item = item.as_ref();
        assert!(g.contains(item, rdf::TYPE, vocab::PRODUCT).unwrap());
        assert!(g.contains(item, rdf::TYPE, ex("Mouse").as_ref()).unwrap());

        let mice = ex("ComputerMice");
        assert!(g.contains(item, vocab::IN_CATEGORY, mice.as_ref()).unwrap());
        assert!(g.contains(mice.as_ref(), rdf::TYPE, vocab::CATEGORY).unwrap());
        assert!(
            g.contains(
                mice.as_ref(),
                rdfs::LABEL,
                Literal::new_simple_literal("ComputerMice").as_ref()
            )
            .unwrap()
        );
        assert!(g.contains(item, vocab::HAS_BRAND, ex("Logitech").as_ref()).unwrap());
        assert!(
            g.contains(
                item,
                rdfs::LABEL,
                Literal::new_simple_literal("MX Master 3S").as_ref()
            )
            .unwrap()
        );
    }

    #[test]
    fn price_and_rating_are_decimals() {
        let mut builder = GraphBuilder::new(DEFAULT_BRAND).unwrap();
        let item = builder.add_row(&mouse_row(), &mut FixedRating(4.0)).unwrap();
        let g = builder.graph();

        let price = vocab::schema("price").unwrap();
        assert!(
            g.contains(
                item.as_ref(),
                price.as_ref(),
                Literal::new_typed_literal("19.99", xsd::DECIMAL).as_ref()
            )
            .unwrap()
        );
        assert!(
            g.contains(
                item.as_ref(),
                vocab::SCHEMA_RATING_VALUE,
                Literal::new_typed_literal("4.0", xsd::DECIMAL).as_ref()
            )
            .unwrap()
        );

        let stats = builder.stats();
        assert_eq!(stats.attributes, 2);
        assert_eq!(stats.attributes_skipped, 2);
    }

    #[test]
    fn unmatched_url_falls_back_to_miscellaneous() {
        let mut builder = GraphBuilder::new(DEFAULT_BRAND).unwrap();
        let row = ProductRow {
            url: "https://x.example/products/headsets/g733".into(),
            item_uri: "ex:prod009".into(),
            ..mouse_row()
        };
        let item = builder.add_row(&row, &mut FixedRating(3.9)).unwrap();
        let g = builder.graph();
        assert!(
            g.contains(item.as_ref(), vocab::IN_CATEGORY, ex("Miscellaneous").as_ref())
                .unwrap()
        );
        assert!(builder.stats().categories.contains(ex("Miscellaneous").as_str()));
    }

    #[test]
    fn categories_are_deduplicated() {
        let mut builder = GraphBuilder::new(DEFAULT_BRAND).unwrap();
        let second = ProductRow {
            item_uri: "ex:prod002".into(),
            line: 3,
            ..mouse_row()
        };
        builder.add_row(&mouse_row(), &mut FixedRating(4.1)).unwrap();
        let after_first = builder.graph().len().unwrap();
        builder.add_row(&second, &mut FixedRating(4.1)).unwrap();
        let after_second = builder.graph().len().unwrap();

        // Same category, brand and attributes: only item-specific triples grow.
        // type×2, inCategory, label, url, hasBrand, rating, price, color
        assert_eq!(after_second - after_first, 9);
        assert_eq!(builder.stats().categories.len(), 1);
        assert_eq!(builder.stats().rows, 2);
    }

    #[test]
    fn missing_item_identifier_is_fatal() {
        let mut builder = GraphBuilder::new(DEFAULT_BRAND).unwrap();
        let row = ProductRow {
            item_uri: "   ".into(),
            line: 5,
            ..mouse_row()
        };
        let err = builder.add_row(&row, &mut FixedRating(4.0)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::WebshopError::Ingest(IngestError::MissingItemIdentifier { line: 5, .. })
        ));
    }

    #[test]
    fn invalid_url_skips_only_the_url_statement() {
        let mut builder = GraphBuilder::new(DEFAULT_BRAND).unwrap();
        let row = ProductRow {
            url: "not a url".into(),
            ..mouse_row()
        };
        let item = builder.add_row(&row, &mut FixedRating(4.0)).unwrap();
        let table = builder
            .graph()
            .query_select(&format!(
                "SELECT ?u WHERE {{ <{}> <{}> ?u }}",
                item.as_str(),
                vocab::SCHEMA_URL.as_str()
            ))
            .unwrap();
        assert!(table.is_empty());
        assert!(builder.graph().contains_subject(item.as_ref()));
    }
}

//! Product graph: an oxigraph store holding the webshop triples.
//!
//! - [`ProductGraph`]: the in-memory store plus SPARQL SELECT access
//! - [`builder`]: ontology seeding and row → triple mapping
//! - [`rating`]: injectable source for the synthetic rating fixture
//! - [`turtle`]: prefixed Turtle serialization
//!
//! The builder is the only writer; once it hands the graph over, every
//! consumer only reads.

pub mod builder;
pub mod rating;
pub mod turtle;

use oxigraph::model::{GraphNameRef, NamedNodeRef, QuadRef, Term, TermRef, Triple};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::error::{GraphError, GraphResult};

pub use builder::GraphBuilder;
pub use rating::{RatingSource, UniformRatings};

/// Result table of a SPARQL SELECT query.
///
/// Columns follow the query's projection order; a `None` cell is an
/// unbound variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryTable {
    pub variables: Vec<String>,
    pub rows: Vec<Vec<Option<Term>>>,
}

impl QueryTable {
    /// Number of result rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the query returned no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a projected variable, by name without the leading `?`.
    pub fn column(&self, variable: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == variable)
    }
}

/// In-memory RDF graph of products, categories and the brand.
pub struct ProductGraph {
    store: Store,
}

impl ProductGraph {
    /// Create an empty in-memory graph.
    pub fn in_memory() -> GraphResult<Self> {
        let store = Store::new().map_err(|e| GraphError::Store {
            message: format!("failed to create oxigraph store: {e}"),
        })?;
        Ok(Self { store })
    }

    /// Insert a triple into the default graph.
    ///
    /// Returns `false` if the triple was already present.
    pub fn insert<'a>(
        &self,
        subject: NamedNodeRef<'a>,
        predicate: NamedNodeRef<'a>,
        object: impl Into<TermRef<'a>>,
    ) -> GraphResult<bool> {
        let quad = QuadRef::new(subject, predicate, object, GraphNameRef::DefaultGraph);
        let fresh = !self.store.contains(quad).map_err(|e| GraphError::Store {
            message: format!("lookup failed: {e}"),
        })?;
        if fresh {
            self.store.insert(quad).map_err(|e| GraphError::Store {
                message: format!("insert failed: {e}"),
            })?;
        }
        Ok(fresh)
    }

    /// Whether the exact triple is present.
    pub fn contains<'a>(
        &self,
        subject: NamedNodeRef<'a>,
        predicate: NamedNodeRef<'a>,
        object: impl Into<TermRef<'a>>,
    ) -> GraphResult<bool> {
        let quad = QuadRef::new(subject, predicate, object, GraphNameRef::DefaultGraph);
        self.store.contains(quad).map_err(|e| GraphError::Store {
            message: format!("lookup failed: {e}"),
        })
    }

    /// Whether any triple has this subject (post-build sanity checks).
    pub fn contains_subject(&self, subject: NamedNodeRef<'_>) -> bool {
        self.store
            .quads_for_pattern(
                Some(subject.into()),
                None,
                None,
                Some(GraphNameRef::DefaultGraph),
            )
            .next()
            .is_some()
    }

    /// Number of triples in the graph.
    pub fn len(&self) -> GraphResult<usize> {
        self.store.len().map_err(|e| GraphError::Store {
            message: format!("count failed: {e}"),
        })
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> GraphResult<bool> {
        self.len().map(|n| n == 0)
    }

    /// All triples, sorted by their N-Triples form so that statements about
    /// the same subject are adjacent.
    pub fn triples(&self) -> GraphResult<Vec<Triple>> {
        let mut triples = Vec::new();
        for quad in self.store.iter() {
            let quad = quad.map_err(|e| GraphError::Store {
                message: format!("iteration failed: {e}"),
            })?;
            triples.push(Triple::new(quad.subject, quad.predicate, quad.object));
        }
        triples.sort_by_cached_key(|t| t.to_string());
        Ok(triples)
    }

    /// Execute a SPARQL SELECT (or ASK) query.
    pub fn query_select(&self, sparql: &str) -> GraphResult<QueryTable> {
        let results = self.store.query(sparql).map_err(|e| GraphError::Sparql {
            message: e.to_string(),
        })?;

        match results {
            QueryResults::Solutions(solutions) => {
                let variables: Vec<String> = solutions
                    .variables()
                    .iter()
                    .map(|v| v.as_str().to_string())
                    .collect();
                let mut rows = Vec::new();
                for solution in solutions {
                    let solution = solution.map_err(|e| GraphError::Sparql {
                        message: e.to_string(),
                    })?;
                    let row = variables
                        .iter()
                        .map(|v| solution.get(v.as_str()).cloned())
                        .collect();
                    rows.push(row);
                }
                Ok(QueryTable { variables, rows })
            }
            QueryResults::Boolean(b) => Ok(QueryTable {
                variables: vec!["result".into()],
                rows: vec![vec![Some(oxigraph::model::Literal::from(b).into())]],
            }),
            QueryResults::Graph(_) => Err(GraphError::Sparql {
                message: "CONSTRUCT/DESCRIBE queries are not supported here".into(),
            }),
        }
    }

    /// Underlying store, for direct oxigraph access.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl std::fmt::Debug for ProductGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductGraph").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::{Literal, NamedNode};

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    #[test]
    fn insert_is_set_semantics() {
        let g = ProductGraph::in_memory().unwrap();
        let s = node("http://example.org/webshop#a");
        let p = node("http://example.org/webshop#p");
        let o = Literal::new_simple_literal("x");

        assert!(g.insert(s.as_ref(), p.as_ref(), o.as_ref()).unwrap());
        assert!(!g.insert(s.as_ref(), p.as_ref(), o.as_ref()).unwrap());
        assert_eq!(g.len().unwrap(), 1);
        assert!(g.contains(s.as_ref(), p.as_ref(), o.as_ref()).unwrap());
        assert!(g.contains_subject(s.as_ref()));
        assert!(!g.contains_subject(p.as_ref()));
    }

    #[test]
    fn select_keeps_projection_order_and_unbound_cells() {
        let g = ProductGraph::in_memory().unwrap();
        let s = node("http://example.org/webshop#a");
        let label = node("http://www.w3.org/2000/01/rdf-schema#label");
        g.insert(s.as_ref(), label.as_ref(), Literal::new_simple_literal("A").as_ref())
            .unwrap();

        let table = g
            .query_select(
                "SELECT ?missing ?l WHERE { ?s <http://www.w3.org/2000/01/rdf-schema#label> ?l \
                 OPTIONAL { ?s <http://example.org/webshop#nope> ?missing } }",
            )
            .unwrap();
        assert_eq!(table.variables, vec!["missing", "l"]);
        assert_eq!(table.len(), 1);
        assert!(table.rows[0][0].is_none());
        assert_eq!(table.column("l"), Some(1));
    }

    #[test]
    fn malformed_query_is_an_error() {
        let g = ProductGraph::in_memory().unwrap();
        let err = g.query_select("SELEKT ?x WHERE { }").unwrap_err();
        assert!(matches!(err, GraphError::Sparql { .. }));
    }

    #[test]
    fn ask_query_yields_single_cell() {
        let g = ProductGraph::in_memory().unwrap();
        let table = g.query_select("ASK { ?s ?p ?o }").unwrap();
        assert_eq!(table.len(), 1);
        assert!(g.is_empty().unwrap());
    }
}

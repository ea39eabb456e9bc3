//! Query runner and plain-text report.
//!
//! Each named query becomes one report section: title, underline, the full
//! query text, then either the first rows of its result table or the error
//! it produced. A failing query never stops the others.

pub mod queries;

use std::path::Path;

use oxigraph::model::Term;

use crate::error::ReportError;
use crate::graph::{ProductGraph, QueryTable};

pub use queries::{DEFAULT_SEED_ITEM, federated_query, fixed_battery};

/// Rows shown per section unless configured otherwise.
pub const DEFAULT_MAX_ROWS: usize = 20;

/// Cell text for an unbound variable.
pub const UNBOUND: &str = "None";

/// A titled SPARQL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedQuery {
    pub id: String,
    pub title: String,
    pub text: String,
}

impl NamedQuery {
    /// Create a query titled `Query <id>`.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Query {id}"),
            id,
            text: text.into(),
        }
    }
}

/// What happened to a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The query ran; the full result table is kept.
    Rows(QueryTable),
    /// Parsing or evaluation failed with this message.
    Failed(String),
    /// Emitted as text only (external endpoint).
    NotExecuted,
}

/// One section of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySection {
    pub query: NamedQuery,
    pub outcome: QueryOutcome,
}

impl QuerySection {
    /// Whether the query ran and failed.
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, QueryOutcome::Failed(_))
    }

    /// Render this section, showing at most `max_rows` rows.
    pub fn render(&self, max_rows: usize) -> String {
        let title = &self.query.title;
        let mut out = format!(
            "{title}\n{}\n{}\n\n",
            "=".repeat(title.chars().count()),
            self.query.text
        );
        match &self.outcome {
            QueryOutcome::Rows(table) => {
                out.push_str("RESULTS:\n");
                if table.is_empty() {
                    out.push_str("(no results)\n");
                } else {
                    out.push_str(&format_rows(table, max_rows).join("\n"));
                    out.push('\n');
                }
            }
            QueryOutcome::Failed(message) => {
                out.push_str(&format!("ERROR: {message}\n"));
            }
            QueryOutcome::NotExecuted => return out,
        }
        out.push('\n');
        out
    }
}

/// Execute one query against the graph, capturing any failure.
pub fn run_named_query(graph: &ProductGraph, query: NamedQuery) -> QuerySection {
    let outcome = match graph.query_select(&query.text) {
        Ok(table) => {
            tracing::debug!(query = %query.id, rows = table.len(), "query executed");
            QueryOutcome::Rows(table)
        }
        Err(e) => {
            tracing::warn!(query = %query.id, error = %e, "query failed");
            QueryOutcome::Failed(e.to_string())
        }
    };
    QuerySection { query, outcome }
}

/// Text of a single result cell: IRIs and blank nodes by identifier,
/// literals by lexical value.
#[allow(unreachable_patterns)]
pub fn term_text(term: &Term) -> String {
    match term {
        Term::NamedNode(n) => n.as_str().to_string(),
        Term::BlankNode(b) => b.as_str().to_string(),
        Term::Literal(l) => l.value().to_string(),
        other => other.to_string(),
    }
}

/// Format up to `max_rows` rows as ` | `-joined lines, followed by a
/// `... and N more results` line when rows were cut.
pub fn format_rows(table: &QueryTable, max_rows: usize) -> Vec<String> {
    let mut lines: Vec<String> = table
        .rows
        .iter()
        .take(max_rows)
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref().map(term_text).unwrap_or_else(|| UNBOUND.into()))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    if table.len() > max_rows {
        lines.push(format!("... and {} more results", table.len() - max_rows));
    }
    lines
}

/// The full query report.
#[derive(Debug, Clone)]
pub struct Report {
    sections: Vec<QuerySection>,
    max_rows: usize,
}

impl Report {
    /// Empty report showing at most `max_rows` rows per section.
    pub fn new(max_rows: usize) -> Self {
        Self {
            sections: Vec::new(),
            max_rows,
        }
    }

    /// Run each query in order and append its section.
    pub fn run_all(&mut self, graph: &ProductGraph, queries: Vec<NamedQuery>) {
        for query in queries {
            tracing::info!(query = %query.id, "running query");
            self.sections.push(run_named_query(graph, query));
        }
    }

    /// Append a query that is reported as text only.
    pub fn add_unexecuted(&mut self, query: NamedQuery) {
        self.sections.push(QuerySection {
            query,
            outcome: QueryOutcome::NotExecuted,
        });
    }

    pub fn sections(&self) -> &[QuerySection] {
        &self.sections
    }

    /// Number of queries that were run (successfully or not).
    pub fn executed(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| !matches!(s.outcome, QueryOutcome::NotExecuted))
            .count()
    }

    /// Number of queries that failed.
    pub fn failed(&self) -> usize {
        self.sections.iter().filter(|s| s.is_failure()).count()
    }

    /// Render all sections, separated by a blank line.
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.render(self.max_rows))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the rendered report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        std::fs::write(path, self.render()).map_err(|e| ReportError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::info!(
            sections = self.sections.len(),
            failed = self.failed(),
            path = %path.display(),
            "wrote query report"
        );
        Ok(())
    }
}

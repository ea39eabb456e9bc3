//! Rich diagnostic error types for the webshop graph pipeline.
//!
//! Each stage defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for a pipeline run.
///
/// Each variant wraps a stage-specific error, preserving the full diagnostic
/// chain (error codes, help text, sources) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum WebshopError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read pipeline config: {path}")]
    #[diagnostic(
        code(webshop::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pipeline config {path}: {message}")]
    #[diagnostic(
        code(webshop::config::parse),
        help(
            "Check the TOML syntax. Recognized keys are input, graph_output, \
             report_output, brand, seed_item, rating_seed and max_report_rows."
        )
    )]
    Parse { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Ingest errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum IngestError {
    #[error("failed to open catalog {path}")]
    #[diagnostic(
        code(webshop::ingest::io),
        help("Check that the CSV file exists and is readable, or pass --input.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV record near line {line}: {message}")]
    #[diagnostic(
        code(webshop::ingest::csv),
        help(
            "The catalog could not be parsed as comma-separated values. \
             Look for unbalanced quotes or invalid UTF-8 around that line."
        )
    )]
    Csv { line: u64, message: String },

    #[error("catalog is missing required column \"{column}\"")]
    #[diagnostic(
        code(webshop::ingest::missing_column),
        help("The header row must contain \"Item URI\", \"Item Name\" and \"Item URL\".")
    )]
    MissingColumn { column: String },

    #[error("row at line {line} has no usable item identifier (got \"{raw}\")")]
    #[diagnostic(
        code(webshop::ingest::missing_item_identifier),
        help(
            "Every row needs an \"Item URI\" such as `ex:prod001`, `schema:Thing` \
             or an absolute http(s) IRI. Fix the row and re-run; outputs are \
             overwritten on every run."
        )
    )]
    MissingItemIdentifier { line: u64, raw: String },
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("graph store error: {message}")]
    #[diagnostic(
        code(webshop::graph::store),
        help("The embedded oxigraph store rejected an operation. This is unexpected for an in-memory store; please file a bug.")
    )]
    Store { message: String },

    #[error("SPARQL query error: {message}")]
    #[diagnostic(
        code(webshop::graph::sparql),
        help("The SPARQL query failed to parse or evaluate. Check the query syntax and prefixes.")
    )]
    Sparql { message: String },

    #[error("brand \"{brand}\" does not form a valid IRI")]
    #[diagnostic(
        code(webshop::graph::invalid_brand),
        help("Brand names become `ex:` local names. Avoid spaces and angle brackets, e.g. use `Logitech`.")
    )]
    InvalidBrand { brand: String },

    #[error("failed to serialize graph: {message}")]
    #[diagnostic(
        code(webshop::graph::serialize),
        help("The Turtle serializer failed. Check that the output location is writable.")
    )]
    Serialize { message: String },

    #[error("failed to write graph to {path}")]
    #[diagnostic(
        code(webshop::graph::io),
        help("Check that the output directory exists and has write permissions.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("failed to write query report to {path}")]
    #[diagnostic(
        code(webshop::report::io),
        help("Check that the output directory exists and has write permissions.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for ingestion results.
pub type IngestResult<T> = std::result::Result<T, IngestError>;

/// Convenience alias for graph results.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Convenience alias for functions returning pipeline results.
pub type WebshopResult<T> = std::result::Result<T, WebshopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_error_converts_to_webshop_error() {
        let err = IngestError::MissingColumn {
            column: "Item URI".into(),
        };
        let top: WebshopError = err.into();
        assert!(matches!(
            top,
            WebshopError::Ingest(IngestError::MissingColumn { .. })
        ));
    }

    #[test]
    fn graph_error_converts_to_webshop_error() {
        let err = GraphError::InvalidBrand {
            brand: "Acme Inc".into(),
        };
        let top: WebshopError = err.into();
        assert!(matches!(top, WebshopError::Graph(GraphError::InvalidBrand { .. })));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = IngestError::MissingItemIdentifier {
            line: 7,
            raw: "  ".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("line 7"));

        let err = IngestError::MissingColumn {
            column: "Item URL".into(),
        };
        assert!(format!("{err}").contains("\"Item URL\""));
    }
}

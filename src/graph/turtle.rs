//! Turtle serialization of the product graph.

use std::io::{BufWriter, Write};
use std::path::Path;

use oxigraph::io::{RdfFormat, RdfSerializer};

use crate::error::{GraphError, GraphResult};
use crate::vocab;

use super::ProductGraph;

/// Serialize the graph as Turtle into `writer`.
///
/// Triples are written in sorted order, so a given graph always produces
/// the same text and statements about one subject form a single group.
pub fn to_turtle<W: Write>(graph: &ProductGraph, writer: W) -> GraphResult<W> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, iri) in vocab::PREFIXES {
        serializer = serializer
            .with_prefix(prefix, iri)
            .map_err(|e| GraphError::Serialize {
                message: format!("invalid prefix {prefix}: {e}"),
            })?;
    }

    let mut out = serializer.for_writer(writer);
    for triple in graph.triples()? {
        out.serialize_triple(&triple).map_err(|e| GraphError::Serialize {
            message: e.to_string(),
        })?;
    }
    out.finish().map_err(|e| GraphError::Serialize {
        message: e.to_string(),
    })
}

/// Write the graph as Turtle to `path`, replacing any existing file.
///
/// Returns the number of triples written.
pub fn write_turtle(graph: &ProductGraph, path: &Path) -> GraphResult<usize> {
    let io_err = |e: std::io::Error| GraphError::Io {
        path: path.display().to_string(),
        source: e,
    };

    let file = std::fs::File::create(path).map_err(io_err)?;
    let writer = to_turtle(graph, BufWriter::new(file))?;
    writer
        .into_inner()
        .map_err(|e| io_err(e.into_error()))?
        .sync_all()
        .map_err(io_err)?;

    let count = graph.len()?;
    tracing::info!(triples = count, path = %path.display(), "wrote Turtle graph");
    Ok(count)
}

// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # webshop-kg
//!
//! Turns a CSV catalog of webshop products into an RDF graph, writes it as
//! Turtle, and answers a fixed battery of SPARQL queries in a text report.
//!
//! ## Architecture
//!
//! - **Field mapping** (`mapping`): IRI resolution, literal typing, URL → category rules
//! - **Catalog** (`catalog`): headered CSV → typed product rows
//! - **Graph** (`graph`): oxigraph store, ontology seeding, row → triple builder, Turtle output
//! - **Report** (`report`): named SPARQL queries, result formatting, report file
//! - **Pipeline** (`pipeline`): the batch run tying it together
//!
//! ## Library usage
//!
//! ```no_run
//! use webshop_kg::config::PipelineConfig;
//! use webshop_kg::pipeline::Pipeline;
//!
//! let config = PipelineConfig {
//!     rating_seed: Some(42),
//!     ..Default::default()
//! };
//! let summary = Pipeline::new(config).run().unwrap();
//! println!("{summary}");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod pipeline;
pub mod report;
pub mod vocab;

//! Catalog reader: the product CSV as typed rows.
//!
//! The header row must name the three item columns; up to five attribute
//! groups (`Attribute n`, `Value n`, `Schema URI n`) are picked up when all
//! three of their columns are present.

use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, IngestResult};

/// Column holding the item identifier (e.g. `ex:prod001`).
pub const COL_ITEM_URI: &str = "Item URI";
/// Column holding the display name.
pub const COL_ITEM_NAME: &str = "Item Name";
/// Column holding the product page URL.
pub const COL_ITEM_URL: &str = "Item URL";

/// Number of repeated attribute column groups.
pub const MAX_ATTRIBUTES: usize = 5;

/// One (attribute, value, schema URI) group of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSlot {
    /// 1-based group number.
    pub index: usize,
    /// Human-readable attribute name; informational only.
    pub name: String,
    /// Raw value cell.
    pub value: String,
    /// Raw predicate cell (e.g. `schema:price`).
    pub schema_uri: String,
}

/// A single product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// 1-based line number in the source file (the header is line 1).
    pub line: u64,
    pub item_uri: String,
    pub name: String,
    pub url: String,
    /// Attribute groups present in the header, in column order.
    pub attributes: Vec<AttributeSlot>,
}

#[derive(Debug, Clone, Copy)]
struct AttributeColumns {
    index: usize,
    name: usize,
    value: usize,
    schema_uri: usize,
}

#[derive(Debug)]
struct Layout {
    item_uri: usize,
    name: usize,
    url: usize,
    attributes: Vec<AttributeColumns>,
}

impl Layout {
    fn from_headers(headers: &csv::StringRecord) -> IngestResult<Self> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);
        let require = |column: &str| {
            find(column).ok_or_else(|| IngestError::MissingColumn {
                column: column.to_string(),
            })
        };

        let attributes = (1..=MAX_ATTRIBUTES)
            .filter_map(|n| {
                Some(AttributeColumns {
                    index: n,
                    name: find(&format!("Attribute {n}"))?,
                    value: find(&format!("Value {n}"))?,
                    schema_uri: find(&format!("Schema URI {n}"))?,
                })
            })
            .collect();

        Ok(Self {
            item_uri: require(COL_ITEM_URI)?,
            name: require(COL_ITEM_NAME)?,
            url: require(COL_ITEM_URL)?,
            attributes,
        })
    }
}

/// Read and parse a catalog file.
pub fn read_catalog(path: &Path) -> IngestResult<Vec<ProductRow>> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let rows = parse_catalog(file)?;
    tracing::info!(rows = rows.len(), path = %path.display(), "loaded catalog");
    Ok(rows)
}

/// Parse catalog rows from any reader.
///
/// Short records are tolerated; missing cells read as empty strings.
pub fn parse_catalog<R: Read>(reader: R) -> IngestResult<Vec<ProductRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let layout = Layout::from_headers(&headers)?;
    tracing::debug!(
        attribute_groups = layout.attributes.len(),
        "resolved catalog columns"
    );

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let cell = |i: usize| record.get(i).unwrap_or("").to_string();
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let attributes = layout
            .attributes
            .iter()
            .map(|cols| AttributeSlot {
                index: cols.index,
                name: cell(cols.name),
                value: cell(cols.value),
                schema_uri: cell(cols.schema_uri),
            })
            .collect();

        rows.push(ProductRow {
            line,
            item_uri: cell(layout.item_uri),
            name: cell(layout.name),
            url: cell(layout.url),
            attributes,
        });
    }
    Ok(rows)
}

fn csv_error(e: csv::Error) -> IngestError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    IngestError::Csv {
        line,
        message: e.to_string(),
    }
}

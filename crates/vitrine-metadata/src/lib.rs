//! Structured data blocks for machine consumption.
//!
//! Serializes page metadata records into compact JSON blocks that the
//! page embeds in document order for search indexing. The injector is a
//! pure serialize-and-embed step: it does not validate what the records
//! mean, and a non-serializable record is a caller bug, so the serde
//! error propagates instead of being recovered here.

use serde::Serialize;

/// Machine-readable kind tag for every emitted block.
pub const BLOCK_KIND: &str = "application/ld+json";

/// One serialized metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    /// Position of the source record in the payload. Stable across
    /// repeated render passes, so blocks never duplicate or reorder.
    pub position: usize,
    /// Fixed content kind tag.
    pub kind: &'static str,
    /// Compact JSON encoding of the record.
    pub body: String,
}

/// Serialize an ordered sequence of records, one block per record.
pub fn inject_all<T: Serialize>(records: &[T]) -> Result<Vec<MetadataBlock>, serde_json::Error> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            Ok(MetadataBlock {
                position,
                kind: BLOCK_KIND,
                body: serde_json::to_string(record)?,
            })
        })
        .collect()
}

/// Serialize a lone record as a one-element sequence.
pub fn inject_one<T: Serialize>(record: &T) -> Result<Vec<MetadataBlock>, serde_json::Error> {
    inject_all(std::slice::from_ref(record))
}

//! Size-bounded document chunking.
//!
//! [`split`] partitions a document into consecutive chunks whose serialized
//! size stays within a caller-supplied byte budget. Chunk boundaries fall
//! only between pages; a page is never subdivided.

use crate::codec::Codec;
use crate::document::Document;
use crate::error::{Error, Result};

/// Maximum serialized byte length a chunk is allowed to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeBudget(u64);

impl SizeBudget {
    /// Budget in bytes. Zero is rejected.
    pub fn from_bytes(bytes: u64) -> Result<Self> {
        if bytes == 0 {
            return Err(Error::InvalidSizeBudget);
        }
        Ok(Self(bytes))
    }

    /// Budget in megabytes, truncated toward zero when converted to bytes,
    /// so `0.5` means exactly 524288 bytes and `2.999999` stays under 3 MiB.
    /// Non-positive and NaN values are rejected, as is a fraction small
    /// enough to truncate to zero bytes.
    pub fn from_megabytes(megabytes: f64) -> Result<Self> {
        if !(megabytes > 0.0) {
            return Err(Error::InvalidSizeBudget);
        }
        Self::from_bytes((megabytes * 1024.0 * 1024.0) as u64)
    }

    /// The budget in bytes.
    pub fn bytes(self) -> u64 {
        self.0
    }
}

/// Partition `doc` into consecutive chunks of at most `budget` serialized
/// bytes each.
///
/// The pass is greedy and order-preserving: pages are taken left to right,
/// and the current chunk is sealed as soon as appending the next page would
/// push its encoded size over the budget. A single page that exceeds the
/// budget on its own still becomes a one-page chunk; pages are never dropped
/// or subdivided. Concatenating the chunks' pages reproduces `doc` exactly,
/// and identical inputs always produce identical boundaries.
///
/// The chunk count is minimal for this left-to-right strategy, which is not
/// necessarily the globally optimal packing.
///
/// An empty document yields an empty chunk sequence, not an error. Every
/// chunk carries the source document's metadata.
///
/// Each candidate chunk is re-encoded to measure it, so the pass costs
/// O(N²) in total encoded bytes. That is acceptable for the target page
/// counts (tens to low hundreds); an incremental size estimate could replace
/// it if larger documents show up.
///
/// # Errors
///
/// Fails if any candidate encoding fails. The failure is atomic: the caller
/// gets no partial chunk sequence.
pub fn split<C: Codec>(codec: &C, doc: &Document, budget: SizeBudget) -> Result<Vec<Document>> {
    if doc.is_empty() {
        log::debug!("split: document has no pages, nothing to do");
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    let mut current = Document::new().with_info(doc.info().clone());

    for page in doc.pages() {
        let mut candidate = current.clone();
        candidate.push_page(page.clone());
        let candidate_len = codec.encode(&candidate)?.len() as u64;

        if !current.is_empty() && candidate_len > budget.bytes() {
            log::debug!(
                "split: sealing chunk {} at {} pages ({} bytes would exceed {})",
                chunks.len() + 1,
                current.page_count(),
                candidate_len,
                budget.bytes()
            );
            chunks.push(current);
            current = Document::from_pages(vec![page.clone()]).with_info(doc.info().clone());
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    log::debug!(
        "split: {} pages into {} chunks within {} bytes",
        doc.page_count(),
        chunks.len(),
        budget.bytes()
    );
    Ok(chunks)
}

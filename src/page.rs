//! Opaque page units.
//!
//! A [`PageUnit`] is the smallest thing the engine moves around: one page's
//! encoded content together with the relocation metadata a codec needs to keep
//! the page valid inside whatever document it ends up in. The engine never
//! looks inside either field.

use bytes::Bytes;
use indexmap::IndexMap;

/// Named references a codec must re-resolve when a page is placed into
/// another document. Keys and values are codec-defined; insertion order is
/// preserved so encoding stays deterministic.
pub type RelocationTable = IndexMap<String, u64>;

/// One page's encoded content plus the metadata needed to relocate it
/// between documents.
///
/// Page units are produced by a codec's `decode` and consumed by `encode`;
/// they are never mutated in place. Cloning one yields a fresh logical copy.
/// The content blob is reference-counted internally but immutable, so the
/// sharing is not observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUnit {
    /// 1-based position in the document this page was decoded from.
    /// Diagnostic only; not stable across transformations.
    origin: u32,
    /// Encoded page content.
    content: Bytes,
    /// Codec-owned relocation metadata.
    relocations: RelocationTable,
}

impl PageUnit {
    /// Create a page unit.
    ///
    /// `origin` is the 1-based position of the page in the document it was
    /// decoded from. It survives transformations only as a hint about where
    /// the page came from, never as the page's current number.
    pub fn new(origin: u32, content: impl Into<Bytes>, relocations: RelocationTable) -> Self {
        Self {
            origin,
            content: content.into(),
            relocations,
        }
    }

    /// 1-based position of origin in the source document.
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// Encoded page content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Length of the encoded content in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Relocation metadata attached by the codec.
    pub fn relocations(&self) -> &RelocationTable {
        &self.relocations
    }
}

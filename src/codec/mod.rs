//! Codec boundary: converting between raw bytes and documents.
//!
//! The engine treats the on-disk format as somebody else's problem. A codec
//! parses raw bytes into an ordered sequence of opaque page units and
//! serializes such a sequence back into bytes; everything the format needs to
//! keep a relocated page valid travels inside the page's relocation table.
//!
//! Both operations are pure: `decode` never touches the input bytes and
//! `encode` never mutates the document. Whole-document serialization is
//! assumed to be affordable; streaming codecs are out of scope.
//!
//! [`FramedCodec`] is a minimal reference implementation used by the test
//! suite and by hosts that want a self-contained container format. Real
//! deployments plug in their own format library behind the [`Codec`] trait.

mod framed;

pub use framed::FramedCodec;

use crate::document::Document;

/// Errors reported by a codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input bytes are not a well-formed document
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// A page unit is structurally invalid for serialization
    #[error("Page cannot be serialized: {0}")]
    UnencodablePage(String),
}

/// Converts between raw bytes and [`Document`] values.
///
/// Implementations must be deterministic: encoding the same document twice
/// yields identical bytes. The splitter relies on this when it measures
/// candidate chunks.
pub trait Codec {
    /// Parse raw bytes into a document.
    fn decode(&self, bytes: &[u8]) -> Result<Document, CodecError>;

    /// Serialize a document into raw bytes.
    ///
    /// An empty document must serialize to a valid minimal output rather
    /// than an error.
    fn encode(&self, doc: &Document) -> Result<Vec<u8>, CodecError>;
}

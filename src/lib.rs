//! # Folio
//!
//! Page-level document assembly and size-bounded splitting.
//!
//! Folio treats a binary page-oriented document as an ordered sequence of
//! opaque page units and provides the algorithms a hosted document editor
//! needs on top of that view:
//!
//! - **Remove**: drop pages by 1-based number, tolerating duplicates and
//!   out-of-range input
//! - **Insert**: place another document's pages at the beginning, the end, or
//!   before a given page number
//! - **Merge**: concatenate any number of documents in order
//! - **Split**: partition a document into chunks whose serialized size stays
//!   within a caller-supplied byte budget, without ever subdividing a page
//!
//! The on-disk format stays behind the [`Codec`] trait: a codec decodes raw
//! bytes into a [`Document`] of [`PageUnit`]s and encodes such a document
//! back into bytes. The engine never parses format internals itself.
//! [`FramedCodec`] ships as a minimal self-contained reference container.
//!
//! Every operation is a pure, synchronous function over in-memory values:
//! inputs are never mutated, results are new documents, and independent
//! callers can run concurrently without shared state. Persistence and
//! replace-on-save semantics live in [`store`], and [`api::Workbench`] wires
//! codec, engine, and store into a hosted workflow.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio::codec::{Codec, FramedCodec};
//! use folio::{assembler, splitter, InsertPosition, SizeBudget};
//!
//! let codec = FramedCodec::new();
//! let report = codec.decode(&report_bytes)?;
//! let appendix = codec.decode(&appendix_bytes)?;
//!
//! // Drop the cover sheet, then append the appendix.
//! let trimmed = assembler::remove(&report, [1]);
//! let combined = assembler::insert(&trimmed, &appendix, InsertPosition::End)?;
//!
//! // Ship it in pieces of at most 4 MiB each.
//! let chunks = splitter::split(&codec, &combined, SizeBudget::from_megabytes(4.0)?)?;
//! for chunk in &chunks {
//!     let bytes = codec.encode(chunk)?;
//!     // persist bytes...
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core document model
pub mod document;
pub mod page;

// Codec boundary
pub mod codec;

// Assembly and splitting engine
pub mod assembler;
pub mod splitter;

// Raster conversion boundary
pub mod raster;

// Host-side persistence
pub mod store;

// High-level API
pub mod api;

// Re-exports
pub use assembler::InsertPosition;
pub use codec::{Codec, CodecError, FramedCodec};
pub use document::{Document, DocumentInfo};
pub use error::{Error, Result};
pub use page::{PageUnit, RelocationTable};
pub use raster::{Rasterizer, RasterError};
pub use splitter::SizeBudget;
pub use store::{ChunkBatch, DocumentId, DocumentStore};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! High-level workflow API for hosted document editing.
//!
//! [`Workbench`] ties the engine, a codec, and a [`DocumentStore`] together
//! into the operations a hosting process typically exposes: upload a
//! document, inspect its page count, remove pages, insert another document's
//! pages at a position, merge several documents, split one by serialized
//! size, and exchange pages with a raster converter.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio::api::Workbench;
//! use folio::codec::FramedCodec;
//! use folio::store::DocumentStore;
//! use folio::{InsertPosition, SizeBudget};
//!
//! let store = DocumentStore::open("var/documents")?;
//! let bench = Workbench::new(FramedCodec::new(), store);
//!
//! let id = bench.upload(&uploaded_bytes)?;
//! bench.remove_pages(&id, [2, 5])?;
//! bench.insert_pages(&id, &appendix_bytes, InsertPosition::End)?;
//! let batch = bench.split(&id, SizeBudget::from_megabytes(4.0)?)?;
//! println!("split into {} chunks", batch.chunk_count());
//! ```
//!
//! [`DocumentStore`]: crate::store::DocumentStore

mod workbench;

pub use workbench::Workbench;

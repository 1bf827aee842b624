//! The hosted-workflow facade.

use crate::assembler::{self, InsertPosition};
use crate::codec::Codec;
use crate::document::Document;
use crate::error::Result;
use crate::raster::{self, Rasterizer};
use crate::splitter::{self, SizeBudget};
use crate::store::{ChunkBatch, DocumentId, DocumentStore};

/// Orchestrates decode, assembly, encode, and persistence for one store.
///
/// Every editing call follows the same shape: load the stored bytes, decode,
/// run the pure engine operation, encode the result, and commit it through
/// [`DocumentStore::replace`] so the stored artifact flips atomically from
/// old to new. Nothing here holds state between calls; concurrent callers on
/// the same stored id are the store's documented last-write-wins case.
pub struct Workbench<C> {
    codec: C,
    store: DocumentStore,
}

impl<C: Codec> Workbench<C> {
    /// Create a workbench over a codec and a store.
    pub fn new(codec: C, store: DocumentStore) -> Self {
        Self { codec, store }
    }

    /// The underlying store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    fn open(&self, id: &DocumentId) -> Result<Document> {
        Ok(self.codec.decode(&self.store.load(id)?)?)
    }

    fn commit(&self, id: &DocumentId, doc: &Document) -> Result<()> {
        self.store.replace(id, &self.codec.encode(doc)?)
    }

    /// Validate and store an uploaded document, returning its identifier.
    ///
    /// The bytes are decoded once so malformed uploads are rejected up
    /// front instead of surfacing on the first edit.
    pub fn upload(&self, bytes: &[u8]) -> Result<DocumentId> {
        self.codec.decode(bytes)?;
        self.store.store(bytes)
    }

    /// Fetch a stored document's encoded bytes.
    pub fn download(&self, id: &DocumentId) -> Result<Vec<u8>> {
        self.store.load(id)
    }

    /// Number of pages in a stored document.
    pub fn page_count(&self, id: &DocumentId) -> Result<usize> {
        Ok(self.open(id)?.page_count())
    }

    /// Remove pages by 1-based number. Returns the new page count.
    pub fn remove_pages(
        &self,
        id: &DocumentId,
        page_numbers: impl IntoIterator<Item = usize>,
    ) -> Result<usize> {
        let doc = self.open(id)?;
        let kept = assembler::remove(&doc, page_numbers);
        self.commit(id, &kept)?;
        log::info!(
            "document {}: removed {} pages, {} remain",
            id,
            doc.page_count() - kept.page_count(),
            kept.page_count()
        );
        Ok(kept.page_count())
    }

    /// Insert all pages of an encoded document at the given position.
    /// Returns the new page count.
    pub fn insert_pages(
        &self,
        id: &DocumentId,
        other: &[u8],
        position: InsertPosition,
    ) -> Result<usize> {
        let doc = self.open(id)?;
        let incoming = self.codec.decode(other)?;
        let combined = assembler::insert(&doc, &incoming, position)?;
        self.commit(id, &combined)?;
        log::info!(
            "document {}: inserted {} pages, now {}",
            id,
            incoming.page_count(),
            combined.page_count()
        );
        Ok(combined.page_count())
    }

    /// Merge stored documents, in argument order, into a newly stored one.
    /// The inputs are left untouched.
    pub fn merge(&self, ids: &[DocumentId]) -> Result<DocumentId> {
        let docs = ids
            .iter()
            .map(|id| self.open(id))
            .collect::<Result<Vec<_>>>()?;
        let merged = assembler::merge(&docs);
        let merged_id = self.store.store(&self.codec.encode(&merged)?)?;
        log::info!(
            "merged {} documents ({} pages) into {}",
            ids.len(),
            merged.page_count(),
            merged_id
        );
        Ok(merged_id)
    }

    /// Split a stored document into chunks of at most `budget` serialized
    /// bytes and write them as a batch. The stored document is left
    /// untouched. An empty document yields an empty batch.
    pub fn split(&self, id: &DocumentId, budget: SizeBudget) -> Result<ChunkBatch> {
        let doc = self.open(id)?;
        let chunks = splitter::split(&self.codec, &doc, budget)?;
        let encoded = chunks
            .iter()
            .map(|chunk| self.codec.encode(chunk))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.store.store_chunks(&encoded)
    }

    /// Convert images into a single document (one page per image, in input
    /// order) and store it.
    pub fn import_images<R: Rasterizer>(
        &self,
        raster: &R,
        images: &[Vec<u8>],
    ) -> Result<DocumentId> {
        let doc = raster::document_from_images(raster, images)?;
        self.store.store(&self.codec.encode(&doc)?)
    }

    /// Render every page of a stored document to an image, in page order.
    pub fn export_images<R: Rasterizer>(
        &self,
        raster: &R,
        id: &DocumentId,
    ) -> Result<Vec<Vec<u8>>> {
        let doc = self.open(id)?;
        raster::rasterize_document(raster, &doc)
    }
}

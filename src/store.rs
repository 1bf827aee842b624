//! Directory-backed persistence for encoded documents.
//!
//! The engine itself never touches the filesystem; this module is the host
//! side of the workflow. A store keeps every live document as one uuid-named
//! file under `uploads/` and stages rewrites under `processed/`, renaming the
//! staged file over the live one once it is fully written. Split output lands
//! in per-batch directories under `processed/` together with a JSON manifest.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Identifier of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of a chunk-batch manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkEntry {
    /// File name inside the batch directory
    pub file: String,
    /// Serialized size in bytes
    pub bytes: u64,
}

/// Manifest written next to a batch of split chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkManifest {
    /// When the batch was written
    pub created: DateTime<Utc>,
    /// Chunk files in order
    pub chunks: Vec<ChunkEntry>,
}

/// A batch of chunk files written by [`DocumentStore::store_chunks`].
#[derive(Debug)]
pub struct ChunkBatch {
    /// Directory holding the chunk files and their manifest
    pub dir: PathBuf,
    /// The manifest that was written
    pub manifest: ChunkManifest,
}

impl ChunkBatch {
    /// Number of chunks in the batch.
    pub fn chunk_count(&self) -> usize {
        self.manifest.chunks.len()
    }
}

/// Directory-backed document storage.
pub struct DocumentStore {
    uploads: PathBuf,
    processed: PathBuf,
    extension: String,
}

impl DocumentStore {
    /// Open a store rooted at `root`, creating its `uploads/` and
    /// `processed/` directories as needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let uploads = root.join("uploads");
        let processed = root.join("processed");
        fs::create_dir_all(&uploads)?;
        fs::create_dir_all(&processed)?;
        Ok(Self {
            uploads,
            processed,
            extension: "pdf".to_string(),
        })
    }

    /// Change the file extension used for stored documents and chunks.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    fn live_path(&self, id: &DocumentId) -> PathBuf {
        self.uploads.join(format!("{}.{}", id, self.extension))
    }

    /// Store encoded document bytes under a fresh identifier.
    pub fn store(&self, bytes: &[u8]) -> Result<DocumentId> {
        let id = DocumentId::generate();
        fs::write(self.live_path(&id), bytes)?;
        log::debug!("stored document {} ({} bytes)", id, bytes.len());
        Ok(id)
    }

    /// Load a stored document's bytes.
    pub fn load(&self, id: &DocumentId) -> Result<Vec<u8>> {
        let path = self.live_path(id);
        if !path.exists() {
            return Err(Error::UnknownDocument(*id));
        }
        Ok(fs::read(path)?)
    }

    /// Replace a stored document's bytes.
    ///
    /// The new bytes are staged under `processed/` and then renamed over the
    /// live file, so a concurrent reader observes either the old content or
    /// the new, never a torn file. Two writers racing on the same id are not
    /// coordinated: the last rename wins and the store offers no
    /// compare-and-swap to detect it.
    pub fn replace(&self, id: &DocumentId, bytes: &[u8]) -> Result<()> {
        let live = self.live_path(id);
        if !live.exists() {
            return Err(Error::UnknownDocument(*id));
        }
        let staged = self.processed.join(format!("{}.{}", id, self.extension));
        fs::write(&staged, bytes)?;
        fs::rename(&staged, &live)?;
        log::debug!("replaced document {} ({} bytes)", id, bytes.len());
        Ok(())
    }

    /// Delete a stored document.
    pub fn discard(&self, id: &DocumentId) -> Result<()> {
        let live = self.live_path(id);
        if !live.exists() {
            return Err(Error::UnknownDocument(*id));
        }
        fs::remove_file(live)?;
        Ok(())
    }

    /// Write a batch of encoded chunks into a fresh directory under
    /// `processed/`, named `chunk_1.<ext>` through `chunk_n.<ext>`, plus a
    /// `manifest.json` describing them.
    pub fn store_chunks(&self, chunks: &[Vec<u8>]) -> Result<ChunkBatch> {
        let dir = self.processed.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&dir)?;

        let mut entries = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            let file = format!("chunk_{}.{}", idx + 1, self.extension);
            fs::write(dir.join(&file), chunk)?;
            entries.push(ChunkEntry {
                file,
                bytes: chunk.len() as u64,
            });
        }

        let manifest = ChunkManifest {
            created: Utc::now(),
            chunks: entries,
        };
        fs::write(dir.join("manifest.json"), serde_json::to_vec_pretty(&manifest)?)?;

        log::debug!("wrote {} chunks to {}", manifest.chunks.len(), dir.display());
        Ok(ChunkBatch { dir, manifest })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_and_load_round_trip() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let id = store.store(b"payload").unwrap();
        assert_eq!(store.load(&id).unwrap(), b"payload");
    }

    #[test]
    fn test_load_unknown_id_fails() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let stray = DocumentId::generate();
        assert!(matches!(
            store.load(&stray).unwrap_err(),
            Error::UnknownDocument(id) if id == stray
        ));
    }

    #[test]
    fn test_replace_swaps_content() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let id = store.store(b"old").unwrap();
        store.replace(&id, b"new").unwrap();
        assert_eq!(store.load(&id).unwrap(), b"new");
    }

    #[test]
    fn test_replace_leaves_nothing_staged() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let id = store.store(b"old").unwrap();
        store.replace(&id, b"new").unwrap();
        let staged: Vec<_> = fs::read_dir(root.path().join("processed"))
            .unwrap()
            .collect();
        assert!(staged.is_empty());
    }

    #[test]
    fn test_replace_unknown_id_fails() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let stray = DocumentId::generate();
        assert!(matches!(
            store.replace(&stray, b"x").unwrap_err(),
            Error::UnknownDocument(_)
        ));
    }

    #[test]
    fn test_discard_removes_document() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let id = store.store(b"gone soon").unwrap();
        store.discard(&id).unwrap();
        assert!(matches!(
            store.load(&id).unwrap_err(),
            Error::UnknownDocument(_)
        ));
    }

    #[test]
    fn test_store_chunks_writes_files_and_manifest() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap().with_extension("bin");
        let batch = store
            .store_chunks(&[vec![1u8; 10], vec![2u8; 20]])
            .unwrap();

        assert_eq!(batch.chunk_count(), 2);
        assert_eq!(batch.manifest.chunks[0].file, "chunk_1.bin");
        assert_eq!(batch.manifest.chunks[1].bytes, 20);
        assert_eq!(fs::read(batch.dir.join("chunk_2.bin")).unwrap(), vec![2u8; 20]);

        let manifest: ChunkManifest =
            serde_json::from_slice(&fs::read(batch.dir.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(manifest.chunks, batch.manifest.chunks);
    }

    #[test]
    fn test_store_chunks_empty_batch_is_valid() {
        let root = tempdir().unwrap();
        let store = DocumentStore::open(root.path()).unwrap();
        let batch = store.store_chunks(&[]).unwrap();
        assert_eq!(batch.chunk_count(), 0);
        assert!(batch.dir.join("manifest.json").exists());
    }
}

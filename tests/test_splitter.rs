//! Integration tests for size-bounded splitting with the framed codec.

use folio::codec::{Codec, FramedCodec};
use folio::{splitter, Document, DocumentInfo, PageUnit, RelocationTable, SizeBudget};

/// Helper to build a document with one page per requested content size.
fn build_doc(page_sizes: &[usize]) -> Document {
    let pages = page_sizes
        .iter()
        .enumerate()
        .map(|(idx, &size)| {
            PageUnit::new(idx as u32 + 1, vec![b'x'; size], RelocationTable::new())
        })
        .collect();
    Document::from_pages(pages).with_info(DocumentInfo::new().title("split fixture"))
}

fn page_counts(chunks: &[Document]) -> Vec<usize> {
    chunks.iter().map(|c| c.page_count()).collect()
}

#[test]
fn test_ten_uniform_pages_split_in_pairs() {
    // Ten pages of ~100 kB against a 250 kB budget: two pages fit in a
    // chunk, three would pass 300 kB. Framing overhead is well under the
    // ~50 kB of slack.
    let codec = FramedCodec::new();
    let doc = build_doc(&[100_000; 10]);
    let budget = SizeBudget::from_bytes(250_000).unwrap();

    let chunks = splitter::split(&codec, &doc, budget).unwrap();
    assert_eq!(page_counts(&chunks), vec![2, 2, 2, 2, 2]);

    for chunk in &chunks {
        assert!(codec.encode(chunk).unwrap().len() <= 250_000);
    }
}

#[test]
fn test_split_covers_and_partitions() {
    let codec = FramedCodec::new();
    let doc = build_doc(&[5_000, 60_000, 2_000, 90_000, 90_000, 10, 40_000]);
    let budget = SizeBudget::from_bytes(100_000).unwrap();

    let chunks = splitter::split(&codec, &doc, budget).unwrap();
    let flattened: Vec<PageUnit> = chunks
        .iter()
        .flat_map(|c| c.pages().iter().cloned())
        .collect();
    assert_eq!(flattened, doc.pages());
}

#[test]
fn test_multi_page_chunks_respect_the_budget() {
    let codec = FramedCodec::new();
    let doc = build_doc(&[30_000, 30_000, 250_000, 30_000, 30_000]);
    let budget = SizeBudget::from_bytes(100_000).unwrap();

    let chunks = splitter::split(&codec, &doc, budget).unwrap();
    for chunk in &chunks {
        let encoded = codec.encode(chunk).unwrap();
        if chunk.page_count() > 1 {
            assert!(encoded.len() as u64 <= budget.bytes());
        }
    }
    // The oversized page must have come through as its own chunk.
    assert!(chunks
        .iter()
        .any(|c| c.page_count() == 1 && c.page(1).unwrap().content_len() == 250_000));
}

#[test]
fn test_split_empty_document_returns_no_chunks() {
    let codec = FramedCodec::new();
    let chunks = splitter::split(
        &codec,
        &Document::new(),
        SizeBudget::from_bytes(1000).unwrap(),
    )
    .unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn test_every_chunk_keeps_the_source_metadata() {
    let codec = FramedCodec::new();
    let doc = build_doc(&[50_000; 6]);
    let budget = SizeBudget::from_bytes(120_000).unwrap();

    let chunks = splitter::split(&codec, &doc, budget).unwrap();
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert_eq!(chunk.info().title.as_deref(), Some("split fixture"));
    }
}

#[test]
fn test_chunks_decode_back_to_their_pages() {
    let codec = FramedCodec::new();
    let doc = build_doc(&[10_000, 80_000, 80_000, 500]);
    let budget = SizeBudget::from_bytes(100_000).unwrap();

    let chunks = splitter::split(&codec, &doc, budget).unwrap();
    let mut reassembled = Vec::new();
    for chunk in &chunks {
        let reloaded = codec.decode(&codec.encode(chunk).unwrap()).unwrap();
        for page in reloaded.pages() {
            reassembled.push(page.content().to_vec());
        }
    }
    let original: Vec<Vec<u8>> = doc.pages().iter().map(|p| p.content().to_vec()).collect();
    assert_eq!(reassembled, original);
}

#[test]
fn test_megabyte_budget_matches_byte_budget() {
    let codec = FramedCodec::new();
    let doc = build_doc(&[300_000; 7]);

    let by_bytes = splitter::split(&codec, &doc, SizeBudget::from_bytes(1024 * 1024).unwrap());
    let by_megabytes = splitter::split(&codec, &doc, SizeBudget::from_megabytes(1.0).unwrap());
    assert_eq!(by_bytes.unwrap(), by_megabytes.unwrap());
}

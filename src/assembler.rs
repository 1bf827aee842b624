//! Stateless page-assembly operations.
//!
//! Every operation here is a pure function: it reads its input documents,
//! returns a new [`Document`], and mutates nothing. The caller decides what,
//! if anything, the result replaces.

use std::collections::HashSet;

use crate::document::Document;
use crate::error::{Error, Result};

/// Where [`insert`] places the incoming pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the first page.
    Beginning,
    /// After the last page.
    End,
    /// Before the page currently holding this 1-based number. A number past
    /// the end appends; `At(1)` is equivalent to `Beginning`.
    At(usize),
}

/// Remove pages by their 1-based numbers.
///
/// Returns a new document containing, in original order, every page of `doc`
/// whose number is not in `page_numbers`. Duplicate and out-of-range numbers
/// are ignored rather than treated as errors, so removing everything yields a
/// valid empty document and removing nothing yields an equal one.
///
/// # Example
///
/// ```ignore
/// use folio::assembler;
///
/// let trimmed = assembler::remove(&doc, [1, 3]);
/// assert_eq!(trimmed.page_count(), doc.page_count() - 2);
/// ```
pub fn remove(doc: &Document, page_numbers: impl IntoIterator<Item = usize>) -> Document {
    let discard: HashSet<usize> = page_numbers.into_iter().collect();

    let survivors: Vec<_> = doc
        .pages()
        .iter()
        .enumerate()
        .filter(|(idx, _)| !discard.contains(&(idx + 1)))
        .map(|(_, page)| page.clone())
        .collect();

    log::debug!(
        "remove: kept {} of {} pages",
        survivors.len(),
        doc.page_count()
    );
    Document::from_pages(survivors).with_info(doc.info().clone())
}

/// Insert all pages of `other` into `doc` at the given position.
///
/// The result holds `doc.page_count() + other.page_count()` pages, with the
/// relative order inside each input preserved. `At(0)` is rejected with
/// [`Error::InvalidInsertPosition`]: page numbers start at 1, and a caller
/// that wants the front asks for `Beginning` explicitly.
pub fn insert(doc: &Document, other: &Document, position: InsertPosition) -> Result<Document> {
    let cut = match position {
        InsertPosition::Beginning => 0,
        InsertPosition::End => doc.page_count(),
        InsertPosition::At(0) => return Err(Error::InvalidInsertPosition),
        InsertPosition::At(n) => (n - 1).min(doc.page_count()),
    };

    let mut pages = Vec::with_capacity(doc.page_count() + other.page_count());
    pages.extend_from_slice(&doc.pages()[..cut]);
    pages.extend_from_slice(other.pages());
    pages.extend_from_slice(&doc.pages()[cut..]);

    Ok(Document::from_pages(pages).with_info(doc.info().clone()))
}

/// Concatenate documents in argument order.
///
/// The result's page count is the sum of the inputs'. An empty input sequence
/// yields an empty document. Metadata is taken from the first document.
pub fn merge<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Document {
    let mut iter = docs.into_iter();
    let mut merged = match iter.next() {
        Some(first) => first.clone(),
        None => return Document::new(),
    };

    for doc in iter {
        for page in doc.pages() {
            merged.push_page(page.clone());
        }
    }
    merged
}

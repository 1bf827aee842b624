//! Document model: an ordered sequence of page units plus metadata.

use serde::{Deserialize, Serialize};

use crate::page::PageUnit;

/// Document-level metadata carried across assembly operations.
///
/// Every field is optional; codecs that have no metadata to report leave the
/// whole struct empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
}

impl DocumentInfo {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }
}

/// An ordered collection of page units representing one output file's worth
/// of content.
///
/// Page numbers are 1-based and derived from position, so numbering is always
/// contiguous from 1 to [`page_count`](Self::page_count) with no gaps. An
/// empty document is legal and encodes to a valid minimal output.
///
/// Assembly and splitting operations never mutate a document they receive;
/// they return new values and leave the caller to decide what the result
/// replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    info: DocumentInfo,
    pages: Vec<PageUnit>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from an ordered sequence of pages.
    pub fn from_pages(pages: Vec<PageUnit>) -> Self {
        Self {
            info: DocumentInfo::default(),
            pages,
        }
    }

    /// Attach metadata, replacing whatever was there.
    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    /// Document metadata.
    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages in order.
    pub fn pages(&self) -> &[PageUnit] {
        &self.pages
    }

    /// Get a page by its 1-based number.
    pub fn page(&self, number: usize) -> Option<&PageUnit> {
        if number == 0 {
            return None;
        }
        self.pages.get(number - 1)
    }

    /// Append a page. Used by codecs while building a decoded document.
    pub fn push_page(&mut self, page: PageUnit) {
        self.pages.push(page);
    }

    /// Consume the document, yielding its pages in order.
    pub fn into_pages(self) -> Vec<PageUnit> {
        self.pages
    }
}

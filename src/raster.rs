//! Raster conversion boundary.
//!
//! Turning a page into an image and an image back into a page is somebody
//! else's job; the engine only defines the seam. The helpers below are the
//! only places the library touches the seam, and they always go through
//! single-page document values so the assembly rules stay in force.

use crate::document::Document;
use crate::error::Result;
use crate::page::PageUnit;

/// Errors reported by a raster converter.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// A page could not be rendered to an image
    #[error("Page could not be rasterized: {0}")]
    Rasterize(String),

    /// An image could not be converted into a page
    #[error("Image could not be converted to a page: {0}")]
    Vectorize(String),
}

/// Converts between page units and encoded image blobs.
///
/// The image format (JPEG, PNG, ...) is implementation-defined and opaque to
/// the engine.
pub trait Rasterizer {
    /// Render one page to an encoded image.
    fn rasterize(&self, page: &PageUnit) -> std::result::Result<Vec<u8>, RasterError>;

    /// Convert an encoded image into a single page.
    fn vectorize(&self, image: &[u8]) -> std::result::Result<PageUnit, RasterError>;
}

/// Build a document out of one page per input image, in input order.
///
/// Fails on the first image the converter rejects; no partial document is
/// returned.
pub fn document_from_images<R: Rasterizer>(raster: &R, images: &[Vec<u8>]) -> Result<Document> {
    let mut doc = Document::new();
    for image in images {
        doc.push_page(raster.vectorize(image)?);
    }
    log::debug!("assembled {} images into one document", doc.page_count());
    Ok(doc)
}

/// Render every page of a document to an image, in page order.
pub fn rasterize_document<R: Rasterizer>(raster: &R, doc: &Document) -> Result<Vec<Vec<u8>>> {
    let mut images = Vec::with_capacity(doc.page_count());
    for page in doc.pages() {
        images.push(raster.rasterize(page)?);
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RelocationTable;

    /// Wraps image bytes verbatim as page content and back.
    struct EchoRaster;

    impl Rasterizer for EchoRaster {
        fn rasterize(&self, page: &PageUnit) -> std::result::Result<Vec<u8>, RasterError> {
            Ok(page.content().to_vec())
        }

        fn vectorize(&self, image: &[u8]) -> std::result::Result<PageUnit, RasterError> {
            if image.is_empty() {
                return Err(RasterError::Vectorize("empty image".to_string()));
            }
            Ok(PageUnit::new(
                1,
                image.to_vec(),
                RelocationTable::new(),
            ))
        }
    }

    #[test]
    fn test_document_from_images_keeps_order() {
        let images = vec![vec![1u8], vec![2u8], vec![3u8]];
        let doc = document_from_images(&EchoRaster, &images).unwrap();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.page(2).unwrap().content(), &[2u8]);
    }

    #[test]
    fn test_document_from_images_fails_atomically() {
        let images = vec![vec![1u8], vec![]];
        let err = document_from_images(&EchoRaster, &images).unwrap_err();
        assert!(matches!(err, crate::error::Error::Raster(_)));
    }

    #[test]
    fn test_rasterize_document_round_trips_content() {
        let images = vec![vec![9u8, 9], vec![7u8]];
        let doc = document_from_images(&EchoRaster, &images).unwrap();
        assert_eq!(rasterize_document(&EchoRaster, &doc).unwrap(), images);
    }
}

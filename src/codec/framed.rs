//! Length-framed reference codec.
//!
//! Container layout, all integers little-endian:
//!
//! ```text
//! magic "FOL1" | u16 version | u32 info_len | info (JSON) | u32 page_count
//! then per page:
//!   u32 content_len | content
//!   u16 reloc_count, then per entry: u16 name_len | name (UTF-8) | u64 value
//! ```
//!
//! The format carries no compression and no cross-file references. It exists
//! so the engine can be exercised end-to-end without a full document format
//! behind it.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::codec::{Codec, CodecError};
use crate::document::{Document, DocumentInfo};
use crate::page::{PageUnit, RelocationTable};

const MAGIC: [u8; 4] = *b"FOL1";
const VERSION: u16 = 1;

/// Minimal self-contained container codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct FramedCodec;

impl FramedCodec {
    /// Create a framed codec.
    pub fn new() -> Self {
        Self
    }
}

fn truncated(what: &str) -> CodecError {
    CodecError::Malformed(format!("truncated input while reading {what}"))
}

/// Read a length-prefixed field only after checking the prefix against the
/// bytes actually remaining, so a corrupt length cannot trigger a huge
/// allocation.
fn read_block(cursor: &mut Cursor<&[u8]>, len: u64, what: &str) -> Result<Vec<u8>, CodecError> {
    let remaining = cursor.get_ref().len() as u64 - cursor.position();
    if len > remaining {
        return Err(truncated(what));
    }
    let mut buf = vec![0u8; len as usize];
    cursor.read_exact(&mut buf).map_err(|_| truncated(what))?;
    Ok(buf)
}

impl Codec for FramedCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Document, CodecError> {
        let mut cursor = Cursor::new(bytes);

        let mut magic = [0u8; 4];
        cursor
            .read_exact(&mut magic)
            .map_err(|_| truncated("magic"))?;
        if magic != MAGIC {
            return Err(CodecError::Malformed(format!(
                "bad magic: expected {:?}, found {:?}",
                MAGIC, magic
            )));
        }

        let version = cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| truncated("version"))?;
        if version != VERSION {
            return Err(CodecError::Malformed(format!(
                "unsupported container version {version}"
            )));
        }

        let info_len = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| truncated("info length"))?;
        let info_buf = read_block(&mut cursor, info_len as u64, "document info")?;
        let info: DocumentInfo = serde_json::from_slice(&info_buf)
            .map_err(|e| CodecError::Malformed(format!("document info: {e}")))?;

        let page_count = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| truncated("page count"))?;

        let mut doc = Document::new().with_info(info);
        for number in 1..=page_count {
            let content_len = cursor
                .read_u32::<LittleEndian>()
                .map_err(|_| truncated("page content length"))?;
            let content = read_block(&mut cursor, content_len as u64, "page content")?;

            let reloc_count = cursor
                .read_u16::<LittleEndian>()
                .map_err(|_| truncated("relocation count"))?;
            let mut relocations = RelocationTable::with_capacity(reloc_count as usize);
            for _ in 0..reloc_count {
                let name_len = cursor
                    .read_u16::<LittleEndian>()
                    .map_err(|_| truncated("relocation name length"))?;
                let name_buf = read_block(&mut cursor, name_len as u64, "relocation name")?;
                let name = String::from_utf8(name_buf)
                    .map_err(|e| CodecError::Malformed(format!("relocation name: {e}")))?;
                let value = cursor
                    .read_u64::<LittleEndian>()
                    .map_err(|_| truncated("relocation value"))?;
                relocations.insert(name, value);
            }

            doc.push_page(PageUnit::new(number, content, relocations));
        }

        if cursor.position() != bytes.len() as u64 {
            return Err(CodecError::Malformed(format!(
                "{} trailing bytes after last page",
                bytes.len() as u64 - cursor.position()
            )));
        }

        Ok(doc)
    }

    fn encode(&self, doc: &Document) -> Result<Vec<u8>, CodecError> {
        let info = serde_json::to_vec(doc.info())
            .map_err(|e| CodecError::Malformed(format!("document info: {e}")))?;
        let info_len: u32 = info
            .len()
            .try_into()
            .map_err(|_| CodecError::Malformed("document info exceeds u32 framing".to_string()))?;

        let content_total: usize = doc.pages().iter().map(|p| p.content_len()).sum();
        let mut out = Vec::with_capacity(64 + info.len() + content_total);

        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&info_len.to_le_bytes());
        out.extend_from_slice(&info);
        let page_count: u32 = doc.page_count().try_into().map_err(|_| {
            CodecError::UnencodablePage("more than u32::MAX pages".to_string())
        })?;
        out.extend_from_slice(&page_count.to_le_bytes());

        for (idx, page) in doc.pages().iter().enumerate() {
            let number = idx + 1;
            let content_len: u32 = page.content_len().try_into().map_err(|_| {
                CodecError::UnencodablePage(format!("page {number} content exceeds u32 framing"))
            })?;
            out.extend_from_slice(&content_len.to_le_bytes());
            out.extend_from_slice(page.content());

            let reloc_count: u16 = page.relocations().len().try_into().map_err(|_| {
                CodecError::UnencodablePage(format!(
                    "page {number} has more than u16::MAX relocations"
                ))
            })?;
            out.extend_from_slice(&reloc_count.to_le_bytes());
            for (name, value) in page.relocations() {
                let name_len: u16 = name.len().try_into().map_err(|_| {
                    CodecError::UnencodablePage(format!(
                        "page {number} relocation name exceeds u16 framing"
                    ))
                })?;
                out.extend_from_slice(&name_len.to_le_bytes());
                out.extend_from_slice(name.as_bytes());
                out.extend_from_slice(&value.to_le_bytes());
            }
        }

        Ok(out)
    }
}

//! Image decoding for composer attachments.
//!
//! A selected file is sniffed by its leading bytes, rejected unless it is an
//! image, and turned into a `data:` URI that can stand in for an uploaded
//! image URL.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use mime::Mime;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("file is empty")]
    Empty,
    #[error("file is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("unsupported file type '{0}', only images can be attached")]
    UnsupportedType(Mime),
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A decoded image ready to be shown in the composer and attached to a post
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedImage {
    pub file_name: String,
    pub mime: Mime,
    pub byte_len: usize,
    pub data_uri: String,
}

/// Detect the MIME type of `bytes` from their signature
pub fn sniff_mime(bytes: &[u8]) -> Mime {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        mime::IMAGE_PNG
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        mime::IMAGE_JPEG
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        mime::IMAGE_GIF
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        "image/webp".parse().unwrap_or(mime::IMAGE_STAR)
    } else if bytes.starts_with(b"BM") {
        mime::IMAGE_BMP
    } else if bytes.starts_with(b"%PDF") {
        mime::APPLICATION_PDF
    } else if std::str::from_utf8(bytes).is_ok() {
        mime::TEXT_PLAIN
    } else {
        mime::APPLICATION_OCTET_STREAM
    }
}

/// Decode raw file contents into an [`AttachedImage`]
pub fn decode_image(file_name: &str, bytes: &[u8], max_bytes: usize) -> Result<AttachedImage, MediaError> {
    if bytes.is_empty() {
        return Err(MediaError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(MediaError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let mime = sniff_mime(bytes);
    if mime.type_() != mime::IMAGE {
        return Err(MediaError::UnsupportedType(mime));
    }

    let data_uri = format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes));
    log::debug!("Decoded {} ({}, {} bytes)", file_name, mime, bytes.len());

    Ok(AttachedImage {
        file_name: file_name.to_string(),
        mime,
        byte_len: bytes.len(),
        data_uri,
    })
}

/// Read an image file without blocking the event loop
pub async fn read_image_file(path: &Path, max_bytes: usize) -> Result<Vec<u8>, MediaError> {
    let read_error = |source| MediaError::Read {
        path: path.display().to_string(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(read_error)?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > max_bytes {
        return Err(MediaError::TooLarge { size, limit: max_bytes });
    }

    tokio::fs::read(path).await.map_err(read_error)
}

/// Name shown for an attachment: the file name component of `path`
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

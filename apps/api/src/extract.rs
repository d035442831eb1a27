//! Plain-text extraction from uploaded resume files.
//!
//! The analysis core only ever sees extracted UTF-8 text; file bytes and
//! content types stop here. Supported inputs: `.txt` (strict UTF-8) and
//! `.pdf` (via `pdf-extract`).

use bytes::Bytes;

use crate::errors::AppError;

/// One file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Text,
    Pdf,
}

/// Extracts plain text from an uploaded file, or fails with an
/// unsupported-media-type / extraction error.
pub fn extract_text(file: &UploadedFile) -> Result<String, AppError> {
    match file_kind(file) {
        Some(FileKind::Text) => String::from_utf8(file.data.to_vec()).map_err(|_| {
            AppError::Extraction(format!("File '{}' is not valid UTF-8 text", file.name))
        }),
        Some(FileKind::Pdf) => pdf_extract::extract_text_from_mem(&file.data).map_err(|e| {
            AppError::Extraction(format!("Could not extract text from '{}': {e}", file.name))
        }),
        None => Err(AppError::UnsupportedMediaType(format!(
            "File '{}' is neither .txt nor .pdf",
            file.name
        ))),
    }
}

/// Decides the file kind from the declared content type, falling back to the
/// filename extension when the client sent none (or a generic octet-stream).
fn file_kind(file: &UploadedFile) -> Option<FileKind> {
    match file.content_type.as_deref() {
        Some("text/plain") => return Some(FileKind::Text),
        Some("application/pdf") => return Some(FileKind::Pdf),
        Some("application/octet-stream") | None => {}
        Some(_) => return None,
    }

    let name = file.name.to_lowercase();
    if name.ends_with(".txt") {
        Some(FileKind::Text)
    } else if name.ends_with(".pdf") {
        Some(FileKind::Pdf)
    } else {
        None
    }
}

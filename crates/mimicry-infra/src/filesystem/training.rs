//! Training document loader.
//!
//! Enforces the input boundary before the trainer runs: allowed file types,
//! a size cap, UTF-8 decoding, and non-blank content. The trainer itself only
//! ever sees an in-memory string.

use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};

use mimicry_types::error::TrainingInputError;

/// Accepted file extensions and the MIME type each maps to.
const ALLOWED_TYPES: [(&str, &str); 5] = [
    ("txt", "text/plain"),
    ("log", "text/plain"),
    ("csv", "text/csv"),
    ("md", "text/markdown"),
    ("json", "application/json"),
];

/// Byte-order mark some chat exporters prepend.
const UTF8_BOM: &str = "\u{feff}";

/// MIME type for `path`, or `UnsupportedType` for anything else.
pub fn mime_for_path(path: &Path) -> Result<&'static str, TrainingInputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    ALLOWED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .ok_or_else(|| {
            TrainingInputError::UnsupportedType(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            )
        })
}

/// Read and validate a training file.
pub async fn load_training_file(path: &Path, limit: u64) -> Result<String, TrainingInputError> {
    let mime = mime_for_path(path)?;

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| TrainingInputError::ReadFailed(format!("{}: {e}", path.display())))?;
    if metadata.len() > limit {
        return Err(TrainingInputError::TooLarge {
            size: metadata.len(),
            limit,
        });
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| TrainingInputError::ReadFailed(format!("{}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "loaded training file");
    decode_training_bytes(bytes, limit)
}

/// Read a pasted conversation from stdin, up to `limit` bytes.
pub async fn read_training_stdin(limit: u64) -> Result<String, TrainingInputError> {
    read_training_from(tokio::io::stdin(), "stdin", limit).await
}

/// Read at most `limit + 1` bytes from `reader`, so an oversized stream is
/// reported as `TooLarge` without buffering all of it.
pub async fn read_training_from<R>(
    reader: R,
    label: &str,
    limit: u64,
) -> Result<String, TrainingInputError>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .await
        .map_err(|e| TrainingInputError::ReadFailed(format!("{label}: {e}")))?;

    decode_training_bytes(bytes, limit)
}

/// Check size, decode UTF-8, strip a leading BOM, and reject blank text.
pub fn decode_training_bytes(bytes: Vec<u8>, limit: u64) -> Result<String, TrainingInputError> {
    let size = bytes.len() as u64;
    if size > limit {
        return Err(TrainingInputError::TooLarge { size, limit });
    }

    let text = String::from_utf8(bytes)
        .map_err(|e| TrainingInputError::ReadFailed(format!("not valid UTF-8: {e}")))?;
    let text = match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    };

    if text.trim().is_empty() {
        return Err(TrainingInputError::Empty);
    }

    Ok(text)
}

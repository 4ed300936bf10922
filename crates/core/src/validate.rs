//! Validation helpers
//!
//! Pure functions checking local paths, object keys, and file types, plus
//! size formatting and MIME inference. Keys are validated before any request
//! is issued; everything else is best-effort.

use std::path::Path;

/// Characters that are rejected in object keys.
///
/// No length limit is enforced here, only the character set.
const DISALLOWED_KEY_CHARS: &[char] = &[
    '\\', '{', '}', '^', '%', '`', '[', ']', '"', '>', '<', '~', '#', '|',
];

/// Units for human-readable sizes, in 1024 steps
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

/// Extensions accepted by default when no allow-list is supplied
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".txt", ".pdf", ".doc", ".docx", ".jpg", ".jpeg", ".png", ".gif", ".csv", ".json", ".xml",
];

/// Check that a local path exists and is a regular file.
pub fn validate_file_path(path: &Path) -> bool {
    path.is_file()
}

/// Check that an object key is usable.
///
/// Empty and whitespace-only keys are rejected, as is any key containing a
/// disallowed character.
pub fn validate_s3_key(key: &str) -> bool {
    if key.trim().is_empty() {
        return false;
    }

    !key.chars().any(|c| DISALLOWED_KEY_CHARS.contains(&c))
}

/// Format a byte count as a human-readable size with two decimal places.
///
/// Divides by 1024 until the value fits the current unit; anything past TB
/// is expressed in PB.
pub fn format_file_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;

    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }

    format!("{size:.2} PB")
}

/// Check a file's extension against an allow-list.
///
/// Both sides are lowercased before comparison. Files without an extension
/// are rejected. Passing `None` uses [`DEFAULT_ALLOWED_EXTENSIONS`].
pub fn is_allowed_file_type(path: &Path, allowed_extensions: Option<&[&str]>) -> bool {
    let allowed = allowed_extensions.unwrap_or(DEFAULT_ALLOWED_EXTENSIONS);

    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_lowercase());

    allowed.iter().any(|a| a.to_lowercase() == ext)
}

/// Best-effort MIME type inference from the file name.
pub fn get_file_mime_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
}

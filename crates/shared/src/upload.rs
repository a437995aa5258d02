//! Upload filename rules.
//!
//! Uploaded images are accepted by extension only and written under a
//! sanitized name, so a client-supplied filename can never escape the
//! upload directory.

/// Extensions accepted for uploaded images (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Relative URL prefix stored in front of every uploaded filename.
pub const UPLOAD_URL_PREFIX: &str = "/media/uploads";

/// Width of the image path columns.
pub const MAX_IMAGE_PATH_LENGTH: usize = 255;

use unicode_normalization::UnicodeNormalization;

lazy_static::lazy_static! {
    static ref UNSAFE_FILENAME_CHARS: regex::Regex = regex::Regex::new(r"[^A-Za-z0-9_.-]").unwrap();
}

/// Returns true if the filename carries one of the allowed image extensions.
///
/// Only the part after the last `.` is considered, so `archive.tar.png`
/// passes and `png` (no dot) does not.
pub fn is_allowed_image(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        None => false,
    }
}

/// Reduces a client-supplied filename to a form that is safe to join onto
/// the upload directory.
///
/// The name is NFKD-decomposed and whatever is still non-ASCII is dropped
/// (`café` becomes `cafe`). Path separators become whitespace,
/// whitespace runs collapse to `_`, anything outside `[A-Za-z0-9_.-]` is
/// removed and leading/trailing `.`/`_` are trimmed. The result may be
/// empty, in which case the upload must be skipped.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Builds the relative path stored on a record for an uploaded file.
pub fn upload_path(filename: &str) -> String {
    format!("{}/{}", UPLOAD_URL_PREFIX, filename)
}

/// Returns true if the stored path for `filename` fits the image column.
pub fn fits_image_column(filename: &str) -> bool {
    upload_path(filename).len() <= MAX_IMAGE_PATH_LENGTH
}

//! MIME type to file extension mapping.
//!
//! c2patool picks the asset handler from the file extension, so staged
//! assets must carry one that matches their MIME type.

use crate::error::{NumbersC2paError, Result};

/// Resolve the file extension (without a dot) for a MIME type.
///
/// Parameters such as `; charset=...` are ignored and matching is
/// case-insensitive. Malformed or unknown types are rejected.
pub fn extension_for_mime(mime_type: &str) -> Result<&'static str> {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if !is_well_formed(&essence) {
        return Err(NumbersC2paError::UnsupportedMimeType(format!(
            "malformed MIME type: {mime_type:?}"
        )));
    }

    let extension = match essence.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/avif" => "avif",
        "image/heic" => "heic",
        "image/heif" => "heif",
        "image/tiff" => "tiff",
        "image/svg+xml" => "svg",
        "image/x-adobe-dng" => "dng",
        "video/mp4" => "mp4",
        "video/quicktime" => "mov",
        "video/x-msvideo" | "video/avi" => "avi",
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/mp4" | "audio/x-m4a" => "m4a",
        "audio/wav" | "audio/wave" | "audio/x-wav" | "audio/vnd.wave" => "wav",
        "application/pdf" => "pdf",
        _ => {
            return Err(NumbersC2paError::UnsupportedMimeType(format!(
                "no file extension known for {essence}"
            )))
        }
    };

    Ok(extension)
}

fn is_well_formed(essence: &str) -> bool {
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    let valid_token = |token: &str| {
        !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
    };
    valid_token(kind) && valid_token(subtype)
}

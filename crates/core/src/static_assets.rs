//! Cache policy for files served from the static directory.

use sha2::{Digest, Sha256};

/// One year, for content that never changes under the same name.
pub const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// One day, for stylesheets and scripts.
pub const CACHE_DAY: &str = "public, max-age=86400";

/// One hour, for everything else.
pub const CACHE_HOUR: &str = "public, max-age=3600";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
const FONT_EXTENSIONS: &[&str] = &["woff", "woff2", "ttf", "eot"];
const CODE_EXTENSIONS: &[&str] = &["css", "js"];

/// Image used when a tour has no card image.
pub const NO_IMAGE_PATH: &str = "/static/images/no-image.jpg";

fn extension(path: &str) -> Option<String> {
    let file = path.rsplit('/').next()?;
    let (_, ext) = file.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// `Cache-Control` value for a request path.
pub fn cache_control_for(path: &str) -> &'static str {
    match extension(path) {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => CACHE_IMMUTABLE,
        Some(ext) if FONT_EXTENSIONS.contains(&ext.as_str()) => CACHE_IMMUTABLE,
        Some(ext) if CODE_EXTENSIONS.contains(&ext.as_str()) => CACHE_DAY,
        _ => CACHE_HOUR,
    }
}

/// Strong `ETag` for a response body: the first 16 bytes of its SHA-256, quoted.
pub fn etag_for(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let hex: String = digest[..16].iter().map(|b| format!("{b:02x}")).collect();
    format!("\"{hex}\"")
}

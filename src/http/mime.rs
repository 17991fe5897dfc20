//! MIME type detection based on file extensions.

/// Returns the Content-Type for a file extension.
///
/// The table is closed; anything unrecognized is served as plain text.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "text/plain",
    }
}

//! Content-type table for bundled assets
//!
//! Binary classification and the extension-to-MIME mapping are fixed at
//! compile time; both key on the requested path, not the resolved file.

/// Suffixes served base64-encoded.
const BINARY_SUFFIXES: [&str; 8] = [
    ".gif", ".jpg", ".png", ".ico", ".ttf", ".woff", ".woff2", ".svg",
];

/// Whether the requested path names a binary asset.
pub fn is_binary_path(path: &str) -> bool {
    BINARY_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// MIME Content-Type for a file extension.
///
/// Unknown extensions get no explicit type; the platform serves the body
/// without a Content-Type header in that case.
pub fn content_type_for(extension: Option<&str>) -> Option<&'static str> {
    match extension {
        Some("gif") => Some("image/gif"),
        Some("jpg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("ico") => Some("image/vnd.microsoft.icon"),
        Some("ttf") => Some("font/ttf"),
        Some("woff") => Some("font/woff"),
        Some("woff2") => Some("font/woff2"),
        Some("svg") => Some("image/svg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_classification() {
        assert!(is_binary_path("/logo.png"));
        assert!(is_binary_path("/fonts/main.woff2"));
        assert!(is_binary_path("/favicon.ico"));
        assert!(!is_binary_path("/index.html"));
        assert!(!is_binary_path("/style.css"));
        assert!(!is_binary_path("/app.js"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Some("png")), Some("image/png"));
        assert_eq!(content_type_for(Some("jpg")), Some("image/jpeg"));
        assert_eq!(content_type_for(Some("woff2")), Some("font/woff2"));
        assert_eq!(content_type_for(Some("svg")), Some("image/svg"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Some("xyz")), None);
        assert_eq!(content_type_for(None), None);
    }
}

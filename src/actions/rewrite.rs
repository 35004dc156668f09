//! Web base-path rewriting
//!
//! Bundled HTML references assets with root-relative paths (`src="/x"`).
//! Deployed behind the platform gateway the page lives under
//! `/api/v1/web/<namespace>/<package>/<action>/`, so those references are
//! rewritten to resolve there.

/// Compute the public web prefix for a fully-qualified action name.
///
/// Names look like `namespace/package/action`; a two-segment name lives in
/// the platform's implicit `default` package. A leading slash is tolerated.
///
/// # Examples
/// ```
/// assert_eq!(web_prefix("ns/pkg/act"), "/api/v1/web/ns/pkg/act/");
/// assert_eq!(web_prefix("ns/act"), "/api/v1/web/ns/default/act/");
/// ```
pub fn web_prefix(action_name: &str) -> String {
    let mut segments: Vec<&str> = action_name.trim_start_matches('/').split('/').collect();
    if segments.len() == 2 {
        segments.insert(1, "default");
    }
    format!("/api/v1/web/{}/", segments.join("/"))
}

/// Replace the leading `/` of every root-relative `src=`/`href=` attribute
/// value with `prefix`.
///
/// This is an explicit scanner rather than a lookbehind regex: a value is
/// rewritten only when it immediately follows the attribute name, `=`, and
/// a single or double quote, and begins with `/`. Scheme-qualified values
/// (`src="http://..."`) are left untouched.
pub fn rewrite_base(html: &str, prefix: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;

    while i < html.len() {
        let rest = &html[i..];
        let attr_len = if rest.starts_with("src=") {
            4
        } else if rest.starts_with("href=") {
            5
        } else {
            0
        };

        if attr_len > 0 && i + attr_len + 1 < bytes.len() {
            let quote = bytes[i + attr_len];
            if (quote == b'"' || quote == b'\'') && bytes[i + attr_len + 1] == b'/' {
                // Keep the attribute name, `=`, and the quote; swap the
                // leading slash for the prefix (which ends in `/`).
                out.push_str(&html[i..i + attr_len + 1]);
                out.push_str(prefix);
                i += attr_len + 2;
                continue;
            }
        }

        if let Some(ch) = rest.chars().next() {
            out.push(ch);
            i += ch.len_utf8();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_three_segments() {
        assert_eq!(web_prefix("ns/pkg/act"), "/api/v1/web/ns/pkg/act/");
    }

    #[test]
    fn test_prefix_default_package_insertion() {
        assert_eq!(web_prefix("ns/act"), "/api/v1/web/ns/default/act/");
    }

    #[test]
    fn test_prefix_leading_slash_normalized() {
        assert_eq!(web_prefix("/ns/act"), "/api/v1/web/ns/default/act/");
        assert_eq!(web_prefix("/ns/pkg/act"), "/api/v1/web/ns/pkg/act/");
    }

    #[test]
    fn test_rewrite_double_quotes() {
        let html = r#"<img src="/logo.png"><a href="/about.html">about</a>"#;
        let out = rewrite_base(html, "/api/v1/web/ns/pkg/act/");
        assert_eq!(
            out,
            r#"<img src="/api/v1/web/ns/pkg/act/logo.png"><a href="/api/v1/web/ns/pkg/act/about.html">about</a>"#
        );
    }

    #[test]
    fn test_rewrite_single_quotes() {
        let html = "<link href='/css/site.css'>";
        let out = rewrite_base(html, "/p/");
        assert_eq!(out, "<link href='/p/css/site.css'>");
    }

    #[test]
    fn test_absolute_urls_untouched() {
        let html = r#"<script src="http://cdn.example.com/a.js"></script>"#;
        assert_eq!(rewrite_base(html, "/p/"), html);
    }

    #[test]
    fn test_protocol_relative_untouched() {
        // `//host/...` starts with `/` and gets the prefix like any other
        // root-relative value; but an unquoted or scheme value does not.
        let html = r#"href=/bare.css and src=nothing"#;
        assert_eq!(rewrite_base(html, "/p/"), html);
    }

    #[test]
    fn test_rewrite_at_start_and_end() {
        assert_eq!(rewrite_base(r#"src="/a""#, "/p/"), r#"src="/p/a""#);
        assert_eq!(rewrite_base(r#"x src="/"#, "/p/"), r#"x src="/p/"#);
    }

    #[test]
    fn test_non_ascii_content_preserved() {
        let html = "<p>héllo</p><img src=\"/ø.png\">";
        let out = rewrite_base(html, "/p/");
        assert_eq!(out, "<p>héllo</p><img src=\"/p/ø.png\">");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(rewrite_base("", "/p/"), "");
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

// Local part must start with a letter; domain needs at least one dot.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9._-]*@[a-zA-Z0-9._-]+\.[a-zA-Z]+").unwrap());

/// Collect the raw href strings of all anchor elements in the document.
///
/// Hrefs are whitespace-trimmed; empty and fragment-only targets are
/// excluded here already since they can never become crawl candidates.
/// Duplicates collapse via set semantics.
pub fn extract_links(document: &Html) -> HashSet<String> {
    let mut links = HashSet::new();

    for element in document.select(&LINK_SELECTOR) {
        if let Some(href) = element.value().attr("href") {
            let href = href.trim();
            if href.is_empty() || href.starts_with('#') {
                continue;
            }
            links.insert(href.to_string());
        }
    }

    links
}

/// Scan the rendered body text for email addresses.
///
/// Matches are lower-cased before insertion. A document without a body
/// yields the empty set. No validation happens beyond the syntactic shape.
pub fn extract_emails(document: &Html) -> HashSet<String> {
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return HashSet::new();
    };

    let text = body.text().collect::<Vec<_>>().join(" ");

    EMAIL_PATTERN
        .find_iter(&text)
        .map(|m| m.as_str().trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_anchor_hrefs() {
        let doc = Html::parse_document(
            r#"<html><body>
                <a href="/about">About</a>
                <a href="http://x.com/contact">Contact</a>
                <a>No href</a>
            </body></html>"#,
        );
        let links = extract_links(&doc);
        assert_eq!(links.len(), 2);
        assert!(links.contains("/about"));
        assert!(links.contains("http://x.com/contact"));
    }

    #[test]
    fn test_fragment_only_hrefs_are_excluded() {
        let doc = Html::parse_document(
            r##"<html><body><a href="#top">Top</a><a href="/real">Real</a></body></html>"##,
        );
        let links = extract_links(&doc);
        assert_eq!(links.len(), 1);
        assert!(links.contains("/real"));
    }

    #[test]
    fn test_duplicate_hrefs_collapse() {
        let doc = Html::parse_document(
            r#"<html><body><a href="/a">one</a><a href="/a">two</a><a href=" /a ">three</a></body></html>"#,
        );
        assert_eq!(extract_links(&doc).len(), 1);
    }

    #[test]
    fn test_extracts_email_from_body_text() {
        let doc = Html::parse_document(
            "<html><body><p>reach me at a.b-c@sub.example.co.uk now</p></body></html>",
        );
        let emails = extract_emails(&doc);
        assert_eq!(emails.len(), 1);
        assert!(emails.contains("a.b-c@sub.example.co.uk"));
    }

    #[test]
    fn test_emails_are_lowercased() {
        let doc = Html::parse_document("<html><body>Sales@Example.COM</body></html>");
        let emails = extract_emails(&doc);
        assert!(emails.contains("sales@example.com"));
    }

    #[test]
    fn test_non_emails_are_ignored() {
        let doc = Html::parse_document("<html><body>@bad.com and no-at-sign.com</body></html>");
        assert!(extract_emails(&doc).is_empty());
    }

    #[test]
    fn test_email_needs_dotted_domain() {
        let doc = Html::parse_document("<html><body>root@localhost</body></html>");
        assert!(extract_emails(&doc).is_empty());
    }

    #[test]
    fn test_markup_outside_body_is_not_scanned() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="author" content="hidden@example.com"></head><body>plain text</body></html>"#,
        );
        assert!(extract_emails(&doc).is_empty());
    }

    #[test]
    fn test_multiple_emails_dedup_within_page() {
        let doc = Html::parse_document(
            "<html><body>a@x.com b@x.com <span>a@x.com</span></body></html>",
        );
        assert_eq!(extract_emails(&doc).len(), 2);
    }
}

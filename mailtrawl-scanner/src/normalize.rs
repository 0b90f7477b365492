use url::Url;

/// Resolve a raw anchor href into a crawl candidate.
///
/// Fragment-only hrefs never become targets. Absolute hrefs pass through
/// untouched; same-host scoping is the caller's job. Path-only hrefs are
/// resolved against the *seed* URL's scheme and authority rather than the
/// page they were found on, with the path rooted at `/`. The href's own
/// query and fragment survive resolution.
///
/// Anything that fails to parse into a URL structure is dropped silently.
pub fn resolve_href(href: &str, seed: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            if href.starts_with('/') {
                seed.join(href).ok()
            } else {
                seed.join(&format!("/{href}")).ok()
            }
        }
        Err(_) => None,
    }
}

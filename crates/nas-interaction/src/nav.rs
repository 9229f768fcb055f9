//! Current-page highlighting for navigation links.

use nas_types::PageId;

/// Last path segment of `pathname`, or `default_page` for a directory path.
pub fn current_page(pathname: &str, default_page: &str) -> PageId {
    let last = pathname.rsplit('/').next().unwrap_or_default();
    if last.is_empty() {
        PageId(default_page.to_owned())
    } else {
        PageId(last.to_owned())
    }
}

fn normalize<'a>(href: &'a str, default_page: &'a str) -> &'a str {
    match href {
        "" | "/" | "./" => default_page,
        other => other,
    }
}

/// Exact match only; links without an `href` never match.
pub fn is_active(href: Option<&str>, current: &PageId, default_page: &str) -> bool {
    href.is_some_and(|href| normalize(href, default_page) == current.0)
}

/// One flag per link, in order.
pub fn active_flags<'a, I>(hrefs: I, pathname: &str, default_page: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let current = current_page(pathname, default_page);
    hrefs
        .into_iter()
        .map(|href| is_active(href, &current, default_page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "index.html";

    #[test]
    fn root_path_means_index() {
        assert_eq!(current_page("/", DEFAULT).0, "index.html");
        assert_eq!(current_page("", DEFAULT).0, "index.html");
        assert_eq!(current_page("/site/", DEFAULT).0, "index.html");
        assert_eq!(current_page("/site/gallery.html", DEFAULT).0, "gallery.html");
    }

    #[test]
    fn exactly_the_matching_link_is_active() {
        let hrefs = [Some("index.html"), Some("services.html"), Some("gallery.html"), None];
        let flags = active_flags(hrefs, "/gallery.html", DEFAULT);
        assert_eq!(flags, vec![false, false, true, false]);
    }

    #[test]
    fn empty_href_counts_as_index() {
        let flags = active_flags([Some(""), Some("contact.html")], "/", DEFAULT);
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn unknown_page_highlights_nothing() {
        let flags = active_flags([Some("index.html"), Some("services.html")], "/booking.html", DEFAULT);
        assert!(flags.iter().all(|flag| !flag));
    }

    #[test]
    fn no_prefix_matching() {
        let current = current_page("/gallery.html", DEFAULT);
        assert!(!is_active(Some("gallery"), &current, DEFAULT));
        assert!(!is_active(Some("#gallery"), &current, DEFAULT));
    }
}

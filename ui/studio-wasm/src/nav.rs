//! Highlights the navigation link for the current page.

use crate::config::CONFIG;
use crate::dom;
use crate::state::Site;
use nas_interaction::nav::active_flags;
use tracing::debug;

pub fn setup(site: &Site) {
    let links = &site.els.nav_links;
    if links.is_empty() {
        return;
    }
    let pathname = dom::window().location().pathname().unwrap_or_default();
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let flags = active_flags(hrefs.iter().map(Option::as_deref), &pathname, &CONFIG.default_page);

    for (link, active) in links.iter().zip(flags) {
        dom::toggle_class(link, "active", active);
    }
    debug!(%pathname, "nav links marked");
}

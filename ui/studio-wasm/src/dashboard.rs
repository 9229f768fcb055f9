//! Admin dashboard: sidebar pages, chart placeholders, user table and
//! appointment status controls.

use crate::dom;
use crate::events::listen;
use crate::notify;
use crate::state::Site;
use nas_interaction::dashboard::{
    CHART_CAPTION, CHART_STYLE, DashboardTabs, LOADING_PLACEHOLDER, ROW_HOVER_BACKGROUND, STATUS_UPDATED_MESSAGE,
    badge_class,
};
use nas_interaction::submission::FAILURE_MESSAGE;
use nas_types::{AppointmentStatus, Severity};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

// ── Sidebar ──

fn load_page(site: &Site, tabs: &Rc<RefCell<DashboardTabs>>, page: String) {
    let Some(main) = dom::query(".dashboard-main") else {
        return;
    };
    main.set_inner_html(LOADING_PLACEHOLDER);

    let source = site.backends.dashboard();
    let tabs = tabs.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = source.load_page(&page).await;
        if !tabs.borrow().is_active(&page) {
            debug!(%page, "dashboard page superseded");
            return;
        }
        match result {
            Ok(content) => {
                if let Some(html) = content.html {
                    main.set_inner_html(&html);
                }
            }
            Err(err) => {
                warn!("loading dashboard page {page} failed: {err}");
                notify::show(FAILURE_MESSAGE, Severity::Error);
            }
        }
    });
}

fn setup_sidebar(site: &Site) {
    let links = dom::query_all(".sidebar-menu a");
    let tabs = Rc::new(RefCell::new(DashboardTabs::default()));

    for link in &links {
        let site = site.clone();
        let tabs = tabs.clone();
        let all = links.clone();
        let clicked = link.clone();
        listen(link, "click", move |e| {
            e.prevent_default();
            for other in &all {
                dom::toggle_class(other, "active", other == &clicked);
            }
            let page = clicked.get_attribute("data-page").unwrap_or_default();
            let page = tabs.borrow_mut().select(&page).to_owned();
            load_page(&site, &tabs, page);
        });
    }
}

// ── Widgets ──

fn setup_charts() {
    for chart in dom::query_all(".chart-container") {
        dom::set_styles(&chart, &CHART_STYLE);
        chart.set_inner_html(CHART_CAPTION);
    }
}

fn setup_user_rows() {
    let Some(table) = dom::query(".users-table") else {
        return;
    };
    for row in dom::query_all_within(&table, "tbody tr") {
        let enter = row.clone();
        listen(&row, "mouseenter", move |_| dom::set_style(&enter, "background-color", ROW_HOVER_BACKGROUND));
        let leave = row.clone();
        listen(&row, "mouseleave", move |_| dom::set_style(&leave, "background-color", ""));
    }
}

fn update_status(card: &Element, value: &str) {
    let Some(badge) = dom::query_within(card, ".status-badge") else {
        warn!("appointment card has no status badge");
        return;
    };
    let status = AppointmentStatus::from_value(value);
    badge.set_class_name(&badge_class(&status));
    dom::set_style(&badge, "background", status.badge_color());
    info!(status = status.as_str(), "appointment status changed");
    notify::show(STATUS_UPDATED_MESSAGE, Severity::Success);
}

fn setup_appointments() {
    for card in dom::query_all(".appointment-card") {
        let Some(select) = dom::query_within(&card, ".status-select")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        else {
            continue;
        };
        let select2 = select.clone();
        listen(&select, "change", move |_| update_status(&card, &select2.value()));
    }
}

/// Bind the dashboard. Later calls are no-ops.
pub fn setup(site: &Site) {
    if !site.claim_dashboard() {
        debug!("dashboard already bound");
        return;
    }
    setup_sidebar(site);
    setup_charts();
    setup_user_rows();
    setup_appointments();
}

//! Application state.
//!
//! The [`Site`] controller is built once at startup and cloned into every
//! event closure. A copy is parked in a `thread_local!` (WASM is
//! single-threaded) so the exported JS functions can reach it.

use crate::backend;
use crate::config::CONFIG;
use crate::dom::Elements;
use anyhow::{Result, anyhow};
use nas_backend::BackendRegistry;
use nas_prefs::{PreferenceStore, ThemeStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ── localStorage ──

fn storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| anyhow!("no window"))?
        .local_storage()
        .map_err(|err| anyhow!("localStorage blocked: {err:?}"))?
        .ok_or_else(|| anyhow!("localStorage unavailable"))
}

/// `localStorage`, storing values as bare strings.
#[derive(Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|err| anyhow!("read {key}: {err:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        storage()?
            .set_item(key, value)
            .map_err(|err| anyhow!("write {key}: {err:?}"))
    }
}

// ── Site controller ──

#[derive(Clone)]
pub struct Site {
    pub els: Elements,
    pub backends: BackendRegistry,
    pub themes: Rc<ThemeStore<LocalPreferences>>,
    booking_bound: Rc<Cell<bool>>,
    dashboard_bound: Rc<Cell<bool>>,
}

impl Site {
    pub fn new(els: Elements) -> Self {
        Self {
            els,
            backends: backend::site_backends(),
            themes: Rc::new(ThemeStore::with_key(LocalPreferences, &CONFIG.theme_storage_key)),
            booking_bound: Rc::new(Cell::new(false)),
            dashboard_bound: Rc::new(Cell::new(false)),
        }
    }

    /// `true` the first time only; later calls must not bind listeners again.
    pub fn claim_booking(&self) -> bool {
        !self.booking_bound.replace(true)
    }

    pub fn claim_dashboard(&self) -> bool {
        !self.dashboard_bound.replace(true)
    }
}

// ── Thread-local singleton ──

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

pub fn install(site: Site) {
    SITE.with(|s| *s.borrow_mut() = Some(site));
}

pub fn current() -> Option<Site> {
    SITE.with(|s| s.borrow().clone())
}

use anyhow::Result;
use nas_types::Theme;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const DEFAULT_THEME_KEY: &str = "theme";

/// Durable per-origin key/value store. In the browser this is `localStorage`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Default)]
pub struct NoopPreferenceStore;

impl PreferenceStore for NoopPreferenceStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Light/dark preference on top of a [`PreferenceStore`].
///
/// When the backing store fails the preference silently degrades to a
/// session-only value held here.
pub struct ThemeStore<P> {
    store: P,
    key: String,
    session: Cell<Option<Theme>>,
}

impl<P: PreferenceStore> ThemeStore<P> {
    pub fn new(store: P) -> Self {
        Self::with_key(store, DEFAULT_THEME_KEY)
    }

    pub fn with_key(store: P, key: &str) -> Self {
        Self {
            store,
            key: key.to_owned(),
            session: Cell::new(None),
        }
    }

    /// The value recorded this session wins over storage, so a store that
    /// reads but cannot write never resurrects a stale preference.
    pub fn get_theme(&self) -> Theme {
        if let Some(theme) = self.session.get() {
            return theme;
        }
        match self.store.get(&self.key) {
            Ok(Some(raw)) => Theme::from_stored(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!("theme preference unreadable, using default: {err:#}");
                Theme::default()
            }
        }
    }

    /// Records `theme`; returns `true` when it differs from the previous value.
    pub fn set_theme(&self, theme: Theme) -> bool {
        let previous = self.get_theme();
        self.session.set(Some(theme));
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            warn!("theme preference not persisted, keeping it for this session: {err:#}");
        }
        debug!(from = %previous, to = %theme, "theme set");
        previous != theme
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get_theme().toggled();
        self.set_theme(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("storage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    #[test]
    fn defaults_to_light_when_nothing_persisted() {
        let themes = ThemeStore::new(InMemoryPreferenceStore::default());
        assert_eq!(themes.get_theme(), Theme::Light);
    }

    #[test]
    fn persists_under_the_theme_key() -> Result<()> {
        let themes = ThemeStore::new(InMemoryPreferenceStore::default());
        assert!(themes.set_theme(Theme::Dark));
        assert_eq!(themes.store.get("theme")?, Some("dark".to_owned()));
        assert_eq!(themes.get_theme(), Theme::Dark);
        Ok(())
    }

    #[test]
    fn setting_the_same_theme_reports_no_change() {
        let themes = ThemeStore::new(InMemoryPreferenceStore::default());
        assert!(!themes.set_theme(Theme::Light));
        assert!(themes.set_theme(Theme::Dark));
        assert!(!themes.set_theme(Theme::Dark));
    }

    #[test]
    fn toggle_sequence_matches_persisted_value() -> Result<()> {
        let themes = ThemeStore::new(InMemoryPreferenceStore::default());
        for _ in 0..5 {
            let shown = themes.toggle();
            let stored = themes.store.get("theme")?.as_deref().and_then(Theme::from_stored);
            assert_eq!(stored, Some(shown));
        }
        Ok(())
    }

    #[test]
    fn garbage_in_storage_reads_as_light() -> Result<()> {
        let store = InMemoryPreferenceStore::default();
        store.set("theme", "purple")?;
        let themes = ThemeStore::new(store);
        assert_eq!(themes.get_theme(), Theme::Light);
        Ok(())
    }

    #[test]
    fn broken_storage_degrades_to_session_only() {
        let themes = ThemeStore::new(BrokenStore);
        assert_eq!(themes.get_theme(), Theme::Light);
        assert!(themes.set_theme(Theme::Dark));
        assert_eq!(themes.get_theme(), Theme::Dark);
        assert_eq!(themes.toggle(), Theme::Light);
    }

    struct ReadOnlyStore(&'static str);

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(Some(self.0.to_owned()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("QuotaExceededError"))
        }
    }

    #[test]
    fn failed_writes_do_not_pin_the_stored_theme() {
        let themes = ThemeStore::new(ReadOnlyStore("light"));
        assert_eq!(themes.get_theme(), Theme::Light);
        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(themes.toggle(), Theme::Light);
        assert_eq!(themes.get_theme(), Theme::Light);
        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(themes.get_theme(), Theme::Dark);
    }

    #[test]
    fn noop_store_keeps_session_value() {
        let themes = ThemeStore::new(NoopPreferenceStore);
        themes.set_theme(Theme::Dark);
        assert_eq!(themes.get_theme(), Theme::Dark);
    }
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't write to storage: {0}")]
    Write(String),
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Preference store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(Theme) + Send + Sync>;

/// The page-wide light/dark flag.
///
/// The stored preference wins over the system preference, which wins over
/// [`Theme::Light`]. Every toggle is written back to the store; a failing store
/// is logged and otherwise ignored, so the in-memory value is always the
/// source of truth.
pub struct ThemeState {
    theme: Theme,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    restored: bool,
    toggled: bool,
}

impl ThemeState {
    pub fn new(store: Box<dyn PreferenceStore>, system_prefers_dark: Option<bool>) -> Self {
        let theme = Self::initial_theme(store.as_ref(), system_prefers_dark);
        Self {
            theme,
            store,
            subscribers: Vec::new(),
            next_id: 0,
            restored: false,
            toggled: false,
        }
    }

    fn initial_theme(store: &dyn PreferenceStore, system_prefers_dark: Option<bool>) -> Theme {
        let stored = store
            .load(THEME_STORAGE_KEY)
            .and_then(|s| match s.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("ignoring stored theme preference: {e}");
                    None
                }
            });
        match (stored, system_prefers_dark) {
            (Some(theme), _) => theme,
            (None, Some(true)) => Theme::Dark,
            (None, _) => Theme::Light,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, persists it and notifies subscribers.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.toggled = true;
        self.persist();
        self.notify();
        self.theme
    }

    /// Moves to a different backing store and re-reads the preference from it.
    ///
    /// Takes effect once; later calls are ignored and return `false`, so the
    /// theme never follows the system preference after startup. If the theme
    /// was already toggled, that choice is kept and written to the new store.
    /// Subscribers only hear about it when the effective theme changes.
    pub fn restore(
        &mut self,
        store: Box<dyn PreferenceStore>,
        system_prefers_dark: Option<bool>,
    ) -> bool {
        if self.restored {
            log::debug!("theme store already attached, ignoring restore");
            return false;
        }
        self.restored = true;
        self.store = store;
        if self.toggled {
            self.persist();
            return true;
        }
        let theme = Self::initial_theme(self.store.as_ref(), system_prefers_dark);
        if theme != self.theme {
            self.theme = theme;
            self.notify();
        }
        true
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, self.theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    fn notify(&self) {
        for (_, subscriber) in &self.subscribers {
            subscriber(self.theme);
        }
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("theme", &self.theme)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    /// Shares its map with the test so persisted values can be inspected.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<MemoryStore>);

    impl PreferenceStore for SharedStore {
        fn load(&self, key: &str) -> Option<String> {
            self.0.load(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.save(key, value)
        }
    }

    #[test]
    fn test_theme_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_initial_theme_defaults_to_light() {
        let state = ThemeState::new(Box::new(MemoryStore::new()), None);
        assert_eq!(state.theme(), Theme::Light);
        let state = ThemeState::new(Box::new(MemoryStore::new()), Some(false));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_initial_theme_uses_system_preference() {
        let state = ThemeState::new(Box::new(MemoryStore::new()), Some(true));
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        let store = MemoryStore::with_value(THEME_STORAGE_KEY, "light");
        let state = ThemeState::new(Box::new(store), Some(true));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_stored_value_is_ignored() {
        let store = MemoryStore::with_value(THEME_STORAGE_KEY, "purple");
        let state = ThemeState::new(Box::new(store), Some(true));
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_is_identity_and_persists() {
        let store = SharedStore::default();
        let mut state = ThemeState::new(Box::new(store.clone()), None);
        let original = state.theme();

        let first = state.toggle();
        assert_eq!(first, original.toggled());
        assert_eq!(store.load(THEME_STORAGE_KEY), Some(first.to_string()));

        let second = state.toggle();
        assert_eq!(second, original);
        assert_eq!(store.load(THEME_STORAGE_KEY), Some(second.to_string()));
    }

    #[test]
    fn test_storage_failure_keeps_in_memory_theme() {
        let mut state = ThemeState::new(Box::new(BrokenStore), None);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_subscribers_are_notified_until_unsubscribed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut state = ThemeState::new(Box::new(MemoryStore::new()), None);
        let id = {
            let calls = calls.clone();
            state.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        state.toggle();
        state.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_restore_notifies_only_on_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = |state: &mut ThemeState| {
            let calls = calls.clone();
            state.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        };

        let mut state = ThemeState::new(Box::new(MemoryStore::new()), None);
        counting(&mut state);
        assert!(state.restore(Box::new(MemoryStore::new()), Some(false)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let mut state = ThemeState::new(Box::new(MemoryStore::new()), None);
        counting(&mut state);
        let stored = MemoryStore::with_value(THEME_STORAGE_KEY, "dark");
        assert!(state.restore(Box::new(stored), None));
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_system_change_after_restore_is_ignored() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()), Some(false));
        assert!(state.restore(Box::new(MemoryStore::new()), Some(false)));

        assert!(!state.restore(Box::new(MemoryStore::new()), Some(true)));
        assert_eq!(state.theme(), Theme::Light);

        state.toggle();
        assert!(!state.restore(Box::new(MemoryStore::new()), Some(false)));
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_before_restore_is_kept_and_persisted() {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()), None);
        state.toggle();

        let browser = SharedStore::default();
        browser.save(THEME_STORAGE_KEY, "light").unwrap();
        assert!(state.restore(Box::new(browser.clone()), Some(false)));
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(browser.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }
}

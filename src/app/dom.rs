use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::theme::Theme;

#[cfg(feature = "hydrate")]
pub use storage::BrowserStorage;

/// Class on `<html>` that the `dark:` styles key off.
const DARK_CLASS: &str = "dark";

pub fn apply_root_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't apply {theme} theme: {e:?}");
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("no section with id '{id}'");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// `prefers-color-scheme`, read once; `None` when the browser can't say.
#[cfg(feature = "hydrate")]
pub fn system_prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
}

#[cfg(feature = "hydrate")]
mod storage {
    use crate::theme::{PreferenceStore, StorageError};

    /// `window.localStorage`. Private browsing modes may refuse access, in
    /// which case loads come back empty and saves report the error.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)
        }
    }

    impl PreferenceStore for BrowserStorage {
        fn load(&self, key: &str) -> Option<String> {
            Self::storage().ok()?.get_item(key).ok().flatten()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
    }
}

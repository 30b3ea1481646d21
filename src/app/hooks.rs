use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::reveal::{Reveal, RevealLatch, RevealPhase, REVEAL_THRESHOLD};
use crate::scroll::scroll_to_top_visible;
use crate::theme::{MemoryStore, PreferenceStore, Theme, ThemeState};

/// Page-wide theme, provided by the page shell.
///
/// Renders with an in-memory store until the browser store is attached with
/// [`ThemeContext::restore`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    state: StoredValue<ThemeState>,
}

impl ThemeContext {
    pub fn new() -> Self {
        let mut state = ThemeState::new(Box::new(MemoryStore::new()), None);
        let theme = RwSignal::new(state.theme());
        state.subscribe(move |t| theme.set(t));
        Self {
            theme,
            state: StoredValue::new(state),
        }
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn toggle(&self) {
        self.state.update_value(|s| {
            let theme = s.toggle();
            log::debug!("theme switched to {theme}");
        });
    }

    pub fn restore(&self, store: Box<dyn PreferenceStore>, system_prefers_dark: Option<bool>) {
        self.state.update_value(|s| {
            s.restore(store, system_prefers_dark);
        });
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Window scroll offset, tracked for as long as the page shell is mounted.
#[derive(Debug, Clone, Copy)]
pub struct ScrollContext {
    offset: Signal<f64>,
}

impl ScrollContext {
    pub fn new() -> Self {
        let (_, y) = use_window_scroll();
        Self { offset: y }
    }

    pub fn show_scroll_to_top(&self) -> Signal<bool> {
        let offset = self.offset;
        Signal::derive(move || scroll_to_top_visible(offset.get()))
    }
}

impl Default for ScrollContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_scroll() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// Fade-in state for a page section.
///
/// Stays [`RevealPhase::Unobserved`] (visible) until the observer reports, so
/// server-rendered markup is readable without the wasm bundle. Revealed the
/// first time at least [`REVEAL_THRESHOLD`] of the section is on screen, then
/// the observer is disconnected. Browsers without `IntersectionObserver` get
/// the section shown straight away.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<RevealPhase> {
    let (phase, set_phase) = signal(RevealPhase::Unobserved);
    let latch = StoredValue::new(RevealLatch::new(REVEAL_THRESHOLD));

    let UseIntersectionObserverReturn { is_supported, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            for entry in entries {
                let Some((reveal, current)) = latch.try_update_value(|l| {
                    let reveal = l.observe(entry.is_intersecting(), entry.intersection_ratio());
                    (reveal, l.phase())
                }) else {
                    return;
                };
                set_phase.set(current);
                if reveal == Reveal::Revealed {
                    observer.disconnect();
                    return;
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        if is_supported.get() {
            return;
        }
        if latch.try_update_value(|l| l.fail_open()) == Some(Reveal::Revealed) {
            log::warn!("IntersectionObserver unavailable, showing section straight away");
            set_phase.set(RevealPhase::Revealed);
        }
    });

    phase.into()
}

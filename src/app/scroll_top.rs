use leptos::prelude::*;

use super::dom::scroll_to_top;
use super::hooks::use_scroll;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = use_scroll().show_scroll_to_top();

    view! {
        <button
            on:click=move |_| scroll_to_top()
            class=move || {
                format!(
                    "fixed bottom-6 right-6 w-11 h-11 bg-blue-600 text-white rounded-full shadow-lg hover:bg-blue-700 transition-all transform {}",
                    if visible.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    },
                )
            }
            aria-label="Scroll to top"
        >
            "↑"
        </button>
    }
}

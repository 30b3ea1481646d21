use leptos::{ev::MouseEvent, prelude::*};

use crate::content::Profile;

use super::dom::scroll_to_section;
use super::hooks::use_theme;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn Header(profile: &'static Profile) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_link = move |id: &'static str, label: &'static str, class: &'static str| {
        view! {
            <a
                href=format!("#{id}")
                class=class
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    set_menu_open.set(false);
                    scroll_to_section(id);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur shadow-sm transition-colors">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-xl font-bold text-blue-600 dark:text-blue-400"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section("home");
                    }
                >
                    {profile.name.clone()}
                </a>
                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(id, label)| nav_link(
                            id,
                            label,
                            "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors",
                        ))
                        .collect_view()}
                    <ThemeToggle />
                </nav>
                <div class="flex md:hidden items-center space-x-4">
                    <ThemeToggle />
                    <button
                        class="text-gray-700 dark:text-gray-300 text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col px-4 pb-4 space-y-3 bg-white dark:bg-gray-900">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(id, label)| nav_link(
                            id,
                            label,
                            "py-2 text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400",
                        ))
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let current = theme.theme();

    view! {
        <button
            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-yellow-300 hover:scale-110 transition-transform"
            title="Toggle theme"
            aria-label=move || {
                if current.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| theme.toggle()
        >
            {move || if current.get().is_dark() { "\u{2600}" } else { "\u{263E}" }}
        </button>
    }
}

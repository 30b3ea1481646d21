use leptos::{ev::MouseEvent, html, prelude::*};

use crate::content::Profile;
use crate::reveal::reveal_class;

use super::dom::scroll_to_section;
use super::hooks::use_reveal;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let phase = use_reveal(section_ref);

    let jump_to = |id: &'static str| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            scroll_to_section(id);
        }
    };

    view! {
        <section
            id="home"
            node_ref=section_ref
            class=move || {
                format!(
                    "min-h-screen flex flex-col items-center justify-center relative pt-16 pb-8 transition-opacity duration-1000 {}",
                    reveal_class(phase.get()),
                )
            }
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-20 left-1/4 w-64 h-64 bg-blue-300 dark:bg-blue-900 rounded-full mix-blend-multiply dark:mix-blend-soft-light filter blur-3xl opacity-20 animate-blob"></div>
                <div class="absolute top-40 right-1/4 w-72 h-72 bg-purple-300 dark:bg-purple-900 rounded-full mix-blend-multiply dark:mix-blend-soft-light filter blur-3xl opacity-20 animate-blob animation-delay-2000"></div>
                <div class="absolute bottom-40 left-1/3 w-80 h-80 bg-indigo-300 dark:bg-indigo-900 rounded-full mix-blend-multiply dark:mix-blend-soft-light filter blur-3xl opacity-20 animate-blob animation-delay-4000"></div>
            </div>

            <div class="container mx-auto px-4 z-10 flex flex-col items-center text-center">
                <div class="w-40 h-40 sm:w-48 sm:h-48 rounded-full mb-8 overflow-hidden border-4 border-white dark:border-gray-800 shadow-lg">
                    <img
                        src=profile.avatar_url.clone()
                        alt=profile.name.clone()
                        class="w-full h-full object-cover"
                    />
                </div>

                <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-4 tracking-tight bg-gradient-to-r from-blue-600 to-purple-600 dark:from-blue-400 dark:to-purple-400 bg-clip-text text-transparent">
                    {profile.name.clone()}
                </h1>
                <p class="text-xl sm:text-2xl text-gray-600 dark:text-gray-400 mb-8 max-w-2xl">
                    {profile.title.clone()}
                </p>

                <div class="flex space-x-6 mb-12 text-3xl">
                    <a
                        href=profile.linkedin.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href=profile.github.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                </div>

                <div class="flex flex-col sm:flex-row gap-4">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-full transition-colors shadow-md hover:shadow-lg font-medium"
                        on:click=jump_to("projects")
                    >
                        "View Projects"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 bg-transparent border-2 border-blue-600 dark:border-blue-500 text-blue-600 dark:text-blue-500 hover:bg-blue-50 dark:hover:bg-gray-800 rounded-full transition-colors shadow-sm hover:shadow-md font-medium"
                        on:click=jump_to("contact")
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-3xl text-gray-500 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors animate-bounce"
                aria-label="Scroll down"
                on:click=move |_| scroll_to_section("about")
            >
                "⌄"
            </button>
        </section>
    }
}

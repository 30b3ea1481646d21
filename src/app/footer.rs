use leptos::prelude::*;

use crate::content::Profile;

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let copyright = format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), profile.name);

    view! {
        <footer class="bg-gray-100 dark:bg-gray-900 py-8 border-t border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <p class="text-gray-600 dark:text-gray-400">{copyright}</p>
                    </div>
                    <div class="flex space-x-4 text-xl">
                        <a
                            href=profile.linkedin.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=profile.github.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-original"></i>
                        </a>
                    </div>
                </div>
                <div class="mt-4 text-center">
                    <p class="text-sm text-gray-500 flex items-center justify-center">
                        "Made with " <span class="mx-1 text-red-500">"♥"</span>
                        " using Leptos & Tailwind CSS"
                    </p>
                </div>
            </div>
        </footer>
    }
}

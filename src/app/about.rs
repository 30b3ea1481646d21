use leptos::{html, prelude::*};

use crate::content::{Education, Profile};
use crate::reveal::reveal_class;

use super::hooks::use_reveal;

#[component]
pub fn About(profile: &'static Profile, education: &'static [Education]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let phase = use_reveal(section_ref);

    view! {
        <section
            id="about"
            node_ref=section_ref
            class=move || {
                format!(
                    "py-20 bg-gray-50 dark:bg-gray-900 transition-opacity duration-1000 {}",
                    reveal_class(phase.get()),
                )
            }
        >
            <div class="container mx-auto px-4">
                <SectionHeading title="About Me" />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 max-w-6xl mx-auto">
                    <div class="bg-white dark:bg-gray-800 p-8 rounded-lg shadow-md transform transition-transform hover:scale-[1.02]">
                        <h3 class="text-2xl font-bold mb-4 text-gray-800 dark:text-gray-100">
                            "Personal Bio"
                        </h3>
                        <p class="text-gray-600 dark:text-gray-300 leading-relaxed mb-6">
                            {profile.bio.clone()}
                        </p>
                        <a
                            href=profile.resume_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-full transition-colors shadow-md hover:shadow-lg font-medium"
                        >
                            <span class="mr-2">"⬇"</span>
                            "Download Resume"
                        </a>
                    </div>

                    <div class="bg-white dark:bg-gray-800 p-8 rounded-lg shadow-md transform transition-transform hover:scale-[1.02]">
                        <h3 class="text-2xl font-bold mb-6 text-gray-800 dark:text-gray-100">
                            "Education"
                        </h3>
                        <div class="space-y-6 relative before:absolute before:left-[0.5625rem] before:top-2 before:w-[0.125rem] before:h-[calc(100%-2rem)] before:bg-blue-200 dark:before:bg-blue-900">
                            {education
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="relative pl-8 before:content-[''] before:absolute before:left-0 before:top-2 before:w-3 before:h-3 before:bg-blue-600 before:rounded-full before:shadow-md before:z-10">
                                            <h4 class="text-lg font-semibold text-gray-800 dark:text-gray-100">
                                                {item.degree.clone()}
                                            </h4>
                                            <p class="text-gray-600 dark:text-gray-300">
                                                {item.institution.clone()}
                                            </p>
                                            <div class="flex justify-between text-gray-500 dark:text-gray-400 text-sm mt-1">
                                                <span>{item.period.clone()}</span>
                                                <span class="font-medium text-blue-600 dark:text-blue-400">
                                                    {item.grade.clone()}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Centered section title with the accent bar underneath.
#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] inverted: bool) -> impl IntoView {
    let class = if inverted {
        "text-3xl sm:text-4xl font-bold mb-2 text-gray-100"
    } else {
        "text-3xl sm:text-4xl font-bold mb-2 text-gray-800 dark:text-gray-100"
    };
    view! {
        <div class="text-center mb-16">
            <h2 class=class>{title}</h2>
            <div class="w-20 h-1 bg-blue-600 mx-auto"></div>
        </div>
    }
}

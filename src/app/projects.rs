use leptos::{html, prelude::*};

use crate::content::Project;
use crate::hover::HoverState;
use crate::reveal::reveal_class;

use super::about::SectionHeading;
use super::hooks::use_reveal;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let phase = use_reveal(section_ref);
    let hover = RwSignal::new(HoverState::<u32>::new());

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class=move || {
                format!(
                    "py-20 bg-gray-50 dark:bg-gray-900 transition-opacity duration-1000 {}",
                    reveal_class(phase.get()),
                )
            }
        >
            <div class="container mx-auto px-4">
                <SectionHeading title="My Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project hover /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, hover: RwSignal<HoverState<u32>>) -> impl IntoView {
    let id = project.id;
    let active = move || hover.with(|h| h.is_hovered(&id));

    view! {
        <div
            class="bg-white dark:bg-gray-800 rounded-lg overflow-hidden shadow-md hover:shadow-xl transition-shadow duration-300"
            on:mouseenter=move |_| hover.update(|h| h.enter(id))
            on:mouseleave=move |_| {
                hover.update(|h| {
                    h.leave(&id);
                })
            }
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-full object-cover transition-transform duration-500 ease-in-out transform hover:scale-110"
                />
                <div class=move || {
                    format!(
                        "absolute inset-0 bg-gradient-to-t from-black/70 to-transparent flex items-end p-4 transition-opacity duration-300 {}",
                        if active() { "opacity-100" } else { "opacity-0" },
                    )
                }>
                    <div class="flex space-x-3">
                        {project
                            .github_link
                            .clone()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-2 bg-gray-900 text-white rounded-full hover:bg-gray-700 transition-colors"
                                        aria-label=format!("GitHub repository for {}", project.title)
                                    >
                                        <i class="devicon-github-original"></i>
                                    </a>
                                }
                            })}
                        {project
                            .live_link
                            .clone()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-2 bg-blue-600 text-white rounded-full hover:bg-blue-700 transition-colors"
                                        aria-label=format!("Live demo for {}", project.title)
                                    >
                                        "↗"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 text-gray-800 dark:text-gray-100">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4 line-clamp-3">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-300 text-xs rounded-full">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

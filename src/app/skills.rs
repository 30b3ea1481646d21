use leptos::{either::Either, html, prelude::*};

use crate::content::{Portfolio, Skill};
use crate::reveal::reveal_class;
use crate::skills::{level_width, SkillPanel};

use super::about::SectionHeading;
use super::hooks::use_reveal;

#[component]
pub fn Skills(portfolio: &'static Portfolio) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let phase = use_reveal(section_ref);

    let body = match SkillPanel::new(
        portfolio.skill_categories.clone(),
        &portfolio.default_skill_category,
    ) {
        Ok(panel) => {
            let panel = RwSignal::new(panel);
            Either::Left(view! { <SkillTabs panel /> })
        }
        Err(e) => {
            log::error!("skills section disabled: {e}");
            Either::Right(view! { <p class="text-center text-gray-400">"Skills are unavailable."</p> })
        }
    };

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class=move || {
                format!(
                    "py-20 bg-gray-900 bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 transition-opacity duration-1000 {}",
                    reveal_class(phase.get()),
                )
            }
        >
            <div class="container mx-auto px-4">
                <SectionHeading title="My Skills" inverted=true />
                {body}
            </div>
        </section>
    }
}

#[component]
fn SkillTabs(panel: RwSignal<SkillPanel>) -> impl IntoView {
    // only re-render the grid when the tab changes, not on every hover
    let selected = Memo::new(move |_| panel.with(|p| p.selected().name.clone()));
    let categories = panel.with_untracked(|p| p.categories().to_vec());

    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12">
            {categories
                .into_iter()
                .map(|category| {
                    let name = category.name.clone();
                    let is_active = {
                        let name = name.clone();
                        move || selected.with(|s| s == &name)
                    };
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "flex items-center px-6 py-3 rounded-full transition-all transform hover:scale-105 bg-blue-600 text-white shadow-lg shadow-blue-500/30"
                                } else {
                                    "flex items-center px-6 py-3 rounded-full transition-all transform hover:scale-105 bg-gray-800 text-gray-400 hover:bg-gray-700"
                                }
                            }
                            on:click=move |_| {
                                panel.update(|p| {
                                    p.select(&name);
                                });
                            }
                        >
                            <span>{category.icon}</span>
                            <span class="ml-2">{category.name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>

        {move || {
            let _ = selected.get();
            let skills = panel.with_untracked(|p| p.visible_skills().to_vec());
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl mx-auto animate-slideUp">
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill index panel /> })
                        .collect_view()}
                </div>
            }
        }}
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize, panel: RwSignal<SkillPanel>) -> impl IntoView {
    let enter_name = skill.name.clone();
    let leave_name = skill.name.clone();
    let tooltip_name = skill.name.clone();
    let tooltip = move || {
        panel.with(|p| {
            p.tooltip()
                .filter(|s| s.name == tooltip_name)
                .cloned()
        })
    };

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| panel.update(|p| p.pointer_enter(&enter_name))
            on:mouseleave=move |_| panel.update(|p| p.pointer_leave(&leave_name))
        >
            <div class="bg-gray-800 p-6 rounded-lg shadow-lg hover:shadow-xl hover:scale-[1.02] transition-all relative group">
                <div class="flex items-center justify-between mb-4">
                    <div class="flex items-center">
                        <span class="text-2xl mr-2">{skill.icon.clone()}</span>
                        <h3 class="text-xl font-semibold text-gray-100">{skill.name.clone()}</h3>
                    </div>
                    <span class="text-blue-400 font-medium">{format!("{}%", skill.level)}</span>
                </div>

                <div class="relative h-2 bg-gray-700 rounded-full overflow-hidden">
                    <div
                        class="absolute h-full bg-gradient-to-r from-blue-500 to-blue-400 rounded-full animate-growBar"
                        style:width=level_width(skill.level)
                        style:animation-delay=format!("{}ms", index * 200)
                    ></div>
                </div>

                {move || {
                    tooltip()
                        .map(|s| {
                            view! {
                                <div class="absolute left-0 right-0 -bottom-2 transform translate-y-full mt-2 p-4 bg-gray-900 rounded-lg shadow-xl z-10 animate-fadeIn">
                                    <p class="text-gray-300 mb-2">{s.description}</p>
                                    <div class="flex items-start">
                                        <span class="text-blue-400 mt-1 mr-2">"ⓘ"</span>
                                        <div>
                                            <p class="text-sm text-gray-400">"Related Projects:"</p>
                                            <ul class="list-disc list-inside text-sm text-gray-300">
                                                {s
                                                    .projects
                                                    .into_iter()
                                                    .map(|project| view! { <li>{project}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

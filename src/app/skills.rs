use leptos::prelude::*;

use crate::content::skills;

use super::use_i18n;

#[component]
pub fn Skills() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        // Solid background so the grid layer doesn't show through.
        <section class="py-24 border-y border-neutral-900 bg-[#080808] relative">
            <div class="max-w-6xl mx-auto px-6 relative z-10">
                <h2 class="text-3xl font-bold mb-12 text-white">{move || i18n.t("skills.title")}</h2>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-12">
                    {move || {
                        skills(i18n.language())
                            .into_iter()
                            .map(|group| {
                                view! {
                                    <div class="space-y-6">
                                        <h3 class="text-xs uppercase tracking-[0.2em] text-emerald-500 font-bold mb-4 flex items-center gap-2">
                                            <span class="w-8 h-px bg-emerald-900"></span>
                                            {group.category}
                                        </h3>

                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="px-3 py-2 bg-neutral-900 border border-neutral-800 text-neutral-300 text-sm rounded transition-colors cursor-default select-none hover:text-white hover:bg-neutral-800 hover:border-neutral-600">
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="absolute top-0 right-0 w-1/3 h-full bg-gradient-to-l from-neutral-900/20 to-transparent pointer-events-none"></div>
        </section>
    }
}

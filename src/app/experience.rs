use leptos::prelude::*;

use crate::content::experience;

use super::use_i18n;

#[component]
pub fn Experience() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="experience" class="py-24 border-t border-neutral-900 scroll-mt-20">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-3xl font-bold text-white mb-12">
                    {move || i18n.t("experience.title")}
                </h2>

                <div class="space-y-12">
                    {move || {
                        experience(i18n.language())
                            .into_iter()
                            .map(|job| {
                                view! {
                                    <div class="relative pl-8 md:pl-0">
                                        <div class="md:grid md:grid-cols-4 gap-6">
                                            <div class="md:col-span-1 mb-2 md:mb-0">
                                                <span class="text-sm font-mono text-neutral-500 block">
                                                    {job.period}
                                                </span>
                                                <span class="text-xs text-neutral-600 uppercase tracking-widest mt-1 block">
                                                    {job.company}
                                                </span>
                                            </div>

                                            <div class="md:col-span-3 relative">
                                                <div class="hidden md:block absolute -left-9 top-1 w-3 h-3 rounded-full bg-neutral-800 border border-neutral-700"></div>

                                                <h3 class="text-xl font-semibold text-white mb-3">
                                                    {job.role}
                                                </h3>
                                                <ul class="space-y-2">
                                                    {job
                                                        .description
                                                        .iter()
                                                        .map(|point| {
                                                            view! {
                                                                <li class="text-neutral-400 text-sm leading-relaxed flex items-start gap-2">
                                                                    <span class="block w-1.5 h-1.5 bg-neutral-700 rounded-full mt-1.5 shrink-0"></span>
                                                                    {*point}
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

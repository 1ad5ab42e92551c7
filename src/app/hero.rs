use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::{hero_roles, why_hire};

use super::use_i18n;

/// Types out `text` one character at a time, restarting whenever the text
/// changes (role rotation or language switch).
#[component]
fn Typewriter(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let (shown, set_shown) = signal(0usize);

    Effect::new(move |_| {
        text.track();
        set_shown(0);
    });
    let _ = use_interval_fn(
        move || {
            let len = text.get_untracked().chars().count();
            set_shown.update(|n| {
                if *n < len {
                    *n += 1;
                }
            });
        },
        50,
    );

    view! {
        <span>
            {move || text.get().chars().take(shown.get()).collect::<String>()}
            <span class="animate-pulse ml-1 text-emerald-500">"_"</span>
        </span>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();

    let (role_idx, set_role_idx) = signal(0usize);
    let _ = use_interval_fn(move || set_role_idx.update(|i| *i += 1), 4000);
    let role = Signal::derive(move || {
        let roles = hero_roles(i18n.language());
        roles[role_idx() % roles.len()].to_string()
    });

    view! {
        <section id="about" class="min-h-screen flex items-center pt-20 relative scroll-mt-20">
            <div class="max-w-6xl mx-auto px-6 grid md:grid-cols-2 gap-12 items-center relative z-10">
                <div class="py-4 pl-1">
                    <div class="inline-flex items-center gap-2 px-3 py-1 mb-6 text-xs font-mono font-medium text-emerald-400 border border-emerald-900/50 bg-emerald-950/20 rounded-full backdrop-blur-sm">
                        {move || i18n.t("hero.available")}
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold tracking-tight text-white mb-6">
                        "Piotr" <br /> <span class="text-white">"Jaworski"</span>
                    </h1>

                    <h2 class="text-xl md:text-2xl text-neutral-400 mb-8 font-light h-8 flex items-center">
                        <Typewriter text=role />
                    </h2>

                    <p class="text-neutral-400 leading-relaxed mb-8 max-w-md">
                        {move || i18n.t("hero.desc")}
                    </p>

                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#projects"
                            class="relative inline-flex h-12 overflow-hidden rounded-md p-[1px] focus:outline-none focus:ring-2 focus:ring-slate-400 focus:ring-offset-2 focus:ring-offset-slate-50"
                        >
                            <span class="absolute inset-[-1000%] animate-[spin_2s_linear_infinite] bg-[conic-gradient(from_90deg_at_50%_50%,#E2E8F0_0%,#393BB2_50%,#E2E8F0_100%)]"></span>
                            <span class="inline-flex h-full w-full cursor-pointer items-center justify-center rounded-md bg-neutral-950 px-6 py-1 text-sm font-medium text-white backdrop-blur-3xl gap-2 hover:bg-neutral-900 transition-colors">
                                {move || i18n.t("hero.viewWork")} " →"
                            </span>
                        </a>

                        <a
                            href="#contact"
                            class="px-6 py-3 border border-neutral-800 bg-neutral-900/50 text-neutral-300 font-medium rounded hover:bg-neutral-800 hover:text-white transition-all flex items-center justify-center h-12"
                        >
                            {move || i18n.t("hero.contactMe")}
                        </a>
                    </div>
                </div>

                <div class="relative">
                    <div class="p-8 border border-neutral-800/80 bg-neutral-900/30 backdrop-blur-md rounded-xl shadow-2xl relative overflow-hidden group">
                        <div class="absolute inset-0 bg-gradient-to-br from-emerald-500/5 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>

                        <h3 class="text-lg font-semibold text-white mb-6 flex items-center gap-2 relative z-10">
                            <span class="text-emerald-500">"✦"</span>
                            {move || i18n.t("hero.whyHire")}
                        </h3>

                        <ul class="space-y-4 relative z-10">
                            {move || {
                                why_hire(i18n.language())
                                    .iter()
                                    .map(|reason| {
                                        view! {
                                            <li class="flex items-start gap-3">
                                                <span class="text-emerald-500/80 shrink-0 mt-0.5">
                                                    "✓"
                                                </span>
                                                <span class="text-neutral-300 text-sm leading-relaxed">
                                                    {*reason}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>

                    <div class="absolute -z-10 top-12 right-0 w-[calc(100%+2rem)] h-full border border-neutral-800/30 rounded-xl bg-neutral-900/10 blur-sm"></div>
                </div>
            </div>
        </section>
    }
}

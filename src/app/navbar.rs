use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::nav_links;

use super::use_i18n;

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let (open, set_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > 20.0);

    let nav_class = move || {
        if scrolled() || open() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-[#050505]/80 backdrop-blur-lg border-b border-neutral-800/60"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent border-b border-transparent py-4"
        }
    };

    // The toggle shows the language you would switch to, not the active one.
    let toggle_label = move || i18n.language().toggled().as_str().to_uppercase();

    view! {
        <nav class=nav_class>
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href="#" class="group flex items-center gap-2 cursor-pointer z-50">
                    <div class="w-8 h-8 rounded bg-neutral-900 border border-neutral-800 flex items-center justify-center text-white group-hover:border-emerald-500/50 group-hover:bg-neutral-800 transition-all font-mono text-xs">
                        "</>"
                    </div>
                    <span class="text-lg font-bold tracking-tight text-white group-hover:text-neutral-200 transition-colors">
                        "PJ" <span class="text-emerald-500">".com"</span>
                    </span>
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {nav_links()
                        .into_iter()
                        .map(|(key, href)| {
                            view! {
                                <a
                                    href=href
                                    class="text-sm font-medium text-neutral-400 hover:text-white transition-colors cursor-pointer relative group"
                                >
                                    {move || i18n.t(key)}
                                    <span class="absolute -bottom-1 left-0 w-0 h-px bg-emerald-500 transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()} <div class="h-4 w-px bg-neutral-800 mx-2"></div>
                    <button
                        on:click=move |_| i18n.toggle()
                        class="text-xs font-mono font-medium text-neutral-400 hover:text-white flex items-center gap-2 px-3 py-1.5 rounded-full border border-neutral-800 hover:border-neutral-600 bg-neutral-900/50 transition-colors cursor-pointer"
                    >
                        <span aria-hidden="true">"🌐"</span>
                        <span>{toggle_label}</span>
                    </button>
                </div>

                <div class="flex items-center gap-4 md:hidden z-50">
                    <button
                        on:click=move |_| i18n.toggle()
                        class="text-xs font-mono font-medium text-neutral-400 hover:text-white border border-neutral-800 rounded px-2 py-1"
                    >
                        {move || i18n.language().as_str().to_uppercase()}
                    </button>
                    <button
                        class="text-white p-2 hover:bg-neutral-800 rounded-full transition-colors"
                        on:click=move |_| set_open.update(|o| *o = !*o)
                        aria-label="Toggle menu"
                    >
                        {move || if open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>

        {move || {
            open()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-40 bg-[#050505]/95 backdrop-blur-xl md:hidden pt-24 px-6">
                            <div class="flex flex-col gap-6">
                                {nav_links()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, (key, href))| {
                                        view! {
                                            <a
                                                href=href
                                                on:click=move |_| set_open(false)
                                                class="text-2xl font-bold text-neutral-300 hover:text-white hover:pl-4 transition-all"
                                            >
                                                <span class="text-emerald-500 text-base font-mono mr-4">
                                                    {format!("0{}.", idx + 1)}
                                                </span>
                                                {move || i18n.t(key)}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <div class="mt-8 pt-8 border-t border-neutral-800">
                                    <p class="text-neutral-500 text-sm mb-4">
                                        {move || i18n.t("nav.contact")}
                                    </p>
                                    <a
                                        href="mailto:hello@piotrjaworski.com"
                                        class="text-white text-lg font-medium"
                                    >
                                        "hello@piotrjaworski.com"
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

use leptos::prelude::*;
use leptos_meta::Title;

use super::background::Background;
use super::navbar::Navbar;
use super::use_i18n;

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    // Status code only matters during server rendering.
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    let home_href = move || format!("/?lang={}", i18n.language().as_str());

    view! {
        <Title text=move || i18n.t("404.title").to_string() />
        <div class="min-h-screen font-sans selection:bg-emerald-900/30 selection:text-emerald-200">
            <Background />
            <Navbar />

            <div class="relative z-10 min-h-screen flex items-center justify-center px-6">
                <div class="text-center max-w-2xl">
                    <h1 class="text-[clamp(8rem,20vw,12rem)] font-bold tracking-tight bg-gradient-to-r from-white via-emerald-400 to-white bg-clip-text text-transparent bg-[length:200%_200%] animate-[gradient-shift_3s_ease_infinite] mb-8">
                        "404"
                    </h1>

                    <h2 class="text-2xl md:text-3xl font-semibold text-white mb-4">
                        {move || i18n.t("404.title")}
                    </h2>

                    <p class="text-neutral-400 text-lg mb-8 max-w-md mx-auto leading-relaxed">
                        {move || i18n.t("404.message")}
                    </p>

                    <div class="flex flex-wrap gap-4 justify-center">
                        <a
                            href=home_href
                            class="relative inline-flex h-12 overflow-hidden rounded-md p-[1px] focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:ring-offset-2 focus:ring-offset-neutral-950"
                        >
                            <span class="absolute inset-[-1000%] animate-[spin_2s_linear_infinite] bg-[conic-gradient(from_90deg_at_50%_50%,#E2E8F0_0%,#10b981_50%,#E2E8F0_100%)]"></span>
                            <span class="inline-flex h-full w-full cursor-pointer items-center justify-center rounded-md bg-neutral-950 px-6 py-1 text-sm font-medium text-white backdrop-blur-3xl gap-2 hover:bg-neutral-900 transition-colors">
                                {move || i18n.t("404.home")}
                            </span>
                        </a>

                        <button
                            on:click=move |_| {
                                if let Ok(history) = window().history() {
                                    let _ = history.back();
                                }
                            }
                            class="px-6 py-3 border border-neutral-800 bg-neutral-900/50 text-neutral-300 font-medium rounded hover:bg-neutral-800 hover:text-white transition-all flex items-center justify-center h-12 gap-2"
                        >
                            "← " {move || i18n.t("404.back")}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

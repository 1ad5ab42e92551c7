use leptos::prelude::*;

/// Fixed decorative layers behind every section: a faint grid, two gradient
/// orbs, and a vignette. Purely presentational.
#[component]
pub fn Background() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-[linear-gradient(to_right,#171717_1px,transparent_1px),linear-gradient(to_bottom,#171717_1px,transparent_1px)] bg-[size:4rem_4rem] [mask-image:radial-gradient(ellipse_60%_50%_at_50%_0%,#000_70%,transparent_110%)] opacity-40"></div>
            <div class="absolute top-0 left-1/4 w-[500px] h-[500px] bg-emerald-900/10 blur-[120px] rounded-full"></div>
            <div class="absolute bottom-1/4 right-0 w-[400px] h-[400px] bg-neutral-800/20 blur-[100px] rounded-full"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-[#050505]"></div>
        </div>
    }
}

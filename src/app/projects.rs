use leptos::{either::Either, ev::MouseEvent, html, prelude::*};

use crate::content::{projects, Project};

use super::use_i18n;

#[component]
fn Badge(children: Children, #[prop(optional)] success: bool) -> impl IntoView {
    let class = if success {
        "px-2 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider bg-emerald-950/50 text-emerald-400 border border-emerald-900"
    } else {
        "px-2 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider bg-neutral-900 text-neutral-400 border border-neutral-800"
    };
    view! { <span class=class>{children()}</span> }
}

/// Card with a radial highlight that follows the pointer.
#[component]
fn ProjectCard(project: Project, on_open: Callback<Project>) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (pos, set_pos) = signal((0.0f64, 0.0f64));
    let (glow, set_glow) = signal(0.0f64);

    let on_mousemove = move |ev: MouseEvent| {
        if let Some(el) = card_ref.get_untracked() {
            let rect = el.get_bounding_client_rect();
            set_pos((
                ev.client_x() as f64 - rect.left(),
                ev.client_y() as f64 - rect.top(),
            ));
        }
    };

    let spotlight_style = move || {
        let (x, y) = pos();
        format!(
            "opacity:{};background:radial-gradient(600px circle at {x}px {y}px, rgba(16, 185, 129, 0.15), transparent 40%)",
            glow()
        )
    };

    let clickable = project.link.is_some();
    let card_class = if clickable {
        "relative rounded-xl border border-neutral-800 bg-neutral-950 overflow-hidden h-full group hover:border-neutral-600 transition-colors duration-500 cursor-pointer"
    } else {
        "relative rounded-xl border border-neutral-800 bg-neutral-950 overflow-hidden h-full group hover:border-neutral-600 transition-colors duration-500"
    };

    view! {
        <div
            node_ref=card_ref
            class=card_class
            on:mousemove=on_mousemove
            on:mouseenter=move |_| set_glow(1.0)
            on:mouseleave=move |_| set_glow(0.0)
            on:click=move |_| {
                if clickable {
                    on_open.run(project);
                }
            }
        >
            <div
                class="pointer-events-none absolute -inset-px transition duration-300"
                style=spotlight_style
            ></div>
            <div class="relative h-full p-6 flex flex-col">
                <div class="flex justify-between items-start mb-6">
                    <div class="p-2.5 bg-neutral-900 rounded-lg text-neutral-400 group-hover:text-emerald-400 group-hover:bg-emerald-950/30 transition-all duration-300">
                        "▤"
                    </div>
                    <div class="flex gap-2">
                        {project.monetized.then(|| view! { <Badge success=true>"$ Rev"</Badge> })}
                        <Badge>{project.category.label()}</Badge>
                    </div>
                </div>

                <div class="flex items-center gap-2 mb-2">
                    <h3 class="text-xl font-bold text-white group-hover:text-emerald-400 transition-colors">
                        {project.title}
                    </h3>
                    {clickable
                        .then(|| {
                            view! {
                                <span class="text-neutral-600 group-hover:text-emerald-400 transition-all">
                                    "↗"
                                </span>
                            }
                        })}
                </div>

                <p class="text-neutral-400 text-sm mb-6 flex-grow leading-relaxed">
                    {project.description}
                </p>

                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech_stack
                        .iter()
                        .take(3)
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 rounded bg-neutral-900 border border-neutral-800 text-[10px] uppercase font-bold tracking-wider text-neutral-500">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(project.tech_stack.len() > 3)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 text-[10px] text-neutral-600 font-mono">
                                    {format!("+{}", project.tech_stack.len() - 3)}
                                </span>
                            }
                        })}
                </div>

                <div class="pt-4 border-t border-neutral-900 mt-auto">
                    <ul class="text-xs text-neutral-500 space-y-1 mb-4">
                        {project
                            .features
                            .iter()
                            .take(2)
                            .map(|feat| {
                                view! {
                                    <li class="flex items-start gap-1.5">
                                        <span class="w-1 h-1 rounded-full bg-neutral-600 mt-1.5"></span>
                                        {*feat}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

/// Browser-chrome styled modal previewing the project's live site in an
/// iframe.
#[component]
fn ProjectWindow(project: Project, on_close: Callback<()>) -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let (frame_key, set_frame_key) = signal(0usize);

    let reload = move |_| {
        set_loading(true);
        set_frame_key.update(|k| *k += 1);
    };

    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4 md:p-8">
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div class="relative w-full max-w-[1400px] h-[calc(100vh-6rem)] bg-[#1e1e1e]/90 backdrop-blur-2xl border border-white/10 rounded-xl shadow-2xl flex flex-col overflow-hidden">
                <div class="h-12 bg-[#252525] border-b border-black/50 flex items-center px-4 justify-between shrink-0">
                    <div class="flex gap-2 w-20">
                        <button
                            on:click=move |_| on_close.run(())
                            class="w-3 h-3 rounded-full bg-[#ff5f56] hover:brightness-75 transition-all"
                            aria-label="Close preview"
                        ></button>
                        <div class="w-3 h-3 rounded-full bg-[#ffbd2e]"></div>
                        <div class="w-3 h-3 rounded-full bg-[#27c93f]"></div>
                    </div>

                    <div class="flex-1 max-w-2xl mx-4">
                        <div class="bg-[#1a1a1a] border border-white/5 rounded-md h-7 flex items-center px-3 text-xs text-neutral-400 font-mono gap-2 shadow-inner">
                            <span class="text-emerald-500">"🔒"</span>
                            <span class="truncate flex-1 text-center opacity-70">
                                {project.link.unwrap_or("local://preview")}
                            </span>
                            <button on:click=reload class="hover:text-white transition-colors">
                                "⟳"
                            </button>
                        </div>
                    </div>

                    <div class="w-20 flex justify-end">
                        {project
                            .link
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-neutral-400 hover:text-white transition-colors"
                                        title="Open in new tab"
                                    >
                                        "↗"
                                    </a>
                                }
                            })}
                    </div>
                </div>

                <div class="flex-1 relative bg-white w-full">
                    {match project.link {
                        Some(href) => {
                            Either::Left(
                                view! {
                                    {move || {
                                        loading()
                                            .then(|| {
                                                view! {
                                                    <div class="absolute inset-0 flex items-center justify-center bg-neutral-100 z-10">
                                                        <span class="text-xs text-neutral-500 font-medium tracking-wide uppercase animate-pulse">
                                                            "Loading Preview..."
                                                        </span>
                                                    </div>
                                                }
                                            })
                                    }}
                                    {move || {
                                        // New key forces a fresh iframe on reload.
                                        let _key = frame_key();
                                        view! {
                                            <iframe
                                                src=href
                                                class="w-full h-full border-0"
                                                on:load=move |_| set_loading(false)
                                                title=format!("Preview of {}", project.title)
                                                sandbox="allow-same-origin allow-scripts allow-popups allow-forms"
                                            ></iframe>
                                        }
                                    }}
                                },
                            )
                        }
                        None => {
                            Either::Right(
                                view! {
                                    <div class="flex items-center justify-center h-full bg-[#111] text-neutral-500 flex-col gap-4">
                                        <p>"Preview not available for this project type."</p>
                                    </div>
                                },
                            )
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_i18n();
    let (selected, set_selected) = signal(None::<Project>);
    let on_open = Callback::new(move |p: Project| set_selected(Some(p)));
    let on_close = Callback::new(move |_: ()| set_selected(None));

    view! {
        <section id="projects" class="py-32 scroll-mt-20">
            {move || {
                selected().map(|p| view! { <ProjectWindow project=p on_close=on_close /> })
            }}

            <div class="max-w-6xl mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-end mb-16 gap-4">
                    <div>
                        <h2 class="text-4xl font-bold text-white mb-4">
                            {move || i18n.t("projects.title")}
                        </h2>
                        <p class="text-neutral-400 max-w-xl">
                            {move || i18n.t("projects.subtitle")}
                        </p>
                    </div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        projects(i18n.language())
                            .into_iter()
                            .map(|p| view! { <ProjectCard project=p on_open=on_open /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

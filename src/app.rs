mod background;
mod contact;
mod experience;
mod hero;
mod navbar;
mod not_found;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::*,
    hooks::{use_location, use_navigate},
    path, NavigateOptions,
};
use leptos_use::use_locales;

use crate::i18n::{self, Language, NavigationContext};

use background::Background;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use navbar::Navbar;
use not_found::NotFound;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#050505] text-white antialiased">
                <App />
            </body>
        </html>
    }
}

/// Narrow accessor for the active language, provided once at the application
/// root. Components read and switch the language only through this handle;
/// the language itself lives in the URL.
#[derive(Clone, Copy)]
pub struct I18n {
    language: Memo<Language>,
    set_language: Callback<Language>,
}

impl I18n {
    /// The active language (reactive).
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Translation lookup for the active language (reactive). Unknown keys
    /// come back unchanged.
    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::translate(self.language.get(), key)
    }

    /// Explicit user-triggered override. Takes effect immediately and is made
    /// durable by rewriting the URL query, so a reload resolves to the same
    /// language.
    pub fn set_language(&self, lang: Language) {
        self.set_language.run(lang);
    }

    pub fn toggle(&self) {
        self.set_language(self.language.get_untracked().toggled());
    }
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

#[component]
fn I18nProvider(children: Children) -> impl IntoView {
    let location = use_location();
    let locales = use_locales();
    let pathname = location.pathname;
    let search = location.search;

    // Derived once per navigation: query parameter, then locale preference,
    // then the default.
    let language = Memo::new(move |_| {
        let query = search.get();
        let locales = locales.get();
        i18n::resolve(&NavigationContext::new(&query, &locales))
    });

    let navigate = use_navigate();
    let set_language = Callback::new(move |lang: Language| {
        let path = pathname.get_untracked();
        let query = i18n::with_lang_param(&search.get_untracked(), lang);
        navigate(
            &format!("{path}?{query}"),
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });

    provide_context(I18n {
        language,
        set_language,
    });
    children()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Piotr Jaworski - {title}") />

        <Router>
            <I18nProvider>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </I18nProvider>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Title text=move || i18n.t("hero.role").to_string() />
        <div class="min-h-screen font-sans selection:bg-emerald-900/30 selection:text-emerald-200">
            <Background />
            <Navbar />
            <div class="relative z-10">
                <main class="flex flex-col">
                    <Hero />
                    <Skills />
                    <Projects />
                    <Experience />
                    <Contact />
                </main>
            </div>
        </div>
    }
}

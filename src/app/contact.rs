use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::email::{ContactForm, SendContact};

use super::use_i18n;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormState {
    Idle,
    Sending,
    Success,
    Error,
}

const SUBJECT_KEYS: [&str; 3] = [
    "contact.form.subject.freelance",
    "contact.form.subject.job",
    "contact.form.subject.other",
];

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let send = ServerAction::<SendContact>::new();
    let (state, set_state) = signal(FormState::Idle);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject_key, set_subject_key) = signal(SUBJECT_KEYS[0].to_string());
    let (message, set_message) = signal(String::new());

    let UseTimeoutFnReturn { start: reset, .. } = use_timeout_fn(
        move |_: ()| {
            set_state(FormState::Idle);
        },
        3000.0,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked() != FormState::Idle {
            return;
        }
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            // The subject reaches the email template in the active language.
            subject: crate::i18n::translate(
                i18n.language(),
                &subject_key.get_untracked(),
            )
            .to_string(),
            message: message.get_untracked(),
        };
        set_state(FormState::Sending);
        send.dispatch(SendContact { form });
    };

    {
        let reset = reset.clone();
        Effect::new(move |_| {
            if let Some(result) = send.value().get() {
                match result {
                    Ok(()) => {
                        set_state(FormState::Success);
                        set_name(String::new());
                        set_email(String::new());
                        set_subject_key(SUBJECT_KEYS[0].to_string());
                        set_message(String::new());
                    }
                    Err(_) => set_state(FormState::Error),
                }
                reset(());
            }
        });
    }

    let build_year = &BUILD_TIME[..4];

    view! {
        <section
            id="contact"
            class="py-24 relative overflow-hidden scroll-mt-20 bg-[#050505] border-t border-neutral-900"
        >
            <div class="absolute bottom-0 left-0 w-[500px] h-[500px] bg-emerald-900/5 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="max-w-6xl mx-auto px-6 relative z-10">
                <div class="grid md:grid-cols-2 gap-16 lg:gap-24 mb-20">
                    <div class="flex flex-col justify-center">
                        <h2 class="text-4xl md:text-5xl font-bold text-white mb-6 tracking-tight">
                            {move || i18n.t("contact.title")}
                        </h2>
                        <p class="text-neutral-400 mb-12 text-lg leading-relaxed">
                            {move || i18n.t("contact.desc")}
                        </p>

                        <div class="flex gap-6">
                            <a
                                href="mailto:hello@piotrjaworski.com"
                                class="group p-4 bg-neutral-900 border border-neutral-800 text-white rounded-full hover:border-emerald-500/50 transition-all hover:scale-110"
                                aria-label="Email"
                            >
                                "✉"
                            </a>
                            <a
                                href="https://github.com/pjaworski1402"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="group p-4 bg-neutral-900 border border-neutral-800 text-white rounded-full hover:border-white/50 transition-all hover:scale-110"
                                aria-label="GitHub"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://linkedin.com/in/piotr-jaworski00/"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="group p-4 bg-neutral-900 border border-neutral-800 text-white rounded-full hover:border-[#0077b5] transition-all hover:scale-110"
                                aria-label="LinkedIn"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                        </div>
                    </div>

                    <div class="bg-neutral-900/30 border border-neutral-800 p-8 rounded-2xl backdrop-blur-sm">
                        <form on:submit=on_submit class="space-y-4">
                            <div class="grid grid-cols-2 gap-4">
                                <div class="space-y-2">
                                    <label
                                        for="name"
                                        class="text-xs font-medium text-neutral-500 uppercase tracking-wider"
                                    >
                                        {move || i18n.t("contact.form.name")}
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="from_name"
                                        required
                                        prop:value=name
                                        on:input=move |ev| set_name(event_target_value(&ev))
                                        class="w-full bg-neutral-950 border border-neutral-800 rounded-lg px-4 py-3 text-white text-sm focus:outline-none focus:border-emerald-500 focus:ring-1 focus:ring-emerald-500 transition-all"
                                        placeholder="John Doe"
                                    />
                                </div>
                                <div class="space-y-2">
                                    <label
                                        for="email"
                                        class="text-xs font-medium text-neutral-500 uppercase tracking-wider"
                                    >
                                        {move || i18n.t("contact.form.email")}
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="from_email"
                                        required
                                        prop:value=email
                                        on:input=move |ev| set_email(event_target_value(&ev))
                                        class="w-full bg-neutral-950 border border-neutral-800 rounded-lg px-4 py-3 text-white text-sm focus:outline-none focus:border-emerald-500 focus:ring-1 focus:ring-emerald-500 transition-all"
                                        placeholder="john@example.com"
                                    />
                                </div>
                            </div>

                            <div class="space-y-2">
                                <label
                                    for="subject"
                                    class="text-xs font-medium text-neutral-500 uppercase tracking-wider"
                                >
                                    {move || i18n.t("contact.form.subject")}
                                </label>
                                <select
                                    id="subject"
                                    name="subject"
                                    prop:value=subject_key
                                    on:change=move |ev| set_subject_key(event_target_value(&ev))
                                    class="w-full bg-neutral-950 border border-neutral-800 rounded-lg px-4 py-3 text-white text-sm focus:outline-none focus:border-emerald-500 focus:ring-1 focus:ring-emerald-500 transition-all appearance-none"
                                >
                                    {SUBJECT_KEYS
                                        .into_iter()
                                        .map(|key| {
                                            view! {
                                                <option value=key>{move || i18n.t(key)}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="space-y-2">
                                <label
                                    for="message"
                                    class="text-xs font-medium text-neutral-500 uppercase tracking-wider"
                                >
                                    {move || i18n.t("contact.form.message")}
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required
                                    rows=4
                                    prop:value=message
                                    on:input=move |ev| set_message(event_target_value(&ev))
                                    class="w-full bg-neutral-950 border border-neutral-800 rounded-lg px-4 py-3 text-white text-sm focus:outline-none focus:border-emerald-500 focus:ring-1 focus:ring-emerald-500 transition-all resize-none"
                                    placeholder=move || i18n.t("contact.form.messagePlaceholder")
                                ></textarea>
                            </div>

                            {move || {
                                (state() == FormState::Error)
                                    .then(|| {
                                        view! {
                                            <div class="text-red-400 text-sm text-center">
                                                {i18n.t("contact.form.error")}
                                            </div>
                                        }
                                    })
                            }}

                            <button
                                type="submit"
                                disabled=move || state() != FormState::Idle
                                class="w-full bg-white text-black font-medium py-3 rounded-lg hover:bg-neutral-200 transition-colors flex items-center justify-center gap-2 disabled:opacity-70 disabled:cursor-not-allowed mt-2"
                            >
                                {move || match state() {
                                    FormState::Idle => i18n.t("contact.form.send").to_string(),
                                    FormState::Sending => "...".to_string(),
                                    FormState::Success => i18n.t("contact.form.sent").to_string(),
                                    FormState::Error => i18n.t("contact.form.send").to_string(),
                                }}
                            </button>
                        </form>
                    </div>
                </div>

                <div class="border-t border-neutral-900 pt-8 flex flex-col md:flex-row justify-between items-center gap-4 text-neutral-600 text-sm">
                    <p>{format!("© {build_year} Piotr Jaworski.")}</p>
                    <p>{move || i18n.t("contact.footer")}</p>
                </div>
            </div>
        </section>
    }
}

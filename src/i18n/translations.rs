//! Flat dot-namespaced translation tables. Both tables must carry the same
//! key set; the test in the parent module enforces it.

pub(super) const EN_TABLE: &[(&str, &str)] = &[
    ("nav.about", "About"),
    ("nav.projects", "Projects"),
    ("nav.experience", "Experience"),
    ("nav.contact", "Contact"),
    ("hero.available", "Available for new projects"),
    ("hero.role", "Web Developer & Website Creator"),
    (
        "hero.desc",
        "I create modern, fast, and easy-to-manage websites. Available for freelance projects through Useme. I specialize in Strapi CMS - a powerful alternative to WordPress that gives you more control and better performance.",
    ),
    ("hero.viewWork", "View Work"),
    ("hero.contactMe", "Contact Me"),
    ("hero.whyHire", "Why Hire Piotr?"),
    ("skills.title", "Technical Arsenal"),
    ("projects.title", "Selected Work"),
    (
        "projects.subtitle",
        "A collection of SaaS products, e-commerce platforms, and specialized databases built for clients and self-founded ventures.",
    ),
    ("projects.visit", "Visit Live Site"),
    ("projects.internal", "Internal / Client Access"),
    ("experience.title", "Professional Journey"),
    ("contact.title", "Let's Build Something Great"),
    (
        "contact.desc",
        "I'm currently available for freelance projects and full-time opportunities. Specializing in React, Next.js, and high-performance SaaS architecture.",
    ),
    ("contact.footer", "Based in Poland."),
    ("contact.form.name", "Name"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Subject"),
    ("contact.form.subject.freelance", "Freelance Project"),
    ("contact.form.subject.job", "Job Opportunity"),
    ("contact.form.subject.other", "Other"),
    ("contact.form.message", "Message"),
    ("contact.form.messagePlaceholder", "Tell me about your project..."),
    ("contact.form.send", "Send Message"),
    ("contact.form.sent", "Sent!"),
    ("contact.form.error", "Error sending message. Please try again."),
    ("404.title", "Page Not Found"),
    (
        "404.message",
        "It looks like the page you're looking for doesn't exist or has been moved.",
    ),
    ("404.home", "Back to Home"),
    ("404.back", "Go Back"),
    (
        "skills.tooltip.openai",
        "Advanced AI models for text generation, analysis, and automation",
    ),
    (
        "skills.tooltip.gemini",
        "Multimodal AI model for content generation and analysis",
    ),
    (
        "skills.tooltip.customAgents",
        "Automated workflows and intelligent task processing",
    ),
    ("skills.tooltip.rag", "AI systems that use external knowledge sources"),
    ("skills.tooltip.promptEngineering", "Optimizing AI inputs for better outputs"),
    (
        "skills.tooltip.n8n",
        "Workflow automation platform for connecting services and APIs",
    ),
    (
        "skills.tooltip.webhooks",
        "Real-time event notifications between applications",
    ),
    ("skills.tooltip.react", "JavaScript library for building user interfaces"),
    (
        "skills.tooltip.nextjs",
        "React framework with server-side rendering and routing",
    ),
    (
        "skills.tooltip.typescript",
        "Typed JavaScript for safer and more maintainable code",
    ),
    (
        "skills.tooltip.tailwind",
        "Utility-first CSS framework for rapid UI development",
    ),
    ("skills.tooltip.framerMotion", "Animation library for React components"),
    (
        "skills.tooltip.figma",
        "Design tool for creating and prototyping user interfaces",
    ),
    (
        "skills.tooltip.nodejs",
        "JavaScript runtime for building server-side applications",
    ),
    ("skills.tooltip.postgresql", "Powerful open-source relational database"),
    ("skills.tooltip.payload", "Headless CMS built with TypeScript and React"),
    ("skills.tooltip.strapi", "Open-source headless CMS for managing content"),
    (
        "skills.tooltip.stripe",
        "Payment processing for e-commerce and subscriptions",
    ),
    ("skills.tooltip.serverless", "Cloud functions that scale automatically"),
    (
        "skills.tooltip.vercel",
        "Platform for deploying and hosting web applications",
    ),
    ("skills.tooltip.git", "Version control and collaboration platform"),
];

pub(super) const PL_TABLE: &[(&str, &str)] = &[
    ("nav.about", "O mnie"),
    ("nav.projects", "Projekty"),
    ("nav.experience", "Doświadczenie"),
    ("nav.contact", "Kontakt"),
    ("hero.available", "Dostępny do nowych projektów"),
    ("hero.role", "Twórca Stron Internetowych"),
    (
        "hero.desc",
        "Tworzę nowoczesne, szybkie i łatwe w zarządzaniu strony internetowe. Dostępny do projektów na zlecenie przez Useme. Specjalizuję się w Strapi CMS - potężnej alternatywie dla WordPress, która daje większą kontrolę i lepszą wydajność.",
    ),
    ("hero.viewWork", "Zobacz Projekty"),
    ("hero.contactMe", "Skontaktuj się"),
    ("hero.whyHire", "Dlaczego warto?"),
    ("skills.title", "Technologie"),
    ("projects.title", "Wybrane Projekty"),
    (
        "projects.subtitle",
        "Kolekcja produktów SaaS, platform e-commerce i dedykowanych baz danych stworzonych dla klientów oraz jako własne przedsięwzięcia.",
    ),
    ("projects.visit", "Zobacz online"),
    ("projects.internal", "Dostęp wewnętrzny / Klienta"),
    ("experience.title", "Doświadczenie"),
    ("contact.title", "Stwórzmy coś wyjątkowego"),
    (
        "contact.desc",
        "Jestem dostępny do projektów freelance oraz stałej współpracy. Specjalizuję się w React, Next.js i wydajnej architekturze SaaS.",
    ),
    ("contact.footer", "Polska."),
    ("contact.form.name", "Imię"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Temat"),
    ("contact.form.subject.freelance", "Współpraca (Freelance)"),
    ("contact.form.subject.job", "Oferta Pracy"),
    ("contact.form.subject.other", "Inne"),
    ("contact.form.message", "Wiadomość"),
    ("contact.form.messagePlaceholder", "Opisz swój projekt..."),
    ("contact.form.send", "Wyślij Wiadomość"),
    ("contact.form.sent", "Wysłano!"),
    ("contact.form.error", "Błąd podczas wysyłania. Spróbuj ponownie."),
    ("404.title", "Strona nie znaleziona"),
    (
        "404.message",
        "Wygląda na to, że strona, której szukasz, nie istnieje lub została przeniesiona.",
    ),
    ("404.home", "Powrót do strony głównej"),
    ("404.back", "Wstecz"),
    (
        "skills.tooltip.openai",
        "Zaawansowane modele AI do generowania tekstu, analizy i automatyzacji",
    ),
    (
        "skills.tooltip.gemini",
        "Wielomodalny model AI do generowania treści i analizy",
    ),
    (
        "skills.tooltip.customAgents",
        "Zautomatyzowane workflow i inteligentne przetwarzanie zadań",
    ),
    ("skills.tooltip.rag", "Systemy AI wykorzystujące zewnętrzne źródła wiedzy"),
    (
        "skills.tooltip.promptEngineering",
        "Optymalizacja wejść AI dla lepszych wyników",
    ),
    (
        "skills.tooltip.n8n",
        "Platforma automatyzacji workflow do łączenia serwisów i API",
    ),
    (
        "skills.tooltip.webhooks",
        "Powiadomienia o zdarzeniach w czasie rzeczywistym między aplikacjami",
    ),
    (
        "skills.tooltip.react",
        "Biblioteka JavaScript do budowania interfejsów użytkownika",
    ),
    (
        "skills.tooltip.nextjs",
        "Framework React z renderowaniem po stronie serwera i routingiem",
    ),
    (
        "skills.tooltip.typescript",
        "Typowany JavaScript dla bezpieczniejszego i łatwiejszego w utrzymaniu kodu",
    ),
    (
        "skills.tooltip.tailwind",
        "Framework CSS oparty na utility classes do szybkiego rozwoju UI",
    ),
    (
        "skills.tooltip.framerMotion",
        "Biblioteka animacji dla komponentów React",
    ),
    (
        "skills.tooltip.figma",
        "Narzędzie do projektowania interfejsów użytkownika",
    ),
    (
        "skills.tooltip.nodejs",
        "Środowisko uruchomieniowe JavaScript do budowania aplikacji serwerowych",
    ),
    ("skills.tooltip.postgresql", "Potężna relacyjna baza danych open-source"),
    ("skills.tooltip.payload", "Headless CMS zbudowany w TypeScript i React"),
    ("skills.tooltip.strapi", "Headless CMS open-source do zarządzania treścią"),
    (
        "skills.tooltip.stripe",
        "Przetwarzanie płatności dla e-commerce i subskrypcji",
    ),
    ("skills.tooltip.serverless", "Funkcje w chmurze skalujące się automatycznie"),
    (
        "skills.tooltip.vercel",
        "Platforma do wdrażania i hostowania aplikacji webowych",
    ),
    ("skills.tooltip.git", "System kontroli wersji i platforma współpracy"),
];

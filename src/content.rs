//! Static per-language content tables: skills, projects, and experience.
//! All data is immutable and keyed by [`Language`]; the only behavior here is
//! picking the right copy for the active language.

use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SaaS,
    Ecommerce,
    BookingPlatform,
    ReferenceDb,
    Marketing,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SaaS => "SaaS",
            Self::Ecommerce => "E-commerce",
            Self::BookingPlatform => "Booking Platform",
            Self::ReferenceDb => "Reference DB",
            Self::Marketing => "Marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Live,
    ProductionReady,
    Active,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::ProductionReady => "Production-ready",
            Self::Active => "Active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub status: Status,
    pub monetized: bool,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
}

/// Section anchors for the navbar, paired with their translation keys.
pub fn nav_links() -> [(&'static str, &'static str); 4] {
    [
        ("nav.about", "#about"),
        ("nav.projects", "#projects"),
        ("nav.experience", "#experience"),
        ("nav.contact", "#contact"),
    ]
}

pub fn hero_roles(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Pl => &[
            "Twórca Stron Internetowych",
            "Specjalista Strapi CMS",
            "Dostępny na Useme",
        ],
        Language::En => &[
            "Website Creator",
            "Strapi CMS Specialist",
            "Available on Useme",
        ],
    }
}

pub fn why_hire(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Pl => &[
            "Strapi zamiast WordPress - szybsze, bezpieczniejsze i łatwiejsze w zarządzaniu",
            "Nowoczesne strony dostosowane do Twoich potrzeb biznesowych",
            "Kompleksowa obsługa - od projektu do wdrożenia i wsparcia",
            "Dostępny przez Useme - bezpieczna współpraca na zlecenie",
        ],
        Language::En => &[
            "Strapi instead of WordPress - faster, more secure, easier to manage",
            "Modern websites tailored to your business needs",
            "Full service - from design to deployment and support",
            "Available through Useme - secure freelance collaboration",
        ],
    }
}

pub fn skills(lang: Language) -> Vec<SkillGroup> {
    let is_pl = lang == Language::Pl;
    vec![
        SkillGroup {
            category: if is_pl {
                "AI Engineering & Automatyzacja"
            } else {
                "AI Engineering & Automation"
            },
            skills: &[
                "OpenAI API",
                "Google Gemini",
                "Custom AI Agents",
                "RAG",
                "Prompt Engineering",
                "n8n",
                "Webhooks",
            ],
        },
        SkillGroup {
            category: "Modern Frontend & UI/UX",
            skills: &[
                "React",
                "Next.js 14+",
                "TypeScript",
                "Tailwind CSS",
                "Framer Motion",
                "Figma",
            ],
        },
        SkillGroup {
            category: if is_pl {
                "Backend, CMS & Dane"
            } else {
                "Backend, CMS & Data"
            },
            skills: &[
                "Node.js",
                "PostgreSQL",
                "PayloadCMS",
                "Strapi",
                "Stripe Integration",
                "Serverless Functions",
            ],
        },
        SkillGroup {
            category: if is_pl { "DevOps & Narzędzia" } else { "DevOps & Tools" },
            skills: &["Vercel", "Git & GitHub"],
        },
    ]
}

pub fn projects(lang: Language) -> Vec<Project> {
    let is_pl = lang == Language::Pl;
    vec![
        Project {
            id: "deeplomai",
            title: "Deeplomai",
            category: Category::SaaS,
            description: if is_pl {
                "Platforma AI wspierająca pisanie prac dyplomowych. Gotowy produkt SaaS z regularnymi przychodami i bazą użytkowników."
            } else {
                "AI-Powered academic writing assistance platform targeting Polish universities. Production-ready SaaS with recurring revenue."
            },
            features: if is_pl {
                &[
                    "Generowanie struktury prac z Gemini",
                    "Sugestie AI w czasie rzeczywistym",
                    "Automatyczne cytowania (APA/MLA)",
                    "Płatności subskrypcyjne Stripe",
                ]
            } else {
                &[
                    "Gemini content generation for thesis structure",
                    "Real-time AI suggestions & style verification",
                    "Automated citations (APA/MLA) & DOI lookup",
                    "Stripe subscription monetization",
                ]
            },
            tech_stack: &["Next.js", "TypeScript", "Google Gemini", "Stripe", "Vercel"],
            status: Status::Live,
            monetized: true,
            link: Some("https://deeplomai.com/"),
        },
        Project {
            id: "wygoda-ski",
            title: "Wygoda.ski",
            category: Category::Ecommerce,
            description: if is_pl {
                "Frontend platformy rezerwacyjnej wyjazdów narciarskich zintegrowany ze Strapi CMS."
            } else {
                "Frontend for ski trip booking platform integrated with Strapi CMS."
            },
            features: if is_pl {
                &[
                    "Frontend w Next.js",
                    "Integracja ze Strapi CMS",
                    "Responsywny design",
                    "Optymalizacja wydajności",
                ]
            } else {
                &[
                    "Next.js frontend",
                    "Strapi CMS integration",
                    "Responsive design",
                    "Performance optimization",
                ]
            },
            tech_stack: &["Next.js", "Strapi", "Performance Optimization"],
            status: Status::Live,
            monetized: false,
            link: Some("https://wygoda.ski"),
        },
        Project {
            id: "gta5-hair",
            title: "GTA5 Hairstyles DB",
            category: Category::ReferenceDb,
            description: if is_pl {
                "Interaktywny katalog dla społeczności graczy ze zoptymalizowanym wyszukiwaniem."
            } else {
                "Interactive catalog for the gaming community with optimized search and filtering."
            },
            features: if is_pl {
                &[
                    "400+ fryzur w bazie",
                    "Wyszukiwanie z MeiliSearch",
                    "Filtrowanie i sortowanie",
                    "Optymalizacja statyczna",
                ]
            } else {
                &[
                    "400+ searchable hairstyle entries",
                    "MeiliSearch integration",
                    "Filterable search & sorting",
                    "Static content delivery optimization",
                ]
            },
            tech_stack: &["Next.js", "MeiliSearch", "Responsive Design"],
            status: Status::Live,
            monetized: false,
            link: Some("https://hairstyles-gta5.com"),
        },
        Project {
            id: "anubis",
            title: "Anubis Travel",
            category: Category::BookingPlatform,
            description: if is_pl {
                "Frontend strony biura podróży z dynamicznym wyświetlaniem ofert."
            } else {
                "Frontend for travel agency website with dynamic tour package displays."
            },
            features: if is_pl {
                &[
                    "Frontend w Next.js",
                    "Integracja z API",
                    "Nowoczesne UX",
                    "Responsywny design",
                ]
            } else {
                &[
                    "Next.js frontend",
                    "API integration",
                    "Modern UX patterns",
                    "Responsive design",
                ]
            },
            tech_stack: &["Next.js", "Strapi", "Responsive Design"],
            status: Status::Live,
            monetized: false,
            link: Some("https://anubistravel.com/"),
        },
        Project {
            id: "helen-doron",
            title: "Helen Doron",
            category: Category::Marketing,
            description: if is_pl {
                "Strategia social media i tworzenie treści wizualnych dla oddziałów Grodzisk Mazowiecki i Pruszków."
            } else {
                "Social media strategy and visual content creation for Grodzisk Mazowiecki & Pruszkow branches."
            },
            features: if is_pl {
                &[
                    "Spójny branding wizualny",
                    "Strategia social media",
                    "Materiały promocyjne",
                ]
            } else {
                &[
                    "Cohesive visual branding",
                    "Social media strategy",
                    "Promotional material design",
                ]
            },
            tech_stack: &["Adobe Suite", "Graphic Design"],
            status: Status::Active,
            monetized: false,
            link: None,
        },
        Project {
            id: "ark-tested",
            title: "ARK Tested",
            category: Category::ReferenceDb,
            description: if is_pl {
                "Baza wiedzy o mechanikach gier survivalowych z kalkulatorami surowcowymi. Projekt na zlecenie - statyczna generacja z plików Markdown bez CMS."
            } else {
                "Knowledge base for survival game mechanics with resource calculators. Client project - static generation from Markdown files without CMS."
            },
            features: if is_pl {
                &[
                    "Kalkulatory surowcowe",
                    "Statyczna generacja z MD",
                    "Złożona architektura informacji",
                    "Projekt na zlecenie",
                ]
            } else {
                &[
                    "Resource calculators",
                    "Static generation from MD",
                    "Complex information architecture",
                    "Client project",
                ]
            },
            tech_stack: &["Gatsby", "React", "Markdown", "Static Generation"],
            status: Status::Live,
            monetized: false,
            link: Some("https://arktested.com"),
        },
    ]
}

pub fn experience(lang: Language) -> Vec<ExperienceEntry> {
    let is_pl = lang == Language::Pl;
    vec![
        ExperienceEntry {
            id: "bluevendo",
            role: "Full-Stack Developer",
            company: "Bluevendo",
            period: if is_pl { "2022 - Obecnie" } else { "2022 - Present" },
            description: if is_pl {
                &[
                    "Rozwój dynamicznych aplikacji webowych w Next.js, w tym wygoda.ski, Anubis Travel oraz OnHolidays.",
                    "Implementacja integracji z systemami CMS: PayloadCMS oraz Strapi.",
                    "Optymalizacja wydajności i doświadczenia użytkownika dla platform rezerwacyjnych i e-commerce.",
                ]
            } else {
                &[
                    "Developing dynamic web applications in Next.js, including wygoda.ski, Anubis Travel, and OnHolidays.",
                    "Implementing CMS integrations with PayloadCMS and Strapi.",
                    "Optimizing performance and user experience for booking platforms and e-commerce solutions.",
                ]
            },
        },
        ExperienceEntry {
            id: "deeplomai",
            role: if is_pl {
                "Założyciel & Full-Stack Developer"
            } else {
                "Founder & Full-Stack Developer"
            },
            company: "Deeplomai",
            period: if is_pl { "2024 - Obecnie" } else { "2024 - Present" },
            description: if is_pl {
                &[
                    "Budowa i monetyzacja narzędzia SaaS opartego na sztucznej inteligencji od zera.",
                    "Specjalizacja w integracjach płatności Stripe oraz implementacji zaawansowanych workflow AI.",
                    "Kompleksowe zarządzanie produktem od koncepcji do wdrożenia i utrzymania.",
                ]
            } else {
                &[
                    "Building and monetizing an AI-powered SaaS tool from the ground up.",
                    "Specializing in Stripe payment integrations and advanced AI workflow implementation.",
                    "End-to-end product management from concept to deployment and maintenance.",
                ]
            },
        },
        ExperienceEntry {
            id: "chaos-management",
            role: "Web Developer",
            company: "Chaos Management Paweł Kozubal",
            period: "2021 - 2022",
            description: if is_pl {
                &[
                    "Projektowanie i rozwój bloga z informacjami oraz poradnikami dla graczy.",
                    "Implementacja dedykowanych narzędzi wspierających społeczność graczy.",
                    "Zapewnienie responsywnego interfejsu oraz optymalnej funkcjonalności.",
                ]
            } else {
                &[
                    "Designing and developing a blog with gaming information and player guides.",
                    "Implementing dedicated tools to support the gaming community.",
                    "Ensuring responsive interface and optimal functionality.",
                ]
            },
        },
        ExperienceEntry {
            id: "freelance",
            role: "Freelance Web Developer",
            company: "Freelance",
            period: if is_pl { "2018 - Obecnie" } else { "2018 - Present" },
            description: if is_pl {
                &[
                    "Realizacja różnorodnych projektów internetowych, w tym platform e-commerce oraz portfolio.",
                    "Dostarczanie nowoczesnych, funkcjonalnych i responsywnych rozwiązań dostosowanych do indywidualnych potrzeb klientów.",
                    "Kompleksowa obsługa projektów od koncepcji do wdrożenia.",
                ]
            } else {
                &[
                    "Delivering diverse web projects, including e-commerce platforms and portfolios.",
                    "Providing modern, functional, and responsive solutions tailored to individual client needs.",
                    "End-to-end project management from concept to deployment.",
                ]
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_language_symmetric() {
        // Both languages must describe the same things, only in different
        // words. Structure and identity must line up exactly.
        let en = projects(Language::En);
        let pl = projects(Language::Pl);
        assert_eq!(en.len(), pl.len());
        for (e, p) in en.iter().zip(&pl) {
            assert_eq!(e.id, p.id);
            assert_eq!(e.category, p.category);
            assert_eq!(e.status, p.status);
            assert_eq!(e.link, p.link);
            assert_eq!(e.features.len(), p.features.len());
        }

        let en = experience(Language::En);
        let pl = experience(Language::Pl);
        assert_eq!(en.len(), pl.len());
        for (e, p) in en.iter().zip(&pl) {
            assert_eq!(e.id, p.id);
            assert_eq!(e.company, p.company);
            assert_eq!(e.description.len(), p.description.len());
        }

        assert_eq!(skills(Language::En).len(), skills(Language::Pl).len());
        assert_eq!(why_hire(Language::En).len(), why_hire(Language::Pl).len());
        assert_eq!(hero_roles(Language::En).len(), hero_roles(Language::Pl).len());
    }

    #[test]
    fn labels_match_display_copy() {
        // Category and status labels are shown verbatim in badges; they are
        // not translated.
        assert_eq!(Category::ReferenceDb.label(), "Reference DB");
        assert_eq!(Category::Ecommerce.label(), "E-commerce");
        assert_eq!(Status::Live.label(), "Live");
        assert_eq!(Status::ProductionReady.label(), "Production-ready");
    }

    #[test]
    fn only_linkless_projects_are_marketing() {
        for p in projects(Language::En) {
            if p.link.is_none() {
                assert_eq!(p.category, Category::Marketing);
            }
        }
    }
}

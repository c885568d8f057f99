//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::section::Section;
use crate::content;
use crate::screens::tokenomics::TokenomicsSection;
use crate::SITE;

/// The whole page. Every section except tokenomics is static markup fed
/// from the content tables and renders identically in every data state.
#[allow(non_snake_case)]
#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        div { class: "container",
            header { class: "header",
                img {
                    class: "logo large-logo",
                    src: SITE.logo_url,
                    alt: "{SITE.page_title} Logo",
                }
            }
            TokenomicsSection {}
            AboutSection {}
            RoadmapSection {}
            QuoteSection {}
            CommunitySection {}
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        Section {
            for text in content::ABOUT_PARAGRAPHS {
                p { class: "section-text", "{text}" }
            }
        }
    }
}

#[component]
fn RoadmapSection() -> Element {
    rsx! {
        section { id: "roadmap", class: "roadmap-section",
            h2 { class: "roadmap-title", "{content::ROADMAP_TITLE}" }
            p { class: "roadmap-description", "{content::ROADMAP_INTRO}" }
            div { class: "roadmap-phases",
                for phase in content::ROADMAP_PHASES {
                    div { class: "roadmap-phase",
                        h3 { class: "roadmap-phase-title", "{phase.title}" }
                        ul { class: "roadmap-phase-list",
                            for item in phase.items {
                                li { "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuoteSection() -> Element {
    rsx! {
        section { id: "quote", class: "quote-section",
            blockquote { class: "quote",
                "{content::QUOTE_TEXT}"
                br {}
                span { class: "quote-author", "{content::QUOTE_AUTHOR}" }
            }
        }
    }
}

#[component]
fn CommunitySection() -> Element {
    rsx! {
        Section {
            h2 { class: "section-title", "Join the Community" }
            p { class: "section-text", "{content::COMMUNITY_INTRO}" }
            ul { class: "social-links",
                for link in content::SOCIAL_LINKS {
                    li {
                        a {
                            href: link.url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod content;
pub mod hooks;
mod screens;

use screens::home::HomeScreen;

/// The deployment the whole tree reads from.
pub(crate) const SITE: &api::SiteConfig = &api::config::DZEN;

/// The root component: one-time page decoration, then the page itself.
///
/// Title, favicon, viewport, and stylesheet are declarative head elements,
/// so repeating a render never duplicates them.
#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Title { "{SITE.page_title}" }
        document::Link {
            rel: "icon",
            href: "{SITE.favicon_url}",
        }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/site.css"),
        }
        HomeScreen {}
    }
}

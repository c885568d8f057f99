use dioxus::prelude::*;

/// A page section. Wraps content in a `<section class="section">` element;
/// callers supply their own heading.
#[component]
pub fn Section(children: Element) -> Element {
    rsx! {
        section { class: "section", {children} }
    }
}

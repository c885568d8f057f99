//=============================================================================
// File: src/screens/tokenomics.rs
//=============================================================================
use api::TokenView;
use dioxus::prelude::*;

use crate::components::pie_chart::PieChart;
use crate::components::pie_chart::PieSlice;
use crate::components::section::Section;
use crate::hooks::use_token_view::use_token_view;
use crate::SITE;

/// The chart's second slice. A pinned figure, not derived from anything
/// fetched.
// TODO: replace with a circulating figure computed from locked accounts.
pub(crate) const CIRCULATING_SUPPLY: f64 = 5_000_000_000.0;

/// The two wedges the chart shows for a populated view.
pub(crate) fn chart_slices(view: &TokenView) -> Vec<PieSlice> {
    let (total_color, circulating_color) = SITE.chart_colors;
    vec![
        PieSlice {
            label: "Total Supply",
            value: view.supply_value(),
            color: total_color,
        },
        PieSlice {
            label: "Circulating Supply",
            value: CIRCULATING_SUPPLY,
            color: circulating_color,
        },
    ]
}

/// The one data-driven section of the page.
///
/// Until the fetch resolves, and forever if it fails, the section shows the
/// loading placeholder; everything around it renders regardless.
#[allow(non_snake_case)]
#[component]
pub fn TokenomicsSection() -> Element {
    let token_view = use_token_view(SITE);

    rsx! {
        Section {
            h2 { class: "section-title", "Tokenomics" }
            match &*token_view.read() {
                Some(Some(view)) => rsx! {
                    p { class: "section-text",
                        "Name: "
                        span { class: "highlight", "{view.name}" }
                    }
                    p { class: "section-text",
                        "Symbol: "
                        span { class: "highlight", "{view.symbol}" }
                    }
                    p { class: "section-text",
                        "Total Supply: "
                        span { class: "highlight", "{view.supply}" }
                    }
                    PieChart { slices: chart_slices(view) }
                },
                // still fetching, or the fetch failed and was logged
                _ => rsx! {
                    p { class: "loading-text", "Loading token data..." }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_supply(supply: &str) -> TokenView {
        TokenView {
            name: "Dzen".into(),
            symbol: "DZEN".into(),
            image: "https://x/y.png".into(),
            supply: supply.into(),
        }
    }

    #[test]
    fn chart_pairs_fetched_supply_with_the_fixed_slice() {
        let slices = chart_slices(&view_with_supply("1000000000000"));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Total Supply");
        assert_eq!(slices[0].value, 1_000_000_000_000.0);
        assert_eq!(slices[1].label, "Circulating Supply");
        assert_eq!(slices[1].value, CIRCULATING_SUPPLY);
    }

    #[test]
    fn circulating_slice_is_a_known_placeholder() {
        // pinned on purpose; a product decision is needed before deriving it
        assert_eq!(CIRCULATING_SUPPLY, 5_000_000_000.0);
    }

    #[test]
    fn slice_colors_come_from_the_site_palette() {
        let slices = chart_slices(&view_with_supply("42"));
        assert_eq!(slices[0].color, SITE.chart_colors.0);
        assert_eq!(slices[1].color, SITE.chart_colors.1);
    }
}

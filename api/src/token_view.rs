//! The merged, display-ready token record.

use crate::metadata::TokenMetadata;
use crate::mint::Mint;

pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_SYMBOL: &str = "N/A";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Everything the page shows about the token, merged from the mint account
/// and the metadata document. Built at most once per page load; the UI only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenView {
    pub name: String,
    pub symbol: String,
    pub image: String,
    /// Raw supply in the mint's smallest unit, as a decimal string.
    pub supply: String,
}

impl TokenView {
    /// Merges the two fetch results, substituting a default wherever a
    /// metadata field is missing or empty.
    pub fn merge(mint: &Mint, metadata: TokenMetadata) -> Self {
        TokenView {
            name: or_default(metadata.name, DEFAULT_NAME),
            symbol: or_default(metadata.symbol, DEFAULT_SYMBOL),
            image: or_default(metadata.image, PLACEHOLDER_IMAGE),
            supply: mint.supply.to_string(),
        }
    }

    /// The supply as a number, for the chart. The string always comes from
    /// a `u64`, so the zero fallback is unreachable in practice.
    pub fn supply_value(&self) -> f64 {
        self.supply.parse().unwrap_or(0.0)
    }
}

fn or_default(field: Option<String>, default: &str) -> String {
    match field {
        Some(value) if !value.is_empty() => value,
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mint::packed_mint;

    fn mint_with_supply(supply: u64) -> Mint {
        Mint::unpack(&packed_mint(supply, 9)).unwrap()
    }

    #[test]
    fn merges_present_fields_verbatim() {
        let metadata: TokenMetadata = serde_json::from_str(
            r#"{"name":"Dzen","symbol":"DZEN","image":"https://x/y.png"}"#,
        )
        .unwrap();
        let view = TokenView::merge(&mint_with_supply(1_000_000_000_000), metadata);
        assert_eq!(
            view,
            TokenView {
                name: "Dzen".into(),
                symbol: "DZEN".into(),
                image: "https://x/y.png".into(),
                supply: "1000000000000".into(),
            }
        );
    }

    #[test]
    fn empty_document_gets_every_default() {
        let view = TokenView::merge(&mint_with_supply(42), TokenMetadata::default());
        assert_eq!(
            view,
            TokenView {
                name: DEFAULT_NAME.into(),
                symbol: DEFAULT_SYMBOL.into(),
                image: PLACEHOLDER_IMAGE.into(),
                supply: "42".into(),
            }
        );
    }

    #[test]
    fn only_the_missing_field_is_defaulted() {
        let metadata = TokenMetadata {
            name: Some("Dzen".into()),
            symbol: None,
            image: Some("https://x/y.png".into()),
        };
        let view = TokenView::merge(&mint_with_supply(7), metadata);
        assert_eq!(view.name, "Dzen");
        assert_eq!(view.symbol, DEFAULT_SYMBOL);
        assert_eq!(view.image, "https://x/y.png");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let metadata = TokenMetadata {
            name: Some(String::new()),
            symbol: Some("DZEN".into()),
            image: Some(String::new()),
        };
        let view = TokenView::merge(&mint_with_supply(7), metadata);
        assert_eq!(view.name, DEFAULT_NAME);
        assert_eq!(view.symbol, "DZEN");
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn supply_value_parses_the_stringified_supply() {
        let view = TokenView::merge(&mint_with_supply(1_000_000_000_000), TokenMetadata::default());
        assert_eq!(view.supply_value(), 1_000_000_000_000.0);
    }
}

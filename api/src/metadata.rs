//! The off-chain half: the gateway-hosted metadata document.

use serde::Deserialize;

use crate::error::Call;
use crate::error::TokenDataError;

/// The fields the page cares about. All optional; anything else in the
/// document is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub image: Option<String>,
}

/// Downloads and parses the metadata document.
pub(crate) async fn fetch_metadata(
    client: &reqwest::Client,
    url: &str,
) -> Result<TokenMetadata, TokenDataError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| TokenDataError::Network {
            call: Call::MetadataFetch,
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TokenDataError::Status {
            call: Call::MetadataFetch,
            status,
        });
    }

    response
        .json::<TokenMetadata>()
        .await
        .map_err(|source| TokenDataError::Decode {
            call: Call::MetadataFetch,
            reason: source.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_document() {
        let doc: TokenMetadata = serde_json::from_str(
            r#"{"name":"Dzen","symbol":"DZEN","image":"https://x/y.png"}"#,
        )
        .unwrap();
        assert_eq!(doc.name.as_deref(), Some("Dzen"));
        assert_eq!(doc.symbol.as_deref(), Some("DZEN"));
        assert_eq!(doc.image.as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn missing_fields_parse_as_none() {
        let doc: TokenMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, TokenMetadata::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc: TokenMetadata = serde_json::from_str(
            r#"{"name":"Dzen","description":"milk tea","attributes":[]}"#,
        )
        .unwrap();
        assert_eq!(doc.name.as_deref(), Some("Dzen"));
        assert_eq!(doc.symbol, None);
    }
}

//! The one-shot token data fetch behind the tokenomics section.

use api::SiteConfig;
use api::TokenView;
use dioxus::prelude::*;

/// Starts the acquisition on mount and exposes its outcome.
///
/// Failure is deliberately silent for the visitor: the error is logged once
/// to the console and the resource resolves to `None`, which keeps the
/// loading placeholder on screen. Nothing retries. Unmounting drops the
/// resource and the in-flight future with it.
pub fn use_token_view(config: &'static SiteConfig) -> Resource<Option<TokenView>> {
    use_resource(move || async move {
        match api::fetch_token_view(config).await {
            Ok(view) => Some(view),
            Err(e) => {
                dioxus_logger::tracing::error!("failed to fetch token data: {e}");
                None
            }
        }
    })
}

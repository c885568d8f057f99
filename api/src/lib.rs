//! Data access for the $DZEN one-pager.
//!
//! Everything the page shows about the token comes from two independent
//! reads: the mint account on Solana (raw supply) and a metadata document on
//! an IPFS gateway (name, symbol, image). This crate performs both and
//! merges them into a single [`TokenView`].

pub mod config;
mod error;
mod metadata;
mod mint;
mod rpc;
mod token_view;

pub use config::SiteConfig;
pub use error::Call;
pub use error::TokenDataError;
pub use metadata::TokenMetadata;
pub use mint::Mint;
pub use token_view::TokenView;

/// Fetches and merges the on-chain and off-chain halves of the token data.
///
/// The two calls have no ordering dependency, so they run concurrently; the
/// merge waits for both. If either side fails the whole fetch fails and no
/// partial view is produced.
pub async fn fetch_token_view(config: &SiteConfig) -> Result<TokenView, TokenDataError> {
    let client = reqwest::Client::new();

    let (mint, metadata) = futures::join!(
        rpc::fetch_mint(&client, config.rpc_endpoint, config.mint_address),
        metadata::fetch_metadata(&client, config.metadata_url),
    );

    Ok(TokenView::merge(&mint?, metadata?))
}

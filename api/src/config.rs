//! Compile-time site configuration.
//!
//! The deployed page hard-codes its token and endpoints; they are grouped
//! here so pointing the site at a different mint or gateway is a one-line
//! edit rather than a hunt through the component tree.

/// Everything the page needs to know about the token and where to fetch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base58 address of the SPL token mint.
    pub mint_address: &'static str,
    /// Solana JSON-RPC endpoint, queried at "confirmed" commitment.
    pub rpc_endpoint: &'static str,
    /// Off-chain token metadata document.
    pub metadata_url: &'static str,
    pub page_title: &'static str,
    pub favicon_url: &'static str,
    pub logo_url: &'static str,
    /// Chart palette: total-supply slice, then circulating-supply slice.
    pub chart_colors: (&'static str, &'static str),
}

/// The $DZEN mainnet deployment.
pub const DZEN: SiteConfig = SiteConfig {
    mint_address: "AdPHpzzZSY8QaswH3wLggoaCKVR3mQb71SkM5bXe7WTf",
    rpc_endpoint: "https://blissful-multi-surf.solana-mainnet.quiknode.pro/eac6f47e41719f0d1076eadd88a368a433b64e9b",
    metadata_url: "https://crimson-voluntary-lynx-323.mypinata.cloud/ipfs/bafkreib7k4dlkep76qzv4m3jqmvpvbu2k5l7ti2zgw2ytla3mpnwgg2kfi",
    page_title: "$DZEN",
    favicon_url: "https://i.imgur.com/9XbWFvQ.png",
    logo_url: "https://i.imgur.com/9XbWFvQ.png",
    chart_colors: ("#FF0000", "#000000"),
};

//! SPL mint account decoding.

use std::fmt;
use std::str::FromStr;

use crate::error::Call;
use crate::error::TokenDataError;

/// Owner of every SPL token mint account.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Packed size of a mint account's data.
pub const MINT_ACCOUNT_LEN: usize = 82;

/// A base58-encoded 32-byte Solana account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pubkey([u8; 32]);

impl FromStr for Pubkey {
    type Err = TokenDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| TokenDataError::InvalidMintAddress(s.to_owned()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| TokenDataError::InvalidMintAddress(s.to_owned()))?;
        Ok(Pubkey(bytes))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

/// An SPL mint account, decoded from its packed data.
///
/// Only `supply` feeds the page; the other fields are part of the fixed
/// layout and come along for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mint {
    pub mint_authority: Option<Pubkey>,
    /// Total supply in the mint's smallest unit. No decimal scaling applied.
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
    pub freeze_authority: Option<Pubkey>,
}

impl Mint {
    /// Decodes the 82-byte packed layout: a tagged optional mint authority,
    /// the supply as a little-endian u64 at bytes 36..44, decimals at 44,
    /// an initialized flag at 45, and a tagged optional freeze authority.
    pub fn unpack(data: &[u8]) -> Result<Self, TokenDataError> {
        if data.len() < MINT_ACCOUNT_LEN {
            return Err(decode_err(format!(
                "mint account data is {} bytes, expected {MINT_ACCOUNT_LEN}",
                data.len()
            )));
        }

        let mint_authority = unpack_coption_key(&data[0..36])?;

        let mut supply_bytes = [0u8; 8];
        supply_bytes.copy_from_slice(&data[36..44]);
        let supply = u64::from_le_bytes(supply_bytes);

        let decimals = data[44];
        let is_initialized = match data[45] {
            0 => false,
            1 => true,
            other => {
                return Err(decode_err(format!(
                    "invalid initialized flag: {other}"
                )))
            }
        };

        let freeze_authority = unpack_coption_key(&data[46..82])?;

        Ok(Mint {
            mint_authority,
            supply,
            decimals,
            is_initialized,
            freeze_authority,
        })
    }
}

/// A `COption<Pubkey>`: 4-byte little-endian presence tag, then the key.
fn unpack_coption_key(src: &[u8]) -> Result<Option<Pubkey>, TokenDataError> {
    let (tag, body) = src.split_at(4);
    match tag {
        [0, 0, 0, 0] => Ok(None),
        [1, 0, 0, 0] => {
            let mut key = [0u8; 32];
            key.copy_from_slice(body);
            Ok(Some(Pubkey(key)))
        }
        _ => Err(decode_err("invalid authority tag".to_owned())),
    }
}

fn decode_err(reason: String) -> TokenDataError {
    TokenDataError::Decode {
        call: Call::MintQuery,
        reason,
    }
}

/// Builds packed mint data with the given supply and decimals, both
/// authorities present. Shared by the rpc tests, which wrap it in base64.
#[cfg(test)]
pub(crate) fn packed_mint(supply: u64, decimals: u8) -> Vec<u8> {
    let mut data = vec![0u8; MINT_ACCOUNT_LEN];
    data[0] = 1; // mint authority tag
    data[4..36].copy_from_slice(&[7u8; 32]);
    data[36..44].copy_from_slice(&supply.to_le_bytes());
    data[44] = decimals;
    data[45] = 1; // initialized
    data[46] = 1; // freeze authority tag
    data[50..82].copy_from_slice(&[9u8; 32]);
    data
}

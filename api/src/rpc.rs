//! The on-chain half: a `getAccountInfo` query for the token mint.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::json;

use crate::error::Call;
use crate::error::TokenDataError;
use crate::mint::Mint;
use crate::mint::Pubkey;
use crate::mint::TOKEN_PROGRAM_ID;

/// Consistency level for the read: acknowledged by a supermajority of the
/// cluster, stronger than "processed" but weaker than "finalized".
const COMMITMENT: &str = "confirmed";

#[derive(Deserialize, Debug)]
struct RpcResponse {
    result: Option<AccountInfoResult>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize, Debug)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize, Debug)]
struct AccountInfoResult {
    /// `null` when the queried account does not exist.
    value: Option<Account>,
}

#[derive(Deserialize, Debug)]
struct Account {
    /// `(blob, encoding)` pair; base64 since the request asks for it.
    data: (String, String),
    owner: String,
}

/// Queries the mint account and decodes it.
pub(crate) async fn fetch_mint(
    client: &reqwest::Client,
    endpoint: &str,
    mint_address: &str,
) -> Result<Mint, TokenDataError> {
    let mint: Pubkey = mint_address.parse()?;

    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getAccountInfo",
        "params": [
            mint.to_string(),
            { "encoding": "base64", "commitment": COMMITMENT }
        ]
    });

    let response = client
        .post(endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|source| TokenDataError::Network {
            call: Call::MintQuery,
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TokenDataError::Status {
            call: Call::MintQuery,
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| TokenDataError::Network {
            call: Call::MintQuery,
            source,
        })?;

    parse_mint_response(&body)
}

/// Takes a `getAccountInfo` response body down to the decoded [`Mint`],
/// rejecting accounts the token program does not own.
fn parse_mint_response(body: &str) -> Result<Mint, TokenDataError> {
    let response: RpcResponse = serde_json::from_str(body)
        .map_err(|e| decode_err(format!("malformed json-rpc response: {e}")))?;

    if let Some(error) = response.error {
        return Err(TokenDataError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    let account = response
        .result
        .and_then(|result| result.value)
        .ok_or(TokenDataError::AccountNotFound)?;

    if account.owner != TOKEN_PROGRAM_ID {
        return Err(TokenDataError::WrongOwner {
            owner: account.owner,
        });
    }

    let raw = BASE64
        .decode(account.data.0.as_bytes())
        .map_err(|e| decode_err(format!("account data is not valid base64: {e}")))?;

    Mint::unpack(&raw)
}

fn decode_err(reason: String) -> TokenDataError {
    TokenDataError::Decode {
        call: Call::MintQuery,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mint::packed_mint;

    fn account_info_body(data: &[u8], owner: &str) -> String {
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "apiVersion": "1.18.0", "slot": 311_857_322u64 },
                "value": {
                    "data": [BASE64.encode(data), "base64"],
                    "executable": false,
                    "lamports": 1_461_600u64,
                    "owner": owner,
                    "rentEpoch": 18_446_744_073_709_551_615u64,
                    "space": 82
                }
            }
        })
        .to_string()
    }

    #[test]
    fn parses_a_confirmed_account_response() {
        let body = account_info_body(&packed_mint(1_000_000_000_000, 9), TOKEN_PROGRAM_ID);
        let mint = parse_mint_response(&body).unwrap();
        assert_eq!(mint.supply, 1_000_000_000_000);
    }

    #[test]
    fn surfaces_the_rpc_error_object() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid param: WrongSize" }
        })
        .to_string();
        let err = parse_mint_response(&body).unwrap_err();
        assert!(matches!(err, TokenDataError::Rpc { code: -32602, .. }));
    }

    #[test]
    fn missing_account_is_its_own_failure() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "context": { "slot": 1u64 }, "value": null }
        })
        .to_string();
        let err = parse_mint_response(&body).unwrap_err();
        assert!(matches!(err, TokenDataError::AccountNotFound));
    }

    #[test]
    fn rejects_accounts_outside_the_token_program() {
        let body = account_info_body(
            &packed_mint(5, 0),
            "Vote111111111111111111111111111111111111111",
        );
        let err = parse_mint_response(&body).unwrap_err();
        assert!(matches!(err, TokenDataError::WrongOwner { .. }));
    }

    #[test]
    fn rejects_garbage_bodies() {
        assert!(matches!(
            parse_mint_response("<html>502</html>").unwrap_err(),
            TokenDataError::Decode { call: Call::MintQuery, .. }
        ));
    }
}

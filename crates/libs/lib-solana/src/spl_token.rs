//! SPL token accounts owned by a wallet.
//!
//! [`get_program_accounts`] is a single pass-through `getProgramAccounts`
//! call: no retry, no cache, no pagination. Errors come back exactly as the
//! transport produced them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::rpc::{RpcError, RpcTransport};
use crate::types::Pubkey;

/// SPL Token program.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Size of an SPL token account.
pub const TOKEN_ACCOUNT_LEN: u64 = 165;

/// Byte offset of the owner field inside a token account (after the 32-byte mint).
pub const TOKEN_ACCOUNT_OWNER_OFFSET: u64 = 32;

pub const GET_PROGRAM_ACCOUNTS: &str = "getProgramAccounts";

/// Parameters selecting the token accounts owned by `owner`.
pub fn token_accounts_params(owner: &Pubkey) -> Value {
    json!([
        TOKEN_PROGRAM_ID,
        {
            "encoding": "jsonParsed",
            "filters": [
                { "dataSize": TOKEN_ACCOUNT_LEN },
                { "memcmp": { "offset": TOKEN_ACCOUNT_OWNER_OFFSET, "bytes": owner.to_base58() } }
            ]
        }
    ])
}

/// Query the token accounts owned by `owner` and return the raw RPC result.
pub async fn get_program_accounts<T>(rpc: &T, owner: &Pubkey) -> Result<Value, RpcError>
where
    T: RpcTransport + ?Sized,
{
    debug!(owner = %owner, "Querying token accounts");
    rpc.send(GET_PROGRAM_ACCOUNTS, token_accounts_params(owner)).await
}

/// One parsed token account, as found in a `jsonParsed` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAccountInfo {
    pub address: String,
    pub mint: String,
    pub owner: String,
    pub amount: u64,
    pub decimals: u8,
    pub ui_amount: f64,
}

impl TokenAccountInfo {
    /// Read a `{ pubkey, account: { data: { parsed: { info } } } }` entry.
    /// Entries that are not parsed SPL token accounts yield `None`.
    pub fn from_keyed_account(entry: &Value) -> Option<Self> {
        let info = entry.pointer("/account/data/parsed/info")?;
        let token_amount = info.get("tokenAmount")?;
        let amount = token_amount.get("amount")?.as_str()?.parse().ok()?;
        let decimals = token_amount.get("decimals")?.as_u64()?;

        Some(Self {
            address: entry.get("pubkey")?.as_str()?.to_string(),
            mint: info.get("mint")?.as_str()?.to_string(),
            owner: info.get("owner")?.as_str()?.to_string(),
            amount,
            decimals: u8::try_from(decimals).ok()?,
            ui_amount: token_amount
                .get("uiAmount")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
        })
    }

    /// Parse every recognizable entry of a `getProgramAccounts` result.
    pub fn parse_all(result: &Value) -> Vec<Self> {
        result
            .as_array()
            .map(|entries| entries.iter().filter_map(Self::from_keyed_account).collect())
            .unwrap_or_default()
    }

    /// NFTs are token accounts holding exactly one indivisible token.
    pub fn is_nft(&self) -> bool {
        self.decimals == 0 && self.amount == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    const OWNER: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    /// Records every call and answers with a canned outcome.
    struct RecordingTransport {
        calls: RefCell<Vec<(String, Value)>>,
        reply: fn() -> Result<Value, RpcError>,
    }

    impl RecordingTransport {
        fn new(reply: fn() -> Result<Value, RpcError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait(?Send)]
    impl RpcTransport for RecordingTransport {
        async fn send(&self, method: &str, params: Value) -> Result<Value, RpcError> {
            self.calls.borrow_mut().push((method.to_string(), params));
            (self.reply)()
        }
    }

    fn token_account(address: &str, mint: &str, amount: &str, decimals: u64) -> Value {
        json!({
            "pubkey": address,
            "account": {
                "data": {
                    "program": "spl-token",
                    "parsed": {
                        "type": "account",
                        "info": {
                            "mint": mint,
                            "owner": OWNER,
                            "tokenAmount": { "amount": amount, "decimals": decimals, "uiAmount": 1.0 }
                        }
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_request_shape() {
        let rpc = RecordingTransport::new(|| Ok(json!([])));
        let owner: Pubkey = OWNER.parse().unwrap();

        let result = get_program_accounts(&rpc, &owner).await.unwrap();
        assert_eq!(result, json!([]));

        let calls = rpc.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (method, params) = &calls[0];
        assert_eq!(method, "getProgramAccounts");
        assert_eq!(
            *params,
            json!([
                "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                {
                    "encoding": "jsonParsed",
                    "filters": [
                        { "dataSize": 165 },
                        { "memcmp": { "offset": 32, "bytes": OWNER } }
                    ]
                }
            ])
        );
    }

    #[tokio::test]
    async fn test_result_passes_through_untouched() {
        let rpc = RecordingTransport::new(|| Ok(json!([{ "pubkey": "anything", "weird": true }])));
        let owner: Pubkey = OWNER.parse().unwrap();
        let result = get_program_accounts(&rpc, &owner).await.unwrap();
        assert_eq!(result, json!([{ "pubkey": "anything", "weird": true }]));
    }

    #[tokio::test]
    async fn test_errors_propagate_without_retry() {
        let rpc = RecordingTransport::new(|| Err(RpcError::Transport("connection reset".into())));
        let owner: Pubkey = OWNER.parse().unwrap();

        let err = get_program_accounts(&rpc, &owner).await.unwrap_err();
        assert!(matches!(err, RpcError::Transport(msg) if msg == "connection reset"));
        assert_eq!(rpc.calls.borrow().len(), 1);
    }

    #[test]
    fn test_parse_token_accounts() {
        let result = json!([
            token_account("Acc1", "MintA", "1", 0),
            token_account("Acc2", "MintB", "2500000", 6),
            { "pubkey": "Acc3", "account": { "data": ["AAAA", "base64"] } }
        ]);

        let accounts = TokenAccountInfo::parse_all(&result);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].mint, "MintA");
        assert!(accounts[0].is_nft());
        assert_eq!(accounts[1].amount, 2_500_000);
        assert!(!accounts[1].is_nft());

        assert!(TokenAccountInfo::parse_all(&Value::Null).is_empty());
    }
}

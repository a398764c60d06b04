//! Wallet session errors.

use lib_core::AppError;
use lib_solana::RpcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    /// `use_wallet` was called with no session in scope.
    #[error("Missing wallet context")]
    MissingContext,

    /// The operation needs a connected wallet.
    #[error("Wallet is not connected")]
    NotConnected,

    /// The session has been torn down and holds no handle.
    #[error("Wallet handle has been released")]
    Released,

    /// The wallet adapter refused or failed a request.
    #[error("Wallet adapter error: {0}")]
    Adapter(String),

    #[error(transparent)]
    Storage(#[from] AppError),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::MissingContext => AppError::Config(WalletError::MissingContext.to_string()),
            WalletError::Storage(inner) => inner,
            WalletError::Rpc(inner) => inner.into(),
            other => AppError::Wallet(other.to_string()),
        }
    }
}

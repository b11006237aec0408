use thiserror::Error;

/// Address and transaction assembly errors.
#[derive(Debug, Error)]
pub enum TxError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid transaction id: {0}")]
    InvalidTxid(String),

    #[error("wire encoding error: {0}")]
    Wire(#[from] coin_wire::WireError),
}

use bouquet_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("No slot at path {0}")]
    UnknownSlot(String),

    #[error("Slot {0} is fixed and cannot be changed")]
    FixedSlot(String),

    #[error("{option:?} is not an option for slot {path}")]
    InvalidOption { path: String, option: String },

    #[error("Select all options before adding {0} to the cart")]
    Incomplete(String),

    #[error("{0} is out of stock")]
    OutOfStock(String),

    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

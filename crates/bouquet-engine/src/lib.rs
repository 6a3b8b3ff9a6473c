//! Bundle configuration sessions and the cart they feed

pub mod cart;
pub mod configurator;
pub mod error;

pub use cart::{Cart, CartLine};
pub use configurator::{ConfigChange, ConfigChangeHandler, Configurator};
pub use error::{EngineError, Result};

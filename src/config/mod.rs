pub mod currency;
pub mod defaults;
pub mod loader;
pub mod types;

pub use currency::{Currency, CurrencyConverter};
pub use defaults::{
    DEFAULT_CAPACITY, DEFAULT_COMMISSION_PERCENT, DEFAULT_FLAT_PRICE, MAX_CAPACITY,
};
pub use loader::ConfigError;
pub use types::*;

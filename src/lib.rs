pub mod coins;
pub mod error;
pub mod permutations;

pub use coins::{coin_name, eqn, search, solutions, use_commands, CoinSet, Search, COINS, TARGET};
pub use error::{Error, Result};
pub use permutations::{permutations, Permutations};

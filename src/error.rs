use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected {expected} coins, found {found}")]
    WrongCoinCount { expected: usize, found: usize },

    #[error("coin {0} appears more than once")]
    DuplicateCoin(i32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

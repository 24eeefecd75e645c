/*
The monument in the central hall of the ruins:

    _ + _ * _^2 + _^3 - _ = 399

Things of interest here:
- red coin
- corroded coin
- shiny coin
- concave coin
- blue coin
*/

use std::{convert::TryFrom, fmt};

use crate::{
    error::{Error, Result},
    permutations::permutations,
};

pub const COINS: [i32; 5] = [2, 3, 5, 7, 9];
pub const TARGET: i32 = 399;

const COIN_NAMES: [(i32, &str); 5] = [
    (2, "red coin"),
    (3, "corroded coin"),
    (5, "shiny coin"),
    (7, "concave coin"),
    (9, "blue coin"),
];

/// Five distinct coin values, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoinSet([i32; 5]);

impl CoinSet {
    pub fn from_slice(values: &[i32]) -> Result<Self> {
        let coins = <[i32; 5]>::try_from(values).map_err(|_| Error::WrongCoinCount {
            expected: COINS.len(),
            found: values.len(),
        })?;

        for (i, coin) in coins.iter().enumerate() {
            if coins[..i].contains(coin) {
                return Err(Error::DuplicateCoin(*coin));
            }
        }

        Ok(Self(coins))
    }

    pub fn coins(self) -> [i32; 5] {
        self.0
    }
}

impl Default for CoinSet {
    fn default() -> Self {
        Self(COINS)
    }
}

impl fmt::Display for CoinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "({}, {}, {}, {}, {})", a, b, c, d, e)
    }
}

/// `_ + _ * _^2 + _^3 - _`
#[inline]
pub fn eqn(&[a, b, c, d, e]: &[i32; 5]) -> i32 {
    a + b * c * c + d * d * d - e
}

pub fn coin_name(value: i32) -> Option<&'static str> {
    COIN_NAMES
        .iter()
        .find(|&&(coin, _)| coin == value)
        .map(|&(_, name)| name)
}

/// The commands that put the coins into the monument's slots, left to right.
pub fn use_commands(order: &[i32; 5]) -> Vec<String> {
    order
        .iter()
        .map(|&coin| match coin_name(coin) {
            Some(name) => format!("use {}", name),
            None => format!("use coin {}", coin),
        })
        .collect()
}

pub fn solutions(coins: CoinSet) -> impl Iterator<Item = [i32; 5]> {
    permutations(coins.coins()).filter(|perm| eqn(perm) == TARGET)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Search {
    pub matches: Vec<[i32; 5]>,
    pub evaluated: usize,
}

pub fn search(coins: CoinSet) -> Search {
    let mut search = Search::default();

    for perm in permutations(coins.coins()) {
        search.evaluated += 1;
        if eqn(&perm) == TARGET {
            search.matches.push(perm);
        }
    }

    search
}

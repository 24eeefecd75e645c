use eyre::Result;

use synacor_coins::{search, use_commands, CoinSet, TARGET};

fn main() -> Result<()> {
    color_eyre::install()?;

    let coins = CoinSet::default();
    eprintln!("_ + _ * _^2 + _^3 - _ = {} with {}", TARGET, coins);

    let search = search(coins);
    for &[a, b, c, d, e] in &search.matches {
        println!("({}, {}, {}, {}, {})", a, b, c, d, e);

        for command in use_commands(&[a, b, c, d, e]) {
            eprintln!("{}", command);
        }
    }

    eprintln!(
        "{} of {} orderings match",
        search.matches.len(),
        search.evaluated
    );

    Ok(())
}

//! Sorts amounts of money given on the command line.
//!
//! ```text
//! % wallet 42.50 13.37 0.99 100.00 0.01 NaN
//! unordered: NaN
//! $0.01
//! $0.99
//! $13.37
//! $42.50
//! $100.00
//! ```
//!
//! Negative amounts must follow `--`, as in `wallet -s -- -3.07 2.50`.

use threeway::logging::{RejectedEvent, ThreewayLogger};
use threeway::{Config, Money};

fn main() {
    if let Err(error) = run(std::env::args().skip(1)) {
        eprintln!("wallet: {}", error);
        eprintln!("usage: wallet [-s] [-u exclude|trailing|unspecified] [-r] [-l FILE] [--] AMOUNT...");
        std::process::exit(1);
    }
}

fn run<I: Iterator<Item=String>>(args: I) -> Result<(), String> {
    let (config, amounts) = Config::from_args(args)?;
    let logger = config.logger()?;
    let sorter = config.sorter(logger.clone());

    let mut floats = Vec::with_capacity(amounts.len());
    for text in amounts.iter() {
        let digits = text.strip_prefix('$').unwrap_or(text);
        match digits.parse::<f64>() {
            Ok(amount) => floats.push(amount),
            Err(error) => reject(&logger, "amount", text, error.to_string()),
        }
    }

    let unordered = sorter.sort_partial(&mut floats);
    if !unordered.is_empty() {
        let listed = unordered.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        println!("unordered: {}", listed.join(" "));
    }

    let mut wallets = Vec::with_capacity(floats.len());
    for amount in floats {
        match Money::try_from(amount) {
            Ok(money) => wallets.push(money),
            Err(error) => reject(&logger, error.field(), &amount.to_string(), error.reason().to_string()),
        }
    }

    sorter.sort(&mut wallets);
    for money in wallets.iter() {
        println!("{}", money);
    }
    Ok(())
}

fn reject(logger: &Option<ThreewayLogger>, field: &str, input: &str, reason: String) {
    eprintln!("wallet: rejected {:?} ({}: {})", input, field, reason);
    if let Some(logger) = logger {
        logger.log(RejectedEvent { field: field.to_string(), input: input.to_string(), reason }.into());
    }
}

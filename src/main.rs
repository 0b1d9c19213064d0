use std::env;
use std::io::{self, Write};

use anyhow::{anyhow, Result};

use branchbook::banking::accounts::Account;
use branchbook::config::Config;
use branchbook::teller::{self, COUNTER_ACCOUNTS, COUNTER_ROUNDS};
use branchbook::{data, report};

fn main() -> Result<()> {
    env_logger::init();

    let config = match Config::from_args(env::args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    let mut bank = data::load_bank(&config)?;

    let mut out = io::stdout().lock();
    report::write_customers(&mut out, &bank)?;
    report::write_account_details(&mut out, &bank)?;

    let mut input = io::stdin().lock();
    teller::serve_counter(&mut input, &mut out, &mut bank, &COUNTER_ACCOUNTS, COUNTER_ROUNDS)?;

    let receipt_accounts = COUNTER_ACCOUNTS
        .iter()
        .map(|&position| {
            bank.account_at(position)
                .ok_or_else(|| anyhow!("no account at position {}", position + 1))
        })
        .collect::<Result<Vec<&Account>>>()?;
    data::export_receipt(&config, &receipt_accounts)?;

    writeln!(out, "A receipt file has been made detailing these transactions.")?;
    writeln!(out, "---------")?;
    writeln!(out, "Thank you & Goodbye!")?;

    Ok(())
}

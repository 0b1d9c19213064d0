use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::banking::accounts::Account;
use crate::banking::bank::Bank;
use crate::banking::{BankAccount, DepositError};

/// Load-order positions of the accounts served at the counter: the first
/// checking account and the last savings account of a 3 + 3 ledger.
pub const COUNTER_ACCOUNTS: [usize; 2] = [0, 5];
pub const COUNTER_ROUNDS: usize = 2;

#[derive(Debug, PartialEq)]
pub enum DepositOutcome {
    Accepted(Decimal),
    Rejected(DepositError),
    /// The entered amount was not a number.
    Skipped,
}

pub fn prompt_deposit<R: BufRead, W: Write>(input: &mut R, output: &mut W, account: &mut Account) -> Result<DepositOutcome> {
    write!(output, "How much would you like to deposit: ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;

    let amount = match line.trim().parse::<Decimal>() {
        Ok(amount) if read > 0 => amount,
        _ => {
            warn!("invalid deposit input, account={}, input={:?}", account.number(), line.trim());
            writeln!(output, "Invalid input. Please enter a number.")?;
            return Ok(DepositOutcome::Skipped);
        },
    };

    writeln!(output, "Account Number: {}", account.number())?;
    writeln!(output, "Deposit: {}", amount)?;

    match account.deposit(amount) {
        Ok(balance) => {
            debug!("deposit accepted, account={}, amount={}, balance={}", account.number(), amount, balance);
            writeln!(output, "Balance: {}", balance)?;
            writeln!(output, "Success!")?;
            Ok(DepositOutcome::Accepted(balance))
        },
        Err(err) => {
            warn!("deposit rejected, account={}, err={}", account.number(), err);
            match &err {
                DepositError::BelowMinimum { minimum, .. } => {
                    writeln!(output, "Minimum Amount: {}", minimum)?;
                    writeln!(output, "Insufficient funds")?;
                },
                DepositError::AboveMaximum { maximum, .. } => {
                    writeln!(output, "Max Amount: {}", maximum)?;
                    writeln!(output, "Deposit exceeded maximum amount")?;
                },
                DepositError::InvalidAmount => writeln!(output, "Invalid amount")?,
                DepositError::Overflow { .. } => writeln!(output, "Deposit exceeds what this account can hold")?,
            }
            Ok(DepositOutcome::Rejected(err))
        },
    }
}

/// Prompts once per account in `positions`, `rounds` times over.
pub fn serve_counter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    bank: &mut Bank,
    positions: &[usize],
    rounds: usize,
) -> Result<Vec<DepositOutcome>> {
    let mut outcomes = Vec::with_capacity(positions.len() * rounds);

    for _ in 0..rounds {
        for &position in positions {
            let account = bank
                .account_at_mut(position)
                .ok_or_else(|| anyhow!("no account at position {}", position + 1))?;
            outcomes.push(prompt_deposit(input, output, account)?);
        }
    }

    Ok(outcomes)
}

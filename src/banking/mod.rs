use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod accounts;
pub mod bank;
pub mod customer;

#[cfg(test)]
mod account_tests;

use accounts::{Account, Checking, Savings};

/// Branch number shared by every account.
pub const BRANCH_NUMBER: u32 = 1246;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
}

#[derive(Debug, PartialEq, Error)]
pub enum DepositError {
    #[error("deposit of {amount} is below the minimum of {minimum}")]
    BelowMinimum { amount: Decimal, minimum: Decimal },
    #[error("deposit of {amount} exceeds the maximum of {maximum}")]
    AboveMaximum { amount: Decimal, maximum: Decimal },
    #[error("invalid amount")]
    InvalidAmount,
    #[error("deposit of {amount} would overflow the balance")]
    Overflow { amount: Decimal },
}

#[enum_dispatch]
pub trait BankAccount {
    fn number(&self) -> &str;
    fn account_type(&self) -> &str;
    fn balance(&self) -> Decimal;
    fn kind(&self) -> AccountKind;

    /// Minimum deposit for checking accounts, maximum deposit for savings.
    fn limit(&self) -> Decimal;

    /// Applies the deposit and returns the new balance. A rejected deposit
    /// leaves the balance untouched.
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, DepositError>;
}

use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::accounts::{Account, Checking, Savings, DEFAULT_MAXIMUM_DEPOSIT, DEFAULT_MINIMUM_DEPOSIT};
use super::bank::Bank;
use super::customer::Customer;
use super::*;

fn checking(balance: Decimal) -> Account {
    Account::open(AccountKind::Checking, "C100".into(), "Checking".into(), balance, None)
}

fn savings(balance: Decimal) -> Account {
    Account::open(AccountKind::Savings, "S100".into(), "Savings".into(), balance, None)
}

#[test]
fn test_open_uses_type_defaults() {
    let account = checking(dec!(0));
    assert_eq!(account.kind(), AccountKind::Checking);
    assert_eq!(account.limit(), DEFAULT_MINIMUM_DEPOSIT);

    let account = savings(dec!(0));
    assert_eq!(account.kind(), AccountKind::Savings);
    assert_eq!(account.limit(), DEFAULT_MAXIMUM_DEPOSIT);
}

#[test]
fn test_open_with_custom_limit() {
    let account = Account::open(AccountKind::Savings, "S1".into(), "Savings".into(), dec!(10), Some(dec!(75)));
    assert_eq!(account.limit(), dec!(75));
}

#[test]
fn test_checking_deposit() -> Result<()> {
    let mut account = checking(dec!(100.25));
    let balance = account.deposit(dec!(50))?;

    assert_eq!(balance, dec!(150.25));
    assert_eq!(account.balance(), dec!(150.25));

    Ok(())
}

#[test]
fn test_checking_deposit_at_minimum() -> Result<()> {
    let mut account = checking(dec!(0));
    account.deposit(DEFAULT_MINIMUM_DEPOSIT)?;

    assert_eq!(account.balance(), dec!(50));

    Ok(())
}

#[test]
fn test_checking_deposit_below_minimum() -> Result<()> {
    let mut account = checking(dec!(100));
    if let Err(err) = account.deposit(dec!(49.99)) {
        assert_eq!(
            err,
            DepositError::BelowMinimum {
                amount: dec!(49.99),
                minimum: dec!(50)
            }
        );
    } else {
        bail!("deposit below the minimum should be rejected");
    }

    assert_eq!(account.balance(), dec!(100));

    Ok(())
}

#[test]
fn test_checking_custom_minimum() -> Result<()> {
    let mut account = Checking::new("C2".into(), "Checking".into(), dec!(0), dec!(10));
    account.deposit(dec!(12.5))?;

    assert_eq!(account.balance(), dec!(12.5));
    assert_eq!(account.minimum(), dec!(10));

    Ok(())
}

#[test]
fn test_savings_deposit() -> Result<()> {
    let mut account = savings(dec!(1000));
    let balance = account.deposit(dec!(499.99))?;

    assert_eq!(balance, dec!(1499.99));
    assert_eq!(account.balance(), dec!(1499.99));

    Ok(())
}

#[test]
fn test_savings_deposit_at_maximum() -> Result<()> {
    let mut account = savings(dec!(0));
    account.deposit(DEFAULT_MAXIMUM_DEPOSIT)?;

    assert_eq!(account.balance(), dec!(500));

    Ok(())
}

#[test]
fn test_savings_deposit_above_maximum() -> Result<()> {
    let mut account = savings(dec!(20));
    if let Err(err) = account.deposit(dec!(500.01)) {
        assert_eq!(
            err,
            DepositError::AboveMaximum {
                amount: dec!(500.01),
                maximum: dec!(500)
            }
        );
    } else {
        bail!("deposit above the maximum should be rejected");
    }

    assert_eq!(account.balance(), dec!(20));

    Ok(())
}

#[test]
fn test_savings_custom_maximum() {
    let mut account = Savings::new("S2".into(), "Savings".into(), dec!(5), dec!(100));

    assert_eq!(
        account.deposit(dec!(101)),
        Err(DepositError::AboveMaximum {
            amount: dec!(101),
            maximum: dec!(100)
        })
    );
    assert_eq!(account.balance(), dec!(5));
    assert_eq!(account.maximum(), dec!(100));
}

#[test]
fn test_non_positive_deposit_rejected() {
    let mut account = savings(dec!(20));
    assert_eq!(account.deposit(dec!(-5)), Err(DepositError::InvalidAmount));
    assert_eq!(account.deposit(dec!(0)), Err(DepositError::InvalidAmount));
    assert_eq!(account.balance(), dec!(20));

    let mut account = Checking::new("C3".into(), "Checking".into(), dec!(20), dec!(-10));
    assert_eq!(account.deposit(dec!(-5)), Err(DepositError::InvalidAmount));
    assert_eq!(account.balance(), dec!(20));
}

#[test]
fn test_deposit_overflow_leaves_balance() {
    let mut account = checking(Decimal::MAX);
    assert_eq!(
        account.deposit(dec!(50)),
        Err(DepositError::Overflow { amount: dec!(50) })
    );
    assert_eq!(account.balance(), Decimal::MAX);

    let mut account = savings(Decimal::MAX);
    assert_eq!(account.deposit(dec!(1)), Err(DepositError::Overflow { amount: dec!(1) }));
    assert_eq!(account.balance(), Decimal::MAX);
}

#[test]
fn test_account_display() {
    let account = Account::open(AccountKind::Checking, "C7".into(), "Checking".into(), dec!(12.50), None);
    assert_eq!(
        account.to_string(),
        "Account Number: C7\n\
         Account Type: Checking\n\
         Account Balance: $12.50\n\
         Minimum Amount: $50.00\n\
         Branch Number: 1246"
    );

    let account = Account::open(AccountKind::Savings, "S7".into(), "Savings".into(), dec!(3), Some(dec!(90)));
    assert_eq!(
        account.to_string(),
        "Account Number: S7\n\
         Account Type: Savings\n\
         Account Balance: $3\n\
         Maximum Amount: $90\n\
         Branch Number: 1246"
    );
}

#[test]
fn test_bank_lookups() -> Result<()> {
    let accounts = vec![
        Account::open(AccountKind::Checking, "C1".into(), "Checking".into(), dec!(1), None),
        Account::open(AccountKind::Savings, "S1".into(), "Savings".into(), dec!(2), None),
    ];
    let customers = vec![Customer::new(7, "Ada".into(), 36, "Perth".into(), "S1".into())];
    let mut bank = Bank::new(accounts, customers);

    let customer = bank.customers()[0].clone();
    match bank.customer_account(&customer) {
        Some(account) => assert_eq!(account.number(), "S1"),
        None => bail!("customer should be linked to S1"),
    }

    assert_eq!(bank.account_at(0).map(|account| account.number()), Some("C1"));
    assert!(bank.account_at(2).is_none());
    assert!(bank.account("X9").is_none());

    if let Some(account) = bank.account_at_mut(0) {
        account.deposit(dec!(60))?;
    }
    assert_eq!(bank.account_at(0).map(|account| account.balance()), Some(dec!(61)));

    if let Some(account) = bank.account_at_mut(1) {
        account.deposit(dec!(8))?;
    }
    assert_eq!(bank.account("S1").map(|account| account.balance()), Some(dec!(10)));

    Ok(())
}

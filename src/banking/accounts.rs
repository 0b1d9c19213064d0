use std::fmt;

use enum_dispatch::enum_dispatch;
use getset::CopyGetters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{AccountKind, BankAccount, DepositError, BRANCH_NUMBER};

pub const DEFAULT_MINIMUM_DEPOSIT: Decimal = dec!(50.00);
pub const DEFAULT_MAXIMUM_DEPOSIT: Decimal = dec!(500.00);

#[enum_dispatch(BankAccount)]
#[derive(Debug, Clone, PartialEq)]
pub enum Account {
    Checking,
    Savings,
}

impl Account {
    /// Builds the variant matching `kind`, falling back to the type default
    /// when no limit is given.
    pub fn open(
        kind: AccountKind,
        number: String,
        account_type: String,
        balance: Decimal,
        limit: Option<Decimal>,
    ) -> Account {
        match kind {
            AccountKind::Checking => Account::Checking(Checking::new(
                number,
                account_type,
                balance,
                limit.unwrap_or(DEFAULT_MINIMUM_DEPOSIT),
            )),
            AccountKind::Savings => Account::Savings(Savings::new(
                number,
                account_type,
                balance,
                limit.unwrap_or(DEFAULT_MAXIMUM_DEPOSIT),
            )),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Account::Checking(account) => write!(f, "{}", account),
            Account::Savings(account) => write!(f, "{}", account),
        }
    }
}

#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct Checking {
    number: String,
    account_type: String,
    balance: Decimal,
    #[getset(get_copy = "pub")]
    minimum: Decimal,
}

impl Checking {
    pub fn new(number: String, account_type: String, balance: Decimal, minimum: Decimal) -> Checking {
        Checking {
            number,
            account_type,
            balance,
            minimum,
        }
    }
}

impl BankAccount for Checking {
    fn number(&self) -> &str {
        &self.number
    }

    fn account_type(&self) -> &str {
        &self.account_type
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn limit(&self) -> Decimal {
        self.minimum()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, DepositError> {
        if amount <= Decimal::ZERO {
            return Err(DepositError::InvalidAmount);
        }

        if amount < self.minimum {
            return Err(DepositError::BelowMinimum {
                amount,
                minimum: self.minimum,
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DepositError::Overflow { amount })?;

        Ok(self.balance)
    }
}

impl fmt::Display for Checking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Account Type: {}", self.account_type)?;
        writeln!(f, "Account Balance: ${}", self.balance)?;
        writeln!(f, "Minimum Amount: ${}", self.minimum)?;
        write!(f, "Branch Number: {}", BRANCH_NUMBER)
    }
}

#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct Savings {
    number: String,
    account_type: String,
    balance: Decimal,
    #[getset(get_copy = "pub")]
    maximum: Decimal,
}

impl Savings {
    pub fn new(number: String, account_type: String, balance: Decimal, maximum: Decimal) -> Savings {
        Savings {
            number,
            account_type,
            balance,
            maximum,
        }
    }
}

impl BankAccount for Savings {
    fn number(&self) -> &str {
        &self.number
    }

    fn account_type(&self) -> &str {
        &self.account_type
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn limit(&self) -> Decimal {
        self.maximum()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, DepositError> {
        if amount <= Decimal::ZERO {
            return Err(DepositError::InvalidAmount);
        }

        if amount > self.maximum {
            return Err(DepositError::AboveMaximum {
                amount,
                maximum: self.maximum,
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DepositError::Overflow { amount })?;

        Ok(self.balance)
    }
}

impl fmt::Display for Savings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Account Type: {}", self.account_type)?;
        writeln!(f, "Account Balance: ${}", self.balance)?;
        writeln!(f, "Maximum Amount: ${}", self.maximum)?;
        write!(f, "Branch Number: {}", BRANCH_NUMBER)
    }
}

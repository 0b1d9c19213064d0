use super::accounts::Account;
use super::customer::Customer;
use super::BankAccount;

/// Accounts are kept in load order: checking records first, then savings.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
    customers: Vec<Customer>,
}

impl Bank {
    pub fn new(accounts: Vec<Account>, customers: Vec<Customer>) -> Bank {
        Bank { accounts, customers }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn account_at(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn account_at_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn customer_account(&self, customer: &Customer) -> Option<&Account> {
        self.account(customer.account_number())
    }
}

use crate::account::{Account, BankAccount};

/// Savings account: a core [`Account`] that also records its holder.
#[derive(Debug)]
pub struct SavingsAccount {
    account: Account,
    owner_name: String,
}

impl SavingsAccount {
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            account: Account::new(),
            owner_name: owner_name.into(),
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }
}

impl BankAccount for SavingsAccount {
    fn account(&self) -> &Account {
        &self.account
    }

    fn owner_name(&self) -> Option<&str> {
        Some(&self.owner_name)
    }
}

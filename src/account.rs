use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::{debug, info};

use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account is frozen")]
    Frozen,
    #[error("{} amount must be positive", .kind.noun())]
    InvalidAmount { kind: TransactionKind },
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Balance would overflow or lose precision")]
    Overflow,
}

#[derive(Debug, Default)]
struct Ledger {
    balance: Decimal,
    frozen: bool,
    history: Vec<Transaction>,
}

impl Ledger {
    /// Validates a balance movement against the current state.
    /// Checks run in a fixed order: frozen, amount, funds, then precision.
    fn handle(&self, kind: TransactionKind, amount: Decimal) -> Result<Transaction, AccountError> {
        if self.frozen {
            return Err(AccountError::Frozen);
        }
        if amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount { kind });
        }
        if kind == TransactionKind::Withdraw && amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        let tx = Transaction::new(kind, amount);
        // Decimal rounds a sum that needs more than 28 significant digits,
        // an exact sum never has fewer decimal places than its operands
        let exact = self
            .balance
            .checked_add(tx.signed_amount())
            .is_some_and(|new| new.scale() >= self.balance.scale().max(amount.scale()));
        if !exact {
            return Err(AccountError::Overflow);
        }
        Ok(tx)
    }

    fn apply(&mut self, tx: Transaction) {
        // validated by `handle`: exact, never negative
        self.balance += tx.signed_amount();
        self.history.push(tx);
    }
}

/// Core account: balance, frozen flag and transaction history behind a
/// single lock, so every deposit or withdrawal is one critical section.
#[derive(Debug, Default)]
pub struct Account {
    ledger: Mutex<Ledger>,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        // Ledger is only mutated after validation, a panicking holder cannot
        // leave it half-updated
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transact(&self, kind: TransactionKind, amount: Decimal) -> Result<(), AccountError> {
        let mut ledger = self.ledger();
        match ledger.handle(kind, amount) {
            Ok(tx) => {
                ledger.apply(tx);
                debug!(%kind, %amount, balance = %ledger.balance, "transaction applied");
                Ok(())
            }
            Err(err) => {
                debug!(%kind, %amount, %err, "transaction rejected");
                Err(err)
            }
        }
    }

    pub fn deposit(&self, amount: Decimal) -> Result<(), AccountError> {
        self.transact(TransactionKind::Deposit, amount)
    }

    pub fn withdraw(&self, amount: Decimal) -> Result<(), AccountError> {
        self.transact(TransactionKind::Withdraw, amount)
    }

    pub fn balance(&self) -> Decimal {
        self.ledger().balance
    }

    pub fn is_frozen(&self) -> bool {
        self.ledger().frozen
    }

    pub fn freeze(&self) {
        self.ledger().frozen = true;
        info!("account frozen");
    }

    pub fn unfreeze(&self) {
        self.ledger().frozen = false;
        info!("account unfrozen");
    }

    /// Snapshot of the history in chronological order.
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.ledger().history.clone()
    }
}

/// Capability set shared by every account variant.
///
/// Variants embed an [`Account`] and expose it through [`BankAccount::account`];
/// all behavior is provided by that core account.
pub trait BankAccount: Send + Sync {
    fn account(&self) -> &Account;

    /// Name of the account holder, for variants that track one.
    fn owner_name(&self) -> Option<&str> {
        None
    }

    fn deposit(&self, amount: Decimal) -> Result<(), AccountError> {
        self.account().deposit(amount)
    }

    fn withdraw(&self, amount: Decimal) -> Result<(), AccountError> {
        self.account().withdraw(amount)
    }

    fn balance(&self) -> Decimal {
        self.account().balance()
    }

    fn is_frozen(&self) -> bool {
        self.account().is_frozen()
    }

    fn freeze(&self) {
        self.account().freeze()
    }

    fn unfreeze(&self) {
        self.account().unfreeze()
    }

    fn transaction_history(&self) -> Vec<Transaction> {
        self.account().transaction_history()
    }
}

impl BankAccount for Account {
    fn account(&self) -> &Account {
        self
    }
}

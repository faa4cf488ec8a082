use std::{
    collections::BTreeMap,
    io::{self, Write},
    sync::Arc,
};

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    account::BankAccount,
    transaction::{Php, Transaction},
};

pub type AccountId = u32;

/// Registry of accounts keyed by sequentially assigned ids.
///
/// Registration takes `&mut self`; accounts themselves are shared through
/// [`Arc`] and can be used from other threads while the manager holds them.
pub struct AccountManager {
    accounts: BTreeMap<AccountId, Arc<dyn BankAccount>>,
    next_account_id: AccountId,
}

impl Default for AccountManager {
    fn default() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_account_id: 1,
        }
    }
}

impl AccountManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the account under the next free id. Ids start at 1 and are
    /// never reused.
    pub fn add_account(&mut self, account: Arc<dyn BankAccount>) -> AccountId {
        let id = self.next_account_id;
        self.next_account_id += 1;
        self.accounts.insert(id, account);
        info!(account_id = id, "account registered");
        id
    }

    pub fn get_account(&self, id: AccountId) -> Option<Arc<dyn BankAccount>> {
        self.accounts.get(&id).cloned()
    }

    /// Accounts in ascending id order.
    pub fn accounts(&self) -> impl Iterator<Item = (AccountId, &dyn BankAccount)> {
        self.accounts.iter().map(|(id, acc)| (*id, acc.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Prints every account with its balance to stdout.
    pub fn list_accounts(&self) -> io::Result<()> {
        self.write_accounts(&mut io::stdout().lock())
    }

    pub fn write_accounts<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for (id, acc) in self.accounts() {
            writeln!(output, "Account ID: {id}, Balance: {}", Php(acc.balance()))?;
        }
        Ok(())
    }

    /// Transactions with an amount strictly above `threshold`, in input order.
    pub fn filter_transactions_above(threshold: Decimal, txs: &[Transaction]) -> Vec<Transaction> {
        txs.iter()
            .filter(|tx| tx.amount() > threshold)
            .copied()
            .collect()
    }

    /// Copy of `txs` sorted by ascending amount. Equal amounts keep their
    /// relative order.
    pub fn sort_transactions_by_amount(txs: &[Transaction]) -> Vec<Transaction> {
        let mut sorted = txs.to_vec();
        sorted.sort_by_key(Transaction::amount);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{account::Account, savings::SavingsAccount, transaction::TransactionKind};

    use super::*;

    fn amounts(txs: &[Transaction]) -> Vec<Decimal> {
        txs.iter().map(Transaction::amount).collect()
    }

    #[test]
    fn assigns_sequential_ids() {
        let mut manager = AccountManager::new();
        assert!(manager.is_empty());
        let savings = Arc::new(SavingsAccount::new("Christine"));
        assert_eq!(manager.add_account(savings.clone()), 1);
        assert_eq!(manager.add_account(Arc::new(Account::new())), 2);
        assert_eq!(manager.add_account(Arc::new(Account::new())), 3);
        assert_eq!(manager.len(), 3);

        // registered handle and caller handle share state
        savings.deposit(dec!(10)).unwrap();
        let acc = manager.get_account(1).unwrap();
        assert_eq!(acc.balance(), dec!(10));
        assert_eq!(acc.owner_name(), Some("Christine"));

        assert!(manager.get_account(0).is_none());
        assert!(manager.get_account(99).is_none());
    }

    #[test]
    fn write_accounts() {
        let mut manager = AccountManager::new();
        let first = Arc::new(SavingsAccount::new("Christine"));
        first.deposit(dec!(1000)).unwrap();
        first.withdraw(dec!(499.5)).unwrap();
        manager.add_account(first);
        manager.add_account(Arc::new(Account::new()));

        let mut output = Vec::new();
        manager.write_accounts(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Account ID: 1, Balance: Php 500.5\nAccount ID: 2, Balance: Php 0.0\n"
        );
        manager.list_accounts().unwrap();
    }

    #[test]
    fn filter_and_sort_history() {
        let acc = SavingsAccount::new("Christine");
        acc.deposit(dec!(1000)).unwrap();
        acc.withdraw(dec!(500)).unwrap();
        acc.withdraw(dec!(100)).unwrap();
        let history = acc.transaction_history();

        let filtered = AccountManager::filter_transactions_above(dec!(500), &history);
        assert_eq!(amounts(&filtered), vec![dec!(1000)]);

        let filtered = AccountManager::filter_transactions_above(dec!(400), &history);
        assert_eq!(amounts(&filtered), vec![dec!(1000), dec!(500)]);

        let sorted = AccountManager::sort_transactions_by_amount(&history);
        assert_eq!(amounts(&sorted), vec![dec!(100), dec!(500), dec!(1000)]);
        // input untouched
        assert_eq!(amounts(&history), vec![dec!(1000), dec!(500), dec!(100)]);
    }

    #[test]
    fn sort_is_stable() {
        let txs = vec![
            Transaction::new(TransactionKind::Withdraw, dec!(5)),
            Transaction::new(TransactionKind::Deposit, dec!(1)),
            Transaction::new(TransactionKind::Deposit, dec!(5)),
            Transaction::new(TransactionKind::Withdraw, dec!(5.00)),
        ];
        let sorted = AccountManager::sort_transactions_by_amount(&txs);
        assert_eq!(
            sorted.iter().map(Transaction::kind).collect::<Vec<_>>(),
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdraw,
                TransactionKind::Deposit,
                TransactionKind::Withdraw,
            ]
        );
        assert_eq!(sorted[1], txs[0]);
        assert_eq!(sorted[3], txs[3]);
    }

    #[test]
    fn empty_lists() {
        assert!(AccountManager::filter_transactions_above(dec!(500), &[]).is_empty());
        assert!(AccountManager::sort_transactions_by_amount(&[]).is_empty());
    }
}

use std::{collections::HashMap, sync::Arc};

use rust_decimal::Decimal;

use crate::{
    command::{AccountCommand, OperationKind},
    manager::{AccountId, AccountManager},
    savings::SavingsAccount,
};

use super::{TransactionProcessError, TransactionProcessor};

/// Opens one savings account per owner, on their first well-formed operation.
#[derive(Default)]
pub struct InMemoryTransactionProcessor {
    owners: HashMap<String, (AccountId, Arc<SavingsAccount>)>,
    pub manager: AccountManager,
}

impl InMemoryTransactionProcessor {
    fn open_account(&mut self, owner: &str) -> (AccountId, Arc<SavingsAccount>) {
        if let Some((id, acc)) = self.owners.get(owner) {
            return (*id, Arc::clone(acc));
        }
        let acc = Arc::new(SavingsAccount::new(owner));
        let id = self.manager.add_account(acc.clone());
        self.owners.insert(owner.to_owned(), (id, Arc::clone(&acc)));
        (id, acc)
    }
}

impl TransactionProcessor for InMemoryTransactionProcessor {
    fn process_operation(
        &mut self,
        owner: &str,
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<AccountId, TransactionProcessError> {
        let cmd = AccountCommand::parse_command(kind, amount)?;
        let (id, acc) = self.open_account(owner);
        cmd.execute(acc.as_ref())?;
        Ok(id)
    }
}

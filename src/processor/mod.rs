use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountError,
    command::{AccountCommandError, OperationKind},
    manager::AccountId,
};

pub mod in_memory_processor;

#[derive(Debug, Error)]
pub enum TransactionProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait TransactionProcessor {
    /// Applies one operation to the account held by `owner`, returning the
    /// id of that account.
    fn process_operation(
        &mut self,
        owner: &str,
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<AccountId, TransactionProcessError>;
}

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::{AccountError, BankAccount};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    Withdraw,
    Freeze,
    Unfreeze,
}

#[derive(Debug, Error)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Amount is not expected for {kind:?}")]
    UnexpectedAmount { kind: OperationKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCommand {
    Deposit(Decimal),
    Withdraw(Decimal),
    Freeze,
    Unfreeze,
}

impl AccountCommand {
    /// Checks that the row carries an amount exactly when the operation
    /// moves money. The amount sign is left to the account.
    pub fn parse_command(
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<Self, AccountCommandError> {
        match (kind, amount) {
            (OperationKind::Deposit, Some(amount)) => Ok(Self::Deposit(amount)),
            (OperationKind::Withdraw, Some(amount)) => Ok(Self::Withdraw(amount)),
            (OperationKind::Deposit | OperationKind::Withdraw, None) => {
                Err(AccountCommandError::AmountRequired { kind })
            }
            (OperationKind::Freeze, None) => Ok(Self::Freeze),
            (OperationKind::Unfreeze, None) => Ok(Self::Unfreeze),
            (OperationKind::Freeze | OperationKind::Unfreeze, Some(_)) => {
                Err(AccountCommandError::UnexpectedAmount { kind })
            }
        }
    }

    pub fn execute(self, account: &dyn BankAccount) -> Result<(), AccountError> {
        match self {
            Self::Deposit(amount) => account.deposit(amount),
            Self::Withdraw(amount) => account.withdraw(amount),
            Self::Freeze => {
                account.freeze();
                Ok(())
            }
            Self::Unfreeze => {
                account.unfreeze();
                Ok(())
            }
        }
    }
}

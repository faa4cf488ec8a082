/// Core account: balance, frozen flag and transaction history behind a
/// per-account lock, plus the [`account::BankAccount`] capability trait.
pub mod account;

/// Immutable deposit/withdrawal records and their `Php` formatting.
pub mod transaction;

/// Account variant that records its holder's name.
pub mod savings;

/// Registry assigning sequential ids to accounts, with transaction list helpers.
pub mod manager;

/// Account commands parsed from operation rows, executed against a [`account::BankAccount`].
pub mod command;

/// Operation processor interface, plus "in memory" implementation that opens
/// one savings account per owner.
pub mod processor;

/// CSV batch driver, shared by the binary and the integration tests.
pub mod bin_utils;

//! Batch driver around [`bank_ledger`](crate): reads an operation script,
//! applies it to in-memory accounts and prints the resulting balances.

use std::io::{Read, Write};

use crate::{
    account::BankAccount,
    processor::{
        TransactionProcessError, TransactionProcessor,
        in_memory_processor::InMemoryTransactionProcessor,
    },
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{AccountSummary, print_accounts};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, TransactionProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut processor = InMemoryTransactionProcessor::default();

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed record at line {line}"))?;
            if let Err(err) = processor.process_operation(&row.owner, row.kind, row.amount) {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(
            self.output,
            processor
                .manager
                .accounts()
                .map(|(id, acc): (_, &dyn BankAccount)| AccountSummary {
                    id,
                    owner: acc.owner_name(),
                    balance: acc.balance().normalize(),
                    frozen: acc.is_frozen(),
                }),
        )
    }
}

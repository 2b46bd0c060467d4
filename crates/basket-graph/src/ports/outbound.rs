//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::SourceError;
use crate::domain::value_objects::Transaction;

/// Supplier of the transaction dataset.
///
/// File formats and storage live behind this trait; the analysis only sees
/// lists of item identifiers.
pub trait TransactionSource: Send + Sync {
    fn load(&self) -> Result<Vec<Transaction>, SourceError>;
}

/// Source backed by transactions already in memory
#[derive(Clone, Debug, Default)]
pub struct InMemoryTransactionSource {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl<T: Into<Transaction>> FromIterator<T> for InMemoryTransactionSource {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl TransactionSource for InMemoryTransactionSource {
    fn load(&self) -> Result<Vec<Transaction>, SourceError> {
        Ok(self.transactions.clone())
    }
}

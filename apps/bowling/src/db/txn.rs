use tracing::warn;

use super::{Database, Transaction, TxnScope};
use crate::errors::domain::DomainError;

/// Run `f` inside a transaction on `scope`.
///
/// Commits when `f` returns `Ok`. On `Err` the transaction is rolled back
/// and the original error is returned; a failing rollback is only logged.
pub fn with_txn<'a, D, R, F>(db: &'a D, scope: TxnScope, f: F) -> Result<R, DomainError>
where
    D: Database,
    F: FnOnce(&mut D::Txn<'a>) -> Result<R, DomainError>,
{
    let mut txn = db.begin(scope)?;

    match f(&mut txn) {
        Ok(val) => {
            txn.commit()?;
            Ok(val)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback() {
                warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

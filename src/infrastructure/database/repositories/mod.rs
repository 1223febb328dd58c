//! SeaORM repository implementations

pub mod loyalty_ledger;
pub mod occupancy_log;
pub mod repository_provider;
pub mod reservation_store;
pub mod slot_store;

pub use loyalty_ledger::SeaOrmLoyaltyLedger;
pub use occupancy_log::SeaOrmOccupancyLog;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_store::SeaOrmReservationStore;
pub use slot_store::SeaOrmSlotStore;

use crate::domain::DomainError;

/// Map a SeaORM error onto the domain taxonomy. Pool acquisition timeouts
/// and SQLite write contention are retryable; everything else is a hard
/// storage failure.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    match &e {
        sea_orm::DbErr::ConnectionAcquire(_) => DomainError::Transient(e.to_string()),
        sea_orm::DbErr::Conn(rt) | sea_orm::DbErr::Exec(rt) | sea_orm::DbErr::Query(rt)
            if is_sqlite_busy(rt) =>
        {
            DomainError::Transient(e.to_string())
        }
        _ => DomainError::Storage(e.to_string()),
    }
}

/// SQLITE_BUSY (5), SQLITE_LOCKED (6) and SQLITE_BUSY_SNAPSHOT (517). With a
/// pooled connection per transaction, a writer that lost the lock race (or
/// whose read snapshot went stale before its first write) fails with one of
/// these; the statement can be retried.
fn is_sqlite_busy(rt: &sea_orm::RuntimeErr) -> bool {
    let sea_orm::RuntimeErr::SqlxError(err) = rt else {
        return false;
    };
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| matches!(code.as_ref(), "5" | "6" | "517"))
}

/// Unwrap a transaction error: closure errors pass through, connection-level
/// failures go through the usual mapping.
pub(crate) fn txn_err(e: sea_orm::TransactionError<DomainError>) -> DomainError {
    match e {
        sea_orm::TransactionError::Connection(e) => db_err(e),
        sea_orm::TransactionError::Transaction(e) => e,
    }
}

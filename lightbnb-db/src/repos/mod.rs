//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues exactly one statement
//! per operation. Lookups return `Ok(None)` for "no row" and `Err` for a
//! query fault; the two are never collapsed unless a caller asks for it
//! through [`LookupExt::absent_on_error`].

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;

use crate::error::DbError;

/// Opt-in collapse of lookup faults into "absent".
pub trait LookupExt<T> {
    /// Log the fault and treat it as no matching row.
    fn absent_on_error(self) -> Option<T>;
}

impl<T> LookupExt<T> for Result<Option<T>, DbError> {
    fn absent_on_error(self) -> Option<T> {
        match self {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("treating failed lookup as absent: {}", e);
                None
            }
        }
    }
}

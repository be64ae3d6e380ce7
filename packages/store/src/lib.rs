//! roster-store: the in-memory record store owned by the controller process.
//!
//! This is the leaf of the roster stack. It knows nothing about how it is
//! invoked - no channels, no wire names, no call serialization. It owns
//! three keyed collections (students, subjects, selections) and enforces
//! their integrity rules on every mutation:
//!
//! - **Uniqueness**: no duplicate student id, subject id, or
//!   `(student, subject)` selection pair.
//! - **Referential integrity**: a selection can only be added while both
//!   referenced records exist.
//! - **Cascade**: removing a student or subject removes every selection
//!   that references it.
//!
//! Expected failures (duplicate key, not found) are `Result` values, never
//! panics. Every read returns an owned copy, so callers can never alias
//! store-internal state.
//!
//! # Example
//!
//! ```rust
//! use roster_store::{RecordStore, Selection, Student, Subject};
//!
//! let mut store = RecordStore::new();
//! store.add_student(Student::new("S1", "Alice")).unwrap();
//! store.add_subject(Subject::new("C1", "Math")).unwrap();
//! store.add_selection(Selection::new("S1", "C1")).unwrap();
//!
//! store.remove_student("S1").unwrap();
//! assert!(store.selections().is_empty());
//! ```

mod error;
mod record;
mod store;

pub use error::{Entity, Error};
pub use record::{Selection, Student, Subject};
pub use store::RecordStore;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment engine for the shift roster.
//!
//! This crate holds the scheduling components: the shift catalog, the
//! availability ledger, the assignment engine, and the reassignment
//! workflow. Each component is constructed over an explicitly injected
//! [`Persistence`] handle; there is no ambient storage client, so tests can
//! substitute an in-memory store.
//!
//! Input validation happens here, against the domain types; storage
//! invariants (duplicate seats, capacity, referential guards) are enforced
//! inside the persistence layer's transactions and surface through
//! [`EngineError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod engine;
mod error;
mod filter;
mod ledger;
mod reassign;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use catalog::{NewShift, ShiftCatalog, ShiftUpdate};
pub use engine::{AssignmentEngine, AssignmentUpdate};
pub use error::EngineError;
pub use filter::AssignmentFilter;
pub use ledger::{AvailabilityLedger, ExclusionUpdate, NewExclusion};
pub use reassign::{ReassignmentReport, ReassignmentWorkflow};

// The stored shapes the components return, so callers need not depend on
// the persistence crate directly.
pub use shift_roster_persistence::{
    AssignmentView, EmployeeRecord, ExclusionView, Persistence, ShiftRecord,
};

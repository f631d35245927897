// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only query modules.
//!
//! This module contains all read paths for the roster store. All queries use
//! Diesel DSL; the only raw SQL in this crate is the PRAGMA handling in the
//! `sqlite` module.
//!
//! ## Module Organization
//!
//! - `assignments` — Assignment lookups, filtered listings, and per-date counts
//! - `directory` — Employee and department lookups
//! - `exclusions` — Availability exclusion lookups and listings
//! - `shifts` — Shift catalog lookups and referential checks

pub mod assignments;
pub mod directory;
pub mod exclusions;
pub mod shifts;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the roster store.
//!
//! All mutations use Diesel DSL. Guarded writes (seating an assignment,
//! recording an exclusion, the reassignment workflow) run their checks and
//! their writes inside a single immediate transaction so no other writer can
//! slip between the check and the write.
//!
//! ## Module Organization
//!
//! - `assignments` — Guarded assignment creation, updates, and bulk resets
//! - `directory` — Department and employee inserts (bootstrap and fixtures)
//! - `exclusions` — Availability exclusion creation, updates, and deletion
//! - `reassignment` — The locate → exclude → vacate → refill workflow
//! - `shifts` — Shift catalog creation, updates, and guarded deletion

pub mod assignments;
pub mod directory;
pub mod exclusions;
pub mod reassignment;
pub mod shifts;

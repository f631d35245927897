// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod actor;
mod calendar;
mod error;
mod headcount;
mod localized;
mod shift_time;
mod status;

#[cfg(test)]
mod tests;

pub use actor::AssigningActor;
pub use calendar::{DateRange, format_date, month_bounds, parse_date};
pub use error::DomainError;
pub use headcount::HeadcountRange;
pub use localized::LocalizedText;
pub use shift_time::ShiftTime;
pub use status::AssignmentStatus;

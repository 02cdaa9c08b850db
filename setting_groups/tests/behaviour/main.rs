//! `rstest-bdd` behaviour suite for setting group resolution.
//!
//! Feature files live under `tests/features/`; the modules here register the
//! shared fixture and the step implementations they bind to.

mod fixtures;
mod scenarios;
mod steps;

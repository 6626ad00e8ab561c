//! # ClassDesk Core
//!
//! Domain types and pure logic for class timetables: the weekly recurrence
//! model, the session generator, the draft state machine that the schedule
//! screens drive, and submit-time validation.
//!
//! Nothing in this crate performs I/O.

pub mod draft;
pub mod errors;
pub mod generator;
pub mod models;
pub mod summary;
pub mod validation;

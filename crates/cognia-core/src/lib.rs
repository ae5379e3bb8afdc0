//! cognia-core
//!
//! Pure domain types for WISC-V profiles and their classification.
//! No I/O dependency — this is the shared vocabulary of the Cognia system.

pub mod error;
pub mod models;

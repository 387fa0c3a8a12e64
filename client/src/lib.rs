//! Client-side utilities for interacting with the `trustify` program.
//!
//! Includes instruction builders, PDA derivations, account views, and helpers for running the
//! program against mollusk or a live cluster.

pub mod context;
pub mod e2e_helpers;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod transactions;
pub mod views;

pub use logs::LogColor;

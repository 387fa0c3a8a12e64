//! Typed wrappers around [`pinocchio::account::AccountView`] that can only be constructed once
//! their checks pass.

pub mod program_account_view;
pub mod program_data_account_view;
pub mod signer_account_view;
pub mod uninitialized_account_view;

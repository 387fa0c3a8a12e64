use pinocchio::account::AccountView;
use trustify_interface::{
    error::TrustifyError,
    program_ids::system_program,
};

/// Represents a completely uninitialized account.
#[derive(Clone)]
pub struct UninitializedAccountView<'a> {
    pub account: &'a AccountView,
}

impl<'a> UninitializedAccountView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<UninitializedAccountView<'a>, TrustifyError> {
        if account.data_len() != 0 {
            return Err(TrustifyError::AlreadyInitializedAccount);
        }

        if !account.owned_by(&system_program::ID) {
            return Err(TrustifyError::NotOwnedBySystemProgram);
        }

        Ok(Self { account })
    }
}

use pinocchio::account::AccountView;
use trustify_interface::error::TrustifyError;

/// An account whose address has been checked against a known program or sysvar id.
#[derive(Clone)]
pub struct ProgramAccountView<'a> {
    pub account: &'a AccountView,
}

impl<'a> ProgramAccountView<'a> {
    #[inline(always)]
    pub fn new(
        account: &'a AccountView,
        expected_id: &pinocchio::Address,
        error: TrustifyError,
    ) -> Result<ProgramAccountView<'a>, TrustifyError> {
        if account.address() != expected_id {
            return Err(error);
        }

        Ok(Self { account })
    }
}

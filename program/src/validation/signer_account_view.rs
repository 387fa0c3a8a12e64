use pinocchio::account::AccountView;
use trustify_interface::error::TrustifyError;

#[derive(Clone)]
pub struct SignerAccountView<'a> {
    pub account: &'a AccountView,
}

impl<'a> SignerAccountView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<SignerAccountView<'a>, TrustifyError> {
        if !account.is_signer() {
            return Err(TrustifyError::MissingRequiredSignature);
        }

        Ok(Self { account })
    }
}

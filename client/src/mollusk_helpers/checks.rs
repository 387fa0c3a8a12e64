use mollusk_svm::result::Check;
use trustify_interface::error::TrustifyError;

/// Extension trait for converting a [`TrustifyError`] directly into a [`Check`] that asserts
/// the instruction failed with that error.
pub trait IntoCheckFailure {
    fn into_check_failure(self) -> Check<'static>;
}

impl IntoCheckFailure for TrustifyError {
    fn into_check_failure(self) -> Check<'static> {
        Check::err(self.into())
    }
}

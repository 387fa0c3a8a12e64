//! See [`ProgramDataAccountView`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use trustify_interface::{
    error::TrustifyError,
    program,
    seeds::PROGRAM_DATA_ADDRESS,
    state::program_data::{
        ProgramData,
        PROGRAM_DATA_SIZE,
    },
};

/// The initialized program data account.
#[derive(Clone)]
pub struct ProgramDataAccountView<'a> {
    account: &'a AccountView,
}

impl<'a> ProgramDataAccountView<'a> {
    /// Checks the account owner, address, data length, and discriminant.
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<ProgramDataAccountView<'a>, ProgramError> {
        if !account.owned_by(&program::ID) {
            return Err(TrustifyError::InvalidProgramDataOwner.into());
        }

        if account.address() != &PROGRAM_DATA_ADDRESS {
            return Err(TrustifyError::IncorrectProgramDataAddress.into());
        }

        if account.data_len() != PROGRAM_DATA_SIZE {
            return Err(TrustifyError::MismatchedDataLengths.into());
        }

        {
            let data = account.try_borrow()?;
            ProgramData::load(&data)?;
        }

        Ok(Self { account })
    }

    /// Runs `f` with a shared reference to the program data. The account data is only borrowed for
    /// the duration of the call.
    #[inline(always)]
    pub fn with_program_data<T>(
        &self,
        f: impl FnOnce(&ProgramData) -> T,
    ) -> Result<T, ProgramError> {
        let data = self.account.try_borrow()?;
        Ok(f(ProgramData::load(&data)?))
    }

    /// Mutable version of [`ProgramDataAccountView::with_program_data`].
    #[inline(always)]
    pub fn with_program_data_mut<T>(
        &self,
        f: impl FnOnce(&mut ProgramData) -> T,
    ) -> Result<T, ProgramError> {
        let mut data = self.account.try_borrow_mut()?;
        Ok(f(ProgramData::load_mut(&mut data)?))
    }
}

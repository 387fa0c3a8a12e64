//! See [`InitializeContext`].

use pinocchio::account::AccountView;
use trustify_interface::{
    error::TrustifyError,
    program_ids::system_program,
    seeds::PROGRAM_DATA_ADDRESS,
};

use crate::validation::{
    program_account_view::ProgramAccountView,
    signer_account_view::SignerAccountView,
    uninitialized_account_view::UninitializedAccountView,
};

/// The account context for the `Initialize` instruction.
#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub authority: SignerAccountView<'a>,
    /// Any account. Only its address is stored.
    pub trusted_forwarder: &'a AccountView,
    /// Empty and at the canonical program data PDA. It may already hold lamports.
    pub program_data: UninitializedAccountView<'a>,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeContext<'a>, TrustifyError> {
        let [authority, trusted_forwarder, program_data, system_program, ..] = accounts else {
            return Err(TrustifyError::NotEnoughAccountKeys);
        };

        let authority = SignerAccountView::new(authority)?;
        if program_data.address() != &PROGRAM_DATA_ADDRESS {
            return Err(TrustifyError::IncorrectProgramDataAddress);
        }
        let program_data = UninitializedAccountView::new(program_data)?;
        ProgramAccountView::new(
            system_program,
            &system_program::ID,
            TrustifyError::IncorrectSystemProgram,
        )?;

        Ok(Self {
            authority,
            trusted_forwarder,
            program_data,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pinocchio::{
        AccountView,
        Address,
    };
    use solana_account_view::RuntimeAccount;
    use trustify_interface::{
        program_ids::system_program,
        seeds::PROGRAM_DATA_ADDRESS,
    };

    use super::*;

    /// Creates a mock runtime account owned by the system program with no data and no lamports.
    pub(crate) fn create_mock_runtime_account(address: Address, is_signer: bool) -> RuntimeAccount {
        RuntimeAccount {
            borrow_state: 0,
            is_signer: is_signer as u8,
            is_writable: 0,
            executable: 0,
            resize_delta: 0,
            address,
            owner: system_program::ID,
            lamports: 0,
            data_len: 0,
        }
    }

    fn address(byte: u8) -> Address {
        Address::new_from_array([byte; 32])
    }

    #[test]
    fn not_enough_accounts() {
        let mut runtime_accounts = [
            create_mock_runtime_account(address(1), true),
            create_mock_runtime_account(address(2), false),
            create_mock_runtime_account(address(3), false),
        ];
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views = unsafe {
            [
                AccountView::new_unchecked(ptr.add(0)),
                AccountView::new_unchecked(ptr.add(1)),
                AccountView::new_unchecked(ptr.add(2)),
            ]
        };

        assert_eq!(
            InitializeContext::load(&views).err(),
            Some(TrustifyError::NotEnoughAccountKeys)
        );
    }

    #[test]
    fn validates_in_account_order() {
        let mut runtime_accounts = [
            create_mock_runtime_account(address(1), true),
            create_mock_runtime_account(address(2), false),
            create_mock_runtime_account(PROGRAM_DATA_ADDRESS, false),
            create_mock_runtime_account(system_program::ID, false),
        ];
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views = unsafe {
            [
                AccountView::new_unchecked(ptr.add(0)),
                AccountView::new_unchecked(ptr.add(1)),
                AccountView::new_unchecked(ptr.add(2)),
                AccountView::new_unchecked(ptr.add(3)),
            ]
        };

        let ctx = InitializeContext::load(&views).unwrap();
        assert_eq!(ctx.authority.account.address(), &address(1));
        assert_eq!(ctx.trusted_forwarder.address(), &address(2));
        assert_eq!(ctx.program_data.account.address(), &PROGRAM_DATA_ADDRESS);
    }

    #[test]
    fn authority_must_sign() {
        let mut runtime_accounts = [
            create_mock_runtime_account(address(1), false),
            create_mock_runtime_account(address(2), false),
            create_mock_runtime_account(PROGRAM_DATA_ADDRESS, false),
            create_mock_runtime_account(system_program::ID, false),
        ];
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views = unsafe {
            [
                AccountView::new_unchecked(ptr.add(0)),
                AccountView::new_unchecked(ptr.add(1)),
                AccountView::new_unchecked(ptr.add(2)),
                AccountView::new_unchecked(ptr.add(3)),
            ]
        };

        assert_eq!(
            InitializeContext::load(&views).err(),
            Some(TrustifyError::MissingRequiredSignature)
        );
    }

    #[test]
    fn wrong_system_program() {
        let mut runtime_accounts = [
            create_mock_runtime_account(address(1), true),
            create_mock_runtime_account(address(2), false),
            create_mock_runtime_account(PROGRAM_DATA_ADDRESS, false),
            create_mock_runtime_account(address(4), false),
        ];
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views = unsafe {
            [
                AccountView::new_unchecked(ptr.add(0)),
                AccountView::new_unchecked(ptr.add(1)),
                AccountView::new_unchecked(ptr.add(2)),
                AccountView::new_unchecked(ptr.add(3)),
            ]
        };

        assert_eq!(
            InitializeContext::load(&views).err(),
            Some(TrustifyError::IncorrectSystemProgram)
        );
    }

    #[test]
    fn program_data_must_be_canonical() {
        // Any other address, including one derived from a non-canonical bump, is rejected.
        let mut runtime_accounts = [
            create_mock_runtime_account(address(1), true),
            create_mock_runtime_account(address(2), false),
            create_mock_runtime_account(address(3), false),
            create_mock_runtime_account(system_program::ID, false),
        ];
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views = unsafe {
            [
                AccountView::new_unchecked(ptr.add(0)),
                AccountView::new_unchecked(ptr.add(1)),
                AccountView::new_unchecked(ptr.add(2)),
                AccountView::new_unchecked(ptr.add(3)),
            ]
        };

        assert_eq!(
            InitializeContext::load(&views).err(),
            Some(TrustifyError::IncorrectProgramDataAddress)
        );
    }
}

//! See [`MintNftContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
    Address,
};
use trustify_interface::{
    error::TrustifyError,
    program,
    program_ids::{
        associated_token_program,
        rent_sysvar,
        system_program,
        token_metadata_program,
        token_program,
    },
    seeds::MINT_AUTHORITY_SEED,
};

use crate::validation::{
    program_account_view::ProgramAccountView,
    program_data_account_view::ProgramDataAccountView,
    signer_account_view::SignerAccountView,
    uninitialized_account_view::UninitializedAccountView,
};

/// The account context for the `MintNft` instruction.
///
/// The recipient, its associated token account, and the metadata PDA are validated by the CPIs
/// that use them. The mint authority must be the canonical PDA for the mint.
///
/// The trusted forwarder must match the stored one but doesn't sign, so anyone who reads the
/// program data can pass it. It doesn't restrict who can mint.
#[derive(Clone)]
pub struct MintNftContext<'a> {
    pub signer: SignerAccountView<'a>,
    pub program_data: ProgramDataAccountView<'a>,
    /// The fresh mint keypair. Must sign and be empty.
    pub mint: SignerAccountView<'a>,
    pub recipient_ata: &'a AccountView,
    pub recipient: &'a AccountView,
    pub metadata: &'a AccountView,
    pub mint_authority: &'a AccountView,
    pub mint_authority_bump: u8,
    pub token_program: ProgramAccountView<'a>,
    pub system_program: ProgramAccountView<'a>,
    pub rent_sysvar: ProgramAccountView<'a>,
}

impl<'a> MintNftContext<'a> {
    /// Fails if the program data account's data is already mutably borrowed.
    pub fn load(accounts: &'a [AccountView]) -> Result<MintNftContext<'a>, ProgramError> {
        let [
            signer,
            trusted_forwarder,
            program_data,
            mint,
            recipient_ata,
            recipient,
            metadata,
            mint_authority,
            token_metadata_program,
            token_program,
            associated_token_program,
            system_program,
            rent_sysvar,
            ..
        ] = accounts
        else {
            return Err(TrustifyError::NotEnoughAccountKeys.into());
        };

        let signer = SignerAccountView::new(signer)?;
        let program_data = ProgramDataAccountView::new(program_data)?;

        let forwarder_matches = program_data
            .with_program_data(|data| &data.trusted_forwarder == trusted_forwarder.address())?;
        if !forwarder_matches {
            return Err(TrustifyError::IncorrectTrustedForwarder.into());
        }

        let mint = SignerAccountView::new(UninitializedAccountView::new(mint)?.account)?;

        let (expected_mint_authority, mint_authority_bump) = Address::try_find_program_address(
            &[MINT_AUTHORITY_SEED, mint.account.address().as_ref()],
            &program::ID,
        )
        .ok_or(TrustifyError::IncorrectMintAuthority)?;
        if mint_authority.address() != &expected_mint_authority {
            return Err(TrustifyError::IncorrectMintAuthority.into());
        }

        ProgramAccountView::new(
            token_metadata_program,
            &token_metadata_program::ID,
            TrustifyError::IncorrectTokenMetadataProgram,
        )?;
        let token_program = ProgramAccountView::new(
            token_program,
            &token_program::ID,
            TrustifyError::IncorrectTokenProgram,
        )?;
        ProgramAccountView::new(
            associated_token_program,
            &associated_token_program::ID,
            TrustifyError::IncorrectAssociatedTokenProgram,
        )?;
        let system_program = ProgramAccountView::new(
            system_program,
            &system_program::ID,
            TrustifyError::IncorrectSystemProgram,
        )?;
        let rent_sysvar = ProgramAccountView::new(
            rent_sysvar,
            &rent_sysvar::ID,
            TrustifyError::IncorrectRentSysvar,
        )?;

        Ok(Self {
            signer,
            program_data,
            mint,
            recipient_ata,
            recipient,
            metadata,
            mint_authority,
            mint_authority_bump,
            token_program,
            system_program,
            rent_sysvar,
        })
    }
}

#[cfg(test)]
mod tests {
    use pinocchio::{
        AccountView,
        Address,
    };
    use solana_account_view::RuntimeAccount;

    use super::*;
    use crate::context::initialize_context::tests::create_mock_runtime_account;

    #[test]
    fn not_enough_accounts() {
        let mut runtime_accounts: [RuntimeAccount; 12] = core::array::from_fn(|i| {
            create_mock_runtime_account(Address::new_from_array([i as u8; 32]), true)
        });
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views: [AccountView; 12] =
            core::array::from_fn(|i| unsafe { AccountView::new_unchecked(ptr.add(i)) });

        assert_eq!(
            MintNftContext::load(&views).err(),
            Some(TrustifyError::NotEnoughAccountKeys.into())
        );
    }

    #[test]
    fn signer_must_sign() {
        let mut runtime_accounts: [RuntimeAccount; 13] = core::array::from_fn(|i| {
            create_mock_runtime_account(Address::new_from_array([i as u8; 32]), i != 0)
        });
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views: [AccountView; 13] =
            core::array::from_fn(|i| unsafe { AccountView::new_unchecked(ptr.add(i)) });

        assert_eq!(
            MintNftContext::load(&views).err(),
            Some(TrustifyError::MissingRequiredSignature.into())
        );
    }

    #[test]
    fn program_data_must_be_program_owned() {
        // Every mock account is owned by the system program.
        let mut runtime_accounts: [RuntimeAccount; 13] = core::array::from_fn(|i| {
            create_mock_runtime_account(Address::new_from_array([i as u8; 32]), true)
        });
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views: [AccountView; 13] =
            core::array::from_fn(|i| unsafe { AccountView::new_unchecked(ptr.add(i)) });

        assert_eq!(
            MintNftContext::load(&views).err(),
            Some(TrustifyError::InvalidProgramDataOwner.into())
        );
    }

    #[test]
    fn program_data_must_be_canonical() {
        // Program owned, but not at the program data PDA.
        let mut runtime_accounts: [RuntimeAccount; 13] = core::array::from_fn(|i| {
            create_mock_runtime_account(Address::new_from_array([i as u8; 32]), true)
        });
        runtime_accounts[2].owner = trustify_interface::program::ID;
        let ptr: *mut RuntimeAccount = runtime_accounts.as_mut_ptr();
        let views: [AccountView; 13] =
            core::array::from_fn(|i| unsafe { AccountView::new_unchecked(ptr.add(i)) });

        assert_eq!(
            MintNftContext::load(&views).err(),
            Some(TrustifyError::IncorrectProgramDataAddress.into())
        );
    }
}

//! See [`CreateMetadataAccountV3`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use solana_instruction_view::{
    cpi::{
        invoke_signed,
        Signer,
    },
    InstructionAccount,
    InstructionView,
};
use trustify_interface::{
    metadata::CreateMetadataAccountV3Data,
    program_ids::token_metadata_program,
};

/// Creates the metadata account for a mint through the token metadata program.
///
/// ### Accounts
///  0. `[WRITE]` Metadata PDA
///  1. `[READ]` Mint
///  2. `[SIGNER]` Mint authority
///  3. `[WRITE, SIGNER]` Payer
///  4. `[SIGNER]` Update authority
///  5. `[READ]` System program
///  6. `[READ]` Rent sysvar
pub struct CreateMetadataAccountV3<'a> {
    pub metadata: &'a AccountView,
    pub mint: &'a AccountView,
    pub mint_authority: &'a AccountView,
    pub payer: &'a AccountView,
    pub update_authority: &'a AccountView,
    pub system_program: &'a AccountView,
    pub rent_sysvar: &'a AccountView,
    pub data: CreateMetadataAccountV3Data<'a>,
}

impl CreateMetadataAccountV3<'_> {
    #[inline(always)]
    pub fn invoke_signed(&self, signers_seeds: &[Signer]) -> ProgramResult {
        let data = self.data.pack()?;

        invoke_signed(
            &InstructionView {
                program_id: &token_metadata_program::ID,
                accounts: &self.create_instruction_accounts(),
                data: data.as_slice(),
            },
            &[
                self.metadata,
                self.mint,
                self.mint_authority,
                self.payer,
                self.update_authority,
                self.system_program,
                self.rent_sysvar,
            ],
            signers_seeds,
        )
    }

    #[inline(always)]
    fn create_instruction_accounts(&self) -> [InstructionAccount<'_>; 7] {
        [
            InstructionAccount::writable(self.metadata.address()),
            InstructionAccount::readonly(self.mint.address()),
            InstructionAccount::readonly_signer(self.mint_authority.address()),
            InstructionAccount::writable_signer(self.payer.address()),
            InstructionAccount::readonly_signer(self.update_authority.address()),
            InstructionAccount::readonly(self.system_program.address()),
            InstructionAccount::readonly(self.rent_sysvar.address()),
        ]
    }
}

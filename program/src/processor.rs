use pinocchio::{
    account::AccountView,
    Address,
    ProgramResult,
};
use trustify_interface::{
    error::TrustifyError,
    instructions::InstructionTag,
};

use crate::instructions::*;

#[inline(always)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(TrustifyError::InvalidInstructionTag.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::Initialize => process_initialize(accounts, remaining),
        InstructionTag::MintNft => process_mint_nft(accounts, remaining),
    }
}

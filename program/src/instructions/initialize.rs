use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use pinocchio_system::create_account_with_minimum_balance_signed;
use trustify_interface::{
    error::TrustifyError,
    instructions::InitializeInstructionData,
    program,
    seeds::PROGRAM_DATA_BUMP,
    state::{
        program_data::{
            ProgramData,
            PROGRAM_DATA_SIZE,
        },
        transmutable::load_mut,
    },
};

use crate::{
    context::initialize_context::InitializeContext,
    debug,
    program_data_signer,
};

pub fn process_initialize(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let InitializeInstructionData {
        program_data_bump,
        name,
        symbol,
    } = InitializeInstructionData::unpack_untagged(instruction_data)?;

    if program_data_bump != PROGRAM_DATA_BUMP {
        return Err(TrustifyError::IncorrectProgramDataAddress.into());
    }

    let ctx = InitializeContext::load(accounts)?;

    // Build the record before creating the account so bad strings fail without a CPI.
    let program_data = ProgramData::init(
        ctx.authority.account.address(),
        ctx.trusted_forwarder.address(),
        name,
        symbol,
        program_data_bump,
    )?;

    // Also covers a PDA that was already sent lamports.
    create_account_with_minimum_balance_signed(
        ctx.program_data.account,
        PROGRAM_DATA_SIZE,
        &program::ID,
        ctx.authority.account,
        None,
        &[program_data_signer!(program_data_bump)],
    )?;

    // The fresh account is zeroed, so it's loaded without the discriminant check.
    let mut data = ctx.program_data.account.try_borrow_mut()?;
    *load_mut::<ProgramData>(&mut data)? = program_data;

    debug!("initialized {} ({})", name, symbol);

    Ok(())
}

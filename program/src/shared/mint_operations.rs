//! Token program CPIs for minting a single NFT.

use pinocchio::{
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    ProgramResult,
};
use pinocchio_associated_token_account::instructions::CreateIdempotent;
use pinocchio_system::instructions::CreateAccount;
use pinocchio_token::instructions::{
    InitializeMint2,
    MintTo,
};
use trustify_interface::{
    program_ids::token_program,
    state::SPL_MINT_LEN,
};

use crate::{
    context::mint_nft_context::MintNftContext,
    mint_authority_signer,
};

pub const NFT_DECIMALS: u8 = 0;
pub const NFT_SUPPLY: u64 = 1;

/// Creates the mint account and initializes it with zero decimals, the mint authority PDA as the
/// mint authority, and no freeze authority.
#[inline(always)]
pub fn create_mint(ctx: &MintNftContext) -> ProgramResult {
    CreateAccount {
        from: ctx.signer.account,
        to: ctx.mint.account,
        lamports: Rent::get()?.minimum_balance(SPL_MINT_LEN),
        space: SPL_MINT_LEN as u64,
        owner: &token_program::ID,
    }
    .invoke()?;

    InitializeMint2 {
        mint: ctx.mint.account,
        decimals: NFT_DECIMALS,
        mint_authority: ctx.mint_authority.address(),
        freeze_authority: None,
    }
    .invoke()
}

/// Creates the recipient's associated token account if it doesn't exist yet.
#[inline(always)]
pub fn create_recipient_ata(ctx: &MintNftContext) -> ProgramResult {
    CreateIdempotent {
        funding_account: ctx.signer.account,
        account: ctx.recipient_ata,
        wallet: ctx.recipient,
        mint: ctx.mint.account,
        system_program: ctx.system_program.account,
        token_program: ctx.token_program.account,
    }
    .invoke()
}

/// Mints the single token to the recipient's associated token account.
#[inline(always)]
pub fn mint_one(ctx: &MintNftContext) -> ProgramResult {
    MintTo {
        mint: ctx.mint.account,
        account: ctx.recipient_ata,
        mint_authority: ctx.mint_authority,
        amount: NFT_SUPPLY,
    }
    .invoke_signed(&[mint_authority_signer!(
        ctx.mint.account.address(),
        ctx.mint_authority_bump
    )])
}

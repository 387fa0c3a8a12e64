use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use trustify_interface::{
    error::TrustifyError,
    instructions::MintNftInstructionData,
    metadata::{
        CreateMetadataAccountV3Data,
        Creator,
        FULL_CREATOR_SHARE,
    },
    state::program_data::{
        MAX_NAME_LENGTH,
        MAX_SYMBOL_LENGTH,
    },
};

use crate::{
    context::mint_nft_context::MintNftContext,
    debug,
    mint_authority_signer,
    shared::{
        mint_operations::{
            create_mint,
            create_recipient_ata,
            mint_one,
        },
        token_metadata::CreateMetadataAccountV3,
    },
};

pub fn process_mint_nft(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let MintNftInstructionData {
        mint_authority_bump,
        token_uri,
    } = MintNftInstructionData::unpack_untagged(instruction_data)?;

    let ctx = MintNftContext::load(accounts)?;
    if mint_authority_bump != ctx.mint_authority_bump {
        return Err(TrustifyError::IncorrectMintAuthority.into());
    }

    // Copy the name and symbol out so the program data isn't borrowed across the CPIs below.
    let mut name = [0u8; MAX_NAME_LENGTH];
    let mut symbol = [0u8; MAX_SYMBOL_LENGTH];
    let (name_len, symbol_len) =
        ctx.program_data.with_program_data_mut(|program_data| {
            let name_bytes = program_data.name_bytes();
            let symbol_bytes = program_data.symbol_bytes();
            let lens = (name_bytes.len(), symbol_bytes.len());
            name[..lens.0].copy_from_slice(name_bytes);
            symbol[..lens.1].copy_from_slice(symbol_bytes);
            program_data.increment_token_counter().map(|_| lens)
        })??;

    create_mint(&ctx)?;
    create_recipient_ata(&ctx)?;
    mint_one(&ctx)?;

    CreateMetadataAccountV3 {
        metadata: ctx.metadata,
        mint: ctx.mint.account,
        mint_authority: ctx.mint_authority,
        payer: ctx.signer.account,
        update_authority: ctx.signer.account,
        system_program: ctx.system_program.account,
        rent_sysvar: ctx.rent_sysvar.account,
        data: CreateMetadataAccountV3Data {
            name: &name[..name_len],
            symbol: &symbol[..symbol_len],
            uri: token_uri.as_bytes(),
            seller_fee_basis_points: 0,
            creator: Some(Creator {
                address: *ctx.signer.account.address(),
                verified: false,
                share: FULL_CREATOR_SHARE,
            }),
            is_mutable: true,
        },
    }
    .invoke_signed(&[mint_authority_signer!(
        ctx.mint.account.address(),
        ctx.mint_authority_bump
    )])?;

    debug!("minted {}", token_uri);

    Ok(())
}

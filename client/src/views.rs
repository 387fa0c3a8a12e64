//! Owned, decoded views of the accounts `trustify` creates or touches.

use anyhow::{
    bail,
    Context,
};
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use spl_token_interface::state::Account as SplTokenAccount;
use trustify_interface::state::program_data::ProgramData;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramDataView {
    pub authority: Address,
    pub trusted_forwarder: Address,
    pub token_counter: u64,
    pub bump: u8,
    pub name: String,
    pub symbol: String,
}

impl From<&ProgramData> for ProgramDataView {
    fn from(program_data: &ProgramData) -> Self {
        Self {
            authority: program_data.authority,
            trusted_forwarder: program_data.trusted_forwarder,
            token_counter: program_data.token_counter(),
            bump: program_data.bump,
            name: program_data.name().to_string(),
            symbol: program_data.symbol().to_string(),
        }
    }
}

/// Decodes the program data account, checking that it's owned by `trustify`.
pub fn try_program_data_view_from_owner_and_data(
    owner: Address,
    data: &[u8],
) -> anyhow::Result<ProgramDataView> {
    if owner != trustify::ID {
        bail!("Program data is owned by {owner}, not {}", trustify::ID);
    }
    let program_data = ProgramData::load(data).context("Invalid program data")?;
    Ok(program_data.into())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountView {
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
}

/// Decodes an SPL token account.
pub fn try_token_account_view(data: &[u8]) -> anyhow::Result<TokenAccountView> {
    let account = SplTokenAccount::unpack(data).context("Invalid token account")?;
    Ok(TokenAccountView {
        mint: account.mint,
        owner: account.owner,
        amount: account.amount,
    })
}

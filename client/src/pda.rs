//! PDA helpers for deriving `trustify` program addresses.

use solana_sdk::pubkey::Pubkey;
use trustify_interface::{
    program_ids::token_metadata_program,
    seeds::{
        METADATA_SEED,
        MINT_AUTHORITY_SEED,
        PROGRAM_DATA_SEED,
    },
};

pub fn find_program_data_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_DATA_SEED], &trustify::ID)
}

pub fn find_mint_authority_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED, mint.as_ref()], &trustify::ID)
}

/// The metadata PDA is owned by and derived from the token metadata program, not `trustify`.
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            token_metadata_program::ID.as_ref(),
            mint.as_ref(),
        ],
        &token_metadata_program::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_data_address_matches_the_program_constants() {
        assert_eq!(
            find_program_data_address(),
            (
                trustify_interface::seeds::PROGRAM_DATA_ADDRESS,
                trustify_interface::seeds::PROGRAM_DATA_BUMP
            )
        );
    }

    #[test]
    fn mint_authority_depends_on_mint() {
        let (a, _) = find_mint_authority_address(&Pubkey::new_unique());
        let (b, _) = find_mint_authority_address(&Pubkey::new_unique());
        assert_ne!(a, b);
    }

    #[test]
    fn metadata_and_mint_authority_differ() {
        let mint = Pubkey::new_unique();
        assert_ne!(
            find_metadata_address(&mint).0,
            find_mint_authority_address(&mint).0
        );
    }
}

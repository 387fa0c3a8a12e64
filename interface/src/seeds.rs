//! Seeds for the program derived addresses used by `trustify`.
//!
//! - Program data: `[PROGRAM_DATA_SEED]`, derived from [`crate::program::ID`].
//! - Mint authority: `[MINT_AUTHORITY_SEED, mint]`, derived from [`crate::program::ID`].
//! - Metadata: `[METADATA_SEED, token_metadata_program, mint]`, derived from
//!   [`crate::program_ids::token_metadata_program::ID`].

use solana_address::Address;

pub const PROGRAM_DATA_SEED: &[u8] = b"program_data";

pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

pub const METADATA_SEED: &[u8] = b"metadata";

/// The canonical bump for [`PROGRAM_DATA_SEED`]. `Initialize` rejects any other.
pub const PROGRAM_DATA_BUMP: u8 = 254;

/// The only address the program data record can live at.
pub const PROGRAM_DATA_ADDRESS: Address = Address::derive_address_const(
    &[PROGRAM_DATA_SEED],
    Some(PROGRAM_DATA_BUMP),
    &crate::program::ID,
);

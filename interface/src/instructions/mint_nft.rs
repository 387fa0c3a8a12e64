//! See [`MintNftInstructionData`].

use crate::{
    error::TrustifyError,
    state::program_data::MAX_URI_LENGTH,
    utils::{
        read_str,
        read_u8,
    },
};

/// Mints a single token of a freshly created, zero-decimal mint to the recipient's associated
/// token account and attaches token metadata built from the program data's name and symbol and
/// the passed token uri.
///
/// # Instruction data layout (after the tag byte)
///  - `[0]`: the mint authority PDA bump
///  - `[1]`: the token uri length `n`
///  - `[2..2 + n]`: the token uri as UTF-8 bytes
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Signer (payer and metadata update authority)
///  1. `[READ]` Trusted forwarder
///  2. `[WRITE]` Program data PDA
///  3. `[WRITE, SIGNER]` Mint
///  4. `[WRITE]` Recipient associated token account
///  5. `[READ]` Recipient
///  6. `[WRITE]` Metadata PDA
///  7. `[READ]` Mint authority PDA
///  8. `[READ]` Token metadata program
///  9. `[READ]` Token program
///  10. `[READ]` Associated token program
///  11. `[READ]` System program
///  12. `[READ]` Rent sysvar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintNftInstructionData<'a> {
    pub mint_authority_bump: u8,
    pub token_uri: &'a str,
}

impl<'a> MintNftInstructionData<'a> {
    pub const NUM_ACCOUNTS: usize = 13;

    /// Unpacks instruction data that has already had its tag byte stripped.
    pub fn unpack_untagged(data: &'a [u8]) -> Result<Self, TrustifyError> {
        let (mint_authority_bump, rest) = read_u8(data)?;
        let (token_uri, rest) = read_str(rest, MAX_URI_LENGTH)?;

        if !rest.is_empty() {
            return Err(TrustifyError::InvalidInstructionData);
        }

        Ok(Self {
            mint_authority_bump,
            token_uri,
        })
    }

    /// Packs the instruction data, tag byte included.
    #[cfg(feature = "std")]
    pub fn pack(&self) -> Result<std::vec::Vec<u8>, TrustifyError> {
        let mut data = std::vec::Vec::with_capacity(3 + self.token_uri.len());
        data.push(super::InstructionTag::MintNft as u8);
        data.push(self.mint_authority_bump);
        crate::utils::write_str(&mut data, self.token_uri)?;
        Ok(data)
    }
}

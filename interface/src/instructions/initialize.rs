//! See [`InitializeInstructionData`].

use crate::{
    error::TrustifyError,
    state::program_data::{
        MAX_NAME_LENGTH,
        MAX_SYMBOL_LENGTH,
    },
    utils::{
        read_str,
        read_u8,
    },
};

/// Creates the program data account and stores the collection name and symbol, the calling
/// authority, and the trusted forwarder.
///
/// # Instruction data layout (after the tag byte)
///  - `[0]`: the program data PDA bump
///  - `[1]`: the name length `n`
///  - `[2..2 + n]`: the name as UTF-8 bytes
///  - `[2 + n]`: the symbol length `s`
///  - `[3 + n..3 + n + s]`: the symbol as UTF-8 bytes
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Authority
///  1. `[READ]` Trusted forwarder
///  2. `[WRITE]` Program data PDA
///  3. `[READ]` System program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeInstructionData<'a> {
    pub program_data_bump: u8,
    pub name: &'a str,
    pub symbol: &'a str,
}

impl<'a> InitializeInstructionData<'a> {
    pub const NUM_ACCOUNTS: usize = 4;

    /// Unpacks instruction data that has already had its tag byte stripped.
    pub fn unpack_untagged(data: &'a [u8]) -> Result<Self, TrustifyError> {
        let (program_data_bump, rest) = read_u8(data)?;
        let (name, rest) = read_str(rest, MAX_NAME_LENGTH)?;
        let (symbol, rest) = read_str(rest, MAX_SYMBOL_LENGTH)?;

        if !rest.is_empty() {
            return Err(TrustifyError::InvalidInstructionData);
        }

        Ok(Self {
            program_data_bump,
            name,
            symbol,
        })
    }

    /// Packs the instruction data, tag byte included.
    #[cfg(feature = "std")]
    pub fn pack(&self) -> Result<std::vec::Vec<u8>, TrustifyError> {
        let mut data = std::vec::Vec::with_capacity(4 + self.name.len() + self.symbol.len());
        data.push(super::InstructionTag::Initialize as u8);
        data.push(self.program_data_bump);
        crate::utils::write_str(&mut data, self.name)?;
        crate::utils::write_str(&mut data, self.symbol)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack() {
        let data = [255, 7, b'T', b'e', b's', b't', b'N', b'F', b'T', 4, b'T', b'N', b'F', b'T'];
        assert_eq!(
            InitializeInstructionData::unpack_untagged(&data),
            Ok(InitializeInstructionData {
                program_data_bump: 255,
                name: "TestNFT",
                symbol: "TNFT",
            })
        );
    }

    #[test]
    fn unpack_rejects_trailing_bytes() {
        let data = [1, 1, b'a', 1, b'b', 0];
        assert_eq!(
            InitializeInstructionData::unpack_untagged(&data),
            Err(TrustifyError::InvalidInstructionData)
        );
    }

    #[test]
    fn unpack_rejects_truncated_data() {
        assert_eq!(
            InitializeInstructionData::unpack_untagged(&[]),
            Err(TrustifyError::InsufficientByteLength)
        );
        assert_eq!(
            InitializeInstructionData::unpack_untagged(&[1, 2, b'a', b'b']),
            Err(TrustifyError::InsufficientByteLength)
        );
    }

    #[test]
    fn unpack_rejects_long_symbol() {
        let mut data = std::vec![1, 1, b'a', (MAX_SYMBOL_LENGTH + 1) as u8];
        data.extend([b'S'; MAX_SYMBOL_LENGTH + 1]);
        assert_eq!(
            InitializeInstructionData::unpack_untagged(&data),
            Err(TrustifyError::StringTooLong)
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn pack_prefixes_the_tag() {
        let ix = InitializeInstructionData {
            program_data_bump: 3,
            name: "N",
            symbol: "",
        };
        let packed = ix.pack().unwrap();
        assert_eq!(packed, std::vec![0, 3, 1, b'N', 0]);
        assert_eq!(
            InitializeInstructionData::unpack_untagged(&packed[1..]),
            Ok(ix)
        );
    }
}

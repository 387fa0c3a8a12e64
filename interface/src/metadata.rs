//! Allocation-free encoding of the token metadata program's `CreateMetadataAccountV3` instruction
//! data.
//!
//! The token metadata program deserializes its instruction data with borsh, so the bytes written
//! here follow borsh's rules: `u32` length-prefixed strings and vectors, a single byte for `bool`
//! and for the `Option` tag, little-endian integers.

use solana_address::Address;

use crate::{
    error::TrustifyError,
    pack::StackBuffer,
    state::program_data::{
        MAX_NAME_LENGTH,
        MAX_SYMBOL_LENGTH,
        MAX_URI_LENGTH,
    },
};

pub const CREATE_METADATA_ACCOUNT_V3_DISCRIMINATOR: u8 = 33;

/// The share of royalties assigned to the single creator.
pub const FULL_CREATOR_SHARE: u8 = 100;

const STRING_PREFIX_LEN: usize = 4;
const CREATOR_LEN: usize = 32 + 1 + 1;

/// The largest possible encoding: discriminator, three strings at their max lengths, seller fee,
/// `Some(vec![creator])`, `None` collection, `None` uses, `is_mutable`, `None` collection details.
pub const MAX_CREATE_METADATA_ACCOUNT_V3_DATA_LEN: usize = 1
    + (STRING_PREFIX_LEN + MAX_NAME_LENGTH)
    + (STRING_PREFIX_LEN + MAX_SYMBOL_LENGTH)
    + (STRING_PREFIX_LEN + MAX_URI_LENGTH)
    + 2
    + (1 + 4 + CREATOR_LEN)
    + 1
    + 1
    + 1
    + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: Address,
    pub verified: bool,
    pub share: u8,
}

/// The subset of `CreateMetadataAccountArgsV3` that `trustify` sets. Collections, uses, and
/// collection details are always `None`.
#[derive(Clone, Copy, Debug)]
pub struct CreateMetadataAccountV3Data<'a> {
    pub name: &'a [u8],
    pub symbol: &'a [u8],
    pub uri: &'a [u8],
    pub seller_fee_basis_points: u16,
    pub creator: Option<Creator>,
    pub is_mutable: bool,
}

pub type CreateMetadataAccountV3Buffer = StackBuffer<MAX_CREATE_METADATA_ACCOUNT_V3_DATA_LEN>;

impl CreateMetadataAccountV3Data<'_> {
    /// Encodes the instruction data, discriminator included.
    pub fn pack(&self) -> Result<CreateMetadataAccountV3Buffer, TrustifyError> {
        let mut buf = CreateMetadataAccountV3Buffer::new();

        buf.push(CREATE_METADATA_ACCOUNT_V3_DISCRIMINATOR)?;

        // `DataV2`
        write_borsh_str(&mut buf, self.name, MAX_NAME_LENGTH)?;
        write_borsh_str(&mut buf, self.symbol, MAX_SYMBOL_LENGTH)?;
        write_borsh_str(&mut buf, self.uri, MAX_URI_LENGTH)?;
        buf.extend(&self.seller_fee_basis_points.to_le_bytes())?;
        match &self.creator {
            Some(creator) => {
                buf.push(1)?;
                buf.extend(&1u32.to_le_bytes())?;
                buf.extend(creator.address.as_ref())?;
                buf.push(creator.verified as u8)?;
                buf.push(creator.share)?;
            }
            None => buf.push(0)?,
        }
        // `collection: None`, `uses: None`
        buf.extend(&[0, 0])?;

        buf.push(self.is_mutable as u8)?;
        // `collection_details: None`
        buf.push(0)?;

        Ok(buf)
    }
}

#[inline(always)]
fn write_borsh_str<const N: usize>(
    buf: &mut StackBuffer<N>,
    s: &[u8],
    max_len: usize,
) -> Result<(), TrustifyError> {
    if s.len() > max_len {
        return Err(TrustifyError::StringTooLong);
    }
    buf.extend(&(s.len() as u32).to_le_bytes())?;
    buf.extend(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator() -> Creator {
        Creator {
            address: Address::new_from_array([7; 32]),
            verified: false,
            share: FULL_CREATOR_SHARE,
        }
    }

    #[test]
    fn pack_layout() {
        let data = CreateMetadataAccountV3Data {
            name: b"TestNFT",
            symbol: b"TNFT",
            uri: b"u",
            seller_fee_basis_points: 0x0102,
            creator: Some(creator()),
            is_mutable: true,
        };
        let buf = data.pack().unwrap();
        let bytes = buf.as_slice();

        let mut expected = std::vec![CREATE_METADATA_ACCOUNT_V3_DISCRIMINATOR];
        expected.extend([7, 0, 0, 0]);
        expected.extend(b"TestNFT");
        expected.extend([4, 0, 0, 0]);
        expected.extend(b"TNFT");
        expected.extend([1, 0, 0, 0, b'u']);
        expected.extend([0x02, 0x01]);
        expected.extend([1, 1, 0, 0, 0]);
        expected.extend([7; 32]);
        expected.extend([0, FULL_CREATOR_SHARE]);
        expected.extend([0, 0, 1, 0]);

        assert_eq!(bytes, expected.as_slice());
    }

    #[test]
    fn max_length_fields_fit_the_buffer() {
        let name = [b'n'; MAX_NAME_LENGTH];
        let symbol = [b's'; MAX_SYMBOL_LENGTH];
        let uri = [b'u'; MAX_URI_LENGTH];
        let data = CreateMetadataAccountV3Data {
            name: &name,
            symbol: &symbol,
            uri: &uri,
            seller_fee_basis_points: 0,
            creator: Some(creator()),
            is_mutable: false,
        };

        assert_eq!(
            data.pack().unwrap().len(),
            MAX_CREATE_METADATA_ACCOUNT_V3_DATA_LEN
        );
    }

    #[test]
    fn overlong_uri_is_rejected() {
        let uri = [b'u'; MAX_URI_LENGTH + 1];
        let data = CreateMetadataAccountV3Data {
            name: b"",
            symbol: b"",
            uri: &uri,
            seller_fee_basis_points: 0,
            creator: None,
            is_mutable: true,
        };

        assert!(matches!(data.pack(), Err(TrustifyError::StringTooLong)));
    }
}

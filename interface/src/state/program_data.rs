use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        TrustifyError,
        TrustifyResult,
    },
    state::{
        transmutable::{
            load,
            load_mut,
            Transmutable,
        },
        LeU64,
        U64_SIZE,
    },
};

pub const PROGRAM_DATA_SIZE: usize = 128;
pub const PROGRAM_DATA_DISCRIMINANT: u64 = u64::from_le_bytes(*b"trustify");

/// Maximum byte lengths accepted by the token metadata program.
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

/// The singleton configuration account stored at the `program_data` PDA.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct ProgramData {
    /// The u64 account discriminant as LE bytes.
    discriminant: LeU64,
    /// The administrative authority that initialized the program.
    pub authority: Address,
    /// The relayer allowed to forward mint transactions.
    pub trusted_forwarder: Address,
    /// The u64 number of NFTs minted so far as LE bytes.
    token_counter: LeU64,
    /// The bump for the program data PDA.
    pub bump: u8,
    name_len: u8,
    symbol_len: u8,
    /// The collection name as zero padded UTF-8 bytes.
    name: [u8; MAX_NAME_LENGTH],
    /// The collection symbol as zero padded UTF-8 bytes.
    symbol: [u8; MAX_SYMBOL_LENGTH],
    _padding: [u8; 3],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid. `name()` and `symbol()` tolerate corrupt lengths and bytes.
unsafe impl Transmutable for ProgramData {
    const LEN: usize = PROGRAM_DATA_SIZE;
}

const_assert_eq!(PROGRAM_DATA_SIZE, size_of::<ProgramData>());
const_assert_eq!(align_of::<ProgramData>(), 1);

impl ProgramData {
    /// Creates the initial program data with a token counter of zero.
    pub fn init(
        authority: &Address,
        trusted_forwarder: &Address,
        name: &str,
        symbol: &str,
        bump: u8,
    ) -> Result<Self, TrustifyError> {
        Ok(ProgramData {
            discriminant: PROGRAM_DATA_DISCRIMINANT.to_le_bytes(),
            authority: *authority,
            trusted_forwarder: *trusted_forwarder,
            token_counter: [0; U64_SIZE],
            bump,
            name_len: name.len() as u8,
            symbol_len: symbol.len() as u8,
            name: padded::<MAX_NAME_LENGTH>(name)?,
            symbol: padded::<MAX_SYMBOL_LENGTH>(symbol)?,
            _padding: [0; 3],
        })
    }

    /// Loads program data from account bytes, checking the length and discriminant.
    #[inline(always)]
    pub fn load(bytes: &[u8]) -> Result<&Self, TrustifyError> {
        let program_data = load::<Self>(bytes)?;
        program_data.verify_discriminant()?;
        Ok(program_data)
    }

    /// Mutable version of [`ProgramData::load`].
    #[inline(always)]
    pub fn load_mut(bytes: &mut [u8]) -> Result<&mut Self, TrustifyError> {
        let program_data = load_mut::<Self>(bytes)?;
        program_data.verify_discriminant()?;
        Ok(program_data)
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> TrustifyResult {
        if self.discriminant() != PROGRAM_DATA_DISCRIMINANT {
            return Err(TrustifyError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn token_counter(&self) -> u64 {
        u64::from_le_bytes(self.token_counter)
    }

    /// Increments the token counter and returns its value prior to the increment, which is the id
    /// of the token being minted.
    #[inline(always)]
    pub fn increment_token_counter(&mut self) -> Result<u64, TrustifyError> {
        let current = self.token_counter();
        let next = current
            .checked_add(1)
            .ok_or(TrustifyError::ArithmeticOverflow)?;
        self.token_counter = next.to_le_bytes();
        Ok(current)
    }

    #[inline(always)]
    pub fn name_bytes(&self) -> &[u8] {
        truncated(&self.name, self.name_len)
    }

    #[inline(always)]
    pub fn symbol_bytes(&self) -> &[u8] {
        truncated(&self.symbol, self.symbol_len)
    }

    /// The collection name, or an empty string if the stored bytes aren't valid UTF-8.
    pub fn name(&self) -> &str {
        core::str::from_utf8(self.name_bytes()).unwrap_or_default()
    }

    /// The collection symbol, or an empty string if the stored bytes aren't valid UTF-8.
    pub fn symbol(&self) -> &str {
        core::str::from_utf8(self.symbol_bytes()).unwrap_or_default()
    }
}

#[inline(always)]
fn padded<const N: usize>(s: &str) -> Result<[u8; N], TrustifyError> {
    let bytes = s.as_bytes();
    if bytes.len() > N {
        return Err(TrustifyError::StringTooLong);
    }
    let mut res = [0u8; N];
    res[..bytes.len()].copy_from_slice(bytes);
    Ok(res)
}

#[inline(always)]
fn truncated(bytes: &[u8], len: u8) -> &[u8] {
    &bytes[..(len as usize).min(bytes.len())]
}

pub mod program_data;
pub mod transmutable;

pub const U64_SIZE: usize = core::mem::size_of::<u64>();

/// A little-endian `u64` stored as bytes so that account layouts stay alignment 1.
pub type LeU64 = [u8; U64_SIZE];

/// The size of an SPL token mint account.
pub const SPL_MINT_LEN: usize = 82;

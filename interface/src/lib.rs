#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod instructions;
pub mod metadata;
pub mod pack;
pub mod program_ids;
pub mod seeds;
pub mod state;
pub mod utils;

pub mod program {
    solana_address::declare_id!("CxQNPSEJtPtqT55NYzZ6VgwFR2jcvJfviTSdFPbVkz11");
}

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod context;
mod debug;
mod instructions;
mod processor;
mod shared;
mod validation;

pub use processor::process_instruction;
pub use trustify_interface::program::ID;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

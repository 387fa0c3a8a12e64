pub mod mint_operations;
pub mod seeds;
pub mod token_metadata;

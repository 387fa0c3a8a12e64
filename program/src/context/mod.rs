pub mod initialize_context;
pub mod mint_nft_context;

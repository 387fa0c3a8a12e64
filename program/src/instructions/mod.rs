mod initialize;
mod mint_nft;

pub use initialize::process_initialize;
pub use mint_nft::process_mint_nft;

//! Ids of the programs and sysvars the `trustify` program interacts with.

pub mod system_program {
    solana_address::declare_id!("11111111111111111111111111111111");
}

pub mod token_program {
    solana_address::declare_id!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}

pub mod associated_token_program {
    solana_address::declare_id!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
}

/// The Metaplex token metadata program.
pub mod token_metadata_program {
    solana_address::declare_id!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
}

pub mod rent_sysvar {
    solana_address::declare_id!("SysvarRent111111111111111111111111111111111");
}

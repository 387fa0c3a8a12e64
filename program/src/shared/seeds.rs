//! Signer seed macros for the program derived addresses `trustify` signs for. The seed constants
//! themselves live in [`trustify_interface::seeds`].

/// # Example
///
/// ```ignore
/// use solana_instruction_view::cpi::Signer;
///
/// let bump: u8 = 0xfe;
/// let signer: Signer = crate::program_data_signer!(bump);
/// ```
#[macro_export]
macro_rules! program_data_signer {
    ( $bump:expr ) => {
        solana_instruction_view::cpi::Signer::from(&[
            solana_instruction_view::cpi::Seed::from(
                trustify_interface::seeds::PROGRAM_DATA_SEED,
            ),
            solana_instruction_view::cpi::Seed::from(&[$bump]),
        ])
    };
}

/// # Example
///
/// ```ignore
/// use solana_instruction_view::cpi::Signer;
///
/// let bump: u8 = 0xfd;
/// let signer: Signer = crate::mint_authority_signer!(mint_address, bump);
/// ```
#[macro_export]
macro_rules! mint_authority_signer {
    ( $mint:expr, $bump:expr ) => {
        solana_instruction_view::cpi::Signer::from(&[
            solana_instruction_view::cpi::Seed::from(
                trustify_interface::seeds::MINT_AUTHORITY_SEED,
            ),
            solana_instruction_view::cpi::Seed::from($mint.as_ref()),
            solana_instruction_view::cpi::Seed::from(&[$bump]),
        ])
    };
}

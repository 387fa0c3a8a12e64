use solana_account::Account;
use solana_address::Address;
use solana_sdk::pubkey::Pubkey;
use trustify_interface::program_ids::system_program;

/// Create the data necessary to send to [mollusk_svm::MolluskContext] to mock a funded account.
pub fn create_mock_user_account(address: Address, lamport_balance: u64) -> (Address, Account) {
    (
        address,
        Account {
            lamports: lamport_balance,
            data: vec![],
            owner: system_program::ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}

/// Finds the highest bump below the canonical one that still derives a valid program address,
/// along with that address.
pub fn find_non_canonical_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Option<(Address, u8)> {
    let (_, canonical_bump) = Pubkey::find_program_address(seeds, program_id);
    (0..canonical_bump).rev().find_map(|bump| {
        let bump_seed = [bump];
        let seeds_with_bump: Vec<&[u8]> = seeds.iter().copied().chain([&bump_seed[..]]).collect();
        Pubkey::create_program_address(&seeds_with_bump, program_id)
            .ok()
            .map(|address| (address, bump))
    })
}

pub mod checks;
pub mod helper_trait;
pub mod utils;

use std::{
    collections::HashMap,
    path::PathBuf,
};

use mollusk_svm::{
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;
use trustify_interface::program_ids::token_metadata_program;

/// The token metadata program's deploy file, dumped from a cluster into `target/deploy/` with
/// `solana program dump metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s mpl_token_metadata.so`.
pub const TOKEN_METADATA_DEPLOY_FILE: &str = "mpl_token_metadata.so";

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `trustify.so` would return the absolute path version
/// of `../target/deploy/trustify`, which is exactly what [`Mollusk::new`] expects.
pub fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_WORKSPACE_DIR"))
        .join("target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

fn new_trustify_mollusk() -> Mollusk {
    let mut mollusk = Mollusk::new(&trustify::ID, &deploy_file_to_program_name("trustify.so"));
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk_svm_programs_token::associated_token::add_program(&mut mollusk);
    mollusk
}

fn into_context(
    mollusk: Mollusk,
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let rent_sysvar = mollusk.sysvars.keyed_account_for_rent_sysvar();
    let context = mollusk.with_context(HashMap::new());

    {
        let mut store = context.account_store.borrow_mut();
        store.insert(rent_sysvar.0, rent_sysvar.1);
        for (address, account) in accounts {
            store.insert(address, account);
        }
    }

    context
}

/// Creates and returns a [`MolluskContext`] with the following created and initialized:
/// - The `trustify` program
/// - The SPL token program
/// - The associated token program
/// - The rent sysvar account
/// - The accounts passed
pub fn new_trustify_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    into_context(new_trustify_mollusk(), accounts)
}

/// [`new_trustify_mollusk_context`] plus the token metadata program, which `MintNft` invokes.
pub fn new_trustify_mollusk_context_with_metadata(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mut mollusk = new_trustify_mollusk();
    mollusk.add_program(
        &token_metadata_program::ID,
        &deploy_file_to_program_name(TOKEN_METADATA_DEPLOY_FILE),
    );
    into_context(mollusk, accounts)
}

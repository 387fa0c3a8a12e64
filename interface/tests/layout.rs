use solana_address::Address;
use trustify_interface::{
    program,
    program_ids::{
        rent_sysvar,
        system_program,
        token_metadata_program,
    },
    seeds,
    state::program_data::{
        ProgramData,
        PROGRAM_DATA_SIZE,
    },
};

#[test]
fn program_data_is_unaligned_and_fixed_size() {
    assert_eq!(core::mem::size_of::<ProgramData>(), PROGRAM_DATA_SIZE);
    assert_eq!(PROGRAM_DATA_SIZE, 128);
    assert_eq!(core::mem::align_of::<ProgramData>(), 1);
}

#[test]
fn program_ids() {
    assert_eq!(
        program::ID,
        "CxQNPSEJtPtqT55NYzZ6VgwFR2jcvJfviTSdFPbVkz11".parse::<Address>().unwrap()
    );
    assert_eq!(
        token_metadata_program::ID,
        "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s".parse::<Address>().unwrap()
    );
    assert_eq!(system_program::ID.as_ref(), &[0u8; 32]);
    assert_eq!(
        rent_sysvar::ID,
        "SysvarRent111111111111111111111111111111111".parse::<Address>().unwrap()
    );
}

#[test]
fn program_data_address_uses_the_canonical_bump() {
    assert_eq!(seeds::PROGRAM_DATA_BUMP, 254);
    assert_eq!(
        seeds::PROGRAM_DATA_ADDRESS,
        "CcREYLRoyJiSt43DJ9rTmKzQVve3YwDjf8zYa2oj5Q69".parse::<Address>().unwrap()
    );
}

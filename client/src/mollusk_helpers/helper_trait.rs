use std::collections::HashMap;

use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;

use crate::{
    pda::find_program_data_address,
    views::{
        try_program_data_view_from_owner_and_data,
        try_token_account_view,
        ProgramDataView,
        TokenAccountView,
    },
};

pub trait TrustifyTestHelper {
    fn view_program_data(&self) -> ProgramDataView;

    fn view_token_account(&self, address: &Address) -> TokenAccountView;

    fn account_exists(&self, address: &Address) -> bool;
}

impl TrustifyTestHelper for MolluskContext<HashMap<Address, Account>> {
    fn view_program_data(&self) -> ProgramDataView {
        let account_store = self.account_store.borrow();
        let (program_data, _) = find_program_data_address();

        let acc = account_store
            .get(&program_data)
            .expect("Program data should exist in the mollusk account store");
        try_program_data_view_from_owner_and_data(acc.owner, &acc.data)
            .expect("Account data isn't valid program data")
    }

    fn view_token_account(&self, address: &Address) -> TokenAccountView {
        let account_store = self.account_store.borrow();

        let acc = account_store
            .get(address)
            .unwrap_or_else(|| panic!("Token account {address} doesn't exist"));
        try_token_account_view(&acc.data).expect("Should unpack token account")
    }

    fn account_exists(&self, address: &Address) -> bool {
        self.account_store
            .borrow()
            .get(address)
            .is_some_and(|acc| acc.lamports > 0)
    }
}

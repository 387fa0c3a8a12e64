//! See [`ProgramContext`].

use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use spl_associated_token_account_interface::address::get_associated_token_address;
use trustify_interface::{
    instructions::{
        InitializeInstructionData,
        MintNftInstructionData,
    },
    program_ids::{
        associated_token_program,
        rent_sysvar,
        system_program,
        token_metadata_program,
        token_program,
    },
};

use crate::pda::{
    find_metadata_address,
    find_mint_authority_address,
    find_program_data_address,
};

/// Every address derived from a single NFT mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NftAddresses {
    pub mint: Address,
    pub mint_authority: Address,
    pub mint_authority_bump: u8,
    pub metadata: Address,
    pub recipient: Address,
    pub recipient_ata: Address,
}

impl NftAddresses {
    pub fn new(mint: Address, recipient: Address) -> Self {
        let (mint_authority, mint_authority_bump) = find_mint_authority_address(&mint);
        let (metadata, _) = find_metadata_address(&mint);
        Self {
            mint,
            mint_authority,
            mint_authority_bump,
            metadata,
            recipient,
            recipient_ata: get_associated_token_address(&recipient, &mint),
        }
    }
}

/// Builds `trustify` instructions for one deployment of the program, identified by its program
/// data PDA and the trusted forwarder that was (or will be) stored in it.
#[derive(Clone, Copy, Debug)]
pub struct ProgramContext {
    pub program_data: Address,
    pub program_data_bump: u8,
    pub trusted_forwarder: Address,
}

impl ProgramContext {
    pub fn new(trusted_forwarder: Address) -> Self {
        let (program_data, program_data_bump) = find_program_data_address();
        Self {
            program_data,
            program_data_bump,
            trusted_forwarder,
        }
    }

    pub fn initialize(
        &self,
        authority: Address,
        name: &str,
        symbol: &str,
    ) -> anyhow::Result<Instruction> {
        let data = InitializeInstructionData {
            program_data_bump: self.program_data_bump,
            name,
            symbol,
        }
        .pack()?;

        Ok(Instruction {
            program_id: trustify::ID,
            accounts: vec![
                AccountMeta::new(authority, true),
                AccountMeta::new_readonly(self.trusted_forwarder, false),
                AccountMeta::new(self.program_data, false),
                AccountMeta::new_readonly(system_program::ID, false),
            ],
            data,
        })
    }

    /// Builds a `MintNft` instruction. The mint must be a fresh keypair that also signs the
    /// transaction.
    pub fn mint_nft(
        &self,
        signer: Address,
        nft: &NftAddresses,
        token_uri: &str,
    ) -> anyhow::Result<Instruction> {
        let data = MintNftInstructionData {
            mint_authority_bump: nft.mint_authority_bump,
            token_uri,
        }
        .pack()?;

        Ok(Instruction {
            program_id: trustify::ID,
            accounts: vec![
                AccountMeta::new(signer, true),
                AccountMeta::new_readonly(self.trusted_forwarder, false),
                AccountMeta::new(self.program_data, false),
                AccountMeta::new(nft.mint, true),
                AccountMeta::new(nft.recipient_ata, false),
                AccountMeta::new_readonly(nft.recipient, false),
                AccountMeta::new(nft.metadata, false),
                AccountMeta::new_readonly(nft.mint_authority, false),
                AccountMeta::new_readonly(token_metadata_program::ID, false),
                AccountMeta::new_readonly(token_program::ID, false),
                AccountMeta::new_readonly(associated_token_program::ID, false),
                AccountMeta::new_readonly(system_program::ID, false),
                AccountMeta::new_readonly(rent_sysvar::ID, false),
            ],
            data,
        })
    }

    /// Returns a copy of this context that passes a different trusted forwarder.
    pub fn with_trusted_forwarder(&self, trusted_forwarder: Address) -> Self {
        Self {
            trusted_forwarder,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use trustify_interface::instructions::InstructionTag;

    use super::*;

    #[test]
    fn initialize_accounts_and_data() {
        let authority = Address::new_unique();
        let forwarder = Address::new_unique();
        let ctx = ProgramContext::new(forwarder);
        let ix = ctx.initialize(authority, "TestNFT", "TNFT").unwrap();

        assert_eq!(ix.accounts.len(), InitializeInstructionData::NUM_ACCOUNTS);
        assert_eq!(ix.accounts[0], AccountMeta::new(authority, true));
        assert_eq!(ix.accounts[1].pubkey, forwarder);
        assert_eq!(ix.accounts[2].pubkey, ctx.program_data);
        assert_eq!(ix.data[0], InstructionTag::Initialize as u8);
        assert_eq!(ix.data[1], ctx.program_data_bump);
        assert_eq!(ix.data[2], 7);
        assert_eq!(&ix.data[3..10], b"TestNFT");
        assert_eq!(ix.data[10], 4);
        assert_eq!(&ix.data[11..], b"TNFT");
    }

    #[test]
    fn mint_nft_accounts_and_data() {
        let signer = Address::new_unique();
        let ctx = ProgramContext::new(Address::new_unique());
        let nft = NftAddresses::new(Address::new_unique(), signer);
        let ix = ctx.mint_nft(signer, &nft, "uri").unwrap();

        assert_eq!(ix.accounts.len(), MintNftInstructionData::NUM_ACCOUNTS);
        assert_eq!(ix.accounts[3], AccountMeta::new(nft.mint, true));
        assert_eq!(ix.accounts[4].pubkey, nft.recipient_ata);
        assert_eq!(ix.accounts[12].pubkey, rent_sysvar::ID);
        assert_eq!(
            ix.data,
            [
                InstructionTag::MintNft as u8,
                nft.mint_authority_bump,
                3,
                b'u',
                b'r',
                b'i'
            ]
        );
    }

    #[test]
    fn uri_must_fit_the_length_prefix() {
        let signer = Address::new_unique();
        let ctx = ProgramContext::new(Address::new_unique());
        let nft = NftAddresses::new(Address::new_unique(), signer);
        // Over the metadata limit but still encodable, so the program is the one to reject it.
        assert!(ctx.mint_nft(signer, &nft, &"u".repeat(201)).is_ok());
        assert!(ctx.mint_nft(signer, &nft, &"u".repeat(256)).is_err());
    }
}

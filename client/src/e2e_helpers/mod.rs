use solana_address::Address;
use solana_sdk::{
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};

use crate::{
    context::program::{
        NftAddresses,
        ProgramContext,
    },
    logs::{
        log_info,
        log_warning,
    },
    transactions::CustomRpcClient,
    views::{
        ProgramDataView,
        TokenAccountView,
    },
};

pub mod test_accounts;

/// The live-cluster flow: fund the participants, initialize the program once, then mint.
pub struct E2e {
    pub rpc: CustomRpcClient,
    pub program: ProgramContext,
    /// `None` if the program data already existed and initialization was skipped.
    pub initialize_signature: Option<Signature>,
}

impl E2e {
    /// Funds the default authority and trusted forwarder and initializes the program with them.
    ///
    /// A program that's already initialized is reused as is, with its stored trusted forwarder.
    pub async fn new_initialized(
        rpc: Option<CustomRpcClient>,
        name: &str,
        symbol: &str,
    ) -> anyhow::Result<Self> {
        let rpc = rpc.unwrap_or_default();
        let authority = test_accounts::authority();
        let forwarder = test_accounts::trusted_forwarder();

        rpc.fund_account(&authority.pubkey()).await?;
        rpc.fund_account(&forwarder.pubkey()).await?;

        if let Ok(existing) = rpc.get_program_data_view() {
            log_warning("Already initialized", &existing.name);
            return Ok(Self {
                program: ProgramContext::new(existing.trusted_forwarder),
                rpc,
                initialize_signature: None,
            });
        }

        let program = ProgramContext::new(forwarder.pubkey());
        let initialize = program.initialize(authority.pubkey(), name, symbol)?;
        let signature = rpc.send_transaction(authority, &[], &[initialize]).await?;
        log_info("Program data", program.program_data);

        Ok(Self {
            rpc,
            program,
            initialize_signature: Some(signature),
        })
    }

    /// Mints an NFT to `recipient` from a fresh mint keypair, with `signer` paying.
    pub async fn mint_nft(
        &self,
        signer: &Keypair,
        recipient: Address,
        token_uri: &str,
    ) -> anyhow::Result<(NftAddresses, Signature)> {
        let mint = Keypair::new();
        let nft = NftAddresses::new(mint.pubkey(), recipient);
        let mint_nft = self.program.mint_nft(signer.pubkey(), &nft, token_uri)?;
        let signature = self
            .rpc
            .send_transaction(signer, &[&mint], &[mint_nft])
            .await?;
        log_info("Mint", nft.mint);

        Ok((nft, signature))
    }

    pub fn view_program_data(&self) -> anyhow::Result<ProgramDataView> {
        self.rpc.get_program_data_view()
    }

    pub fn view_token_account(&self, nft: &NftAddresses) -> anyhow::Result<TokenAccountView> {
        self.rpc.get_token_account_view(&nft.recipient_ata)
    }
}

use client::{
    e2e_helpers::{
        test_accounts,
        E2e,
    },
    logs::log_info,
};
use solana_sdk::signer::Signer;

const NFT_NAME: &str = "TestNFT";
const NFT_SYMBOL: &str = "TNFT";
const TOKEN_URI: &str = "https://example.com/metadata.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new_initialized(None, NFT_NAME, NFT_SYMBOL).await?;
    if let Some(signature) = e2e.initialize_signature {
        log_info("Initialized", signature);
    }
    let before = e2e.view_program_data()?;

    let authority = test_accounts::authority();
    let recipient = test_accounts::recipient().pubkey();
    let (nft, signature) = e2e.mint_nft(authority, recipient, TOKEN_URI).await?;

    let token_account = e2e.view_token_account(&nft)?;
    anyhow::ensure!(token_account.amount == 1, "Expected a balance of 1");
    anyhow::ensure!(token_account.mint == nft.mint, "Token account has the wrong mint");
    anyhow::ensure!(
        token_account.owner == recipient,
        "Token account has the wrong owner"
    );

    let after = e2e.view_program_data()?;
    anyhow::ensure!(
        after.token_counter == before.token_counter + 1,
        "Token counter wasn't incremented"
    );

    log_info("Minted", format!("{} in {signature}", nft.mint));

    Ok(())
}

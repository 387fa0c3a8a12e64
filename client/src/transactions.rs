use anyhow::Context;
use colored::Colorize;
use solana_address::Address;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use trustify_interface::{
    error::TrustifyError,
    instructions::InstructionTag,
};

use crate::{
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
        LogColor,
    },
    pda::find_program_data_address,
    views::{
        try_program_data_view_from_owner_and_data,
        try_token_account_view,
        ProgramDataView,
        TokenAccountView,
    },
};

/// The environment variable read by [`CustomRpcClient::default`].
pub const RPC_URL_ENV: &str = "TRUSTIFY_RPC_URL";
pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";
pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

const AIRDROP_POLL_ATTEMPTS: usize = 10;
const AIRDROP_POLL_INTERVAL_MS: u64 = 500;

pub struct CustomRpcClient {
    pub client: RpcClient,
}

impl Default for CustomRpcClient {
    /// Connects to `TRUSTIFY_RPC_URL`, or the local validator if it isn't set.
    fn default() -> Self {
        let url = std::env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        Self::new(url)
    }
}

impl CustomRpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
        }
    }

    /// Airdrops [`DEFAULT_FUND_AMOUNT`] lamports to `address` and polls for confirmation.
    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        let airdrop_signature = self
            .client
            .request_airdrop(address, DEFAULT_FUND_AMOUNT)
            .context("Failed to request airdrop")?;

        for _ in 0..AIRDROP_POLL_ATTEMPTS {
            if self
                .client
                .confirm_transaction(&airdrop_signature)
                .context("Couldn't confirm airdrop")?
            {
                return Ok(());
            }
            std::thread::sleep(std::time::Duration::from_millis(AIRDROP_POLL_INTERVAL_MS));
        }

        log_warning("Unconfirmed airdrop", address);
        Ok(())
    }

    /// Sends and confirms a transaction paid for by `payer`. Failures are logged, with custom
    /// `trustify` errors decoded, and then returned.
    pub async fn send_transaction(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let blockhash = self
            .client
            .get_latest_blockhash()
            .context("Couldn't fetch the latest blockhash")?;

        let msg = Message::new(instructions, Some(&payer.pubkey()));
        let mut tx = Transaction::new_unsigned(msg);
        let all_signers = std::iter::once(payer)
            .chain(signers.iter().copied())
            .collect::<Vec<_>>();
        tx.try_sign(&all_signers, blockhash)
            .context("Couldn't sign transaction")?;

        match self.client.send_and_confirm_transaction(&tx) {
            Ok(sig) => {
                let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                log_success("Signature", format!("{sig}\n{sender_info}"));
                Ok(sig)
            }
            Err(error) => {
                log_instruction_error(&error, instructions);
                log_info("Payer", payer.pubkey());
                Err(error).context("Failed transaction submission")
            }
        }
    }

    pub fn get_program_data_view(&self) -> anyhow::Result<ProgramDataView> {
        let (program_data, _) = find_program_data_address();
        let account = self
            .client
            .get_account(&program_data)
            .context("Couldn't fetch the program data account")?;
        try_program_data_view_from_owner_and_data(account.owner, &account.data)
    }

    pub fn get_token_account_view(&self, address: &Address) -> anyhow::Result<TokenAccountView> {
        let account = self
            .client
            .get_account(address)
            .with_context(|| format!("Couldn't fetch token account {address}"))?;
        try_token_account_view(&account.data)
    }
}

/// Logs the failing instruction's error, decoding it as a [`TrustifyError`] when the failing
/// instruction targets `trustify`.
pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                ..
            }),
        ..
    }) = error.kind()
    else {
        log_error("Client error", error);
        return;
    };

    let TransactionError::InstructionError(ixn_idx, ixn_error) = ui_err.clone().into() else {
        log_error("Transaction error", error);
        return;
    };

    match (ixn_error, instructions.get(ixn_idx as usize)) {
        (InstructionError::Custom(code), Some(instruction))
            if instruction.program_id == trustify::ID =>
        {
            let tag = instruction
                .data
                .first()
                .and_then(|tag| InstructionTag::from_repr(*tag));
            match (tag, TrustifyError::from_repr(code as u8)) {
                (Some(tag), Some(error)) => log_error("Trustify error", format!("({tag}, {error})")),
                _ => log_error("Unknown trustify error", code),
            }
        }
        _ => log_error("Generic error", error),
    }
}

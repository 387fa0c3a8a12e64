use solana_program_error::ProgramError;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
pub enum TrustifyError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidInstructionData,
    StringTooLong,
    InvalidUtf8,
    NotEnoughAccountKeys,
    MissingRequiredSignature,
    AlreadyInitializedAccount,
    NotOwnedBySystemProgram,
    InvalidProgramDataOwner,
    InvalidAccountDiscriminant,
    MismatchedDataLengths,
    IncorrectTrustedForwarder,
    IncorrectSystemProgram,
    IncorrectTokenProgram,
    IncorrectAssociatedTokenProgram,
    IncorrectTokenMetadataProgram,
    IncorrectRentSysvar,
    ArithmeticOverflow,
    IncorrectProgramDataAddress,
    IncorrectMintAuthority,
}

impl From<TrustifyError> for ProgramError {
    #[inline(always)]
    fn from(e: TrustifyError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<TrustifyError> for &'static str {
    fn from(value: TrustifyError) -> Self {
        match value {
            TrustifyError::InvalidInstructionTag => "Invalid instruction tag",
            TrustifyError::InsufficientByteLength => "Not enough bytes passed",
            TrustifyError::InvalidInstructionData => "Unexpected trailing instruction data",
            TrustifyError::StringTooLong => "String exceeds its maximum length",
            TrustifyError::InvalidUtf8 => "String is not valid UTF-8",
            TrustifyError::NotEnoughAccountKeys => "Not enough account keys passed",
            TrustifyError::MissingRequiredSignature => "A required signature is missing",
            TrustifyError::AlreadyInitializedAccount => "Account is already initialized",
            TrustifyError::NotOwnedBySystemProgram => "Account isn't owned by the system program",
            TrustifyError::InvalidProgramDataOwner => "Program data isn't owned by this program",
            TrustifyError::InvalidAccountDiscriminant => "Invalid account discriminant",
            TrustifyError::MismatchedDataLengths => "Account data length doesn't match its layout",
            TrustifyError::IncorrectTrustedForwarder => "Trusted forwarder doesn't match",
            TrustifyError::IncorrectSystemProgram => "Incorrect system program",
            TrustifyError::IncorrectTokenProgram => "Incorrect token program",
            TrustifyError::IncorrectAssociatedTokenProgram => "Incorrect associated token program",
            TrustifyError::IncorrectTokenMetadataProgram => "Incorrect token metadata program",
            TrustifyError::IncorrectRentSysvar => "Incorrect rent sysvar",
            TrustifyError::ArithmeticOverflow => "Arithmetic overflow",
            TrustifyError::IncorrectProgramDataAddress => "Program data isn't the canonical PDA",
            TrustifyError::IncorrectMintAuthority => "Mint authority isn't the canonical PDA",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for TrustifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{:?}: {}", self, msg)
    }
}

#[cfg(all(feature = "std", not(target_os = "solana")))]
impl std::error::Error for TrustifyError {}

pub type TrustifyResult = Result<(), TrustifyError>;

use solana_program_error::ProgramError;

use crate::error::TrustifyError;

pub mod initialize;
pub mod mint_nft;

pub use initialize::InitializeInstructionData;
pub use mint_nft::MintNftInstructionData;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(
        strum_macros::FromRepr,
        strum_macros::EnumIter,
        strum_macros::Display
    )
)]
pub enum InstructionTag {
    Initialize,
    MintNft,
}

impl TryFrom<u8> for InstructionTag {
    type Error = ProgramError;

    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionTag::Initialize),
            1 => Ok(InstructionTag::MintNft),
            _ => Err(TrustifyError::InvalidInstructionTag.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_instruction_tag_from_u8_exhaustive() {
        for variant in InstructionTag::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                InstructionTag::from_repr(variant_u8).unwrap(),
                InstructionTag::try_from(variant_u8).unwrap(),
            );
            assert_eq!(InstructionTag::try_from(variant_u8).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let num_variants = InstructionTag::iter().count() as u8;
        for tag in num_variants..=u8::MAX {
            assert_eq!(
                InstructionTag::try_from(tag),
                Err(TrustifyError::InvalidInstructionTag.into())
            );
        }
    }
}

//! Deterministic keypairs for local end to end runs.

macro_rules! acc_keypair_fn {
    ($fn_name:ident, $b58:literal) => {
        #[inline]
        pub fn $fn_name() -> &'static ::solana_sdk::signature::Keypair {
            static KP: ::std::sync::LazyLock<::solana_sdk::signature::Keypair> =
                ::std::sync::LazyLock::new(|| {
                    ::solana_sdk::signature::Keypair::from_base58_string($b58)
                });

            ::std::sync::LazyLock::force(&KP)
        }
    };
}

#[rustfmt::skip]
mod unformatted {
    acc_keypair_fn!(authority, "4UahpeecuKmCQJv3XbkzmBxSd5JxdviM6UGMCZ5FsMw5XZv7APjzDb1WM9WcCdKX7rmsYWSi7Cumcf59TvXyLR45");
    acc_keypair_fn!(trusted_forwarder, "4phi3FwSKx8CQssCGPgBZxabjeLBZK7ZhhPrVVo1vsP4T3F9iUdQPFf7wphop5dhYg9CJV35GoPMSTdb95w3FfoE");
    acc_keypair_fn!(recipient, "5LqH8f3NYsSHGvEYbaWnRM8swJgEB9SdSrT6KkCeerTMbyZnQgSZhPQwJEVSsfZVMRPz4q4P4UYynEwvw2KApYrP");
}

pub use unformatted::*;

#[cfg(test)]
mod tests {
    use solana_sdk::signer::Signer;

    use super::*;

    #[test]
    #[rustfmt::skip]
    fn check_pubkeys() {
        assert_eq!(authority().pubkey().to_string(), "PAYRidU5w5wtJUxohMzVn9KH8p9p5PERU1SFsrUtKUV");
        assert_eq!(trusted_forwarder().pubkey().to_string(), "11113MwGAy1Aq8qkfPuukq892Zn3tV6uGHWoRYLaUBS");
        assert_eq!(recipient().pubkey().to_string(), "2222VkwR14uJeobbCRfr67aEudhqv9gwjaZHpHqja9M5");
    }
}

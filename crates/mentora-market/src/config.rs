//! Engine configuration.

use mentora_core::AccountId;

/// Default platform fee percentage.
pub const DEFAULT_PLATFORM_FEE_PERCENT: u8 = 0;

/// Marketplace configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Path to the `RocksDB` data directory (default: "/data/mentora").
    pub data_dir: String,

    /// Platform fee charged on top of the course price at enrollment,
    /// as an integer percentage of the price (default: 0).
    pub platform_fee_percent: u8,

    /// Account receiving platform fees. When unset, any computed fee is
    /// simply not charged.
    pub treasury_account: Option<AccountId>,
}

impl MarketConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or malformed variables fall back to defaults; a malformed
    /// treasury account name disables the fee rather than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let treasury_account = std::env::var("MENTORA_TREASURY_ACCOUNT")
            .ok()
            .and_then(|name| match AccountId::new(name) {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!(%err, "ignoring invalid treasury account");
                    None
                }
            });

        Self {
            data_dir: std::env::var("MENTORA_DATA_DIR").unwrap_or_else(|_| "/data/mentora".into()),
            platform_fee_percent: std::env::var("MENTORA_PLATFORM_FEE_PERCENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PLATFORM_FEE_PERCENT),
            treasury_account,
        }
    }

    /// The fee charged on top of `price`, in the smallest unit.
    ///
    /// Integer percentage arithmetic, truncating: a 10% fee on a price of
    /// 6 is 0. No fee is charged without a treasury account to receive it.
    #[must_use]
    pub fn platform_fee(&self, price: u128) -> u128 {
        if self.treasury_account.is_none() {
            return 0;
        }
        price * u128::from(self.platform_fee_percent) / 100
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            data_dir: "/data/mentora".into(),
            platform_fee_percent: DEFAULT_PLATFORM_FEE_PERCENT,
            treasury_account: None,
        }
    }
}

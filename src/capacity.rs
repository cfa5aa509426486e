use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

pub const SATS_PER_BTC: u64 = 100_000_000;

/// Channel sizes the generator draws from, in satoshis.
pub const REPRESENTATIVE_CAPACITIES: [u64; 9] = [
    5_000_000,
    10_000_000,
    16_000_000,
    20_000_000,
    30_000_000,
    50_000_000,
    100_000_000,
    150_000_000,
    200_000_000,
];

const SMALL_BELOW: u64 = 20_000_000;
const MEDIUM_BELOW: u64 = 50_000_000;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityClass {
    Small,
    Medium,
    Large,
}

pub fn classify(capacity: u64) -> CapacityClass {
    if capacity < SMALL_BELOW {
        CapacityClass::Small
    } else if capacity < MEDIUM_BELOW {
        CapacityClass::Medium
    } else {
        CapacityClass::Large
    }
}

/// Human readable amount: BTC above one bitcoin, millions of sats otherwise.
pub fn format_sats(amount: u64) -> String {
    if amount > SATS_PER_BTC {
        format!("{:.2} BTC", amount as f64 / SATS_PER_BTC as f64)
    } else {
        format!("{:.2}m sats", amount as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify(5_000_000), CapacityClass::Small);
        assert_eq!(classify(19_999_999), CapacityClass::Small);
        assert_eq!(classify(20_000_000), CapacityClass::Medium);
        assert_eq!(classify(49_999_999), CapacityClass::Medium);
        assert_eq!(classify(50_000_000), CapacityClass::Large);
        assert_eq!(classify(200_000_000), CapacityClass::Large);
    }

    #[test]
    fn classification_is_monotonic() {
        REPRESENTATIVE_CAPACITIES.windows(2).for_each(|w| {
            assert!(w[0] < w[1]);
            assert!(classify(w[0]) <= classify(w[1]));
        });
    }

    #[test]
    fn formats_btc_and_millions() {
        assert_eq!(format_sats(250_000_000), "2.50 BTC");
        assert_eq!(format_sats(15_000_000), "15.00m sats");
        assert_eq!(format_sats(100_000_000), "100.00m sats");
        assert_eq!(format_sats(150_000_000), "1.50 BTC");
    }
}

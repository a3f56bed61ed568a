//! Built-in "Growth 80/20" model allocation.

use rust_decimal_macros::dec;

use super::universe_model::{AssetClass, SecurityMeta, Universe};

/// The built-in 13-holding Growth 80/20 model: roughly 80% equity,
/// 14% fixed income, 6% cash-equivalent, with target weights summing
/// to ~100.
pub fn default_universe() -> Universe {
    let meta = |symbol: &str, name: &str, weight, asset_class| SecurityMeta {
        symbol: symbol.to_string(),
        name: name.to_string(),
        target_weight_pct: weight,
        asset_class,
    };

    let securities = vec![
        meta(
            "SPY",
            "SPDR\u{00ae} S&P 500\u{00ae} ETF",
            dec!(47.850),
            AssetClass::Equity,
        ),
        meta(
            "JMVYX",
            "JPMorgan Mid Cap Value Fund (R6)",
            dec!(8.803),
            AssetClass::Equity,
        ),
        meta(
            "VXUS",
            "Vanguard Total International Stock Index ETF",
            dec!(5.100),
            AssetClass::Equity,
        ),
        meta(
            "VWILX",
            "Vanguard International Growth Fund (Admiral)",
            dec!(4.950),
            AssetClass::Equity,
        ),
        meta(
            "VTRIX",
            "Vanguard International Value Fund (Investor)",
            dec!(4.950),
            AssetClass::Equity,
        ),
        meta(
            "VCRIX",
            "NYLI CBRE Global Infrastructure (I)",
            dec!(3.000),
            AssetClass::Equity,
        ),
        meta(
            "JDMNX",
            "Janus Henderson Enterprise Fund (N)",
            dec!(2.447),
            AssetClass::Equity,
        ),
        meta(
            "QUAYX",
            "AB Small Cap Growth Portfolio (Advisor)",
            dec!(0.450),
            AssetClass::Equity,
        ),
        meta(
            "FIKNX",
            "Fidelity Advisor Small Cap Value Fund (Z)",
            dec!(0.450),
            AssetClass::Equity,
        ),
        meta(
            "BIMIX",
            "Baird Intermediate Bond Fund (Institutional)",
            dec!(6.300),
            AssetClass::FixedIncome,
        ),
        meta(
            "GVI",
            "iShares Intermediate Government/Credit Bond ETF",
            dec!(6.300),
            AssetClass::FixedIncome,
        ),
        meta(
            "DODIX",
            "Dodge & Cox Income Fund (I)",
            dec!(1.400),
            AssetClass::FixedIncome,
        ),
        meta(
            "GOIXX",
            "Federated Hermes Government Obligations (IS)",
            dec!(8.000),
            AssetClass::Cash,
        ),
    ];

    Universe::new(securities).expect("built-in universe is valid")
}

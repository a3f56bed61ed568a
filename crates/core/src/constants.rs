/// Display precision, in decimal places, used by the breakdown table
/// and the CSV exports.
pub const WEIGHT_PCT_DECIMALS: u32 = 3;
pub const PRICE_DECIMALS: u32 = 4;
pub const SHARES_DECIMALS: u32 = 6;
pub const VALUE_DECIMALS: u32 = 2;

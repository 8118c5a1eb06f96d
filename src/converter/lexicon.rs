//! Word tables used to spell out amounts
//!
//! All tables are indexed by value so lookups never need arithmetic beyond
//! a division or remainder by ten.

/// Words for 0 through 9
pub const ONES: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Words for 10 through 19, indexed by `n - 10`
pub const TEENS: [&str; 10] = [
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];

/// Words for multiples of ten, indexed by `n / 10` (0 and 1 are never used)
pub const TENS_MULTIPLES: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Names of the 3-digit groups, indexed by magnitude (0 = units)
///
/// Seven groups cover every `u64`, so rendering never runs off the table.
/// Which of them an amount may actually reach is decided by
/// [`MagnitudeCeiling`](super::MagnitudeCeiling).
pub const MAGNITUDE_GROUPS: [&str; 7] = [
    "",
    "THOUSAND",
    "MILLION",
    "BILLION",
    "TRILLION",
    "QUADRILLION",
    "QUINTILLION",
];

pub const HUNDRED: &str = "HUNDRED";
pub const AND: &str = "AND";

pub const DOLLAR: &str = "DOLLAR";
pub const DOLLARS: &str = "DOLLARS";
pub const CENT: &str = "CENT";
pub const CENTS: &str = "CENTS";

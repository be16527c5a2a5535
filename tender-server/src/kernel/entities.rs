pub type Address = String;
pub type TenderId = u64;
pub type BidId = u64;
pub type Amount = u64;
pub type DocumentHash = String;

/// Bid id 0 is reserved to mean "no winning bid".
pub const NO_WINNING_BID: BidId = 0;

pub const LOTTERY_SEED: &[u8] = b"lottery";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const TICKET_BALANCE_SEED: &[u8] = b"ticket_balance";

/// 10_000 basis points is 100%.
pub const MAX_FEE_BPS: u16 = 10_000;

/// Upper bound on ticket entries per round. Sizes the `players` vector of the lottery account.
pub const MAX_TICKET_ENTRIES: usize = 200;

/// Upper bound on distinct players per round. `pick_winner` takes a
/// (ticket balance, wallet) pair per distinct player on top of its 5 fixed
/// accounts, and 5 + 2 * 14 = 33 keys is what a legacy transaction can carry.
pub const MAX_DISTINCT_PLAYERS: usize = 14;

/// Return data is capped at 1024 bytes: 4 byte length prefix + 30 pubkeys fits.
pub const MAX_PLAYERS_PER_PAGE: u32 = 30;

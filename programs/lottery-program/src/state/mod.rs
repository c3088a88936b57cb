pub use lottery::*;
pub use ticket_balance::*;
pub use treasury::*;

pub mod lottery;
pub mod ticket_balance;
pub mod treasury;

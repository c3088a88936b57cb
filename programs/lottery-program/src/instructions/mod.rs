pub use buy_tickets::*;
pub use close_round::*;
pub use emergency_withdraw::*;
pub use initialize_lottery::*;
pub use open_round::*;
pub use pick_winner::*;
pub use queries::*;
pub use receive_funds::*;

pub mod buy_tickets;
pub mod close_round;
pub mod emergency_withdraw;
pub mod initialize_lottery;
pub mod open_round;
pub mod pick_winner;
pub mod queries;
pub mod receive_funds;

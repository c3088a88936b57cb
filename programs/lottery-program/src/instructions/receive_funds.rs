use anchor_lang::prelude::*;

use crate::{error::LotteryError, instructions::buy_tickets};

/// Plain value transfer into the lottery.
///
/// While a round is open this is a ticket purchase with the same validation
/// and effects as `buy_tickets`. While closed the transfer is refused.
pub fn receive_funds(ctx: Context<buy_tickets::BuyTickets>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.lottery.is_open,
        LotteryError::DirectTransferWhileClosed
    );
    buy_tickets::purchase(ctx, amount)
}

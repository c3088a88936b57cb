//! Read-only instructions. Results are returned through transaction return data,
//! so they are usually called through simulation.

use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TICKET_BALANCE_SEED},
    state::{Lottery, TicketBalance},
};

/// Number of ticket entries in the current round, counting a player once per ticket.
///
/// # Errors
/// Fails only account validation: the lottery must sit at its `["lottery", owner]` PDA.
pub fn get_players_count(ctx: Context<ViewLottery>) -> Result<u64> {
    Ok(ctx.accounts.lottery.players.len() as u64)
}

/// Page of the current player list.
///
/// The list grows with every ticket sold, and return data is capped at 1024
/// bytes, so at most `MAX_PLAYERS_PER_PAGE` entries come back per call. Page
/// through with `start`, or fetch the lottery account to read it in one go.
pub fn get_players(ctx: Context<ViewLottery>, start: u32, limit: u32) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players_page(start, limit))
}

/// Tickets a player has bought since their balance was last reset by a draw.
///
/// The count survives rounds that were reopened without a draw, so it can
/// exceed the player's entries in the current round.
///
/// # Arguments
/// * `ticket_balance` - PDA with seeds ["ticket_balance", lottery_key, player_key]
pub fn get_tickets_bought(ctx: Context<ViewTicketBalance>) -> Result<u64> {
    Ok(ctx.accounts.ticket_balance.ticket_count)
}

#[derive(Accounts)]
pub struct ViewLottery<'info> {
    #[account(
        seeds = [
            LOTTERY_SEED,
            lottery.owner.as_ref(),
        ],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

#[derive(Accounts)]
pub struct ViewTicketBalance<'info> {
    pub lottery: Account<'info, Lottery>,

    #[account(
        seeds = [
            TICKET_BALANCE_SEED,
            lottery.key().as_ref(),
            ticket_balance.owner.as_ref(),
        ],
        bump = ticket_balance.bump,
    )]
    pub ticket_balance: Account<'info, TicketBalance>,
}

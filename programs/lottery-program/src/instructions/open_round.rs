use anchor_lang::prelude::*;

use crate::{constants::LOTTERY_SEED, error::LotteryError, state::Lottery};

/// Event emitted when a round opens
#[event]
pub struct RoundOpened {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// Price per ticket in lamports for this round
    pub ticket_price: u64,
    /// Owner fee in basis points for this round
    pub owner_fee_bps: u16,
}

/// Opens a new round, replacing the ticket price and owner fee.
///
/// The player list is emptied. Ticket balances from earlier rounds are left
/// as they are; they are only zeroed for the players of a round that gets drawn.
///
/// # Errors
/// - `NotOwner` if the signer is not the lottery owner
/// - `RoundAlreadyOpen` if a round is in progress
/// - `InvalidTicketPrice` / `InvalidOwnerFee` for out of range parameters
pub fn open_round(ctx: Context<OpenRound>, ticket_price: u64, owner_fee_bps: u16) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.open_round(ticket_price, owner_fee_bps)?;

    emit!(RoundOpened {
        lottery: lottery.key(),
        ticket_price,
        owner_fee_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct OpenRound<'info> {
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            lottery.owner.as_ref(),
        ],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
    )]
    pub lottery: Account<'info, Lottery>,

    pub owner: Signer<'info>,
}

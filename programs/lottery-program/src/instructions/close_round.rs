use anchor_lang::prelude::*;

use crate::{constants::LOTTERY_SEED, error::LotteryError, state::Lottery};

/// Event emitted when a round closes
#[event]
pub struct RoundClosed {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
}

/// Stops ticket sales for the current round. Nothing else changes.
pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.close_round()?;

    msg!("Round closed with {} ticket entries", lottery.players.len());
    emit!(RoundClosed {
        lottery: lottery.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseRound<'info> {
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

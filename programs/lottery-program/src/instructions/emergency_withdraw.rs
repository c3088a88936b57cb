use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TREASURY_SEED},
    error::LotteryError,
    state::{pot_above_rent, Lottery, Treasury},
};

/// Event emitted when the owner drains the treasury
#[event]
pub struct OwnerWithdrawn {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The owner receiving the funds
    pub owner: Pubkey,
    /// Amount withdrawn in lamports
    pub amount: u64,
}

/// Instruction to withdraw the entire pot to the owner
///
/// Allowed in any round state. Player list, ticket balances and the open flag
/// are left untouched, so a later `pick_winner` on the same players fails with
/// `EmptyPot` unless the treasury is refilled.
///
/// # Account Validations
/// * Lottery - Owner must match the signer
/// * Treasury - Must match the lottery's treasury and use proper PDA seeds
pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let treasury_account = ctx.accounts.treasury.to_account_info();
    let owner = ctx.accounts.owner.to_account_info();

    let amount = withdraw_pot(&treasury_account, &owner, Treasury::rent_lamports()?)?;

    msg!("Emergency withdrawal of {} lamports", amount);
    emit!(OwnerWithdrawn {
        lottery: ctx.accounts.lottery.key(),
        owner: owner.key(),
        amount,
    });

    Ok(())
}

/// Moves everything above `rent_lamports` from the treasury to the owner.
/// Rent stays behind so the treasury account survives.
pub(crate) fn withdraw_pot(
    treasury: &AccountInfo,
    owner: &AccountInfo,
    rent_lamports: u64,
) -> Result<u64> {
    let amount = pot_above_rent(treasury.lamports(), rent_lamports);
    require!(amount > 0, LotteryError::EmptyPot);

    Treasury::pay_out(treasury, owner, amount)?;
    Ok(amount)
}

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(
        seeds = [
            LOTTERY_SEED,
            lottery.owner.as_ref(),
        ],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
        has_one = treasury @ LotteryError::InvalidTreasury,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

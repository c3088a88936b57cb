use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TREASURY_SEED},
    state::{Lottery, Treasury, LOTTERY_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when a lottery is created
#[event]
pub struct LotteryInitialized {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The owner that controls rounds and receives the fee
    pub owner: Pubkey,
    /// Initial price per ticket in lamports
    pub ticket_price: u64,
    /// Initial owner fee in basis points
    pub owner_fee_bps: u16,
}

/// Instruction to create a lottery owned by the signer
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_price` - Price per ticket in lamports (must be > 0)
/// * `owner_fee_bps` - Owner fee in basis points (must be <= 10_000)
///
/// # Account Validations
/// * Lottery - New PDA initialized with seeds ["lottery", owner_key]
/// * Treasury - New PDA initialized with seeds ["treasury", lottery_key]
/// * Owner - Signer paying for both accounts, becomes the lottery owner
///
/// # Implementation Notes
/// - The lottery starts closed with no players
/// - The owner can never be changed afterwards
pub fn initialize_lottery(
    ctx: Context<InitializeLottery>,
    ticket_price: u64,
    owner_fee_bps: u16,
) -> Result<()> {
    Lottery::validate_params(ticket_price, owner_fee_bps)?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.owner = ctx.accounts.owner.key();
    lottery.treasury = ctx.accounts.treasury.key();
    lottery.ticket_price = ticket_price;
    lottery.owner_fee_bps = owner_fee_bps;
    lottery.is_open = false;
    lottery.players = Vec::new();
    lottery.bump = ctx.bumps.lottery;

    ctx.accounts.treasury.lottery = lottery.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    emit!(LotteryInitialized {
        lottery: lottery.key(),
        owner: lottery.owner,
        ticket_price,
        owner_fee_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    #[account(
        init,
        payer = owner,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [
            LOTTERY_SEED,
            owner.key().as_ref(),
        ],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = owner,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::{LOTTERY_SEED, TICKET_BALANCE_SEED, TREASURY_SEED},
    error::LotteryError,
    state::{Lottery, TicketBalance, Treasury, TICKET_BALANCE_ACCOUNT_SIZE},
};

/// Event emitted when tickets are purchased
#[event]
pub struct TicketsPurchased {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Number of tickets purchased
    pub num_tickets: u64,
}

/// Instruction to purchase tickets with `amount` lamports
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports sent, an exact multiple of the ticket price
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. The round must be open
/// 2. `amount` covers at least one ticket and leaves no remainder
/// 3. The purchase fits in the remaining ticket entries of the round
/// 4. Treasury account matches the one stored in the lottery
///
/// # Implementation Notes
/// - The buyer is appended to the player list once per ticket
/// - The buyer's ticket balance PDA is created on first purchase, rent paid by the buyer
/// - Updates state before moving lamports into the treasury
pub fn buy_tickets(ctx: Context<BuyTickets>, amount: u64) -> Result<()> {
    purchase(ctx, amount)
}

/// Shared by `buy_tickets` and `receive_funds`.
pub(crate) fn purchase(ctx: Context<BuyTickets>, amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let num_tickets = ctx.accounts.lottery.record_purchase(buyer, amount)?;

    let ticket_balance = &mut ctx.accounts.ticket_balance;
    if ticket_balance.is_uninitialized() {
        ticket_balance.lottery = ctx.accounts.lottery.key();
        ticket_balance.owner = buyer;
        ticket_balance.bump = ctx.bumps.ticket_balance;
    }
    ticket_balance.add_tickets(num_tickets)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "{} bought {} ticket(s), {} entries in round",
        buyer,
        num_tickets,
        ctx.accounts.lottery.players.len()
    );
    emit!(TicketsPurchased {
        lottery: ctx.accounts.lottery.key(),
        buyer,
        num_tickets,
    });

    Ok(())
}

/// Accounts required for the buy_tickets and receive_funds instructions
#[derive(Accounts)]
pub struct BuyTickets<'info> {
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            lottery.owner.as_ref(),
        ],
        bump = lottery.bump,
        has_one = treasury @ LotteryError::InvalidTreasury,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Treasury that receives the payment
    /// PDA with seeds ["treasury", lottery_key]
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Buyer's cumulative ticket count
    /// PDA with seeds ["ticket_balance", lottery_key, buyer_key]
    #[account(
        init_if_needed,
        payer = buyer,
        space = TICKET_BALANCE_ACCOUNT_SIZE,
        seeds = [
            TICKET_BALANCE_SEED,
            lottery.key().as_ref(),
            buyer.key().as_ref(),
        ],
        bump,
    )]
    pub ticket_balance: Account<'info, TicketBalance>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

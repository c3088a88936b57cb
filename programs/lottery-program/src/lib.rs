use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod randomness;
pub mod state;

declare_id!("LoTTa7mBQm8rD9cZcXw8xGf3uVxZq9yN6T2eHk4sPfd");

#[program]
pub mod lottery_program {
    use super::*;
    use crate::error::LotteryError;

    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        ticket_price: u64,
        owner_fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize_lottery::initialize_lottery(ctx, ticket_price, owner_fee_bps)
    }

    pub fn open_round(ctx: Context<OpenRound>, ticket_price: u64, owner_fee_bps: u16) -> Result<()> {
        instructions::open_round::open_round(ctx, ticket_price, owner_fee_bps)
    }

    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        instructions::close_round::close_round(ctx)
    }

    pub fn buy_tickets(ctx: Context<BuyTickets>, amount: u64) -> Result<()> {
        instructions::buy_tickets::buy_tickets(ctx, amount)
    }

    pub fn receive_funds(ctx: Context<BuyTickets>, amount: u64) -> Result<()> {
        instructions::receive_funds::receive_funds(ctx, amount)
    }

    pub fn pick_winner<'info>(
        ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>,
    ) -> Result<()> {
        instructions::pick_winner::pick_winner(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::emergency_withdraw(ctx)
    }

    pub fn get_players_count(ctx: Context<ViewLottery>) -> Result<u64> {
        instructions::queries::get_players_count(ctx)
    }

    pub fn get_players(ctx: Context<ViewLottery>, start: u32, limit: u32) -> Result<Vec<Pubkey>> {
        instructions::queries::get_players(ctx, start, limit)
    }

    pub fn get_tickets_bought(ctx: Context<ViewTicketBalance>) -> Result<u64> {
        instructions::queries::get_tickets_bought(ctx)
    }

    /// Rejects any instruction the program does not know, whatever it carries.
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _data: &[u8],
    ) -> Result<()> {
        err!(LotteryError::UnrecognizedInstruction)
    }
}

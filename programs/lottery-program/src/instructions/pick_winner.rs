use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::{
    constants::{LOTTERY_SEED, TREASURY_SEED},
    error::LotteryError,
    randomness,
    state::{Lottery, TicketBalance, Treasury},
};

/// Event emitted when a winner is paid out
#[event]
pub struct WinnerSelected {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub amount_won: u64,
}

/// Picks a winner among the ticket entries of the closed round and pays out the pot.
///
/// The winning entry is `seed mod players.len()` where the seed hashes the clock
/// timestamp, the latest slot hash and the player list (see `randomness`). This
/// is NOT secure randomness and can be predicted or influenced by the owner and
/// the slot leader.
///
/// The pot is everything the treasury holds above rent, including lamports that
/// did not come from ticket sales. The owner receives `pot * owner_fee_bps / 10_000`
/// rounded down, the winner the rest.
///
/// # Remaining accounts
/// One `(ticket_balance, wallet)` pair per distinct player, in order of first
/// purchase. Ticket balances must be writable; the winner's wallet must be writable.
///
/// # Implementation Notes
/// - Ticket balances are zeroed and the player list cleared before any lamports move
/// - Lamports leave the treasury by direct debit, so no CPI runs during payout
///
/// # Errors
/// - `NotOwner` if the signer is not the lottery owner
/// - `RoundStillOpen` if the round has not been closed
/// - `NoPlayers` if nobody bought a ticket
/// - `EmptyPot` if the treasury holds nothing above rent
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
/// - `InvalidRemainingAccounts` if the player accounts do not match the round
pub fn pick_winner<'info>(ctx: Context<'_, '_, 'info, 'info, PickWinner<'info>>) -> Result<()> {
    ctx.accounts.lottery.ensure_drawable()?;

    let treasury_info = ctx.accounts.treasury.to_account_info();
    let pot = Treasury::pot(&treasury_info)?;
    require!(pot > 0, LotteryError::EmptyPot);

    // Manually validate the recent_slothashes account
    let pubkey_matches = Pubkey::from_str("SysvarS1otHashes111111111111111111111111111")
        .or(Err(LotteryError::InvalidSlotHashesAccount))?
        .eq(&ctx.accounts.recent_slothashes.key());
    require!(pubkey_matches, LotteryError::InvalidSlotHashesAccount);

    let slot_hash = {
        let data = ctx.accounts.recent_slothashes.try_borrow_data()?;
        randomness::latest_slot_hash(&data)?
    };
    let clock = Clock::get()?;

    let lottery_key = ctx.accounts.lottery.key();
    let players = &ctx.accounts.lottery.players;
    let seed = randomness::draw_seed(clock.unix_timestamp, &slot_hash, players);
    let winner_index = randomness::winner_index(&seed, players.len())?;
    let winner = *players.get(winner_index).ok_or(LotteryError::NoPlayers)?;

    let (owner_fee, winner_amount) = ctx.accounts.lottery.split_pot(pot)?;
    msg!(
        "Winning entry {} of {}: {}",
        winner_index,
        ctx.accounts.lottery.players.len(),
        winner
    );

    let distinct_players = ctx.accounts.lottery.distinct_players();
    let player_accounts =
        load_player_accounts(&lottery_key, &distinct_players, ctx.remaining_accounts)?;
    let winner_wallet = find_winner_wallet(&player_accounts, winner)?;

    // Effects: reset round state before any lamports leave the treasury.
    reset_ticket_balances(player_accounts)?;
    ctx.accounts.lottery.clear_players();

    // Interactions
    if owner_fee > 0 {
        Treasury::pay_out(
            &treasury_info,
            &ctx.accounts.owner.to_account_info(),
            owner_fee,
        )?;
    }
    Treasury::pay_out(&treasury_info, winner_wallet, winner_amount)?;

    msg!("Owner fee {} lamports, winner paid {} lamports", owner_fee, winner_amount);
    emit!(WinnerSelected {
        lottery: lottery_key,
        winner,
        amount_won: winner_amount,
    });

    Ok(())
}

/// Pairs every distinct player with its ticket balance account and wallet.
///
/// `remaining` must hold exactly one `(ticket_balance, wallet)` pair per entry of
/// `distinct_players`, in the same order.
fn load_player_accounts<'info>(
    lottery: &Pubkey,
    distinct_players: &[Pubkey],
    remaining: &'info [AccountInfo<'info>],
) -> Result<Vec<(Account<'info, TicketBalance>, &'info AccountInfo<'info>)>> {
    require!(
        remaining.len() == distinct_players.len() * 2,
        LotteryError::InvalidRemainingAccounts
    );

    let mut player_accounts = Vec::with_capacity(distinct_players.len());
    for (player, pair) in distinct_players.iter().zip(remaining.chunks_exact(2)) {
        let (balance_info, wallet) = (&pair[0], &pair[1]);
        require!(balance_info.is_writable, LotteryError::InvalidRemainingAccounts);
        require_keys_eq!(wallet.key(), *player, LotteryError::InvalidRemainingAccounts);

        let ticket_balance = Account::<TicketBalance>::try_from(balance_info)?;
        require_keys_eq!(ticket_balance.lottery, *lottery, LotteryError::InvalidRemainingAccounts);
        require_keys_eq!(ticket_balance.owner, *player, LotteryError::InvalidRemainingAccounts);

        player_accounts.push((ticket_balance, wallet));
    }
    Ok(player_accounts)
}

fn find_winner_wallet<'info>(
    player_accounts: &[(Account<'info, TicketBalance>, &'info AccountInfo<'info>)],
    winner: Pubkey,
) -> Result<&'info AccountInfo<'info>> {
    let wallet = player_accounts
        .iter()
        .find(|(_, wallet)| wallet.key() == winner)
        .map(|(_, wallet)| *wallet)
        .ok_or(LotteryError::InvalidRemainingAccounts)?;
    require!(wallet.is_writable, LotteryError::InvalidRemainingAccounts);
    Ok(wallet)
}

/// Zeroes and persists every ticket balance of the drawn round.
fn reset_ticket_balances<'info>(
    player_accounts: Vec<(Account<'info, TicketBalance>, &'info AccountInfo<'info>)>,
) -> Result<()> {
    for (mut ticket_balance, _) in player_accounts {
        ticket_balance.reset();
        ticket_balance.exit(&crate::ID)?;
    }
    Ok(())
}

/// Accounts required for the pick_winner instruction
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be closed with at least one ticket entry
    #[account(
        mut,
        seeds = [
            LOTTERY_SEED,
            lottery.owner.as_ref(),
        ],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
        has_one = treasury @ LotteryError::InvalidTreasury,
    )]
    pub lottery: Account<'info, Lottery>,

    /// PDA with seeds ["treasury", lottery_key] holding the pot
    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// Receives the owner fee
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}

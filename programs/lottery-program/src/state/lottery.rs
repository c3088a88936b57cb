use std::collections::BTreeSet;

use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DISTINCT_PLAYERS, MAX_FEE_BPS, MAX_PLAYERS_PER_PAGE, MAX_TICKET_ENTRIES},
    error::LotteryError,
};

// Space calculation:
// 8 (discriminator) +
// 32 (owner) +
// 32 (treasury) +
// 8 (ticket_price) +
// 2 (owner_fee_bps) +
// 1 (is_open) +
// 4 (length of players) +
// 32 * MAX_TICKET_ENTRIES (players) +
// 1 (bump)
pub const LOTTERY_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 2 + 1 + 4 + 32 * MAX_TICKET_ENTRIES + 1;

/// Ledger of a single owner's lottery.
///
/// `players` holds one entry per ticket in purchase order, so a buyer of three
/// tickets appears three times. It is cleared whenever a round opens and
/// whenever a winner is picked.
#[account]
pub struct Lottery {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    /// Price of one ticket in lamports. Always greater than zero.
    pub ticket_price: u64,
    /// Owner cut of the pot in basis points, at most 10_000.
    pub owner_fee_bps: u16,
    pub is_open: bool,
    pub players: Vec<Pubkey>,
    pub bump: u8,
}

impl Lottery {
    pub fn validate_params(ticket_price: u64, owner_fee_bps: u16) -> Result<()> {
        require!(ticket_price > 0, LotteryError::InvalidTicketPrice);
        require!(owner_fee_bps <= MAX_FEE_BPS, LotteryError::InvalidOwnerFee);
        Ok(())
    }

    pub fn open_round(&mut self, ticket_price: u64, owner_fee_bps: u16) -> Result<()> {
        require!(!self.is_open, LotteryError::RoundAlreadyOpen);
        Self::validate_params(ticket_price, owner_fee_bps)?;

        self.ticket_price = ticket_price;
        self.owner_fee_bps = owner_fee_bps;
        self.players.clear();
        self.is_open = true;
        Ok(())
    }

    pub fn close_round(&mut self) -> Result<()> {
        require!(self.is_open, LotteryError::RoundNotOpen);
        self.is_open = false;
        Ok(())
    }

    /// Number of tickets `amount` lamports buy. Only exact multiples of the price are accepted.
    pub fn tickets_for(&self, amount: u64) -> Result<u64> {
        require!(
            amount >= self.ticket_price,
            LotteryError::AmountBelowTicketPrice
        );
        let remainder = amount
            .checked_rem(self.ticket_price)
            .ok_or(LotteryError::InvalidTicketPrice)?;
        require!(remainder == 0, LotteryError::AmountNotMultipleOfPrice);

        let num_tickets = amount
            .checked_div(self.ticket_price)
            .ok_or(LotteryError::InvalidTicketPrice)?;
        Ok(num_tickets)
    }

    /// Validates a purchase of `amount` lamports and appends `buyer` once per ticket.
    /// Nothing is modified when any check fails.
    pub fn record_purchase(&mut self, buyer: Pubkey, amount: u64) -> Result<u64> {
        require!(self.is_open, LotteryError::RoundNotOpen);
        let num_tickets = self.tickets_for(amount)?;

        let entries = usize::try_from(num_tickets).map_err(|_| LotteryError::Overflow)?;
        let total = self
            .players
            .len()
            .checked_add(entries)
            .ok_or(LotteryError::Overflow)?;
        require!(total <= MAX_TICKET_ENTRIES, LotteryError::LotteryFull);

        // Every distinct player must fit in a single pick_winner transaction.
        if !self.players.contains(&buyer) {
            require!(
                self.distinct_players().len() < MAX_DISTINCT_PLAYERS,
                LotteryError::LotteryFull
            );
        }

        self.players.extend(std::iter::repeat(buyer).take(entries));
        Ok(num_tickets)
    }

    pub fn ensure_drawable(&self) -> Result<()> {
        require!(!self.is_open, LotteryError::RoundStillOpen);
        require!(!self.players.is_empty(), LotteryError::NoPlayers);
        Ok(())
    }

    /// Every player of the round once, in order of first purchase.
    pub fn distinct_players(&self) -> Vec<Pubkey> {
        let mut seen = BTreeSet::new();
        self.players
            .iter()
            .filter(|player| seen.insert(**player))
            .copied()
            .collect()
    }

    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    /// Splits `pot` into `(owner_fee, winner_amount)`. The fee rounds down.
    pub fn split_pot(&self, pot: u64) -> Result<(u64, u64)> {
        let owner_fee = (pot as u128)
            .checked_mul(self.owner_fee_bps as u128)
            .and_then(|scaled| scaled.checked_div(MAX_FEE_BPS as u128))
            .and_then(|fee| u64::try_from(fee).ok())
            .ok_or(LotteryError::Overflow)?;
        let winner_amount = pot.checked_sub(owner_fee).ok_or(LotteryError::Overflow)?;
        Ok((owner_fee, winner_amount))
    }

    /// Slice of `players` starting at `start`, at most `MAX_PLAYERS_PER_PAGE` long.
    pub fn players_page(&self, start: u32, limit: u32) -> Vec<Pubkey> {
        let limit = limit.min(MAX_PLAYERS_PER_PAGE) as usize;
        self.players
            .iter()
            .skip(start as usize)
            .take(limit)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const PRICE: u64 = 100_000_000; // 0.1 SOL

    fn closed_lottery(ticket_price: u64, owner_fee_bps: u16) -> Lottery {
        Lottery {
            owner: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            ticket_price,
            owner_fee_bps,
            is_open: false,
            players: Vec::new(),
            bump: 255,
        }
    }

    fn open_lottery() -> Lottery {
        let mut lottery = closed_lottery(1, 0);
        lottery.open_round(PRICE, 500).unwrap();
        lottery
    }

    fn assert_lottery_error<T: std::fmt::Debug>(result: Result<T>, expected: LotteryError) {
        match result {
            Err(Error::AnchorError(err)) => {
                assert_eq!(err.error_code_number, u32::from(expected))
            }
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_lottery_size() {
        let mut lottery = closed_lottery(PRICE, 500);
        lottery.players = vec![Pubkey::new_unique(); MAX_TICKET_ENTRIES];

        let mut bytes = Vec::new();
        AnchorSerialize::serialize(&lottery, &mut bytes).unwrap();
        assert_eq!(bytes.len() + 8, LOTTERY_ACCOUNT_SIZE);
    }

    #[test]
    fn test_validate_params() {
        assert!(Lottery::validate_params(1, 0).is_ok());
        assert!(Lottery::validate_params(PRICE, MAX_FEE_BPS).is_ok());
        assert_lottery_error(Lottery::validate_params(0, 500), LotteryError::InvalidTicketPrice);
        assert_lottery_error(
            Lottery::validate_params(PRICE, MAX_FEE_BPS + 1),
            LotteryError::InvalidOwnerFee,
        );
    }

    #[test]
    fn test_open_round_resets_players_and_sets_params() {
        let mut lottery = closed_lottery(PRICE, 0);
        lottery.players = vec![Pubkey::new_unique(); 4];

        lottery.open_round(2 * PRICE, 250).unwrap();

        assert!(lottery.is_open);
        assert!(lottery.players.is_empty());
        assert_eq!(lottery.ticket_price, 2 * PRICE);
        assert_eq!(lottery.owner_fee_bps, 250);
    }

    #[test]
    fn test_open_round_rejects_when_open_or_invalid() {
        let mut lottery = open_lottery();
        assert_lottery_error(lottery.open_round(PRICE, 0), LotteryError::RoundAlreadyOpen);

        let mut lottery = closed_lottery(PRICE, 100);
        assert_lottery_error(lottery.open_round(0, 100), LotteryError::InvalidTicketPrice);
        assert_lottery_error(lottery.open_round(PRICE, 10_001), LotteryError::InvalidOwnerFee);
        assert!(!lottery.is_open);
        assert_eq!(lottery.owner_fee_bps, 100);
    }

    #[test]
    fn test_close_round() {
        let mut lottery = open_lottery();
        lottery.close_round().unwrap();
        assert!(!lottery.is_open);
        assert_lottery_error(lottery.close_round(), LotteryError::RoundNotOpen);
    }

    #[test]
    fn test_purchase_appends_one_entry_per_ticket() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut lottery = open_lottery();

        assert_eq!(lottery.record_purchase(alice, 2 * PRICE).unwrap(), 2);
        assert_eq!(lottery.record_purchase(bob, PRICE).unwrap(), 1);

        assert_eq!(lottery.players, vec![alice, alice, bob]);
        assert_eq!(lottery.distinct_players(), vec![alice, bob]);
    }

    #[test]
    fn test_purchase_rejects_bad_amounts_without_changes() {
        let buyer = Pubkey::new_unique();
        let mut lottery = open_lottery();
        lottery.record_purchase(buyer, PRICE).unwrap();

        assert_lottery_error(
            lottery.record_purchase(buyer, PRICE - 1),
            LotteryError::AmountBelowTicketPrice,
        );
        assert_lottery_error(
            lottery.record_purchase(buyer, PRICE + PRICE / 2),
            LotteryError::AmountNotMultipleOfPrice,
        );
        assert_lottery_error(lottery.record_purchase(buyer, 0), LotteryError::AmountBelowTicketPrice);
        assert_eq!(lottery.players.len(), 1);
    }

    #[test]
    fn test_purchase_rejected_while_closed() {
        let mut lottery = closed_lottery(PRICE, 0);
        assert_lottery_error(
            lottery.record_purchase(Pubkey::new_unique(), PRICE),
            LotteryError::RoundNotOpen,
        );
        assert!(lottery.players.is_empty());
    }

    #[test]
    fn test_purchase_respects_capacity() {
        let buyer = Pubkey::new_unique();
        let mut lottery = open_lottery();
        let almost_full = (MAX_TICKET_ENTRIES as u64 - 1) * PRICE;
        lottery.record_purchase(buyer, almost_full).unwrap();

        assert_lottery_error(lottery.record_purchase(buyer, 2 * PRICE), LotteryError::LotteryFull);
        assert_eq!(lottery.players.len(), MAX_TICKET_ENTRIES - 1);

        lottery.record_purchase(buyer, PRICE).unwrap();
        assert_eq!(lottery.players.len(), MAX_TICKET_ENTRIES);
    }

    #[test]
    fn test_purchase_caps_distinct_players() {
        let mut lottery = open_lottery();
        let buyers: Vec<Pubkey> = (0..MAX_DISTINCT_PLAYERS)
            .map(|_| Pubkey::new_unique())
            .collect();
        for buyer in &buyers {
            lottery.record_purchase(*buyer, PRICE).unwrap();
        }

        assert_lottery_error(
            lottery.record_purchase(Pubkey::new_unique(), PRICE),
            LotteryError::LotteryFull,
        );
        assert_eq!(lottery.players.len(), MAX_DISTINCT_PLAYERS);

        // Players already in the round can keep buying.
        assert_eq!(lottery.record_purchase(buyers[0], 3 * PRICE).unwrap(), 3);
        assert_eq!(lottery.distinct_players(), buyers);
    }

    #[test]
    fn test_distinct_players_keeps_first_purchase_order() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let carol = Pubkey::new_unique();
        let mut lottery = open_lottery();
        for buyer in [bob, alice, bob, carol, alice] {
            lottery.record_purchase(buyer, PRICE).unwrap();
        }
        assert_eq!(lottery.distinct_players(), vec![bob, alice, carol]);
    }

    #[test]
    fn test_ensure_drawable() {
        let mut lottery = open_lottery();
        lottery.record_purchase(Pubkey::new_unique(), PRICE).unwrap();
        assert_lottery_error(lottery.ensure_drawable(), LotteryError::RoundStillOpen);

        lottery.close_round().unwrap();
        assert!(lottery.ensure_drawable().is_ok());

        lottery.clear_players();
        assert_lottery_error(lottery.ensure_drawable(), LotteryError::NoPlayers);
    }

    #[test]
    fn test_split_pot() {
        let lottery = closed_lottery(PRICE, 500);
        assert_eq!(lottery.split_pot(300_000_000).unwrap(), (15_000_000, 285_000_000));

        // Fee rounds down, the winner keeps the dust.
        assert_eq!(lottery.split_pot(199).unwrap(), (9, 190));

        let no_fee = closed_lottery(PRICE, 0);
        assert_eq!(no_fee.split_pot(12_345).unwrap(), (0, 12_345));

        let all_fee = closed_lottery(PRICE, MAX_FEE_BPS);
        assert_eq!(all_fee.split_pot(u64::MAX).unwrap(), (u64::MAX, 0));
    }

    #[test]
    fn test_players_page() {
        let mut lottery = open_lottery();
        let distinct: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let buyers: Vec<Pubkey> = (0..40).map(|i| distinct[i % distinct.len()]).collect();
        for buyer in &buyers {
            lottery.record_purchase(*buyer, PRICE).unwrap();
        }

        assert_eq!(lottery.players_page(0, 5), buyers[..5].to_vec());
        assert_eq!(lottery.players_page(35, 10), buyers[35..].to_vec());
        assert_eq!(
            lottery.players_page(0, u32::MAX).len(),
            MAX_PLAYERS_PER_PAGE as usize
        );
        assert!(lottery.players_page(100, 5).is_empty());
    }

    #[test]
    fn test_round_lifecycle_and_fee_split() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut lottery = closed_lottery(1, 0);

        lottery.open_round(PRICE, 500).unwrap();
        lottery.record_purchase(alice, 2 * PRICE).unwrap();
        lottery.record_purchase(bob, PRICE).unwrap();
        assert_eq!(lottery.players.len(), 3);

        lottery.close_round().unwrap();
        lottery.ensure_drawable().unwrap();
        let (owner_fee, winner_amount) = lottery.split_pot(3 * PRICE).unwrap();
        assert_eq!(owner_fee, 15_000_000);
        assert_eq!(winner_amount, 285_000_000);

        lottery.clear_players();
        assert!(lottery.players.is_empty());
    }
}

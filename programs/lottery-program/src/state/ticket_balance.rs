use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator + 32 lottery + 32 owner + 8 ticket_count + 1 bump
pub const TICKET_BALANCE_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 1;

/// Cumulative ticket count of one player in one lottery.
///
/// PDA with seeds ["ticket_balance", lottery_key, player_key]. Created on the
/// player's first purchase and zeroed when a winner is picked from a round the
/// player took part in. Opening a new round does not touch it, so a player who
/// sits out a payout keeps the count from earlier rounds.
#[account]
pub struct TicketBalance {
    pub lottery: Pubkey,
    pub owner: Pubkey,
    pub ticket_count: u64,
    pub bump: u8,
}

impl TicketBalance {
    /// True until the first purchase fills in the owner.
    pub fn is_uninitialized(&self) -> bool {
        self.owner == Pubkey::default()
    }

    pub fn add_tickets(&mut self, num_tickets: u64) -> Result<()> {
        self.ticket_count = self
            .ticket_count
            .checked_add(num_tickets)
            .ok_or(LotteryError::Overflow)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.ticket_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(ticket_count: u64) -> TicketBalance {
        TicketBalance {
            lottery: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            ticket_count,
            bump: 255,
        }
    }

    #[test]
    fn test_ticket_balance_size() {
        let mut bytes = Vec::new();
        AnchorSerialize::serialize(&balance(3), &mut bytes).unwrap();
        assert_eq!(bytes.len() + 8, TICKET_BALANCE_ACCOUNT_SIZE);
    }

    #[test]
    fn test_add_and_reset() {
        let mut ticket_balance = balance(2);
        ticket_balance.add_tickets(3).unwrap();
        assert_eq!(ticket_balance.ticket_count, 5);

        ticket_balance.reset();
        assert_eq!(ticket_balance.ticket_count, 0);
    }

    #[test]
    fn test_add_overflows() {
        let mut ticket_balance = balance(u64::MAX);
        assert!(ticket_balance.add_tickets(1).is_err());
        assert_eq!(ticket_balance.ticket_count, u64::MAX);
    }

    #[test]
    fn test_fresh_balance_is_uninitialized() {
        let fresh = TicketBalance {
            lottery: Pubkey::default(),
            owner: Pubkey::default(),
            ticket_count: 0,
            bump: 0,
        };
        assert!(fresh.is_uninitialized());
        assert!(!balance(0).is_uninitialized());
    }
}

use anchor_lang::prelude::*;

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned PDA holding every lamport paid into the lottery.
#[account]
pub struct Treasury {
    pub lottery: Pubkey,
    pub bump: u8,
}

impl Treasury {
    pub fn rent_lamports() -> Result<u64> {
        Ok(Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE))
    }

    /// Lamports held above the rent-exempt minimum, i.e. what can be paid out.
    pub fn pot(treasury: &AccountInfo) -> Result<u64> {
        Ok(pot_above_rent(treasury.lamports(), Self::rent_lamports()?))
    }

    /// Moves `amount` lamports out of the treasury by direct debit.
    /// This only works because the treasury is a PDA owned by our program.
    pub fn pay_out(treasury: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
        treasury.sub_lamports(amount)?;
        recipient.add_lamports(amount)?;
        Ok(())
    }
}

pub fn pot_above_rent(balance: u64, rent_lamports: u64) -> u64 {
    balance.saturating_sub(rent_lamports)
}

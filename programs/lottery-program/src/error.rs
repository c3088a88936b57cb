use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    Overflow,
    #[msg("Only the lottery owner may perform this action")]
    NotOwner,
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[msg("Owner fee must be between 0 and 10000 basis points")]
    InvalidOwnerFee,
    #[msg("Lottery round is not open")]
    RoundNotOpen,
    #[msg("Lottery round is already open")]
    RoundAlreadyOpen,
    #[msg("Lottery round must be closed first")]
    RoundStillOpen,
    #[msg("Lottery is closed, direct transfers are not accepted")]
    DirectTransferWhileClosed,
    #[msg("Amount is below the price of one ticket")]
    AmountBelowTicketPrice,
    #[msg("Amount must be an exact multiple of the ticket price")]
    AmountNotMultipleOfPrice,
    #[msg("Round is full: ticket entry or distinct player limit reached")]
    LotteryFull,
    #[msg("No players in the current round")]
    NoPlayers,
    #[msg("Lottery treasury holds no funds")]
    EmptyPot,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Remaining accounts must list one writable (ticket balance, wallet) pair per distinct player")]
    InvalidRemainingAccounts,
    #[msg("Treasury account does not belong to this lottery")]
    InvalidTreasury,
    #[msg("Unrecognized instruction")]
    UnrecognizedInstruction,
}

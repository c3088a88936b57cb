//! Pseudo-random winner selection.
//!
//! NOT cryptographically secure. The seed is derived from the clock timestamp,
//! the most recent slot hash and the player list, all of which the lottery
//! owner and the slot leader can observe or influence before the draw lands.
//! Anyone able to time the `pick_winner` transaction can bias the outcome.
//! Use a verifiable randomness oracle if that matters.

use anchor_lang::{prelude::*, solana_program::hash::hashv};
use arrayref::array_ref;

use crate::error::LotteryError;

// SlotHashes sysvar layout: u64 entry count, then (u64 slot, [u8; 32] hash)
// entries ordered newest first.
const SLOT_HASHES_COUNT_LEN: usize = 8;
const LATEST_SLOT_HASH_OFFSET: usize = SLOT_HASHES_COUNT_LEN + 8;

/// Hash of the most recent slot recorded in the SlotHashes sysvar data.
pub fn latest_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    require!(
        data.len() >= LATEST_SLOT_HASH_OFFSET + 32,
        LotteryError::InvalidSlotHashesAccount
    );
    let entries = u64::from_le_bytes(*array_ref![data, 0, 8]);
    require!(entries > 0, LotteryError::InvalidSlotHashesAccount);

    Ok(*array_ref![data, LATEST_SLOT_HASH_OFFSET, 32])
}

/// sha256(timestamp || slot_hash || players...)
pub fn draw_seed(timestamp: i64, slot_hash: &[u8; 32], players: &[Pubkey]) -> [u8; 32] {
    let timestamp = timestamp.to_le_bytes();
    let mut parts: Vec<&[u8]> = Vec::with_capacity(players.len() + 2);
    parts.push(&timestamp);
    parts.push(slot_hash);
    for player in players {
        parts.push(player.as_ref());
    }

    hashv(&parts).to_bytes()
}

/// `seed` read as a big-endian 256-bit integer, modulo `count`.
pub fn winner_index(seed: &[u8; 32], count: usize) -> Result<usize> {
    require!(count > 0, LotteryError::NoPlayers);
    let modulus = count as u128;

    let index = seed
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus);
    usize::try_from(index).map_err(|_| LotteryError::Overflow.into())
}

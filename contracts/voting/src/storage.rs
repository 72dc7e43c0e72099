use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, VoteReceipt};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// Proposals and receipts are permanent, append-only records, so persistent
// storage TTL is set to ~10 years worth of ledgers (~5s per ledger).
const PROPOSAL_TTL_LEDGERS: u32 = 63_072_000;
const RECEIPT_TTL_LEDGERS: u32 = 63_072_000;
const OWNER_TTL_LEDGERS: u32 = 63_072_000;

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Owner, OWNER_TTL_LEDGERS, OWNER_TTL_LEDGERS);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner)
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

// ── Proposal Counter ─────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

/// Allocate the next proposal ID. IDs start at 1 and are never reused.
pub fn increment_proposal_count(env: &Env) -> u64 {
    let count = get_proposal_count(env) + 1;
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &count);
    env.storage().persistent().extend_ttl(
        &DataKey::ProposalCount,
        PROPOSAL_TTL_LEDGERS,
        PROPOSAL_TTL_LEDGERS,
    );
    count
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_TTL_LEDGERS, PROPOSAL_TTL_LEDGERS);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

// ── Vote Receipts ────────────────────────────────────────────────────────────

pub fn save_receipt(env: &Env, proposal_id: u64, voter: &Address, receipt: &VoteReceipt) {
    let key = DataKey::Receipt(proposal_id, voter.clone());
    env.storage().persistent().set(&key, receipt);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECEIPT_TTL_LEDGERS, RECEIPT_TTL_LEDGERS);
}

pub fn get_receipt(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteReceipt> {
    env.storage()
        .persistent()
        .get(&DataKey::Receipt(proposal_id, voter.clone()))
}

pub fn has_receipt(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Receipt(proposal_id, voter.clone()))
}

use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle status of a proposal. The only transition is Active -> Ended.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Active,
    Ended,
}

/// A voteable record with a fixed option list and mutable tally.
///
/// Invariants: `votes.len() == options.len()` and
/// `total_votes == sum(votes)`. Proposals are never deleted.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Proposal {
    /// Sequential ID starting at 1 (0 means "no such proposal")
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub description: String,
    /// Option labels, fixed at creation (len >= 2)
    pub options: Vec<String>,
    /// One counter per option, parallel to `options`
    pub votes: Vec<u32>,
    pub total_votes: u32,
    /// Unix timestamp (seconds) when created
    pub created_at: u64,
    /// Unix timestamp (seconds) after which voting closes
    pub deadline: u64,
    pub status: ProposalStatus,
}

/// Permanent record that an identity voted on a proposal.
/// Written once on the first vote, never mutated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteReceipt {
    pub voted: bool,
    pub option: u32,
}

/// Batch-read projection of a proposal, for reducing client round trips.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasicInfo {
    pub id: u64,
    pub title: String,
    pub status: ProposalStatus,
    pub deadline: u64,
    pub total_votes: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    ProposalCount,
    Proposal(u64),
    Receipt(u64, Address), // (proposal_id, voter)
}

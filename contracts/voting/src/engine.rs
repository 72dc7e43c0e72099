use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::errors::VotingError;
use crate::storage;
use crate::types::{Proposal, ProposalStatus, VoteReceipt};

/// Vote casting, Active -> Ended transition, and winner resolution.
pub struct VotingEngine;

/// Shared boundary predicate: a proposal is past its voting window once
/// `now` is strictly greater than the deadline. Used identically by the
/// lazy-expiry check in `vote` and by the `resolved_status` projection.
fn deadline_passed(deadline: u64, now: u64) -> bool {
    now > deadline
}

/// Scan counters in option order; the winner is the first option whose
/// count strictly exceeds the best seen so far. Ties break toward the
/// lowest index; an all-zero tally resolves to option 0 with 0 votes.
pub(crate) fn resolve_winner(votes: &Vec<u32>) -> (u32, u32) {
    let mut winner: u32 = 0;
    let mut best: u32 = 0;
    for (index, count) in votes.iter().enumerate() {
        if count > best {
            best = count;
            winner = index as u32;
        }
    }
    (winner, best)
}

impl VotingEngine {
    /// Cast a vote. One receipt per (proposal, voter), ever.
    ///
    /// The deadline is observed lazily: if this call finds the window
    /// already closed, it finalizes the proposal as a committed side effect
    /// and still reports `VotingClosed` for the vote itself. A vote landing
    /// exactly on the deadline is counted, then finalizes the proposal
    /// within the same operation.
    pub fn vote(
        env: &Env,
        voter: Address,
        proposal_id: u64,
        option_index: u32,
    ) -> Result<(), VotingError> {
        voter.require_auth();

        let mut proposal = storage::get_proposal(env, proposal_id).ok_or(VotingError::NotFound)?;

        if proposal.status == ProposalStatus::Ended {
            return Err(VotingError::NotActive);
        }

        if storage::has_receipt(env, proposal_id, &voter) {
            return Err(VotingError::AlreadyVoted);
        }

        let now = env.ledger().timestamp();
        if deadline_passed(proposal.deadline, now) {
            Self::finalize(env, &mut proposal);
            return Err(VotingError::VotingClosed);
        }

        if option_index >= proposal.options.len() {
            return Err(VotingError::InvalidOption);
        }

        storage::save_receipt(
            env,
            proposal_id,
            &voter,
            &VoteReceipt {
                voted: true,
                option: option_index,
            },
        );

        let tally = proposal.votes.get(option_index).unwrap_or(0);
        proposal.votes.set(option_index, tally + 1);
        proposal.total_votes += 1;
        storage::save_proposal(env, &proposal);

        env.events().publish(
            (Symbol::new(env, "vote_cast"), proposal_id),
            (voter, option_index),
        );

        // This vote may itself cross the boundary.
        if now >= proposal.deadline {
            Self::finalize(env, &mut proposal);
        }

        Ok(())
    }

    /// Manually close a proposal. Owner-only.
    pub fn close(env: &Env, caller: Address, proposal_id: u64) -> Result<(), VotingError> {
        caller.require_auth();

        let owner = storage::get_owner(env).ok_or(VotingError::NotInitialized)?;
        if caller != owner {
            return Err(VotingError::Unauthorized);
        }

        let mut proposal = storage::get_proposal(env, proposal_id).ok_or(VotingError::NotFound)?;
        if proposal.status == ProposalStatus::Ended {
            return Err(VotingError::NotActive);
        }

        Self::finalize(env, &mut proposal);
        Ok(())
    }

    /// Pure, non-mutating status projection: an Active proposal whose
    /// deadline has passed reads as Ended even though the stored record
    /// has not been finalized by a write yet.
    pub fn resolved_status(env: &Env, proposal_id: u64) -> Result<ProposalStatus, VotingError> {
        let proposal = storage::get_proposal(env, proposal_id).ok_or(VotingError::NotFound)?;

        let now = env.ledger().timestamp();
        if proposal.status == ProposalStatus::Active && deadline_passed(proposal.deadline, now) {
            return Ok(ProposalStatus::Ended);
        }
        Ok(proposal.status)
    }

    /// Whether (and how) an identity voted on a proposal. Reports
    /// `(false, 0)` when no receipt exists.
    pub fn voter_info(
        env: &Env,
        proposal_id: u64,
        voter: Address,
    ) -> Result<VoteReceipt, VotingError> {
        if storage::get_proposal(env, proposal_id).is_none() {
            return Err(VotingError::NotFound);
        }

        Ok(storage::get_receipt(env, proposal_id, &voter).unwrap_or(VoteReceipt {
            voted: false,
            option: 0,
        }))
    }

    /// Run winner resolution and persist the Active -> Ended transition.
    /// Called exactly once per proposal, at the transition.
    fn finalize(env: &Env, proposal: &mut Proposal) {
        let (winning_option, winning_votes) = resolve_winner(&proposal.votes);

        proposal.status = ProposalStatus::Ended;
        storage::save_proposal(env, proposal);

        env.events().publish(
            (Symbol::new(env, "proposal_ended"), proposal.id),
            (winning_option, winning_votes),
        );
    }
}

use soroban_sdk::{Address, Env, String, Symbol, Vec};

use crate::errors::VotingError;
use crate::storage;
use crate::types::{BasicInfo, Proposal, ProposalStatus};

/// Owns the proposal-id -> Proposal mapping and the allocation counter.
pub struct ProposalStore;

impl ProposalStore {
    // -------------------------------
    // Proposal Creation
    // -------------------------------

    /// Create a proposal with all vote counters zeroed and status Active.
    /// Owner-only. Every validation runs before any storage write.
    pub fn create(
        env: &Env,
        creator: Address,
        title: String,
        description: String,
        options: Vec<String>,
        deadline: u64,
    ) -> Result<u64, VotingError> {
        creator.require_auth();

        let owner = storage::get_owner(env).ok_or(VotingError::NotInitialized)?;
        if creator != owner {
            return Err(VotingError::Unauthorized);
        }

        if options.len() < 2 {
            return Err(VotingError::InvalidOptions);
        }

        let now = env.ledger().timestamp();
        if deadline <= now {
            return Err(VotingError::PastDeadline);
        }

        let id = storage::increment_proposal_count(env);

        let mut votes: Vec<u32> = Vec::new(env);
        for _ in 0..options.len() {
            votes.push_back(0);
        }

        let proposal = Proposal {
            id,
            creator: creator.clone(),
            title: title.clone(),
            description,
            options,
            votes,
            total_votes: 0,
            created_at: now,
            deadline,
            status: ProposalStatus::Active,
        };

        storage::save_proposal(env, &proposal);

        env.events().publish(
            (Symbol::new(env, "proposal_created"), id),
            (creator, title, deadline, now),
        );

        Ok(id)
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    pub fn get(env: &Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        storage::get_proposal(env, proposal_id).ok_or(VotingError::NotFound)
    }

    /// All allocated IDs in creation order, recomputed on each call.
    pub fn list_all(env: &Env) -> Vec<u64> {
        let count = storage::get_proposal_count(env);
        let mut ids: Vec<u64> = Vec::new(env);
        for id in 1..=count {
            ids.push_back(id);
        }
        ids
    }

    /// Number of proposals ever created.
    pub fn count(env: &Env) -> u64 {
        storage::get_proposal_count(env)
    }

    /// Basic info for each requested ID, in input order. IDs that do not
    /// exist are silently dropped rather than failing the whole batch.
    pub fn batch_basic_info(env: &Env, ids: Vec<u64>) -> Vec<BasicInfo> {
        let mut infos: Vec<BasicInfo> = Vec::new(env);
        for id in ids.iter() {
            if let Some(proposal) = storage::get_proposal(env, id) {
                infos.push_back(BasicInfo {
                    id,
                    title: proposal.title,
                    status: proposal.status,
                    deadline: proposal.deadline,
                    total_votes: proposal.total_votes,
                });
            }
        }
        infos
    }
}

#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

mod engine;
mod errors;
mod proposals;
mod storage;
mod types;

use engine::VotingEngine;
use proposals::ProposalStore;

pub use errors::VotingError;
pub use types::{BasicInfo, Proposal, ProposalStatus, VoteReceipt};


#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Initialize the contract with the owner address, the only identity
    /// allowed to create and manually close proposals. Can only be called
    /// once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), VotingError> {
        if storage::has_owner(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_owner(&env, &owner);

        env.events()
            .publish((symbol_short!("init"),), (owner,));

        Ok(())
    }

    /// Hand the owner role to a new address.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), VotingError> {
        let owner = storage::get_owner(&env).ok_or(VotingError::NotInitialized)?;
        owner.require_auth();
        storage::set_owner(&env, &new_owner);

        env.events()
            .publish((symbol_short!("own_xfer"),), (owner, new_owner));

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, VotingError> {
        storage::get_owner(&env).ok_or(VotingError::NotInitialized)
    }

    /// Create a proposal. Owner-only; requires at least two options and a
    /// deadline strictly in the future. Returns the new proposal ID.
    pub fn create_proposal(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        options: Vec<String>,
        deadline: u64,
    ) -> Result<u64, VotingError> {
        ProposalStore::create(&env, creator, title, description, options, deadline)
    }

    /// Cast a vote for one option of an Active proposal. Each identity may
    /// vote at most once per proposal.
    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        option_index: u32,
    ) -> Result<(), VotingError> {
        VotingEngine::vote(&env, voter, proposal_id, option_index)
    }

    /// Close an Active proposal before its deadline. Owner-only.
    pub fn close_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), VotingError> {
        VotingEngine::close(&env, caller, proposal_id)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VotingError> {
        ProposalStore::get(&env, proposal_id)
    }

    pub fn list_proposals(env: Env) -> Vec<u64> {
        ProposalStore::list_all(&env)
    }

    pub fn proposal_count(env: Env) -> u64 {
        ProposalStore::count(&env)
    }

    /// Status as a reader should see it: reports Ended for an Active
    /// proposal whose deadline has passed, without mutating the record.
    pub fn resolved_status(env: Env, proposal_id: u64) -> Result<ProposalStatus, VotingError> {
        VotingEngine::resolved_status(&env, proposal_id)
    }

    pub fn voter_info(
        env: Env,
        proposal_id: u64,
        voter: Address,
    ) -> Result<VoteReceipt, VotingError> {
        VotingEngine::voter_info(&env, proposal_id, voter)
    }

    /// Basic info for a batch of proposal IDs; nonexistent IDs are dropped.
    pub fn batch_basic_info(env: Env, ids: Vec<u64>) -> Vec<BasicInfo> {
        ProposalStore::batch_basic_info(&env, ids)
    }
}

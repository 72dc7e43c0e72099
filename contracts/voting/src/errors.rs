//! Error codes for the voting contract
//!
//! Every failure is a deterministic function of current state and inputs:
//! retrying a rejected call with identical arguments fails identically, and
//! no rejection leaves the store unusable.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VotingError {
    /// Caller is not the contract owner
    Unauthorized = 1,

    /// Contract already initialized
    AlreadyInitialized = 2,

    /// Contract not initialized
    NotInitialized = 3,

    /// Referenced proposal does not exist
    NotFound = 4,

    /// Fewer than two options supplied at creation
    InvalidOptions = 5,

    /// Deadline not strictly in the future at creation
    PastDeadline = 6,

    /// Operation requires an Active proposal but it has Ended
    NotActive = 7,

    /// This voter already holds a receipt for this proposal
    AlreadyVoted = 8,

    /// Vote attempted after the deadline passed
    VotingClosed = 9,

    /// Option index out of range for this proposal
    InvalidOption = 10,
}

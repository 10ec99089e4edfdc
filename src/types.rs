multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Role — who may call a mutating endpoint
// ============================================================

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Role {
    /// The deployer of the contract.
    Owner,
    /// Any address currently in the legatee set.
    Legatee,
}

// ============================================================
// Release Trigger — what opened the legacy for claims
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ReleaseTrigger {
    /// Claims are not allowed yet. Default for empty storage.
    NotReleased,
    /// The owner released the legacy explicitly.
    Owner,
    /// A strict majority of legatees voted for release.
    Consensus,
}

// ============================================================
// Legatee Info — per-legatee state in one view
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LegateeInfo {
    pub registered: bool,
    pub percentage: u64,
    pub has_voted: bool,
    pub has_claimed: bool,
}

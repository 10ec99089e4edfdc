#![no_std]

multiversx_sc::imports!();

pub mod digital_legacy_proxy;
pub mod errors;
pub mod types;

use errors::*;
use types::{LegateeInfo, ReleaseTrigger, Role};

// ============================================================
// Constants
// ============================================================

/// Distribution percentages are expressed out of 100
const PERCENTAGE_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DigitalLegacy {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.balance().set(BigUint::zero());
        self.release_trigger().set(ReleaseTrigger::NotReleased);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: legatee registry (owner only)
    // ========================================================

    #[endpoint(addLegatee)]
    fn add_legatee(&self, legatee: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Owner);
        require!(
            !self.legatees().contains(&legatee),
            ERR_LEGATEE_ALREADY_REGISTERED
        );

        self.legatees().insert(legatee.clone());

        self.legatee_added_event(&legatee);
    }

    #[endpoint(removeLegatee)]
    fn remove_legatee(&self, legatee: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Owner);
        require!(self.legatees().contains(&legatee), ERR_LEGATEE_NOT_FOUND);

        // The claimed flag is kept so a re-added legatee cannot claim twice
        self.legatees().remove(&legatee);
        self.distribution(&legatee).clear();
        self.consensus_votes().swap_remove(&legatee);

        self.legatee_removed_event(&legatee);
    }

    #[endpoint(setDistribution)]
    fn set_distribution(&self, legatee: ManagedAddress, percentage: u64) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Owner);
        require!(self.legatees().contains(&legatee), ERR_LEGATEE_NOT_FOUND);

        self.distribution(&legatee).set(percentage);

        self.distribution_set_event(&legatee, percentage);
    }

    // ========================================================
    // ENDPOINT: deposit
    // Owner funds the legacy. Zero-value deposits are accepted.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Owner);

        let amount = self.call_value().egld_value().clone_value();
        if amount == 0u64 {
            return;
        }

        self.balance().update(|balance| *balance += &amount);

        self.deposit_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINTS: release
    // The release flag only ever moves from closed to open.
    // ========================================================

    #[endpoint(allowLegacyDistributionByOwner)]
    fn allow_legacy_distribution_by_owner(&self) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Owner);

        self.open_release(&caller, ReleaseTrigger::Owner);
    }

    #[endpoint(allowLegacyDistributionByLegateesConsensus)]
    fn allow_legacy_distribution_by_legatees_consensus(&self) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Legatee);

        // A re-vote is not counted again, but still re-checks the threshold
        // against the current legatee set
        let is_new_vote = self.consensus_votes().insert(caller.clone());

        let vote_count = self.consensus_votes().len() as u64;
        let threshold = self.get_consensus_threshold();
        if is_new_vote {
            self.consensus_vote_event(&caller, vote_count, threshold);
        }

        if vote_count >= threshold {
            self.open_release(&caller, ReleaseTrigger::Consensus);
        }
    }

    // ========================================================
    // ENDPOINT: claimLegacy
    // Checks, then effects, then the transfer.
    // ========================================================

    #[endpoint(claimLegacy)]
    fn claim_legacy(&self) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Legatee);
        require!(self.legacy_can_be_distributed(), ERR_NOT_RELEASED);
        require!(!self.claimed(&caller).get(), ERR_ALREADY_CLAIMED);

        let percentage = self.distribution(&caller).get();
        let balance = self.balance().get();
        let payout = self.share_of(&balance, percentage);
        require!(payout > 0u64, ERR_NOTHING_TO_CLAIM);
        require!(payout <= balance, ERR_INSUFFICIENT_FUNDS);

        self.claimed(&caller).set(true);
        self.balance().set(&balance - &payout);

        self.send().direct_egld(&caller, &payout);
        self.legacy_claimed_event(&caller, percentage, &payout);
    }

    // ========================================================
    // INTERNAL: authorization
    // ========================================================

    fn require_role(&self, caller: &ManagedAddress, role: Role) {
        match role {
            Role::Owner => {
                require!(*caller == self.owner().get(), ERR_NOT_OWNER);
            }
            Role::Legatee => {
                require!(self.legatees().contains(caller), ERR_NOT_LEGATEE);
            }
        }
    }

    // ========================================================
    // INTERNAL: release and share helpers
    // ========================================================

    /// Opens the legacy for claims. The first trigger is the one recorded.
    fn open_release(&self, caller: &ManagedAddress, trigger: ReleaseTrigger) {
        if self.legacy_can_be_distributed() {
            return;
        }

        self.release_trigger().set(trigger);
        self.legacy_released_event(caller, trigger);
    }

    fn share_of(&self, balance: &BigUint, percentage: u64) -> BigUint {
        (balance * percentage) / PERCENTAGE_DENOMINATOR
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getLegatees)]
    fn get_legatees(&self) -> ManagedVec<ManagedAddress> {
        let mut result = ManagedVec::new();
        for legatee in self.legatees().iter() {
            result.push(legatee);
        }
        result
    }

    #[view(isLegatee)]
    fn is_legatee(&self, address: &ManagedAddress) -> bool {
        self.legatees().contains(address)
    }

    #[view(getDistribution)]
    fn get_distribution(&self, legatee: &ManagedAddress) -> u64 {
        self.distribution(legatee).get()
    }

    /// Sum of all assigned percentages. Informational only, never enforced.
    #[view(getTotalDistribution)]
    fn get_total_distribution(&self) -> u64 {
        self.legatees()
            .iter()
            .map(|legatee| self.distribution(&legatee).get())
            .sum()
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.balance().get()
    }

    #[view(legacyCanBeDistributed)]
    fn legacy_can_be_distributed(&self) -> bool {
        self.release_trigger().get() != ReleaseTrigger::NotReleased
    }

    #[view(getReleaseTrigger)]
    fn get_release_trigger(&self) -> ReleaseTrigger {
        self.release_trigger().get()
    }

    #[view(hasVotedForConsensus)]
    fn has_voted_for_consensus(&self, legatee: &ManagedAddress) -> bool {
        self.consensus_votes().contains(legatee)
    }

    #[view(getConsensusVoteCount)]
    fn get_consensus_vote_count(&self) -> u64 {
        self.consensus_votes().len() as u64
    }

    /// Strict majority of the current legatee set: floor(n / 2) + 1.
    #[view(getConsensusThreshold)]
    fn get_consensus_threshold(&self) -> u64 {
        (self.legatees().len() / 2 + 1) as u64
    }

    #[view(hasClaimed)]
    fn has_claimed(&self, legatee: &ManagedAddress) -> bool {
        self.claimed(legatee).get()
    }

    /// What `claimLegacy` would pay the legatee right now, 0 if it would fail.
    #[view(getClaimableAmount)]
    fn get_claimable_amount(&self, legatee: &ManagedAddress) -> BigUint {
        if !self.legacy_can_be_distributed()
            || !self.legatees().contains(legatee)
            || self.claimed(legatee).get()
        {
            return BigUint::zero();
        }

        let balance = self.balance().get();
        let share = self.share_of(&balance, self.distribution(legatee).get());
        if share > balance {
            BigUint::zero()
        } else {
            share
        }
    }

    #[view(getLegateeInfo)]
    fn get_legatee_info(&self, legatee: &ManagedAddress) -> LegateeInfo {
        LegateeInfo {
            registered: self.legatees().contains(legatee),
            percentage: self.distribution(legatee).get(),
            has_voted: self.consensus_votes().contains(legatee),
            has_claimed: self.claimed(legatee).get(),
        }
    }

    #[view(getLegacyStatus)]
    fn get_legacy_status(&self) -> MultiValue4<BigUint, u64, u64, bool> {
        let balance = self.balance().get();
        let legatee_count = self.legatees().len() as u64;
        let vote_count = self.consensus_votes().len() as u64;
        let released = self.legacy_can_be_distributed();
        (balance, legatee_count, vote_count, released).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("legateeAdded")]
    fn legatee_added_event(&self, #[indexed] legatee: &ManagedAddress);

    #[event("legateeRemoved")]
    fn legatee_removed_event(&self, #[indexed] legatee: &ManagedAddress);

    #[event("distributionSet")]
    fn distribution_set_event(&self, #[indexed] legatee: &ManagedAddress, percentage: u64);

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("consensusVote")]
    fn consensus_vote_event(
        &self,
        #[indexed] legatee: &ManagedAddress,
        #[indexed] vote_count: u64,
        threshold: u64,
    );

    #[event("legacyReleased")]
    fn legacy_released_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] trigger: ReleaseTrigger,
    );

    #[event("legacyClaimed")]
    fn legacy_claimed_event(
        &self,
        #[indexed] legatee: &ManagedAddress,
        #[indexed] percentage: u64,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("balance")]
    fn balance(&self) -> SingleValueMapper<BigUint>;

    // ── Legatees ──

    #[storage_mapper("legatees")]
    fn legatees(&self) -> SetMapper<ManagedAddress>;

    #[storage_mapper("distribution")]
    fn distribution(&self, legatee: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("claimed")]
    fn claimed(&self, legatee: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Release ──

    #[storage_mapper("consensusVotes")]
    fn consensus_votes(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("releaseTrigger")]
    fn release_trigger(&self) -> SingleValueMapper<ReleaseTrigger>;
}

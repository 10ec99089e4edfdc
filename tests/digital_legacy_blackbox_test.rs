// Blackbox tests for the Digital Legacy contract.
//
// Every interaction goes through the typed proxy, the same way a script or
// another contract would call the deployed contract.

use multiversx_sc_scenario::imports::*;

use digital_legacy::digital_legacy_proxy::{self, ReleaseTrigger};
use digital_legacy::errors::*;

const CODE_PATH: MxscPath = MxscPath::new("output/digital-legacy.mxsc.json");

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const LEGATEE_ADDRESS: TestAddress = TestAddress::new("legatee");
const SECOND_LEGATEE_ADDRESS: TestAddress = TestAddress::new("second-legatee");
const OTHER_ADDRESS: TestAddress = TestAddress::new("other");
const LEGACY_ADDRESS: TestSCAddress = TestSCAddress::new("digital-legacy");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, digital_legacy::ContractBuilder);
    blockchain
}

struct LegacyTestState {
    world: ScenarioWorld,
}

impl LegacyTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1).balance(1_000u64);
        world.account(LEGATEE_ADDRESS).nonce(1);
        world.account(SECOND_LEGATEE_ADDRESS).nonce(1);
        world.account(OTHER_ADDRESS).nonce(1).balance(1_000u64);

        Self { world }
    }

    fn deploy(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .init()
            .code(CODE_PATH)
            .new_address(LEGACY_ADDRESS)
            .run();

        self
    }

    fn add_legatee(&mut self, legatee: TestAddress) -> &mut Self {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .add_legatee(legatee)
            .run();

        self
    }

    fn set_distribution(&mut self, legatee: TestAddress, percentage: u64) -> &mut Self {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .set_distribution(legatee, percentage)
            .run();

        self
    }

    fn deposit(&mut self, amount: u64) -> &mut Self {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .deposit()
            .egld(amount)
            .run();

        self
    }

    fn vote(&mut self, legatee: TestAddress) -> &mut Self {
        self.world
            .tx()
            .from(legatee)
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .allow_legacy_distribution_by_legatees_consensus()
            .run();

        self
    }

    fn claim(&mut self, legatee: TestAddress) -> &mut Self {
        self.world
            .tx()
            .from(legatee)
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .claim_legacy()
            .run();

        self
    }

    fn check_balance(&mut self, expected: u64) {
        self.world
            .query()
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .get_balance()
            .returns(ExpectValue(expected))
            .run();
    }

    fn check_released(&mut self, expected: bool) {
        self.world
            .query()
            .to(LEGACY_ADDRESS)
            .typed(digital_legacy_proxy::DigitalLegacyProxy)
            .legacy_can_be_distributed()
            .returns(ExpectValue(expected))
            .run();
    }
}

#[test]
fn deploy_sets_owner() {
    let mut state = LegacyTestState::new();
    state.deploy();

    let owner = state
        .world
        .query()
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .owner()
        .returns(ReturnsResult)
        .run();
    assert_eq!(owner.to_address(), OWNER_ADDRESS.to_address());

    state.check_balance(0);
    state.check_released(false);
}

#[test]
fn non_owner_cannot_add_legatee() {
    let mut state = LegacyTestState::new();
    state.deploy();

    state
        .world
        .tx()
        .from(OTHER_ADDRESS)
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .add_legatee(LEGATEE_ADDRESS)
        .returns(ExpectError(4, ERR_NOT_OWNER))
        .run();

    state
        .world
        .query()
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .is_legatee(LEGATEE_ADDRESS)
        .returns(ExpectValue(false))
        .run();
}

#[test]
fn deposit_only_by_owner() {
    let mut state = LegacyTestState::new();
    state.deploy().deposit(1);
    state.check_balance(1);

    state
        .world
        .tx()
        .from(OTHER_ADDRESS)
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .deposit()
        .egld(1u64)
        .returns(ExpectError(4, ERR_NOT_OWNER))
        .run();

    state.check_balance(1);
}

#[test]
fn remove_unknown_legatee_fails() {
    let mut state = LegacyTestState::new();
    state.deploy().add_legatee(LEGATEE_ADDRESS);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .remove_legatee(OTHER_ADDRESS)
        .returns(ExpectError(4, ERR_LEGATEE_NOT_FOUND))
        .run();
}

#[test]
fn consensus_release_and_single_claim() {
    let mut state = LegacyTestState::new();
    state
        .deploy()
        .add_legatee(LEGATEE_ADDRESS)
        .add_legatee(SECOND_LEGATEE_ADDRESS)
        .set_distribution(LEGATEE_ADDRESS, 100)
        .deposit(500);

    state
        .world
        .tx()
        .from(LEGATEE_ADDRESS)
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .claim_legacy()
        .returns(ExpectError(4, ERR_NOT_RELEASED))
        .run();

    // 2 legatees need 2 votes
    state.vote(LEGATEE_ADDRESS);
    state.check_released(false);
    state.vote(SECOND_LEGATEE_ADDRESS);
    state.check_released(true);

    state
        .world
        .query()
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .get_release_trigger()
        .returns(ExpectValue(ReleaseTrigger::Consensus))
        .run();

    state.claim(LEGATEE_ADDRESS);
    state.check_balance(0);

    state
        .world
        .tx()
        .from(LEGATEE_ADDRESS)
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .claim_legacy()
        .returns(ExpectError(4, ERR_ALREADY_CLAIMED))
        .run();

    state
        .world
        .query()
        .to(LEGACY_ADDRESS)
        .typed(digital_legacy_proxy::DigitalLegacyProxy)
        .has_claimed(LEGATEE_ADDRESS)
        .returns(ExpectValue(true))
        .run();
}

//! Shared test setup: bridge instantiation, secp256k1 test validators and a
//! mock peg-adapter contract that records the callbacks it receives.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, from_json, to_json_vec, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo,
    Response, StdResult, Uint128,
};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use msg_bridge::hash::keccak256;
use msg_bridge::msg::{
    BridgeReceiveMsg, DigestResponse, ExecuteMsg, InboundProof, InstantiateMsg, QueryMsg,
    SignatureData,
};

pub const FEE_DENOM: &str = "uluna";
pub const SEND_FEE: u128 = 1_000;
pub const BRIDGE_FEE: u128 = 500;
pub const MAX_REWARD: u128 = 10_000;
pub const PROOF_TTL: u64 = 7;
pub const THRESHOLD_PERCENT: u64 = 60;
pub const MAX_MESSAGE_LENGTH: u64 = 1024;

// ============================================================================
// Test Validators
// ============================================================================

/// A validator with a real secp256k1 key. Signatures produced here recover
/// through the contract's verification path.
pub struct TestValidator {
    key: SigningKey,
}

impl TestValidator {
    /// Deterministic key from a small nonzero seed.
    pub fn new(seed: u8) -> Self {
        assert!(seed > 0, "seed 0 is not a valid scalar");
        let mut bytes = [0u8; 32];
        bytes[31] = seed;
        Self {
            key: SigningKey::from_slice(&bytes).unwrap(),
        }
    }

    /// Ethereum-style 20-byte address: keccak256(pubkey)[12..].
    pub fn address(&self) -> Binary {
        let point = self.key.verifying_key().to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);
        Binary::from(&hash[12..32])
    }

    /// Sign a raw 32-byte digest, returning the (v, r, s) slot format.
    pub fn sign(&self, digest: &[u8]) -> SignatureData {
        let (sig, recid) = self.key.sign_prehash_recoverable(digest).unwrap();
        let bytes = sig.to_bytes();
        SignatureData {
            v: 27 + recid.to_byte(),
            r: Binary::from(&bytes[..32]),
            s: Binary::from(&bytes[32..]),
        }
    }
}

/// An unsigned slot (v = 0) that never counts toward the threshold.
pub fn absent_signature() -> SignatureData {
    SignatureData {
        v: 0,
        r: Binary::from(vec![0u8; 32]),
        s: Binary::from(vec![0u8; 32]),
    }
}

pub fn make_validators(n: usize) -> Vec<TestValidator> {
    (1..=n).map(|i| TestValidator::new(i as u8)).collect()
}

pub fn addresses(validators: &[TestValidator]) -> Vec<Binary> {
    validators.iter().map(|v| v.address()).collect()
}

/// A fixed 32-byte remote source account.
pub fn remote_source() -> Binary {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(&[0xAB; 20]);
    Binary::from(bytes.to_vec())
}

/// A fixed 32-byte remote destination account for outbound sends.
pub fn remote_destination() -> Binary {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(&[0xCD; 20]);
    Binary::from(bytes.to_vec())
}

// ============================================================================
// Mock Peg Adapter
// ============================================================================

/// Record of the last bridge callback the mock adapter received.
#[cw_serde]
pub struct ReceivedMessage {
    pub source: Binary,
    pub payload: Binary,
    pub event_id: u64,
}

const RECEIVED_KEY: &[u8] = b"received";

fn mock_adapter_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn mock_adapter_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: BridgeReceiveMsg,
) -> StdResult<Response> {
    let BridgeReceiveMsg::ReceiveBridgeMessage {
        source,
        payload,
        event_id,
    } = msg;
    let record = ReceivedMessage {
        source,
        payload,
        event_id,
    };
    deps.storage.set(RECEIVED_KEY, &to_json_vec(&record)?);
    Ok(Response::new().add_attribute("method", "receive_bridge_message"))
}

fn mock_adapter_query(deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    let received: Option<ReceivedMessage> = deps
        .storage
        .get(RECEIVED_KEY)
        .map(|bytes| from_json(&bytes))
        .transpose()?;
    cosmwasm_std::to_json_binary(&received)
}

pub fn contract_mock_adapter() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_adapter_execute,
        mock_adapter_instantiate,
        mock_adapter_query,
    ))
}

// ============================================================================
// Bridge Setup
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        msg_bridge::contract::execute,
        msg_bridge::contract::instantiate,
        msg_bridge::contract::query,
    ))
}

pub struct TestBridge {
    pub app: App,
    pub bridge: Addr,
    pub admin: Addr,
    pub relayer: Addr,
    pub user: Addr,
}

impl TestBridge {
    pub fn activate(&mut self) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.bridge.clone(),
                &ExecuteMsg::SetActive { active: true },
                &[],
            )
            .unwrap();
    }

    pub fn deactivate(&mut self) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.bridge.clone(),
                &ExecuteMsg::SetActive { active: false },
                &[],
            )
            .unwrap();
    }

    pub fn force_active_set(&mut self, validators: &[Binary], epoch_id: u64) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.bridge.clone(),
                &ExecuteMsg::ForceActiveValidatorSet {
                    validators: validators.to_vec(),
                    epoch_id,
                },
                &[],
            )
            .unwrap();
    }

    /// Query the exact signing digest the contract will verify.
    pub fn signing_digest(
        &self,
        source: &Binary,
        destination: &Addr,
        payload: &Binary,
        epoch_id: u64,
        event_id: u64,
    ) -> Vec<u8> {
        let res: DigestResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::SigningDigest {
                    source: source.clone(),
                    destination: destination.to_string(),
                    payload: payload.clone(),
                    epoch_id,
                    event_id,
                },
            )
            .unwrap();
        res.digest.to_vec()
    }

    /// Build a proof where the first `sign_count` validators sign and the
    /// remaining slots are absent.
    pub fn make_proof(
        &self,
        validators: &[TestValidator],
        sign_count: usize,
        source: &Binary,
        destination: &Addr,
        payload: &Binary,
        epoch_id: u64,
        event_id: u64,
    ) -> InboundProof {
        let digest = self.signing_digest(source, destination, payload, epoch_id, event_id);
        let signatures = validators
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if i < sign_count {
                    v.sign(&digest)
                } else {
                    absent_signature()
                }
            })
            .collect();
        InboundProof {
            event_id,
            epoch_id,
            signatures,
            validators: addresses(validators),
        }
    }

    /// Submit a receive with the bridge fee attached.
    pub fn receive(
        &mut self,
        source: &Binary,
        destination: &Addr,
        payload: &Binary,
        proof: InboundProof,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.relayer.clone(),
            self.bridge.clone(),
            &ExecuteMsg::ReceiveMessage {
                source: source.clone(),
                destination: destination.to_string(),
                payload: payload.clone(),
                proof,
            },
            &coins(BRIDGE_FEE, FEE_DENOM),
        )
    }

    pub fn send(&mut self, payload: &Binary, funds: &[Coin]) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.bridge.clone(),
            &ExecuteMsg::SendMessage {
                destination: remote_destination(),
                payload: payload.clone(),
            },
            funds,
        )
    }

    pub fn accumulated_fees(&self) -> Uint128 {
        let res: msg_bridge::msg::AccumulatedMessageFeesResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::AccumulatedMessageFees {})
            .unwrap();
        res.amount
    }

    pub fn active_epoch_id(&self) -> u64 {
        let res: msg_bridge::msg::ActiveValidatorSetIdResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::ActiveValidatorSetId {})
            .unwrap();
        res.epoch_id
    }

    pub fn balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, FEE_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    /// Instantiate the mock peg adapter next to the bridge.
    pub fn instantiate_mock_adapter(&mut self) -> Addr {
        let code_id = self.app.store_code(contract_mock_adapter());
        self.app
            .instantiate_contract(
                code_id,
                self.admin.clone(),
                &Empty {},
                &[],
                "mock-peg-adapter",
                None,
            )
            .unwrap()
    }

    pub fn adapter_received(&self, adapter: &Addr) -> Option<ReceivedMessage> {
        self.app
            .wrap()
            .query_wasm_smart(adapter, &Empty {})
            .unwrap()
    }
}

pub fn setup() -> TestBridge {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let relayer = Addr::unchecked("terra1relayer");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        for addr in [&admin, &relayer, &user] {
            router
                .bank
                .init_balance(storage, addr, coins(10_000_000_000, FEE_DENOM))
                .unwrap();
        }
    });

    let code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                fee_denom: FEE_DENOM.to_string(),
                threshold_percent: THRESHOLD_PERCENT,
                proof_ttl: PROOF_TTL,
                max_message_length: MAX_MESSAGE_LENGTH,
                send_message_fee: Uint128::from(SEND_FEE),
                bridge_fee: Uint128::from(BRIDGE_FEE),
                max_reward_payout: Uint128::from(MAX_REWARD),
            },
            &[],
            "msg-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    TestBridge {
        app,
        bridge,
        admin,
        relayer,
        user,
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract an attribute emitted by the bridge's own wasm event.
pub fn wasm_attr(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .unwrap_or_else(|| panic!("attribute {} not found", key))
        .value
        .clone()
}

pub fn assert_err_contains(res: anyhow::Result<AppResponse>, needle: &str) {
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains(needle),
        "Expected error containing {:?}, got: {}",
        needle,
        err_str
    );
}

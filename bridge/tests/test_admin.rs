//! Integration tests for configuration setters and the timelocked admin
//! transfer.

mod common;

use cosmwasm_std::Uint128;
use cw_multi_test::Executor;

use common::{assert_err_contains, setup};
use msg_bridge::msg::{ConfigResponse, ExecuteMsg, PendingAdminResponse, QueryMsg};

fn query_config(t: &common::TestBridge) -> ConfigResponse {
    t.app
        .wrap()
        .query_wasm_smart(&t.bridge, &QueryMsg::Config {})
        .unwrap()
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_setters_update_config() {
    let mut t = setup();

    for msg in [
        ExecuteMsg::SetThreshold { percent: 75 },
        ExecuteMsg::SetProofTtl { epochs: 3 },
        ExecuteMsg::SetMaxMessageLength { length: 2048 },
        ExecuteMsg::SetSendMessageFee {
            amount: Uint128::from(123u128),
        },
        ExecuteMsg::SetBridgeFee {
            amount: Uint128::from(456u128),
        },
        ExecuteMsg::SetMaxRewardPayout {
            amount: Uint128::from(789u128),
        },
        ExecuteMsg::SetActive { active: true },
    ] {
        t.app
            .execute_contract(t.admin.clone(), t.bridge.clone(), &msg, &[])
            .unwrap();
    }

    let config = query_config(&t);
    assert_eq!(config.threshold_percent, 75);
    assert_eq!(config.proof_ttl, 3);
    assert_eq!(config.max_message_length, 2048);
    assert_eq!(config.send_message_fee, Uint128::from(123u128));
    assert_eq!(config.bridge_fee, Uint128::from(456u128));
    assert_eq!(config.max_reward_payout, Uint128::from(789u128));
    assert!(config.active);
}

#[test]
fn test_setters_require_admin() {
    let mut t = setup();

    let res = t.app.execute_contract(
        t.user.clone(),
        t.bridge.clone(),
        &ExecuteMsg::SetThreshold { percent: 75 },
        &[],
    );
    assert_err_contains(res, "Unauthorized");

    let res = t.app.execute_contract(
        t.user.clone(),
        t.bridge.clone(),
        &ExecuteMsg::SetActive { active: true },
        &[],
    );
    assert_err_contains(res, "Unauthorized");
}

#[test]
fn test_threshold_bounds() {
    let mut t = setup();

    for percent in [0u64, 101] {
        let res = t.app.execute_contract(
            t.admin.clone(),
            t.bridge.clone(),
            &ExecuteMsg::SetThreshold { percent },
            &[],
        );
        assert_err_contains(res, "Invalid threshold");
    }

    t.app
        .execute_contract(
            t.admin.clone(),
            t.bridge.clone(),
            &ExecuteMsg::SetThreshold { percent: 100 },
            &[],
        )
        .unwrap();
}

// ============================================================================
// Admin Transfer
// ============================================================================

#[test]
fn test_admin_transfer_timelock_flow() {
    let mut t = setup();
    let new_admin = cosmwasm_std::Addr::unchecked("terra1newadmin");

    t.app
        .execute_contract(
            t.admin.clone(),
            t.bridge.clone(),
            &ExecuteMsg::ProposeAdmin {
                new_admin: new_admin.to_string(),
            },
            &[],
        )
        .unwrap();

    let pending: PendingAdminResponse = t
        .app
        .wrap()
        .query_wasm_smart(&t.bridge, &QueryMsg::PendingAdmin {})
        .unwrap();
    assert_eq!(pending.new_admin.unwrap(), new_admin);

    // Before the timelock expires
    let res = t.app.execute_contract(
        new_admin.clone(),
        t.bridge.clone(),
        &ExecuteMsg::AcceptAdmin {},
        &[],
    );
    assert_err_contains(res, "Timelock not expired");

    // Only the proposed admin can accept
    let res = t.app.execute_contract(
        t.user.clone(),
        t.bridge.clone(),
        &ExecuteMsg::AcceptAdmin {},
        &[],
    );
    assert_err_contains(res, "only pending admin");

    // After the timelock
    t.app.update_block(|block| {
        block.time = block.time.plus_seconds(604_800);
        block.height += 1;
    });
    t.app
        .execute_contract(
            new_admin.clone(),
            t.bridge.clone(),
            &ExecuteMsg::AcceptAdmin {},
            &[],
        )
        .unwrap();

    assert_eq!(query_config(&t).admin, new_admin);

    // The old admin is out
    let res = t.app.execute_contract(
        t.admin.clone(),
        t.bridge.clone(),
        &ExecuteMsg::SetActive { active: true },
        &[],
    );
    assert_err_contains(res, "Unauthorized");
}

#[test]
fn test_accept_without_proposal() {
    let mut t = setup();
    let res = t.app.execute_contract(
        t.user.clone(),
        t.bridge.clone(),
        &ExecuteMsg::AcceptAdmin {},
        &[],
    );
    assert_err_contains(res, "No pending admin");
}

#[test]
fn test_cancel_admin_proposal() {
    let mut t = setup();
    let new_admin = cosmwasm_std::Addr::unchecked("terra1newadmin");

    t.app
        .execute_contract(
            t.admin.clone(),
            t.bridge.clone(),
            &ExecuteMsg::ProposeAdmin {
                new_admin: new_admin.to_string(),
            },
            &[],
        )
        .unwrap();
    t.app
        .execute_contract(
            t.admin.clone(),
            t.bridge.clone(),
            &ExecuteMsg::CancelAdminProposal {},
            &[],
        )
        .unwrap();

    t.app.update_block(|block| {
        block.time = block.time.plus_seconds(604_800);
        block.height += 1;
    });
    let res = t.app.execute_contract(
        new_admin,
        t.bridge.clone(),
        &ExecuteMsg::AcceptAdmin {},
        &[],
    );
    assert_err_contains(res, "No pending admin");
}

//! Integration tests for the token upgrader using cw-multi-test.
//!
//! The old token is a permit-capable `mintable-token`; the new token is a
//! plain `cw20-base` instance pre-funded to the upgrader.

use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw20::{BalanceResponse, Cw20Coin};
use cw_multi_test::{App, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

use common::address::eth_account_from_pubkey;
use common::hash::{permit_digest, permit_struct_hash};
use common::OwnershipResponse;
use token_upgrader::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, StatsResponse,
};

const NEW_TOKEN_CUSTODY: u128 = 2_000_000;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_upgrader() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token_upgrader::contract::execute,
        token_upgrader::contract::instantiate,
        token_upgrader::contract::query,
    )
    .with_migrate(token_upgrader::contract::migrate);
    Box::new(contract)
}

fn contract_mintable_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mintable_token::contract::execute,
        mintable_token::contract::instantiate,
        mintable_token::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct Setup {
    app: App,
    upgrader: Addr,
    old_token: Addr,
    new_token: Addr,
    owner: Addr,
    user: Addr,
    signer_key: SigningKey,
    signer: Addr,
}

fn setup() -> Setup {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");
    let signer_key = SigningKey::from_bytes(&[42u8; 32].into()).unwrap();
    let pubkey = signer_key.verifying_key().to_encoded_point(false);
    let signer = Addr::unchecked(eth_account_from_pubkey(pubkey.as_bytes(), "terra").unwrap());

    let upgrader_code = app.store_code(contract_upgrader());
    let upgrader = app
        .instantiate_contract(
            upgrader_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
            },
            &[],
            "token-upgrader",
            Some(owner.to_string()),
        )
        .unwrap();

    let old_code = app.store_code(contract_mintable_token());
    let old_token = app
        .instantiate_contract(
            old_code,
            owner.clone(),
            &mintable_token::msg::InstantiateMsg {
                name: "Gravity".to_string(),
                symbol: "GOLD".to_string(),
                decimals: 18,
                initial_balances: vec![
                    Cw20Coin {
                        address: user.to_string(),
                        amount: Uint128::new(1_000),
                    },
                    Cw20Coin {
                        address: signer.to_string(),
                        amount: Uint128::new(1_000),
                    },
                ],
                owner: owner.to_string(),
                account_prefix: "terra".to_string(),
            },
            &[],
            "old-token",
            None,
        )
        .unwrap();

    let cw20_code = app.store_code(contract_cw20());
    let new_token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Gravity Token".to_string(),
                symbol: "GRAV".to_string(),
                decimals: 18,
                initial_balances: vec![Cw20Coin {
                    address: upgrader.to_string(),
                    amount: Uint128::new(NEW_TOKEN_CUSTODY),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "new-token",
            None,
        )
        .unwrap();

    Setup {
        app,
        upgrader,
        old_token,
        new_token,
        owner,
        user,
        signer_key,
        signer,
    }
}

fn initialize(s: &mut Setup) {
    s.app
        .execute_contract(
            s.owner.clone(),
            s.upgrader.clone(),
            &ExecuteMsg::Initialize {
                old_token: s.old_token.to_string(),
                new_token: s.new_token.to_string(),
            },
            &[],
        )
        .unwrap();
}

fn approve(s: &mut Setup, holder: &Addr, amount: u128) {
    s.app
        .execute_contract(
            holder.clone(),
            s.old_token.clone(),
            &mintable_token::msg::ExecuteMsg::IncreaseAllowance {
                spender: s.upgrader.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
        .unwrap();
}

fn execute(s: &mut Setup, sender: &Addr, msg: &ExecuteMsg) -> Result<(), String> {
    s.app
        .execute_contract(sender.clone(), s.upgrader.clone(), msg, &[])
        .map(|_| ())
        .map_err(|err| err.root_cause().to_string())
}

fn token_balance(app: &App, token: &Addr, account: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn config(s: &Setup) -> ConfigResponse {
    s.app
        .wrap()
        .query_wasm_smart(&s.upgrader, &QueryMsg::Config {})
        .unwrap()
}

fn sign_upgrade_permit(s: &Setup, amount: u128, nonce: u64, deadline: u64) -> (u8, Binary, Binary) {
    let res: mintable_token::msg::DomainSeparatorResponse = s
        .app
        .wrap()
        .query_wasm_smart(&s.old_token, &mintable_token::msg::QueryMsg::DomainSeparator {})
        .unwrap();
    let mut domain = [0u8; 32];
    domain.copy_from_slice(&hex::decode(res.domain_separator).unwrap());

    let struct_hash = permit_struct_hash(
        s.signer.as_str(),
        s.upgrader.as_str(),
        amount,
        nonce,
        deadline,
    );
    let digest = permit_digest(&domain, &struct_hash);
    let (signature, recovery_id) = s.signer_key.sign_prehash_recoverable(&digest).unwrap();
    let bytes = signature.to_bytes();
    (
        27 + recovery_id.to_byte(),
        Binary::from(bytes[..32].to_vec()),
        Binary::from(bytes[32..].to_vec()),
    )
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_instantiate_defaults() {
    let s = setup();
    let cfg = config(&s);
    assert_eq!(cfg.owner, s.owner);
    assert!(!cfg.initialized);
    assert!(!cfg.paused);
    assert_eq!(cfg.old_token, None);
    assert_eq!(cfg.upgrade_rate, Uint128::new(60));
}

#[test]
fn test_initialize_once() {
    let mut s = setup();
    let stranger = Addr::unchecked("terra1stranger");

    let err_str = execute(
        &mut s,
        &stranger,
        &ExecuteMsg::Initialize {
            old_token: "terra1a".to_string(),
            new_token: "terra1b".to_string(),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("not the owner"), "got: {}", err_str);

    initialize(&mut s);
    let cfg = config(&s);
    assert!(cfg.initialized);
    assert_eq!(cfg.old_token, Some(s.old_token.clone()));
    assert_eq!(cfg.new_token, Some(s.new_token.clone()));

    let owner = s.owner.clone();
    let err_str = execute(
        &mut s,
        &owner,
        &ExecuteMsg::Initialize {
            old_token: "terra1a".to_string(),
            new_token: "terra1b".to_string(),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("Already initialized"), "got: {}", err_str);
    assert_eq!(config(&s).old_token, Some(s.old_token.clone()));
}

#[test]
fn test_upgrade_before_initialize() {
    let mut s = setup();
    let user = s.user.clone();

    let err_str = execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeToken {
            amount: Uint128::zero(),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("Uninitialized"), "got: {}", err_str);
}

// ============================================================================
// Upgrade
// ============================================================================

#[test]
fn test_upgrade_token() {
    let mut s = setup();
    let user = s.user.clone();
    initialize(&mut s);
    approve(&mut s, &user, 1_000);

    execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeToken {
            amount: Uint128::new(1_000),
        },
    )
    .unwrap();

    assert_eq!(token_balance(&s.app, &s.old_token, &user), Uint128::zero());
    assert_eq!(token_balance(&s.app, &s.new_token, &user), Uint128::new(60_000));
    assert_eq!(
        token_balance(&s.app, &s.old_token, &s.upgrader),
        Uint128::new(1_000)
    );
    assert_eq!(
        token_balance(&s.app, &s.new_token, &s.upgrader),
        Uint128::new(NEW_TOKEN_CUSTODY - 60_000)
    );

    let stats: StatsResponse = s
        .app
        .wrap()
        .query_wasm_smart(&s.upgrader, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_upgrades, 1);
    assert_eq!(stats.total_old_collected, Uint128::new(1_000));
    assert_eq!(stats.total_new_distributed, Uint128::new(60_000));
}

#[test]
fn test_upgrade_requires_allowance() {
    let mut s = setup();
    let user = s.user.clone();
    initialize(&mut s);

    let res = execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeToken {
            amount: Uint128::new(500),
        },
    );
    assert!(res.is_err());
    assert_eq!(token_balance(&s.app, &s.old_token, &user), Uint128::new(1_000));
    assert_eq!(token_balance(&s.app, &s.new_token, &user), Uint128::zero());

    let stats: StatsResponse = s
        .app
        .wrap()
        .query_wasm_smart(&s.upgrader, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_upgrades, 0);
}

#[test]
fn test_upgrade_reverts_when_custody_depleted() {
    let mut s = setup();
    let user = s.user.clone();
    let owner = s.owner.clone();
    initialize(&mut s);
    approve(&mut s, &user, 1_000);

    // Leave less than 1000 * 60 new tokens in custody
    let new_token = s.new_token.to_string();
    execute(
        &mut s,
        &owner,
        &ExecuteMsg::WithdrawCw20Token {
            token: new_token,
            recipient: owner.to_string(),
            amount: Uint128::new(NEW_TOKEN_CUSTODY - 59_999),
        },
    )
    .unwrap();

    let res = execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeToken {
            amount: Uint128::new(1_000),
        },
    );
    assert!(res.is_err());

    // Nothing moved
    assert_eq!(token_balance(&s.app, &s.old_token, &user), Uint128::new(1_000));
    assert_eq!(
        token_balance(&s.app, &s.new_token, &s.upgrader),
        Uint128::new(59_999)
    );
}

#[test]
fn test_upgrade_token_by_permit() {
    let mut s = setup();
    let signer = s.signer.clone();
    initialize(&mut s);

    let deadline = s.app.block_info().time.seconds() + 600;
    let (v, r, sig_s) = sign_upgrade_permit(&s, 400, 0, deadline);
    let msg = ExecuteMsg::UpgradeTokenByPermit {
        amount: Uint128::new(400),
        deadline,
        v,
        r,
        s: sig_s,
    };

    execute(&mut s, &signer, &msg).unwrap();
    assert_eq!(token_balance(&s.app, &s.old_token, &signer), Uint128::new(600));
    assert_eq!(token_balance(&s.app, &s.new_token, &signer), Uint128::new(24_000));

    // The old token consumed the nonce; the same signature is worthless now
    let err_str = execute(&mut s, &signer, &msg).unwrap_err();
    assert!(err_str.contains("Invalid signer"), "got: {}", err_str);
    assert_eq!(token_balance(&s.app, &s.old_token, &signer), Uint128::new(600));
}

#[test]
fn test_upgrade_by_permit_for_another_caller_fails() {
    let mut s = setup();
    let user = s.user.clone();
    initialize(&mut s);

    // Signed by `signer`, submitted by `user`: the permit names `user` as owner
    let deadline = s.app.block_info().time.seconds() + 600;
    let (v, r, sig_s) = sign_upgrade_permit(&s, 400, 0, deadline);
    let err_str = execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeTokenByPermit {
            amount: Uint128::new(400),
            deadline,
            v,
            r,
            s: sig_s,
        },
    )
    .unwrap_err();
    assert!(err_str.contains("Invalid signer"), "got: {}", err_str);
}

// ============================================================================
// Pause
// ============================================================================

#[test]
fn test_pause_gates_both_upgrade_paths() {
    let mut s = setup();
    let owner = s.owner.clone();
    let user = s.user.clone();
    let signer = s.signer.clone();
    initialize(&mut s);
    approve(&mut s, &user, 1_000);

    execute(&mut s, &owner, &ExecuteMsg::Pause {}).unwrap();
    assert!(config(&s).paused);

    let err_str = execute(&mut s, &owner, &ExecuteMsg::Pause {}).unwrap_err();
    assert!(err_str.contains("Enforced pause"), "got: {}", err_str);

    let err_str = execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeToken {
            amount: Uint128::new(1_000),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("Enforced pause"), "got: {}", err_str);

    let deadline = s.app.block_info().time.seconds() + 600;
    let (v, r, sig_s) = sign_upgrade_permit(&s, 400, 0, deadline);
    let err_str = execute(
        &mut s,
        &signer,
        &ExecuteMsg::UpgradeTokenByPermit {
            amount: Uint128::new(400),
            deadline,
            v,
            r,
            s: sig_s,
        },
    )
    .unwrap_err();
    assert!(err_str.contains("Enforced pause"), "got: {}", err_str);

    // Withdrawals still work while paused
    let new_token = s.new_token.to_string();
    execute(
        &mut s,
        &owner,
        &ExecuteMsg::WithdrawCw20Token {
            token: new_token,
            recipient: owner.to_string(),
            amount: Uint128::new(1_000),
        },
    )
    .unwrap();
    assert_eq!(token_balance(&s.app, &s.new_token, &owner), Uint128::new(1_000));

    let upgrader = s.upgrader.clone();
    s.app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &upgrader, coins(500, "uluna"))
            .unwrap();
    });
    execute(
        &mut s,
        &owner,
        &ExecuteMsg::WithdrawNative {
            denom: "uluna".to_string(),
            recipient: owner.to_string(),
            amount: Uint128::new(500),
        },
    )
    .unwrap();
    let balance = s.app.wrap().query_balance(&owner, "uluna").unwrap();
    assert_eq!(balance.amount, Uint128::new(500));

    execute(&mut s, &owner, &ExecuteMsg::Unpause {}).unwrap();
    let err_str = execute(&mut s, &owner, &ExecuteMsg::Unpause {}).unwrap_err();
    assert!(err_str.contains("Expected pause"), "got: {}", err_str);

    execute(
        &mut s,
        &user,
        &ExecuteMsg::UpgradeToken {
            amount: Uint128::new(1_000),
        },
    )
    .unwrap();
}

#[test]
fn test_pause_owner_only() {
    let mut s = setup();
    let user = s.user.clone();

    let err_str = execute(&mut s, &user, &ExecuteMsg::Pause {}).unwrap_err();
    assert!(err_str.contains("not the owner"), "got: {}", err_str);
}

// ============================================================================
// Withdrawals
// ============================================================================

#[test]
fn test_withdraw_cw20_owner_only() {
    let mut s = setup();
    let dao = Addr::unchecked("terra1dao");
    let new_token = s.new_token.to_string();

    let err_str = execute(
        &mut s,
        &dao,
        &ExecuteMsg::WithdrawCw20Token {
            token: new_token.clone(),
            recipient: dao.to_string(),
            amount: Uint128::new(1_000),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("not the owner"), "got: {}", err_str);

    let owner = s.owner.clone();
    execute(
        &mut s,
        &owner,
        &ExecuteMsg::WithdrawCw20Token {
            token: new_token,
            recipient: dao.to_string(),
            amount: Uint128::new(1_000),
        },
    )
    .unwrap();
    assert_eq!(token_balance(&s.app, &s.new_token, &dao), Uint128::new(1_000));
}

#[test]
fn test_withdraw_native() {
    let mut s = setup();
    let dao = Addr::unchecked("terra1dao");
    let upgrader = s.upgrader.clone();

    s.app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &upgrader, coins(10_000, "uluna"))
            .unwrap();
    });

    let err_str = execute(
        &mut s,
        &dao,
        &ExecuteMsg::WithdrawNative {
            denom: "uluna".to_string(),
            recipient: dao.to_string(),
            amount: Uint128::new(10),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("not the owner"), "got: {}", err_str);

    let owner = s.owner.clone();
    execute(
        &mut s,
        &owner,
        &ExecuteMsg::WithdrawNative {
            denom: "uluna".to_string(),
            recipient: dao.to_string(),
            amount: Uint128::new(10),
        },
    )
    .unwrap();

    let balance = s.app.wrap().query_balance(&dao, "uluna").unwrap();
    assert_eq!(balance.amount, Uint128::new(10));
    let balance = s.app.wrap().query_balance(&upgrader, "uluna").unwrap();
    assert_eq!(balance.amount, Uint128::new(9_990));
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_ownership_handoff() {
    let mut s = setup();
    let owner = s.owner.clone();
    let dao = Addr::unchecked("terra1dao");

    let err_str = execute(
        &mut s,
        &dao,
        &ExecuteMsg::TransferOwnership {
            new_owner: dao.to_string(),
        },
    )
    .unwrap_err();
    assert!(err_str.contains("not the owner"), "got: {}", err_str);

    execute(
        &mut s,
        &owner,
        &ExecuteMsg::TransferOwnership {
            new_owner: dao.to_string(),
        },
    )
    .unwrap();

    // Still the old owner until accepted
    assert_eq!(config(&s).owner, owner);

    execute(&mut s, &dao, &ExecuteMsg::AcceptOwnership {}).unwrap();
    let ownership: OwnershipResponse = s
        .app
        .wrap()
        .query_wasm_smart(&s.upgrader, &QueryMsg::Ownership {})
        .unwrap();
    assert_eq!(ownership.owner, dao);

    let err_str = execute(&mut s, &owner, &ExecuteMsg::Pause {}).unwrap_err();
    assert!(err_str.contains("not the owner"), "got: {}", err_str);
    execute(&mut s, &dao, &ExecuteMsg::Pause {}).unwrap();
}

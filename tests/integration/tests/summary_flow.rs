//! Integration test: summary collection across farmsum-rpc and farmsum-core.
//!
//! Drives `FarmClient::summary` over a scripted transport and checks the
//! rendered text and the abort-on-first-failure behaviour.

use farmsum_core::{FarmingStatus, ServiceKind};
use farmsum_integration_tests::{client, Scripted, ScriptedTransport};
use farmsum_rpc::RpcError;

// =========================================================================
// Healthy farm
// =========================================================================

#[tokio::test]
async fn test_small_farm_summary_text() {
    let client = client(ScriptedTransport::small_farm());
    let summary = client.summary().await.expect("summary should succeed");

    assert_eq!(
        summary.to_string(),
        "Farmer running: true\n\
         Farming status: Farming\n\
         Farmed Amount: 5000000000000 Mojo (5.000000 XCH)\n\
         Number of plots: 2\n\
         Total plot size: 1.000 KiB\n\
         Estimated network space: 1.953 KiB\n\
         Expected time to win: Now\n"
    );
}

#[tokio::test]
async fn test_requests_use_default_endpoints() {
    let client = client(ScriptedTransport::small_farm());
    client.summary().await.unwrap();

    let endpoints = client.endpoints();
    assert_eq!(
        endpoints.harvester.url("get_plots"),
        "https://localhost:8560/get_plots"
    );
    assert_eq!(
        endpoints.wallet.cert_path.to_str(),
        Some("/srv/chia/mainnet/config/ssl/wallet/private_wallet.crt")
    );

    let methods: Vec<String> = client
        .transport()
        .calls()
        .into_iter()
        .map(|(_, method)| method)
        .collect();
    assert_eq!(
        methods,
        [
            "get_blockchain_state",
            "get_farmed_amount",
            "get_connections",
            "get_plots"
        ]
    );
}

#[tokio::test]
async fn test_mainnet_scale_space_and_sync_state() {
    // Network space beyond u64, delivered as a JSON number.
    let transport = ScriptedTransport::small_farm()
        .reply(
            ServiceKind::FullNode,
            Scripted::Raw(
                r#"{"blockchain_state": {"space": 36893488147419103232, "sync": {"sync_mode": false, "synced": false}}, "success": true}"#
                    .into(),
            ),
        )
        .reply(
            ServiceKind::Wallet,
            Scripted::Raw(
                r#"{"farmed_amount": 1750000000000, "last_height_farmed": 4200000, "success": true}"#
                    .into(),
            ),
        );

    let summary = client(transport).summary().await.unwrap();
    assert_eq!(summary.network_space_bytes, 1u128 << 65);
    assert_eq!(summary.farming_status, FarmingStatus::NotSynced);

    let text = summary.to_string();
    assert!(text.contains("Farming status: Not synced or not connected to peers\n"));
    assert!(text.contains("Farmed Amount: 1750000000000 Mojo (1.750000 XCH)\n"));
    assert!(text.contains("Last height farmed: 4200000\n"));
    assert!(text.contains("Estimated network space: 32.000 EiB\n"));
}

#[tokio::test]
async fn test_idle_farmer_is_not_running() {
    let transport = ScriptedTransport::small_farm().reply(
        ServiceKind::Farmer,
        Scripted::Json(serde_json::json!({"connections": [], "success": true})),
    );

    let summary = client(transport).summary().await.unwrap();
    assert!(!summary.farmer_running);
    assert_eq!(summary.farming_status, FarmingStatus::NotRunning);
}

// =========================================================================
// Failures abort before a summary is built
// =========================================================================

#[tokio::test]
async fn test_http_500_from_any_service_aborts() {
    for (position, failing) in ServiceKind::ALL.into_iter().enumerate() {
        let transport =
            ScriptedTransport::small_farm().reply(failing, Scripted::HttpStatus(500));
        let client = client(transport);

        let err = client.summary().await.expect_err("summary must fail");
        assert!(
            matches!(err, RpcError::HttpStatus { service, status: 500, .. } if service == failing),
            "unexpected error for {failing}: {err}"
        );
        assert_eq!(
            client.transport().calls().len(),
            position + 1,
            "no call may follow the {failing} failure"
        );
    }
}

#[tokio::test]
async fn test_unreachable_service_names_the_url() {
    let transport = ScriptedTransport::new().reply(
        ServiceKind::FullNode,
        Scripted::Json(serde_json::json!({"blockchain_state": {"space": 1}})),
    );

    let err = client(transport).summary().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "error accessing wallet RPC at https://localhost:9256/get_farmed_amount: connection refused"
    );
}

#[tokio::test]
async fn test_garbled_and_incomplete_responses() {
    let garbled = ScriptedTransport::small_farm()
        .reply(ServiceKind::Harvester, Scripted::Raw("not json".into()));
    let err = client(garbled).summary().await.unwrap_err();
    assert!(matches!(err, RpcError::InvalidJson { service: ServiceKind::Harvester, .. }));

    let incomplete = ScriptedTransport::small_farm().reply(
        ServiceKind::FullNode,
        Scripted::Json(serde_json::json!({"blockchain_state": {}})),
    );
    let err = client(incomplete).summary().await.unwrap_err();
    assert!(matches!(err, RpcError::MalformedResponse { service: ServiceKind::FullNode, .. }));

    let refused = ScriptedTransport::small_farm().reply(
        ServiceKind::Wallet,
        Scripted::Json(serde_json::json!({"success": false, "error": "not logged in"})),
    );
    let err = client(refused).summary().await.unwrap_err();
    assert_eq!(err.to_string(), "wallet RPC get_farmed_amount failed: not logged in");
}

//! `farmsum summary`: query the local services and print the farm summary.

use anyhow::Context;
use farmsum_core::{FarmsumConfig, ServiceKind};
use farmsum_rpc::{FarmClient, HttpsTransport};

pub async fn run(config: &FarmsumConfig) -> anyhow::Result<()> {
    let endpoints = config
        .endpoints()
        .context("could not resolve RPC endpoints")?;

    for kind in ServiceKind::ALL {
        let endpoint = endpoints.get(kind);
        tracing::debug!(
            service = %kind,
            host = %endpoint.host,
            port = endpoint.port,
            cert = %endpoint.cert_path.display(),
            "resolved endpoint"
        );
    }

    let client = FarmClient::new(HttpsTransport::new(), endpoints);
    let summary = client
        .summary()
        .await
        .context("could not collect the farm summary")?;

    print!("{summary}");
    Ok(())
}

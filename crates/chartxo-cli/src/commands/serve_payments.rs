use std::sync::Arc;

use anyhow::Context;
use chartxo_config::ChartxoConfig;
use chartxo_payments::{CheckoutGateway, PaymentHandler, PaymentServer, ProviderClients};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServePaymentsArgs;

/// Handle `chartxo serve-payments`. Runs until Ctrl-C.
pub async fn handle(
    args: &ServePaymentsArgs,
    config: &ChartxoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let gateway = ProviderClients::from_config(config.stripe.clone(), config.razorpay.clone())?;
    if !gateway.is_configured() {
        tracing::warn!("payment credentials or stripe redirect urls missing; checkout requests will be rejected");
    }

    let bind = args.bind.as_deref().unwrap_or(&config.server.bind);
    let server = PaymentServer::bind(bind).with_context(|| format!("cannot listen on {bind}"))?;
    if !flags.quiet {
        eprintln!("payment endpoint listening on http://{}", server.local_addr());
    }

    let handler = Arc::new(PaymentHandler::new(gateway));
    server
        .run(handler, async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::error!(%error, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await?;
    Ok(())
}

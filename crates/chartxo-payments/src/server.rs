//! `tiny_http` edge server for the payment handler.
//!
//! `recv` blocks, so it runs on the blocking pool; each request is then
//! handled on its own task. Every path is routed to the same handler.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tiny_http::{Header, Request, Response, Server};

use crate::error::PaymentError;
use crate::gateway::CheckoutGateway;
use crate::handler::PaymentHandler;

/// How often the accept loop checks for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct PaymentServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

impl PaymentServer {
    /// # Errors
    ///
    /// Returns [`PaymentError::Server`] if the address cannot be bound.
    pub fn bind(addr: &str) -> Result<Self, PaymentError> {
        let server = Server::http(addr)
            .map_err(|e| PaymentError::Server(format!("failed to bind {addr}: {e}")))?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| PaymentError::Server("not bound to an IP address".into()))?;
        Ok(Self {
            server: Arc::new(server),
            addr,
        })
    }

    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Server`] if receiving fails.
    pub async fn run<G, F>(
        self,
        handler: Arc<PaymentHandler<G>>,
        shutdown: F,
    ) -> Result<(), PaymentError>
    where
        G: CheckoutGateway + 'static,
        F: Future<Output = ()> + Send,
    {
        tracing::info!(addr = %self.addr, "payment server listening");
        tokio::pin!(shutdown);

        loop {
            let server = Arc::clone(&self.server);
            let next = tokio::task::spawn_blocking(move || server.recv_timeout(POLL_INTERVAL));
            let received = tokio::select! {
                () = &mut shutdown => break,
                joined = next => joined
                    .map_err(|e| PaymentError::Server(format!("spawn_blocking join: {e}")))?
                    .map_err(|e| PaymentError::Server(format!("recv error: {e}")))?,
            };
            let Some(request) = received else {
                continue;
            };

            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                if let Err(e) = respond(&handler, request).await {
                    tracing::warn!(error = %e, "failed to answer payment request");
                }
            });
        }

        tracing::info!("payment server stopped");
        Ok(())
    }
}

async fn respond<G: CheckoutGateway>(
    handler: &PaymentHandler<G>,
    request: Request,
) -> Result<(), PaymentError> {
    let (request, method, body) = tokio::task::spawn_blocking(move || {
        let mut request = request;
        let method = request.method().to_string();
        let mut body = String::new();
        let read = request.as_reader().read_to_string(&mut body);
        (request, method, read.map(|_| body))
    })
    .await
    .map_err(|e| PaymentError::Server(format!("spawn_blocking join: {e}")))?;

    let body = body.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable request body");
        String::new()
    });
    tracing::debug!(%method, url = request.url(), "payment request");

    let outcome = handler.handle(&method, &body).await;
    let mut response = Response::from_string(outcome.body).with_status_code(outcome.status);
    for (name, value) in &outcome.headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }

    tokio::task::spawn_blocking(move || request.respond(response))
        .await
        .map_err(|e| PaymentError::Server(format!("spawn_blocking join: {e}")))?
        .map_err(|e| PaymentError::Server(format!("respond: {e}")))
}

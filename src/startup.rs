use std::net::SocketAddr;

use axum::{extract::MatchedPath, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::configuration::Settings;
use crate::routes::home;

pub struct Application {
    address: SocketAddr,
    listener: TcpListener,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(configuration.application.address()).await?;
        let address = listener.local_addr()?;

        Ok(Self { address, listener })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    /// Only returns if the server fails.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        run(self.listener).await
    }
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    tracing::info!(address = %listener.local_addr()?, "Listening for HTTP requests");

    axum::serve(listener, router()).await
}

pub fn router() -> Router {
    Router::new().route("/", get(home)).layer(
        // Refer to https://github.com/tokio-rs/axum/blob/main/examples/tracing-aka-logging/Cargo.toml
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            let path = request
                .extensions()
                .get::<MatchedPath>()
                .map(MatchedPath::as_str);
            tracing::info_span!(
                "Starting HTTP request",
                method = ?request.method(),
                path,
                request_id = %Uuid::new_v4(),
            )
        }),
    )
}

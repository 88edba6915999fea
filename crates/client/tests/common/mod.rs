//! Shared test helper: a stub platform backend on an ephemeral port.

use axum::Router;
use givehub_client::{ApiClient, ClientConfig};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral localhost port and return a client
/// pointed at it.
pub async fn client_for(router: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap()
}

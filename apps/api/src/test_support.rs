//! Helpers shared by the `#[cfg(test)]` modules.

use axum::Router;

/// Serves `router` on an ephemeral local port and returns the URL of its
/// `/model` route, standing in for the inference endpoint.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/model")
}

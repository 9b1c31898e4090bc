//! Local HTTP responder standing in for the flag host in tests.

use axum::extract::Path;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub const FLAG_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 4 3"/>"#;

/// Serves `GET /{file}` with `respond(file)` and returns the base URL
pub async fn spawn_responder<F>(respond: F) -> String
where
    F: Fn(&str) -> Response + Send + Sync + 'static,
{
    let respond = Arc::new(respond);
    let app = Router::new().route(
        "/{file}",
        get(move |Path(file): Path<String>| {
            let respond = Arc::clone(&respond);
            async move { respond(&file) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

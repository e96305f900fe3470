use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tokio::signal;
use url::Url;

use crate::{config::Config, preview, scrape, share};

#[derive(Clone)]
struct SharedState {
    config: Arc<Config>,
}

pub fn router(config: Arc<Config>) -> Router {
    let shared_state = Arc::new(SharedState { config });

    Router::new()
        .route("/", post(scrape_content))
        .route("/share_count", post(share_count))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .with_state(shared_state)
}

async fn start_app(config: Config) {
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    let listen = config.listen.clone();
    let app = router(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(&listen).await.unwrap();
    log::info!("listening on {listen}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

pub fn start_daemon(config: Config) {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async { start_app(config).await });
}

/// The request body is the raw text of one absolute uri, no envelope.
/// Anything that does not parse as an absolute uri is a 404 before any
/// network activity happens.
async fn scrape_content(
    State(state): State<Arc<SharedState>>,
    body: String,
) -> axum::response::Response {
    let url = match Url::parse(&body) {
        Ok(url) => url,
        Err(err) => {
            log::debug!("rejecting request body as url: {err}");
            return (StatusCode::NOT_FOUND, "Not Found!").into_response();
        }
    };

    let config = state.config.clone();
    let result =
        tokio::task::block_in_place(move || preview::scrape_content(&url, &config));

    (StatusCode::OK, Json(result)).into_response()
}

async fn share_count(
    State(state): State<Arc<SharedState>>,
    body: String,
) -> axum::response::Response {
    let url = match Url::parse(&body) {
        Ok(url) => url,
        Err(err) => {
            log::debug!("rejecting request body as url: {err}");
            return (StatusCode::NOT_FOUND, "Not Found!").into_response();
        }
    };

    let config = state.config.clone();
    let count = tokio::task::block_in_place(move || {
        let client = match scrape::build_client(&config.scrape) {
            Ok(client) => client,
            Err(err) => {
                log::error!("building http client failed: {err}");
                return 0;
            }
        };
        share::share_count(&client, &config.share_count_endpoint, &url)
    });

    (StatusCode::OK, Json(count)).into_response()
}

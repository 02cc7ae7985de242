//! Content API server with the rendered page and optional content reload

mod api;
mod extract;
mod response;
#[cfg(test)]
mod tests;

pub use response::{ApiError, ApiResponse};

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::contact::ContactInbox;
use crate::content::AggregatedContent;
use crate::Portfolio;

/// Server state
pub struct ServerState {
    site: RwLock<Portfolio>,
    content: RwLock<Arc<AggregatedContent>>,
    inbox: Mutex<ContactInbox>,
}

impl ServerState {
    pub fn new(site: Portfolio, content: AggregatedContent) -> Self {
        let inbox = ContactInbox::new(&site.config.contact);
        Self {
            site: RwLock::new(site),
            content: RwLock::new(Arc::new(content)),
            inbox: Mutex::new(inbox),
        }
    }

    /// Snapshot of the content currently served
    pub async fn content(&self) -> Arc<AggregatedContent> {
        self.content.read().await.clone()
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api", get(api::api_info))
        .route("/api/profile", get(api::profile))
        .route("/api/experience", get(api::experience))
        .route("/api/testimonials", get(api::testimonials))
        .route("/api/expertise", get(api::expertise))
        .route(
            "/api/contact",
            get(api::list_contact).post(api::submit_contact),
        )
        .route("/api/contact/:id/status", patch(api::update_contact_status))
        .fallback(fallback_handler)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Portfolio, ip: &str, port: u16, watch: bool) -> Result<()> {
    let content = site.load_static_content()?;
    let state = Arc::new(ServerState::new(site.clone(), content));
    let app = router(state.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching content and configuration for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let runtime = tokio::runtime::Handle::current();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(state, runtime) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Reload site configuration and content after a change on disk.
///
/// On failure the previous content keeps being served.
pub async fn reload(state: &ServerState) -> Result<()> {
    let base_dir = state.site.read().await.base_dir.clone();
    let site = Portfolio::new(&base_dir)?;
    let content = site.load_static_content()?;

    state.inbox.lock().await.reconfigure(&site.config.contact);
    *state.content.write().await = Arc::new(content);
    *state.site.write().await = site;
    Ok(())
}

/// Watch the source directory and `_config.yml`, reloading on change
fn watch_and_reload(state: Arc<ServerState>, runtime: tokio::runtime::Handle) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid reloads
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let (source_dir, config_path) = runtime.block_on(async {
        let site = state.site.read().await;
        (site.source_dir.clone(), site.config_path())
    });

    if source_dir.exists() {
        debouncer
            .watcher()
            .watch(&source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", source_dir);
    }

    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    let path_str = e.path.to_string_lossy();
                    !path_str.contains(".git")
                        && !path_str.contains(".DS_Store")
                        && !path_str.ends_with('~')
                });
                if !relevant {
                    continue;
                }

                match runtime.block_on(reload(&state)) {
                    Ok(()) => tracing::info!("Content reloaded"),
                    Err(e) => tracing::error!("Reload failed, keeping previous content: {:#}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Serve files from the public directory
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let public_dir = state.site.read().await.public_dir.clone();
    let mut service = ServeDir::new(public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

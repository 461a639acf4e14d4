//! Server Wiring
//!
//! Builds the shared stores, mounts one handler per route and runs the
//! listener until Ctrl+C or SIGTERM.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tokio::{net::TcpListener, signal};

use crate::articles::handlers::{
    handle_details, handle_home, handle_reply, handle_respond, handle_to_upload, handle_upload,
};
use crate::articles::store::ArticleStore;
use crate::auth::credentials::CredentialStore;
use crate::auth::handlers::{
    handle_login, handle_logout, handle_register, handle_to_login, handle_to_register,
};
use crate::auth::session::SessionTable;
use crate::config::Config;
use crate::pages::StaticPages;


/// Every piece of process-wide state, each behind its own synchronization.
#[derive(Clone)]
pub struct Forum {
    pub sessions: Arc<SessionTable>,
    pub articles: Arc<ArticleStore>,
    pub credentials: Arc<CredentialStore>,
    pub pages: Arc<StaticPages>,
}

impl Forum {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sessions: Arc::new(SessionTable::new(config.session_max_age)),
            articles: Arc::new(ArticleStore::new()),
            credentials: Arc::new(CredentialStore::new(config.credentials.clone())),
            pages: Arc::new(StaticPages::load(&config.views)),
        }
    }

    /// Every route accepts GET and POST alike; form fields come from the query
    /// string or the urlencoded body.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/toLogin", get(handle_to_login).post(handle_to_login))
            .route("/login", get(handle_login).post(handle_login))
            .route("/reg", get(handle_to_register).post(handle_to_register))
            .route("/register", get(handle_register).post(handle_register))
            .route("/logout", get(handle_logout).post(handle_logout))
            .route("/home", get(handle_home).post(handle_home))
            .route("/details", get(handle_details).post(handle_details))
            .route("/toUpload", get(handle_to_upload).post(handle_to_upload))
            .route("/upload", get(handle_upload).post(handle_upload))
            .route("/respond", get(handle_respond).post(handle_respond))
            .route("/reply", get(handle_reply).post(handle_reply))
            .layer(Extension(self.sessions.clone()))
            .layer(Extension(self.articles.clone()))
            .layer(Extension(self.credentials.clone()))
            .layer(Extension(self.pages.clone()))
    }
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!("Credentials file: {}", config.credentials.display());
    tracing::info!("Views directory: {}", config.views.display());

    let forum = Forum::from_config(&config);
    let app = forum.router();

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

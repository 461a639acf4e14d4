//! Page Rendering Module
//!
//! Two kinds of pages are served:
//! - **Static pages** (login, register, upload) are read from the views directory
//!   once at startup and served as raw bytes. A page that cannot be read is served empty.
//! - **Views** (home, details, respond, not found) are askama templates compiled
//!   from `views/` into the binary and filled with a small context per request.

pub mod views;

use std::path::Path;

use axum::{body::Bytes, response::Html};


pub const LOGIN_PAGE: &str = "login.html";
pub const REGISTER_PAGE: &str = "register.html";
pub const UPLOAD_PAGE: &str = "upload.html";

/// Raw bytes of the forms that need no context.
#[derive(Debug, Clone, Default)]
pub struct StaticPages {
    pub login: Bytes,
    pub register: Bytes,
    pub upload: Bytes,
}

impl StaticPages {
    pub fn load(dir: &Path) -> Self {
        Self {
            login: load_page(dir, LOGIN_PAGE),
            register: load_page(dir, REGISTER_PAGE),
            upload: load_page(dir, UPLOAD_PAGE),
        }
    }

    pub fn login(&self) -> Html<Bytes> {
        Html(self.login.clone())
    }

    pub fn register(&self) -> Html<Bytes> {
        Html(self.register.clone())
    }

    pub fn upload(&self) -> Html<Bytes> {
        Html(self.upload.clone())
    }
}

fn load_page(dir: &Path, file: &str) -> Bytes {
    let path = dir.join(file);
    match std::fs::read(&path) {
        Ok(bytes) => {
            tracing::info!("Loaded page {} ({} bytes)", path.display(), bytes.len());
            Bytes::from(bytes)
        }
        Err(e) => {
            tracing::warn!("Failed to load page {}: {}", path.display(), e);
            Bytes::new()
        }
    }
}

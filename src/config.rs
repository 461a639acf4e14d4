use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Runtime settings. Every flag falls back to an environment variable, then
/// to the defaults the forum has always used.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "FORUM_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Flat file of `name,password` lines.
    #[arg(long, env = "FORUM_CREDENTIALS", default_value = "./data/user.txt")]
    pub credentials: PathBuf,

    /// Directory holding the static login/register/upload pages.
    #[arg(long, env = "FORUM_VIEWS", default_value = "./views")]
    pub views: PathBuf,

    /// `Max-Age` of the session cookie, in seconds.
    #[arg(long, env = "FORUM_SESSION_MAX_AGE", default_value_t = 86_400)]
    pub session_max_age: u64,
}

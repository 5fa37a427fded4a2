//! Command-line surface of `rastreio`.
//!
//! Flags keep their historic single-dash spelling (`-tk`, `-e`, `-r`, `-u`,
//! `-p`, `-a`, `-s`); long names are available for each of them.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use engine_logging::engine_warn;
use log::LevelFilter;
use tracking_engine::{
    Credentials, Endpoints, DEFAULT_ASYNC_URL, DEFAULT_RECEIPT_URL, DEFAULT_TOKEN_URL,
};

pub const USER_ENV: &str = "USUARIO_API_CORREIOS";
pub const PASSWORD_ENV: &str = "SENHA_API_CORREIOS";

/// Batch-track parcels through the asynchronous tracking API.
///
/// Reads one tracking code per line, submits them in groups of 1000, checks
/// each receipt once and prints the latest event of every object.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rastreio", version)]
pub struct Args {
    /// URL used to obtain the bearer token
    #[arg(long = "tk", visible_alias = "token-url", default_value = DEFAULT_TOKEN_URL)]
    pub token_url: String,

    /// Asynchronous tracking endpoint
    #[arg(short = 'e', long = "async-url", default_value = DEFAULT_ASYNC_URL)]
    pub async_url: String,

    /// Receipt endpoint; the receipt number is appended to it
    #[arg(short = 'r', long = "receipt-url", default_value = DEFAULT_RECEIPT_URL)]
    pub receipt_url: String,

    /// API user name (USUARIO_API_CORREIOS takes precedence when set)
    #[arg(short = 'u', long = "user", default_value = "")]
    pub user: String,

    /// API password (SENHA_API_CORREIOS takes precedence when set)
    #[arg(short = 'p', long = "password", default_value = "", hide_default_value = true)]
    pub password: String,

    /// File with one tracking code per line
    #[arg(short = 'a', long = "file", default_value = "objetos.txt")]
    pub file: PathBuf,

    /// Execution time in seconds (default 2). Accepted but has no effect.
    #[arg(short = 's', long = "seconds")]
    pub seconds: Option<i64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long = "log-level", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Also append logs to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            token_url: self.token_url.clone(),
            async_url: self.async_url.clone(),
            receipt_url: self.receipt_url.clone(),
        }
    }
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse()
        .map_err(|_| format!("unknown log level {raw:?}"))
}

/// Rewrite `-tk` / `-tk=URL` into the `--tk` form clap understands.
///
/// Everything after a bare `--` is left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(text) if text == "-tk" || text.starts_with("-tk=") => {
                    OsString::from(format!("-{text}"))
                }
                _ => arg,
            }
        })
        .collect()
}

/// Pick the credentials for this run.
///
/// The environment variables win whenever they are set and non-empty; a flag
/// value discarded that way is reported as a warning.
pub fn resolve_credentials(
    args: &Args,
    env_user: Option<String>,
    env_password: Option<String>,
) -> Credentials {
    let username = pick(USER_ENV, "-u", &args.user, env_user);
    let password = pick(PASSWORD_ENV, "-p", &args.password, env_password);
    if username.is_empty() {
        engine_warn!("no API user configured; set {} or pass -u", USER_ENV);
    }
    Credentials::new(username, password)
}

fn pick(env_name: &str, flag: &str, flag_value: &str, env_value: Option<String>) -> String {
    match env_value.filter(|value| !value.is_empty()) {
        Some(value) => {
            if !flag_value.is_empty() && flag_value != value {
                engine_warn!("{} overrides the value given with {}", env_name, flag);
            }
            value
        }
        None => flag_value.to_string(),
    }
}

//! APOD Tunes Library
//!
//! This library powers a small personal web server that pairs NASA's Astronomy
//! Picture of the Day with Spotify tracks. The picture's title is used as a
//! free-text query against Spotify's track search and both results are rendered
//! into a single HTML page.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the home page, OAuth flow and search
//! - `config` - Credentials file, environment and endpoint configuration
//! - `error` - Library error type
//! - `management` - Token cache abstraction and its file-backed store
//! - `nasa` - Astronomy Picture of the Day client
//! - `render` - HTML page renderer
//! - `server` - Router assembly and the HTTP listener
//! - `spotify` - Spotify OAuth and search client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use apodtunes::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> apodtunes::Res<()> {
//!     config::load_env();
//!     let credentials = Arc::new(config::Credentials::load("auth/credentials.json").await?);
//!     let state = server::AppState::from_config(credentials, "auth/user-token.json", "html/main.html");
//!     server::start_api_server(&config::server_addr(), Arc::new(state)).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod nasa;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the binary boundary where errors from different layers (credential
/// loading, address parsing, socket binding) are only reported and never
/// matched on. Library code returns [`Error`] instead.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for request tracing and general
/// status updates.
///
/// # Example
///
/// ```
/// info!("New request for {}", path);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Spotify token cached successfully.");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used for fatal startup
/// errors such as a missing credentials file; request handlers never call it.
///
/// # Example
///
/// ```
/// error!("Cannot load credentials. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures, e.g. an upstream API call that failed and
/// is about to be turned into an error response.
///
/// # Example
///
/// ```
/// warning!("Error fetching NASA API data: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

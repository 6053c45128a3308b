use std::{path::PathBuf, sync::Arc};

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use apodtunes::{config, error, info, server};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Credentials file with client_id, client_secret, redirect_uri and nasa_api_key
    #[clap(long, default_value = config::DEFAULT_CREDENTIALS_PATH)]
    config: PathBuf,

    /// File the Spotify access token is cached in
    #[clap(long, default_value = config::DEFAULT_TOKEN_PATH)]
    token_file: PathBuf,

    /// Static HTML page served on /
    #[clap(long, default_value = config::DEFAULT_HOME_PAGE_PATH)]
    home_page: PathBuf,

    /// Address to listen on (defaults to SERVER_ADDRESS or 127.0.0.1:3000)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let credentials = match config::Credentials::load(&cli.config).await {
        Ok(credentials) => Arc::new(credentials),
        Err(e) => error!(
            "Cannot load credentials from {}. Err: {}",
            cli.config.display(),
            e
        ),
    };

    let addr = cli.address.unwrap_or_else(config::server_addr);
    info!("Caching Spotify tokens in {}", cli.token_file.display());

    let state = server::AppState::from_config(credentials, cli.token_file, cli.home_page);
    if let Err(e) = server::start_api_server(&addr, Arc::new(state)).await {
        error!("Server failed on {}. Err: {}", addr, e);
    }
}

//! RAX FTP Client - Entry Point
//!
//! A small Rust FTP client speaking the RFC 959 control protocol with
//! passive-mode data connections.

use log::{error, info};
use tokio::fs::File;
use tokio::io::{self, AsyncWriteExt};

use rax_ftp_client::error::handlers::{error_to_exit_code, handle_error};
use rax_ftp_client::utils::logging::setup_logging;
use rax_ftp_client::{ClientConfig, FtpClient, FtpError};

const USAGE: &str = "usage: rax-ftp-client get <remote> <local> | put <local> <remote> | cmd <COMMAND...>";

/// What the user asked the client to do
#[derive(Debug, PartialEq)]
enum Action {
    Get { remote: String, local: String },
    Put { local: String, remote: String },
    Raw(String),
}

/// Parses the command-line arguments (without the program name).
fn parse_action(args: &[String]) -> Option<Action> {
    match args {
        [cmd, remote, local] if cmd == "get" => Some(Action::Get {
            remote: remote.clone(),
            local: local.clone(),
        }),
        [cmd, local, remote] if cmd == "put" => Some(Action::Put {
            local: local.clone(),
            remote: remote.clone(),
        }),
        [cmd, rest @ ..] if cmd == "cmd" && !rest.is_empty() => Some(Action::Raw(rest.join(" "))),
        _ => None,
    }
}

async fn run(config: &ClientConfig, action: Action) -> Result<(), FtpError> {
    let mut client = FtpClient::connect(config).await?;
    info!("Server says: {}", client.welcome());
    client.login(&config.username, &config.password).await?;

    match action {
        Action::Get { remote, local } => {
            let mut file = File::create(&local).await?;
            let mut conn = client.retrieve(&remote).await?;
            let bytes = io::copy(&mut conn, &mut file).await?;
            conn.close().await?;
            file.flush().await?;
            info!("Downloaded {} ({} bytes) to {}", remote, bytes, local);
        }
        Action::Put { local, remote } => {
            let mut file = File::open(&local).await?;
            let mut conn = client.store(&remote).await?;
            let bytes = io::copy(&mut file, &mut conn).await?;
            conn.close().await?;
            info!("Uploaded {} ({} bytes) to {}", local, bytes, remote);
        }
        Action::Raw(command) => {
            let reply = client.cmd(&command).await?;
            println!("{}", reply);
        }
    }

    client.quit().await
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(action) = parse_action(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(64);
    };

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(78);
        }
    };

    if let Err(e) = run(&config, action).await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

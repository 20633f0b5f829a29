//! Command dispatcher for the snag CLI.
//!
//! Thin glue: parse arguments, resolve destination directories, and invoke
//! the library. Per-transfer failures are reported by the summary; only
//! setup errors (bad arguments, missing directories, missing tools) abort
//! an invocation.

use clap::{Parser, Subcommand};
use snag::fetcher::FetcherBuilder;
use snag::media::{MediaFetch, YtDlp};
use snag::share::ShareServer;
use snag::transfer::{render_summary, Transfer};
use snag::{Error, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Where the installer drops the binary; `uninstall` removes this file.
const INSTALL_PATH: &str = "/usr/local/bin/snag";

#[derive(Parser)]
#[command(
    name = "snag",
    version,
    about = "Concurrently fetch remote files and share a folder over the LAN"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one or more URLs concurrently
    Url {
        /// Links to fetch
        #[arg(required = true)]
        links: Vec<String>,
        /// Save into the shared folder and start sharing afterwards
        #[arg(long)]
        shared: bool,
    },
    /// Fetch a hosted-git repository snapshot
    Git {
        /// Repository page or archive URL
        url: String,
    },
    /// Fetch a media link via yt-dlp
    Ytdlp {
        /// Media link to hand to the external downloader
        link: String,
        /// Save into the shared folder and start sharing afterwards
        #[arg(long)]
        shared: bool,
    },
    /// Share a folder (or a single file's folder) with the LAN
    Share {
        /// Folder or file to share; defaults to the current directory
        path: Option<PathBuf>,
    },
    /// Print the version
    Version,
    /// Restart notice placeholder
    Restart,
    /// Remove the installed binary
    Uninstall,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snag=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Interrupted) => {
            println!("snag stopped.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Url { links, shared } => cmd_url(links, shared).await,
        Command::Git { url } => cmd_git(url).await,
        Command::Ytdlp { link, shared } => cmd_ytdlp(link, shared).await,
        Command::Share { path } => cmd_share(path).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Restart => {
            println!("snag restarted.");
            Ok(())
        }
        Command::Uninstall => cmd_uninstall(),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| Error::Internal("could not resolve the home directory".to_string()))
}

fn downloads_dir() -> Result<PathBuf> {
    Ok(dirs::download_dir().unwrap_or(home_dir()?.join("Downloads")))
}

fn shared_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join("SnagShared"))
}

/// Shared fetches land in the dedicated share folder (created on demand),
/// everything else in `fallback`.
fn pick_dest(shared: bool, fallback: PathBuf) -> Result<PathBuf> {
    if shared {
        let dir = shared_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    } else {
        Ok(fallback)
    }
}

async fn cmd_url(links: Vec<String>, shared: bool) -> Result<()> {
    let dest = pick_dest(shared, home_dir()?)?;

    println!("Queueing {} file(s)...", links.len());
    let transfers = links
        .iter()
        .enumerate()
        .map(|(i, link)| Ok(Transfer::try_from(link.as_str())?.with_ordinal(i)))
        .collect::<Result<Vec<_>>>()?;

    let fetcher = FetcherBuilder::new().directory(dest.clone()).build();
    let outcomes = fetcher.run(&transfers).await?;
    println!("{}", render_summary(&outcomes, &dest));

    if shared {
        share_folder(dest, None).await?;
    }
    Ok(())
}

async fn cmd_git(url: String) -> Result<()> {
    println!("Processing Git Repo...");
    let dest = home_dir()?;

    let transfer = Transfer::archive(&url)?;
    let fetcher = FetcherBuilder::new().directory(dest.clone()).build();
    let outcomes = fetcher.run(std::slice::from_ref(&transfer)).await?;
    println!("{}", render_summary(&outcomes, &dest));
    Ok(())
}

async fn cmd_ytdlp(link: String, shared: bool) -> Result<()> {
    let dest = pick_dest(shared, downloads_dir()?)?;

    // Pre-flight: locate the external tool before any work happens.
    let tool = YtDlp::locate().await?;

    println!("Fetching via {}...", YtDlp::BINARY);
    tool.fetch(&link, &dest).await?;
    println!("{}", "-".repeat(30));
    println!(" [OK] Media saved to: {}", dest.display());

    if shared {
        share_folder(dest, None).await?;
    }
    Ok(())
}

async fn cmd_share(path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("."));
    if target.is_file() {
        // A file argument shares its parent folder and highlights the file.
        let highlight = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let folder = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        share_folder(folder, highlight).await
    } else {
        share_folder(target, None).await
    }
}

async fn share_folder(directory: PathBuf, highlight: Option<String>) -> Result<()> {
    ShareServer::new(directory, highlight)?.serve().await
}

fn cmd_uninstall() -> Result<()> {
    print!("Type 'snag' to confirm uninstall: ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    if answer.trim() != "snag" {
        println!("Uninstall aborted.");
        return Ok(());
    }

    match std::fs::remove_file(INSTALL_PATH) {
        Ok(()) => println!("Uninstalled."),
        Err(_) => println!("Use sudo."),
    }
    Ok(())
}

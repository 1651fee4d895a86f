use clap::{Parser, Subcommand};
use rondo::sys::server::SOCKET_PATH;
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "rondoctl", version, about = "Control a running rondo dial", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Set the dial to a value (clamped to the configured range)
    Set { value: i64 },
    /// Reload the configuration file
    Reload,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Set { value } => send_command(&format!("set {value}")),
        Commands::Reload => send_command("reload"),
    }
}

fn send_command(command: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH)?;
    writeln!(stream, "{command}")?;
    Ok(())
}

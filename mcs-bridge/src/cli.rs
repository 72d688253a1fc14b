use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mcs-bridge")]
#[command(about = "Expose a Minecraft server's status as occupancy and fault sensors")]
#[command(version)]
pub struct Cli {
    /// Poll once, print the resulting sensor state as JSON and exit
    #[arg(long)]
    pub once: bool,

    /// Pretty-print JSON output (with --once)
    #[arg(long)]
    pub pretty: bool,

    /// Run the accessory identify routine on startup
    #[arg(long)]
    pub identify: bool,
}

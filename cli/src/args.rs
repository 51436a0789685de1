use clap::Parser;

#[derive(Parser)]
#[command(name = "btc-keyderive")]
#[command(version)]
#[command(about = "Derive the compressed public key, WIF and P2PKH address of a hex private key read from stdin")]
pub struct Cli {
    /// Tracing filter for diagnostics on stderr (e.g. "debug"); falls back to RUST_LOG, then "warn"
    #[arg(long)]
    pub log_level: Option<String>,
}

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use notepad_core::VERSION;

use crate::config::Backend;

/// Notepad - encrypt notes with a passphrase and keep them in a wallet-bound slot
#[derive(Parser)]
#[command(name = "notepad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (overrides config)
    #[arg(short, long, global = true, env = "NOTEPAD_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file choosing the storage backend
    Init(InitArgs),

    /// Connect a wallet (simulated; uses the demo address by default)
    Connect(ConnectArgs),

    /// Disconnect the current wallet
    Disconnect,

    /// Encrypt a note and print the envelope
    Encrypt(EncryptArgs),

    /// Decrypt an envelope and print the note
    Decrypt(DecryptArgs),

    /// Save an envelope into the connected wallet's slot
    Save(SaveArgs),

    /// Load the connected wallet's saved note
    Load(LoadArgs),

    /// Remove the connected wallet's saved note
    Wipe,

    /// Show wallet, storage and saved note status
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Storage backend
    #[arg(long, value_enum, default_value_t = Backend::File)]
    pub backend: Backend,

    /// Simulated delay before each write, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub write_delay_ms: u64,

    /// Simulated delay before each read, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub read_delay_ms: u64,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `connect` command
#[derive(Args)]
pub struct ConnectArgs {
    /// Wallet address (0x followed by 40 hex characters)
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Note text (read from stdin when omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Envelope to decrypt (read from stdin when omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub envelope: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `save` command
#[derive(Args)]
pub struct SaveArgs {
    /// Envelope to save (read from stdin when neither flag is given)
    #[arg(long, conflicts_with = "text", allow_hyphen_values = true)]
    pub envelope: Option<String>,

    /// Encrypt this text first, then save the envelope
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `load` command
#[derive(Args)]
pub struct LoadArgs {
    /// Decrypt the saved note instead of printing the envelope
    #[arg(long)]
    pub decrypt: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command
#[derive(Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

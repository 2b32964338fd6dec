mod cmd;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{cmd_config, cmd_exports, cmd_flags, cmd_fonts, cmd_info};
use crate::output::{OutputFormat, print_error};

/// pdfium-wasm - Build configuration for the PDFium WebAssembly module
#[derive(Parser)]
#[command(name = "pdfium-wasm")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging on stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the complete build configuration for a variant
  Config {
    /// Build variant: full or lite
    variant: String,
  },

  /// Print the final toolchain flags for a variant
  Flags {
    /// Build variant: full or lite
    variant: String,

    /// Print one shell-quoted command line instead of one token per line
    #[arg(long)]
    shell: bool,
  },

  /// List the symbols exported from the module
  Exports {
    /// List the runtime helper methods instead of PDFium functions
    #[arg(long)]
    runtime: bool,

    /// Print as a toolchain setting (KEY=[...])
    #[arg(long)]
    setting: bool,
  },

  /// List the default font search paths, highest precedence first
  Fonts,

  /// Show tool version, upstream pin and supported variants
  Info,
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Config { variant } => cmd_config(&variant, cli.output),
    Commands::Flags { variant, shell } => cmd_flags(&variant, shell, cli.output),
    Commands::Exports { runtime, setting } => cmd_exports(runtime, setting, cli.output),
    Commands::Fonts => cmd_fonts(cli.output),
    Commands::Info => cmd_info(cli.output),
  };

  if let Err(e) = result {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

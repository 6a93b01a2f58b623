//! ldapdn CLI - Command-line access to LDAP DN canonicalization.

use clap::{Parser, Subcommand};
use ldapdn_canonical::{Canonicalizer, Profile};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{check, compare, digest, expand, normalize};
use input::Source;

#[derive(Parser)]
#[command(name = "ldapdn")]
#[command(about = "LDAP distinguished name canonicalization CLI")]
struct Cli {
    /// Canonicalization profile (legacy or compat)
    #[arg(long, global = true, env = "LDAPDN_PROFILE", default_value_t = Profile::Compat)]
    profile: Profile,
    /// Case-fold canonical output
    #[arg(long, global = true)]
    ignore_case: bool,
    /// Log every rewrite (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of each DN
    Normalize {
        #[command(flatten)]
        source: Source,
        /// Output one JSON object per DN, with identity and hygiene report
        #[arg(long)]
        json: bool,
    },
    /// Report whether each DN uses deprecated LDAPv2 quoting
    Check {
        #[command(flatten)]
        source: Source,
        /// Exit with error code if any DN uses legacy quoting
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print each DN with a space after every separator
    Expand {
        #[command(flatten)]
        source: Source,
    },
    /// Check whether two DNs name the same entry
    Compare {
        /// First DN
        a: String,
        /// Second DN
        b: String,
    },
    /// Print the replication identity digest of each DN
    Digest {
        #[command(flatten)]
        source: Source,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let canonicalizer = Canonicalizer::new(cli.profile).ignore_case(cli.ignore_case);
    debug!(profile = %cli.profile, ignore_case = cli.ignore_case, "starting");
    let result = match cli.command {
        Commands::Normalize { source, json } => normalize::run(canonicalizer, source, json),
        Commands::Check {
            source,
            strict,
            json,
        } => check::run(source, strict, json),
        Commands::Expand { source } => expand::run(source),
        Commands::Compare { a, b } => compare::run(canonicalizer, a, b),
        Commands::Digest { source, json } => digest::run(canonicalizer, source, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! adpath CLI - resolve directory objects to the containers they live in.

use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod input;
mod logging;
mod output;

use commands::{canonical_name, domain_dn, parent};

#[derive(Parser)]
#[command(name = "adpath")]
#[command(about = "Distinguished-name parent and canonical path resolution")]
struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug); ADPATH_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the parent container of each distinguished name
    Parent {
        /// Distinguished names (read from --input or stdin if none given)
        dns: Vec<String>,
        /// File with one distinguished name per line
        #[arg(long, conflicts_with = "dns")]
        input: Option<String>,
        /// Output one JSON record per name
        #[arg(long)]
        json: bool,
        /// Exit with error code if any name could not be resolved
        #[arg(long)]
        strict: bool,
    },
    /// Show the canonical name of an object, leaf included
    CanonicalName {
        /// Distinguished name of the object
        dn: String,
    },
    /// Show the domain-component DN for a dotted domain name
    DomainDn {
        /// Domain name such as corp.example.com
        domain: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Parent {
            dns,
            input,
            json,
            strict,
        } => parent::run(dns, input, json, strict),
        Commands::CanonicalName { dn } => canonical_name::run(dn),
        Commands::DomainDn { domain } => domain_dn::run(domain),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

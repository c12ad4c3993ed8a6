mod augment;
mod commands;

use clap::{Parser, Subcommand};
use commands::feature::{self, CliFeatureOpts};

#[derive(Parser)]
#[command(
    name = "cqrsgen",
    version,
    about = "CQRS code generator — scaffold features and wire controller endpoints"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add generated code to the current solution
    Add {
        #[command(subcommand)]
        kind: AddKind,
    },
}

#[derive(Subcommand)]
enum AddKind {
    /// Generate a feature: command/query, handler, request/response, optional endpoint
    Feature {
        /// Feature name (e.g. QrSale)
        name: String,
        /// Feature type: command or query
        #[arg(long = "type")]
        feature_type: Option<String>,
        /// Controller to wire an endpoint into (e.g. Sale)
        #[arg(long = "ep")]
        endpoint: Option<String>,
        /// Project name override (e.g. Acme.Payments.Application)
        #[arg(long)]
        project_name: Option<String>,
        /// Request properties (e.g. 'Name:string,Age:int')
        #[arg(long = "prop-req")]
        prop_req: Option<String>,
        /// Response properties (e.g. 'Name:string,Age:int')
        #[arg(long = "prop-resp")]
        prop_resp: Option<String>,
        /// Skip validator generation
        #[arg(long)]
        no_validator: bool,
        /// Never prompt; use defaults for unspecified options
        #[arg(long)]
        no_interactive: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { kind } => match kind {
            AddKind::Feature {
                name,
                feature_type,
                endpoint,
                project_name,
                prop_req,
                prop_resp,
                no_validator,
                no_interactive,
            } => feature::run(
                &name,
                CliFeatureOpts {
                    feature_type,
                    endpoint,
                    project_name,
                    prop_req,
                    prop_resp,
                    no_validator,
                    no_interactive,
                },
            ),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}

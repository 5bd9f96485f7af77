use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// portfolio - personal portfolio toolkit
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio navigation and contact form client", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Render the navigation bar as seen from a path
    Nav {
        /// Current location path
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Submit one contact message and print the resulting form
    Send {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },
    /// Fill in and submit the contact form interactively
    Contact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config.clone())?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let routes = portfolio_navigation::RouteTable::new();

    match cli.command {
        Commands::Routes => cli::nav::routes(&routes),
        Commands::Nav { path } => cli::nav::nav(&routes, &path),
        Commands::Send {
            name,
            email,
            message,
        } => cli::contact::send(config, name, email, message).await,
        Commands::Contact => cli::contact::session(config).await,
    }
}

//! Tripline - bus-trip booking client
//!
//! Each subcommand maps onto one flow of the booking service: browsing
//! trips, submitting booking requests, profile management, and the admin
//! surfaces for trips, vehicles, drivers, users, and bookings.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tripline_core::{App, Config};

#[derive(Parser, Debug)]
#[command(name = "tripline")]
#[command(about = "Bus-trip booking client")]
#[command(version)]
struct Cli {
    /// Base URL of the booking API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Override the data directory holding the local session database
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session
    Login(commands::auth::LoginArgs),
    /// Log out and clear the persisted session
    Logout,
    /// Show who is currently logged in
    Whoami,
    /// Create a client account
    Signup(commands::auth::SignupArgs),
    /// Browse and search trips
    #[command(subcommand)]
    Trips(commands::trips::TripsCommand),
    /// Submit a booking request
    #[command(subcommand)]
    Book(commands::bookings::BookCommand),
    /// Profile details and bug reports
    #[command(subcommand)]
    Profile(commands::profile::ProfileCommand),
    /// Manage trips, vehicles, drivers, users, and bookings
    #[command(subcommand)]
    Admin(commands::admin::AdminCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tripline_core::init_logging();

    let cli = Cli::parse();

    let mut config = match cli.data_dir {
        Some(dir) => Config::new(dir),
        None => Config::default(),
    };
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let app = App::new(config)?;
    app.initialize();

    match cli.command {
        Command::Login(args) => commands::auth::login(&app, args).await,
        Command::Logout => commands::auth::logout(&app),
        Command::Whoami => commands::auth::whoami(&app),
        Command::Signup(args) => commands::auth::signup(&app, args).await,
        Command::Trips(cmd) => commands::trips::run(&app, cmd).await,
        Command::Book(cmd) => commands::bookings::run(&app, cmd).await,
        Command::Profile(cmd) => commands::profile::run(&app, cmd).await,
        Command::Admin(cmd) => commands::admin::run(&app, cmd).await,
    }
}

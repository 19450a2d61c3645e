use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "studysync",
    version,
    about = "UNC class ratings, shared notes, and schedule generation from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account with a UNC email
    Register(commands::auth::RegisterArgs),
    /// Sign in and persist the session
    Login(commands::auth::LoginArgs),
    /// Sign out and clear the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Browse the major directory with per-major stats
    Majors(commands::majors::MajorsArgs),
    /// Show class difficulty rankings for a major
    Classes(commands::rankings::ClassesArgs),
    /// Submit a class difficulty rating (1-10)
    RateClass(commands::rankings::RateClassArgs),
    /// Submit a professor rating (1.0-5.0)
    RateProfessor(commands::rankings::RateProfessorArgs),
    /// Shared study notes
    #[command(subcommand)]
    Notes(commands::notes::NotesCommand),
    /// Generate a schedule from a pasted course cart
    #[command(subcommand)]
    Schedule(commands::schedule::ScheduleCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; diagnostics go to stderr, command output to stdout
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let ctx = Context::from_env()?;

    let outcome = match cli.command {
        Command::Register(args) => commands::auth::register(&ctx, args).await,
        Command::Login(args) => commands::auth::login(&ctx, args).await,
        Command::Logout => commands::auth::logout(&ctx),
        Command::Whoami => commands::auth::whoami(&ctx).await,
        Command::Majors(args) => commands::majors::majors(&ctx, args).await,
        Command::Classes(args) => commands::rankings::classes(&ctx, args).await,
        Command::RateClass(args) => commands::rankings::rate_class(&ctx, args).await,
        Command::RateProfessor(args) => commands::rankings::rate_professor(&ctx, args).await,
        Command::Notes(command) => commands::notes::run(&ctx, command).await,
        Command::Schedule(command) => commands::schedule::run(&ctx, command).await,
    };

    if let Err(e) = outcome {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

use crate::reports::{
    run_fitness_assess, run_roster_report, run_shift_window, FitnessAssessArgs, RosterReportArgs,
    ShiftArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use drive_ready::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Driver Readiness",
    about = "Shift check-in windows and driver fitness reporting for the driving-safety unit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Show which shift is open for check-in
    Shift(ShiftArgs),
    /// Assess a single soldier's licensing and training fitness
    Fitness {
        #[command(subcommand)]
        command: FitnessCommand,
    },
    /// Unit-wide fitness roster reports
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FitnessCommand {
    /// Compute the fitness assessment from dates on file
    Assess(FitnessAssessArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Build a fitness report from a roster CSV export
    Report(RosterReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Shift(args) => run_shift_window(args),
        Command::Fitness {
            command: FitnessCommand::Assess(args),
        } => run_fitness_assess(args),
        Command::Roster {
            command: RosterCommand::Report(args),
        } => run_roster_report(args),
    }
}

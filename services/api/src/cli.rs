use crate::demo::{run_dashboard, run_demo, DashboardArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruit Desk",
    about = "Serve the recruiting desk API or print pipeline reports from the command line",
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
    /// Print the dashboard summary for the seeded dataset
    Dashboard(DashboardArgs),
    /// Advance and reject a candidate, then print the resulting dashboard
    Demo(DemoArgs),
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
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["recruit-desk-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn dashboard_accepts_reporting_date() {
        let cli = Cli::try_parse_from(["recruit-desk-api", "dashboard", "--today", "2025-04-05"])
            .expect("parses");
        match cli.command {
            Some(Command::Dashboard(args)) => {
                assert_eq!(args.today, chrono::NaiveDate::from_ymd_opt(2025, 4, 5));
            }
            other => panic!("expected dashboard command, got {other:?}"),
        }
    }

    #[test]
    fn dashboard_rejects_malformed_date() {
        assert!(
            Cli::try_parse_from(["recruit-desk-api", "dashboard", "--today", "04/05/2025"])
                .is_err()
        );
    }
}

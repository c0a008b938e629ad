use crate::demo::{run_demo, DemoArgs};
use crate::report::{
    run_careers_list, run_careers_match, run_catalog_validate, run_quiz_score, CareerListArgs,
    CareerMatchArgs, QuizScoreArgs,
};
use crate::server;
use careerpath::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "CareerPath",
    about = "Score Big Five questionnaires and match careers from the command line",
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
    /// Score a set of questionnaire answers
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Browse the career catalog or rank it against trait scores
    Careers {
        #[command(subcommand)]
        command: CareersCommand,
    },
    /// Inspect the configured question and career catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run a scripted quiz end to end and print the resulting report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Compute trait scores and top career matches for one answer set
    Score(QuizScoreArgs),
}

#[derive(Subcommand, Debug)]
enum CareersCommand {
    /// List every career in the configured catalog
    List(CareerListArgs),
    /// Rank careers against explicit trait scores
    Match(CareerMatchArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Load both catalogs and report any structural defect
    Validate,
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
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_quiz_score(args),
        Command::Careers {
            command: CareersCommand::List(args),
        } => run_careers_list(args),
        Command::Careers {
            command: CareersCommand::Match(args),
        } => run_careers_match(args),
        Command::Catalog {
            command: CatalogCommand::Validate,
        } => run_catalog_validate(),
        Command::Demo(args) => run_demo(args),
    }
}

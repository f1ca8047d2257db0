use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use githubfetch::cli::{parse_args, Args, Invocation};
use githubfetch::{App, Config, GitHubClient, KittyIcat, Palette};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let args = match parse_args(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Exit { error, code } => {
            let _ = error.print();
            return ExitCode::from(code);
        }
    };

    let palette = Palette::default();
    match run(&args, &palette).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            println!("{}", palette.error(e));
            ExitCode::FAILURE
        }
    }
}

// Diagnostics go to stderr so stdout carries only the card.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("githubfetch=warn,reqwest=warn"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

async fn run(args: &Args, palette: &Palette) -> githubfetch::Result<()> {
    let config = Config::from_env()?;
    let github = GitHubClient::from_config(&config)?;
    let avatar = KittyIcat::new();

    let app = App::new(&github, &avatar, palette, config.has_credential());

    let mut stdout = io::stdout();
    let outcome = app.run(&args.username, args.heatmap, &mut stdout).await?;
    tracing::info!("Finished for {}: heatmap {:?}", args.username, outcome);
    stdout.flush()?;

    Ok(())
}

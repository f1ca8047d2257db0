use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "githubfetch")]
#[command(version)]
#[command(about = "Show a GitHub user's profile card in the terminal")]
#[command(override_usage = "githubfetch <username> [--heatmap]")]
pub struct Args {
    /// GitHub username to look up
    pub username: String,

    /// Show contribution graph (requires GITHUB_TOKEN)
    #[arg(long)]
    pub heatmap: bool,
}

/// What the binary should do after argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// Print `error` (help, version or a usage error) and exit with `code`.
    Exit { error: clap::Error, code: u8 },
}

pub fn parse_args<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Invocation::Run(args),
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            Invocation::Exit { error, code }
        }
    }
}

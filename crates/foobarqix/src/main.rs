use crate::prelude::*;
use clap::Parser;

mod builtin;
mod custom;
mod error;
mod output;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Label positive integers by their multipliers, the digits they contain and the sum of their digits"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "FOOBARQIX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Print the classification as JSON
    #[clap(long, global = true, conflicts_with = "explain")]
    json: bool,

    /// Print a table with the result of every transformation
    #[clap(long, global = true)]
    explain: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Multipliers and occurrences of 3 (Foo), 5 (Bar) and 7 (Qix)
    #[clap(name = "foo-bar-qix")]
    FooBarQix(crate::builtin::App),

    /// Multipliers and occurrences of 8 (Inf), 7 (Qix) and 3 (Foo), plus digit sum divisibility by 8
    #[clap(name = "inf-qix-foo")]
    InfQixFoo(crate::builtin::App),

    /// A policy described by flags or a TOML file
    Custom(crate::custom::App),
}

fn main() -> Result<()> {
    let app = App::parse();

    let default_filter = if app.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    color_eyre::install()?;

    match app.command {
        SubCommands::FooBarQix(sub_app) => {
            crate::builtin::run(foobarqix_core::Policy::FooBarQix, sub_app, app.global)
        }
        SubCommands::InfQixFoo(sub_app) => {
            crate::builtin::run(foobarqix_core::Policy::InfQixFoo, sub_app, app.global)
        }
        SubCommands::Custom(sub_app) => crate::custom::run(sub_app, app.global),
    }
}

use clap::{Parser, Subcommand};
use detour_core::cli::{self, RedirectsCmd};
use detour_core::logging::{LogMode, default_log_mode, init_logging};

#[derive(Parser, Debug)]
#[command(name = "detour", version, about = "Detour: redirect rules checker")]
struct Cli {
    /// Log output format (pretty on a terminal, raw JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log: Option<LogMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Redirects(RedirectsCmd),
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.log.unwrap_or_else(default_log_mode));

    match args.command {
        Command::Redirects(RedirectsCmd::Check { sources, format }) => {
            if !cli::check(&sources, format)? {
                std::process::exit(1);
            }
        }

        Command::Redirects(RedirectsCmd::Dump {
            sources,
            json,
            yaml,
        }) => {
            if let Err(err) = cli::dump(&sources, json, yaml) {
                tracing::error!(error = %err, "dump failed");
                eprintln!("dump error: {err}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

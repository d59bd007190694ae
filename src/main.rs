use clap::Parser;
use git_ls::commands::*;
use git_ls::core::{print_error, usage_text};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-ls")]
#[command(about = "List a directory annotated with git status and last commits")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Print the usage text and exit
    #[arg(short = 'h', long)]
    help: bool,

    /// Print the version and exit
    #[arg(long)]
    version: bool,

    /// Width of the diffstat graph
    #[arg(long = "diffWidth", value_name = "n")]
    diff_width: Option<usize>,

    /// Directory to list
    dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if cli.help {
        print!("{}", usage_text());
        return;
    }

    let options = LsOptions {
        dir: cli.dir.unwrap_or_else(|| PathBuf::from(".")),
        diff_width: cli.diff_width,
    };

    if let Err(e) = execute_ls(options) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for scifft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test {
        /// Also run the proptest suites
        #[arg(long)]
        props: bool,
    },
    #[command(name = "no-std")]
    NoStd,
    Clippy,
    Fmt,
    Analyze,
    Bench,
    Demo {
        /// `basic_usage` or `verbose_logging`
        name: String,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    match cli.command {
        Commands::Build => run_all([build_command(&cfg)]),
        Commands::Test { props: false } => run_all([test_command(&cfg)]),
        Commands::Test { props: true } => {
            run_all([test_command(&cfg), property_test_command(&cfg)])
        }
        Commands::NoStd => run_all([no_std_command()]),
        Commands::Clippy => run_all([clippy_command()]),
        Commands::Fmt => run_all([fmt_command()]),
        Commands::Analyze => run_all([fmt_command(), clippy_command(), no_std_command()]),
        Commands::Bench => run_all([bench_command(&cfg)]),
        Commands::Demo { name } => run_all([demo_command(&name)?]),
    }
}

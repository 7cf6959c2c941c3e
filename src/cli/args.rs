use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lcom", version, about = "Cohesion analyzer for C# types")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report types that hold too much state, too many methods, or low cohesion
    Check(ScanArgs),
    /// Print state count, behavior count and LCOM1 for every analyzed type
    Metrics(ScanArgs),
    /// List the rules and their descriptions
    Rules,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Files or directories to scan (defaults to the current directory)
    pub paths: Vec<PathBuf>,
    /// Emit JSON instead of console output
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_paths() {
        let cli = Cli::try_parse_from(["lcom", "check", "src", "lib", "--json"]).unwrap();
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("lib")]);
        assert!(args.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["lcom", "metrics", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Metrics(_))));
    }

    #[test]
    fn test_rules_takes_no_arguments() {
        assert!(Cli::try_parse_from(["lcom", "rules"]).is_ok());
        assert!(Cli::try_parse_from(["lcom", "rules", "src"]).is_err());
    }
}

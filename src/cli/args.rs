//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// User Store API - In-memory user records over HTTP
#[derive(Parser, Debug)]
#[command(name = "user-store-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the demo seed records as JSON
    Seed,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to 0.0.0.0)
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on (defaults to 3000)
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,

    /// Start with an empty store instead of the demo records
    #[arg(long)]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_parse_serve_args() {
        let cli = Cli::parse_from(["user-store-api", "-v", "serve", "--port", "8080", "--no-seed"]);
        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(8080));
        assert!(args.host.is_none());
        assert!(args.no_seed);
    }

    #[test]
    fn test_serve_args_fall_back_to_environment() {
        let cli = Cli::command();
        let serve = cli.find_subcommand("serve").unwrap();
        let env_of = |id: &str| {
            serve
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|name| name.to_string_lossy().into_owned())
        };
        assert_eq!(env_of("host").as_deref(), Some("SERVER_HOST"));
        assert_eq!(env_of("port").as_deref(), Some("SERVER_PORT"));
        assert_eq!(env_of("no_seed"), None);
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::parse_from(["user-store-api", "seed"]);
        assert!(matches!(cli.command, Commands::Seed));
    }
}

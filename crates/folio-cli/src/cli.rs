use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio — a small file-backed content manager",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Folio web server
    Serve(ServeArgs),
    /// Create the storage directories and a starter credential file
    Init(InitArgs),
    /// Hash a password for the credential file
    HashPassword(HashPasswordArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file; individual flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Directory holding the documents
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the uploaded images
    #[arg(long)]
    pub image_dir: Option<PathBuf>,

    /// Credential file (username -> bcrypt hash)
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,

    /// bcrypt cost factor
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    pub cost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["folio", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
            assert!(args.config.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_config() {
        let cli = Cli::try_parse_from(["folio", "serve", "--config", "folio.toml"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("folio.toml")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["folio", "init", "/srv/folio"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("/srv/folio"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_init_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["folio", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("."));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_hash_password() {
        let cli = Cli::try_parse_from(["folio", "hash-password", "secret", "--cost", "10"]).unwrap();
        if let Command::HashPassword(args) = cli.command {
            assert_eq!(args.password, "secret");
            assert_eq!(args.cost, 10);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["folio", "--verbose", "init"]).unwrap();
        assert!(cli.verbose);
    }
}

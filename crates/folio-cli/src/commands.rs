use std::fs;
use std::path::Path;

use anyhow::Context;
use folio_server::{FolioServer, ServerConfig};

use crate::cli::{Cli, Command, HashPasswordArgs, InitArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Init(args) => init(args),
        Command::HashPassword(args) => hash_password(args),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(image_dir) = args.image_dir {
        config.image_dir = image_dir;
    }
    if let Some(credentials) = args.credentials {
        config.credentials_path = credentials;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(FolioServer::new(config).serve())?;
    Ok(())
}

const STARTER_CREDENTIALS: &str = "\
# Folio credentials: username = bcrypt hash.
# Generate a hash with: folio hash-password <password>
[users]
";

fn init(args: InitArgs) -> anyhow::Result<()> {
    init_at(&args.path)?;
    println!("Initialized folio storage in {}", args.path.display());
    println!("Add users to {} before serving.", args.path.join("users.toml").display());
    Ok(())
}

fn init_at(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(root.join("data"))?;
    fs::create_dir_all(root.join("images"))?;
    let credentials = root.join("users.toml");
    if !credentials.exists() {
        fs::write(&credentials, STARTER_CREDENTIALS)?;
    }
    Ok(())
}

fn hash_password(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = bcrypt::hash(&args.password, args.cost).context("hashing password")?;
    println!("{hash}");
    Ok(())
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use crmhub::cli::create_admin;
use crmhub_config::DatabaseConfig;
use crmhub_db::{DocumentStore, MongoStore};

#[derive(Parser)]
#[command(name = "crmhub-cli")]
#[command(about = "CRM Hub CLI - Administrative tools for CRM Hub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account
    CreateAdmin {
        /// Username of the admin
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (prompted for if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin { username, password } => {
            handle_create_admin(username, password).await
        }
    }
}

async fn handle_create_admin(
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let store = MongoStore::connect(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database")?;

    let result = create_admin(&store, &username, &password).await;
    store.shutdown().await;

    let user_id = result.map_err(|err| err.error.context("Error creating admin"))?;

    println!("\n✅ Admin created successfully!");
    println!("   Username: {}", username);
    println!("   Id: {}", user_id);
    Ok(())
}

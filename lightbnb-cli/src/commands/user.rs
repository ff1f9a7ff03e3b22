//! User command - look up and register users

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use lightbnb_db::{Database, NewUser};

use super::print_json;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Look up a user by email (case-insensitive) or id; prints null if absent
    #[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
    Get {
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// User id
        #[arg(long)]
        id: Option<i32>,
    },
    /// Register a new user
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password credential
        #[arg(long, env = "LIGHTBNB_USER_PASSWORD")]
        password: String,
    },
}

pub async fn run_user(db: &Database, args: UserArgs) -> Result<()> {
    let users = db.users();
    match args.command {
        UserCommand::Get { email, id } => {
            let user = match (email, id) {
                (Some(email), _) => users
                    .find_by_email(&email)
                    .await
                    .with_context(|| format!("Failed to look up user {}", email))?,
                (None, Some(id)) => users
                    .find_by_id(id)
                    .await
                    .with_context(|| format!("Failed to look up user {}", id))?,
                (None, None) => bail!("either --email or --id is required"),
            };
            print_json(&user)
        }
        UserCommand::Create {
            name,
            email,
            password,
        } => {
            let user = users
                .create(&NewUser::new(name, email, password))
                .await
                .context("Failed to create user")?;
            print_json(&user)
        }
    }
}

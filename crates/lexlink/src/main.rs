// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexlink - terminal client for a legal-aid matchmaking platform.
//!
//! This is the binary entry point: portal login, lawyer browsing,
//! appointment booking, case management, the interactive case chat,
//! and the admin console.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexlink_core::Role;

mod admin;
mod appointments;
mod book;
mod cases;
mod chat;
mod context;
mod lawyers;
mod login;
mod shutdown;
mod status;

use context::CliContext;

fn parse_role(s: &str) -> Result<Role, String> {
    Role::from_str(s).map_err(|_| format!("unknown role `{s}` (client, lawyer, admin)"))
}

/// Lexlink - terminal client for a legal-aid matchmaking platform.
#[derive(Parser, Debug)]
#[command(name = "lexlink", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in to a portal and store the session.
    Login {
        #[arg(value_parser = parse_role)]
        role: Role,
        email: String,
    },
    /// Drop the stored session for a portal.
    Logout {
        #[arg(value_parser = parse_role)]
        role: Role,
    },
    /// Browse the public lawyer directory.
    Lawyers {
        #[arg(long)]
        specialization: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        pro_bono: bool,
    },
    /// Show one lawyer's profile, hours, and reviews.
    Lawyer { id: i64 },
    /// Book an appointment slot with a lawyer.
    Book {
        lawyer_id: i64,
        /// Wall-clock slot, e.g. "2025-01-10 10:45".
        at: String,
    },
    /// List appointments for a portal.
    Appointments {
        #[arg(value_parser = parse_role)]
        role: Role,
    },
    /// Confirm, cancel, or complete an appointment (lawyer portal).
    Appointment {
        id: i64,
        /// New status: confirmed, cancelled, or completed.
        status: String,
    },
    /// List cases for a portal.
    Cases {
        #[arg(value_parser = parse_role)]
        role: Role,
    },
    /// Open the interactive chat for a case.
    Chat {
        #[arg(value_parser = parse_role)]
        role: Role,
        case_id: i64,
    },
    /// Admin console operations.
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommands,
    },
    /// Show configuration and session status.
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match lexlink_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            lexlink_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.client.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut ctx = match CliContext::open(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Login { role, email }) => login::run_login(&mut ctx, role, email).await,
        Some(Commands::Logout { role }) => login::run_logout(&mut ctx, role),
        Some(Commands::Lawyers {
            specialization,
            location,
            min_rating,
            pro_bono,
        }) => lawyers::run_list(&ctx, specialization, location, min_rating, pro_bono).await,
        Some(Commands::Lawyer { id }) => lawyers::run_show(&ctx, id).await,
        Some(Commands::Book { lawyer_id, at }) => book::run_book(&mut ctx, lawyer_id, &at).await,
        Some(Commands::Appointments { role }) => appointments::run_list(&mut ctx, role).await,
        Some(Commands::Appointment { id, status }) => {
            appointments::run_update(&mut ctx, id, &status).await
        }
        Some(Commands::Cases { role }) => cases::run_list(&mut ctx, role).await,
        Some(Commands::Chat { role, case_id }) => chat::run_chat(&mut ctx, role, case_id).await,
        Some(Commands::Admin { command }) => admin::run(&mut ctx, command).await,
        Some(Commands::Status) => status::run_status(&ctx),
        None => {
            println!("lexlink: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parser_accepts_the_three_portals() {
        assert_eq!(parse_role("client").unwrap(), Role::Client);
        assert_eq!(parse_role("lawyer").unwrap(), Role::Lawyer);
        assert_eq!(parse_role("admin").unwrap(), Role::Admin);
        assert!(parse_role("judge").is_err());
    }

    #[test]
    fn cli_parses_chat_command() {
        let cli = Cli::parse_from(["lexlink", "chat", "client", "5"]);
        match cli.command {
            Some(Commands::Chat { role, case_id }) => {
                assert_eq!(role, Role::Client);
                assert_eq!(case_id, 5);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_book_command() {
        let cli = Cli::parse_from(["lexlink", "book", "4", "2025-01-10 10:45"]);
        match cli.command {
            Some(Commands::Book { lawyer_id, at }) => {
                assert_eq!(lawyer_id, 4);
                assert_eq!(at, "2025-01-10 10:45");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}

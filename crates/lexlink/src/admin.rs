// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink admin` console: listings, deletion, KYC review.
//!
//! Deletions go through the optimistic-mutation helper: the row leaves
//! the local table immediately, and a failed backend call puts it back
//! before the table is printed.

use std::str::FromStr;

use clap::Subcommand;
use colored::Colorize;

use lexlink_api::ApiClient;
use lexlink_core::{CaseId, ClientId, KycStatus, LawyerId, LexlinkError, Role, optimistic};

use crate::context::CliContext;

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List all lawyer accounts.
    Lawyers,
    /// List all client accounts.
    Clients,
    /// List all cases.
    Cases,
    /// Delete a lawyer account.
    DeleteLawyer { id: i64 },
    /// Delete a client account.
    DeleteClient { id: i64 },
    /// Delete a case.
    DeleteCase { id: i64 },
    /// Delete an appointment.
    DeleteAppointment { id: i64 },
    /// List KYC submissions awaiting review.
    Kyc,
    /// Approve or reject a KYC submission.
    KycDecide { id: i64, decision: String },
}

pub async fn run(ctx: &mut CliContext, command: AdminCommands) -> Result<(), LexlinkError> {
    let api = ctx.api_for(Role::Admin)?;
    let result = run_inner(&api, command).await;
    if let Err(e) = &result {
        ctx.forget_if_expired(Role::Admin, e);
    }
    result
}

async fn run_inner(api: &ApiClient, command: AdminCommands) -> Result<(), LexlinkError> {
    match command {
        AdminCommands::Lawyers => {
            let lawyers = api.admin_lawyers().await?;
            for lawyer in &lawyers {
                println!(
                    "#{:<4} {:<24} {}",
                    lawyer.id.0,
                    lawyer.name,
                    lawyer.specialization.as_deref().unwrap_or("-"),
                );
            }
        }
        AdminCommands::Clients => {
            let clients = api.admin_clients().await?;
            for client in &clients {
                println!(
                    "#{:<4} {}",
                    client.get("id").and_then(|v| v.as_i64()).unwrap_or_default(),
                    client.get("name").and_then(|v| v.as_str()).unwrap_or("-"),
                );
            }
        }
        AdminCommands::Cases => {
            let cases = api.admin_cases().await?;
            for case in &cases {
                println!("#{:<4} {}", case.id.0, case.title);
            }
        }
        AdminCommands::DeleteLawyer { id } => {
            let mut lawyers = api.admin_lawyers().await?;
            let outcome = optimistic::apply(
                &mut lawyers,
                |rows| rows.retain(|l| l.id != LawyerId(id)),
                api.admin_delete_lawyer(LawyerId(id)),
            )
            .await;

            match outcome {
                Ok(_) => println!("{} lawyer #{id}", "deleted".green()),
                Err(e) => eprintln!("{}: {e} (row restored)", "delete failed".red()),
            }
            for lawyer in &lawyers {
                println!("#{:<4} {}", lawyer.id.0, lawyer.name);
            }
        }
        AdminCommands::DeleteClient { id } => {
            api.admin_delete_client(ClientId(id)).await?;
            println!("{} client #{id}", "deleted".green());
        }
        AdminCommands::DeleteCase { id } => {
            api.admin_delete_case(CaseId(id)).await?;
            println!("{} case #{id}", "deleted".green());
        }
        AdminCommands::DeleteAppointment { id } => {
            api.admin_delete_appointment(id).await?;
            println!("{} appointment #{id}", "deleted".green());
        }
        AdminCommands::Kyc => {
            let queue = api.kyc_verifications().await?;
            if queue.is_empty() {
                println!("no KYC submissions");
            }
            for record in &queue {
                println!(
                    "#{:<4} lawyer #{:<4} {:<10} {}",
                    record.id,
                    record.lawyer_id.0,
                    record.status,
                    record.lawyer_name.as_deref().unwrap_or("-"),
                );
            }
        }
        AdminCommands::KycDecide { id, decision } => {
            let decision = KycStatus::from_str(&decision).map_err(|_| {
                LexlinkError::Validation(format!(
                    "unknown decision `{decision}` (approved, rejected)"
                ))
            })?;
            api.update_kyc_status(id, decision).await?;
            println!("KYC #{id} {decision}");
        }
    }
    Ok(())
}

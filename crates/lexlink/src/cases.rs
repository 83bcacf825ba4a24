// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink cases` command implementation.

use colored::Colorize;

use lexlink_core::{LexlinkError, Role};

use crate::context::CliContext;

/// Lists the portal's cases.
pub async fn run_list(ctx: &mut CliContext, role: Role) -> Result<(), LexlinkError> {
    let api = ctx.api_for(role)?;

    let result = match role {
        Role::Client => api.client_cases().await,
        Role::Lawyer => api.lawyer_cases().await,
        Role::Admin => api.admin_cases().await,
    };

    let cases = match result {
        Ok(cases) => cases,
        Err(e) => {
            ctx.forget_if_expired(role, &e);
            return Err(e);
        }
    };

    if cases.is_empty() {
        println!("no cases");
        return Ok(());
    }

    for case in cases {
        println!(
            "#{:<4} {:<32} {:<12} {}",
            case.id.0,
            case.title.bold(),
            case.status.as_deref().unwrap_or("-"),
            case.lawyer_name
                .as_deref()
                .or(case.client_name.as_deref())
                .unwrap_or("-"),
        );
    }
    Ok(())
}

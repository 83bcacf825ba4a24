// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink login` / `lexlink logout` command implementations.

use colored::Colorize;
use secrecy::SecretString;

use lexlink_api::Credentials;
use lexlink_core::{LexlinkError, Role};

use crate::context::CliContext;

/// Prompts for the password, logs in to the portal, and stores the
/// session under the role's key.
pub async fn run_login(ctx: &mut CliContext, role: Role, email: String) -> Result<(), LexlinkError> {
    let password = rpassword::prompt_password(format!("{role} password: "))
        .map_err(|e| LexlinkError::Internal(format!("could not read password: {e}")))?;

    let api = ctx.api()?;
    let session = api
        .login(
            role,
            &Credentials {
                email,
                password,
            },
        )
        .await?;

    let account_id = session
        .profile
        .get("id")
        .and_then(|v| v.as_i64())
        .unwrap_or_default();
    let display_name = session
        .profile
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("(unnamed)")
        .to_string();

    ctx.store.login(
        role,
        SecretString::from(session.token),
        account_id,
        display_name.clone(),
    )?;

    println!("logged in as {} ({role})", display_name.bold());
    Ok(())
}

/// Drops the stored session for the portal.
pub fn run_logout(ctx: &mut CliContext, role: Role) -> Result<(), LexlinkError> {
    if ctx.store.logout(role)? {
        println!("logged out of the {role} portal");
    } else {
        println!("no active {role} session");
    }
    Ok(())
}

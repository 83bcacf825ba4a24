// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink status` command implementation.

use colored::Colorize;

use lexlink_core::LexlinkError;

use crate::context::CliContext;

/// Prints the effective configuration and the stored sessions.
pub fn run_status(ctx: &CliContext) -> Result<(), LexlinkError> {
    println!("{}", "lexlink status".bold());
    println!("  api:       {}", ctx.config.api.base_url);
    println!("  realtime:  {}", ctx.config.realtime.url);
    println!(
        "  state dir: {}",
        ctx.config.session.resolved_state_dir().display()
    );

    let roles = ctx.store.logged_in_roles();
    if roles.is_empty() {
        println!("  sessions:  none (use `lexlink login <role> <email>`)");
    } else {
        for role in roles {
            if let Some(entry) = ctx.store.entry(role) {
                println!(
                    "  sessions:  {role} as {} (#{})",
                    entry.display_name.bold(),
                    entry.account_id
                );
            }
        }
    }
    Ok(())
}

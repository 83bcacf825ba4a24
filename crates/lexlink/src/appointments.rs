// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink appointments` / `lexlink appointment` command implementations.

use std::str::FromStr;

use colored::Colorize;

use lexlink_core::{Appointment, AppointmentId, AppointmentStatus, LawyerId, LexlinkError, Role};

use crate::context::CliContext;

fn print_appointments(appointments: &[Appointment]) {
    if appointments.is_empty() {
        println!("no appointments");
        return;
    }
    for appointment in appointments {
        let status = match appointment.status {
            AppointmentStatus::Pending => "pending".yellow(),
            AppointmentStatus::Confirmed => "confirmed".green(),
            AppointmentStatus::Cancelled => "cancelled".red(),
            AppointmentStatus::Completed => "completed".blue(),
        };
        println!(
            "#{:<4} {}  {:<10} {}",
            appointment.id.0,
            appointment.appointment_date.format("%Y-%m-%d %H:%M"),
            status,
            appointment
                .lawyer_name
                .as_deref()
                .or(appointment.client_name.as_deref())
                .unwrap_or("-"),
        );
    }
}

/// Lists the portal's appointments.
pub async fn run_list(ctx: &mut CliContext, role: Role) -> Result<(), LexlinkError> {
    let api = ctx.api_for(role)?;

    let result = match role {
        Role::Client => api.client_appointments().await,
        Role::Lawyer => {
            let entry = ctx.store.entry(role).ok_or(LexlinkError::AuthExpired)?;
            api.lawyer_appointments(LawyerId(entry.account_id)).await
        }
        Role::Admin => api.admin_appointments().await,
    };

    match result {
        Ok(appointments) => {
            print_appointments(&appointments);
            Ok(())
        }
        Err(e) => {
            ctx.forget_if_expired(role, &e);
            Err(e)
        }
    }
}

/// Moves an appointment to a new status (lawyer portal).
pub async fn run_update(ctx: &mut CliContext, id: i64, status: &str) -> Result<(), LexlinkError> {
    let new_status = AppointmentStatus::from_str(status)
        .map_err(|_| LexlinkError::Validation(format!("unknown appointment status `{status}`")))?;

    let api = ctx.api_for(Role::Lawyer)?;
    let entry = ctx.store.entry(Role::Lawyer).ok_or(LexlinkError::AuthExpired)?;

    // The terminal-state rule needs the current status; read it from
    // the lawyer's own list.
    let appointments = api.lawyer_appointments(LawyerId(entry.account_id)).await?;
    let current = appointments
        .iter()
        .find(|a| a.id == AppointmentId(id))
        .ok_or_else(|| LexlinkError::NotFound {
            resource: format!("appointment {id}"),
        })?
        .status;

    match api
        .update_appointment_status(AppointmentId(id), current, new_status)
        .await
    {
        Ok(_) => {
            println!("appointment #{id} is now {new_status}");
            Ok(())
        }
        Err(e) => {
            ctx.forget_if_expired(Role::Lawyer, &e);
            Err(e)
        }
    }
}

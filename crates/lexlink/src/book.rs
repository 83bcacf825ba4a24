// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink book` command implementation.
//!
//! Mirrors the booking modal: load the lawyer's working hours once,
//! fetch the booked times, evaluate the candidate slot locally, and
//! only then submit. The backend's transactional check remains
//! authoritative — a 409 here means another client won the race.

use chrono::NaiveDateTime;
use colored::Colorize;
use tracing::warn;

use lexlink_booking::{SlotPlanner, WorkingHours};
use lexlink_core::{LawyerId, LexlinkError, Role};

use crate::context::CliContext;

fn parse_slot(raw: &str) -> Result<NaiveDateTime, LexlinkError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| {
            LexlinkError::Validation(format!(
                "invalid slot `{raw}`, expected \"YYYY-MM-DD HH:MM\""
            ))
        })
}

pub async fn run_book(ctx: &mut CliContext, lawyer_id: i64, at: &str) -> Result<(), LexlinkError> {
    let candidate = parse_slot(at)?;
    let lawyer_id = LawyerId(lawyer_id);

    let public = ctx.api()?;
    let lawyer = public.lawyer(lawyer_id).await?;

    if !lawyer.accepts_bookings() {
        return Err(LexlinkError::Validation(format!(
            "{} is currently busy and not accepting appointments",
            lawyer.name
        )));
    }

    // Hours are parsed once from the profile; a profile without them
    // places no constraint on the slot.
    let hours = match (&lawyer.working_hours_start, &lawyer.working_hours_end) {
        (Some(start), Some(end)) => match WorkingHours::parse(start, end) {
            Ok(hours) => Some(hours),
            Err(e) => {
                warn!(error = %e, "unparseable working hours on profile, ignoring");
                None
            }
        },
        _ => None,
    };

    let mut planner = SlotPlanner::new(hours);
    match public.booked_times(lawyer_id).await {
        Ok(times) => planner.set_booked(times),
        Err(e) => {
            // Fail open: the backend re-checks at submission.
            warn!(error = %e, "could not fetch booked times, relying on the backend check");
            planner.clear_booked();
        }
    }
    planner.set_candidate(candidate);

    let assessment = planner
        .assessment()
        .ok_or_else(|| LexlinkError::Internal("no slot assessment after selection".into()))?;

    if !assessment.within_hours {
        let window = planner
            .hours()
            .map(|h| format!(" ({}-{})", h.start.format("%H:%M"), h.end.format("%H:%M")))
            .unwrap_or_default();
        return Err(LexlinkError::Validation(format!(
            "slot is outside working hours{window}"
        )));
    }
    if let Some(taken) = assessment.conflict {
        return Err(LexlinkError::SlotConflict {
            message: format!(
                "slot is within 30 minutes of an existing booking at {}",
                taken.format("%Y-%m-%d %H:%M")
            ),
        });
    }

    let api = ctx.api_for(Role::Client)?;
    let booked = match api.book_appointment(lawyer_id, candidate).await {
        Ok(appointment) => appointment,
        Err(e) => {
            ctx.forget_if_expired(Role::Client, &e);
            return Err(e);
        }
    };

    println!(
        "{} appointment #{} with {} at {}",
        "booked".green().bold(),
        booked.id.0,
        booked.lawyer_name.as_deref().unwrap_or(&lawyer.name),
        booked.appointment_date.format("%Y-%m-%d %H:%M"),
    );
    Ok(())
}

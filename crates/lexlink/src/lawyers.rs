// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink lawyers` / `lexlink lawyer` command implementations.

use colored::Colorize;

use lexlink_api::LawyerFilters;
use lexlink_core::{LawyerId, LexlinkError};

use crate::context::CliContext;

/// Lists the public directory, filtered.
pub async fn run_list(
    ctx: &CliContext,
    specialization: Option<String>,
    location: Option<String>,
    min_rating: Option<f64>,
    pro_bono: bool,
) -> Result<(), LexlinkError> {
    let api = ctx.api()?;
    let filters = LawyerFilters {
        specialization,
        location,
        min_rating,
        pro_bono: pro_bono.then_some(true),
        ..Default::default()
    };

    let lawyers = api.lawyers(&filters).await?;
    if lawyers.is_empty() {
        println!("no lawyers match those filters");
        return Ok(());
    }

    for lawyer in lawyers {
        let rating = lawyer
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".into());
        let availability = match lawyer.availability_status.as_deref() {
            Some("Busy") => "busy".red().to_string(),
            _ => "available".green().to_string(),
        };
        println!(
            "#{:<4} {:<24} {:<18} {:<14} rating {:<4} {}",
            lawyer.id.0,
            lawyer.name.bold(),
            lawyer.specialization.as_deref().unwrap_or("-"),
            lawyer.location.as_deref().unwrap_or("-"),
            rating,
            availability,
        );
    }
    Ok(())
}

/// Shows one profile with hours and reviews.
pub async fn run_show(ctx: &CliContext, id: i64) -> Result<(), LexlinkError> {
    let api = ctx.api()?;
    let id = LawyerId(id);
    let lawyer = api.lawyer(id).await?;
    let reviews = api.lawyer_reviews(id).await.unwrap_or_default();

    println!("{} (#{})", lawyer.name.bold(), lawyer.id.0);
    if let Some(specialization) = &lawyer.specialization {
        println!("  specialization: {specialization}");
    }
    if let Some(location) = &lawyer.location {
        println!("  location:       {location}");
    }
    if let (Some(start), Some(end)) = (&lawyer.working_hours_start, &lawyer.working_hours_end) {
        println!("  working hours:  {start}-{end}");
    }
    if let Some(status) = &lawyer.availability_status {
        println!("  availability:   {status}");
    }
    if let Some(rating) = lawyer.rating {
        println!("  rating:         {rating:.1}");
    }
    if let Some(bio) = &lawyer.bio {
        println!("  {bio}");
    }

    if !reviews.is_empty() {
        println!("\nreviews:");
        for review in reviews {
            println!(
                "  {:.0}/5  {} — {}",
                review.rating,
                review.comment.as_deref().unwrap_or(""),
                review.client_name.as_deref().unwrap_or("anonymous"),
            );
        }
    }
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lexlink chat` command implementation.
//!
//! Interactive case chat: joins the case room over the realtime
//! channel, loads the stored transcript, then runs a single event loop
//! over user input, inbound events, and the shutdown signal. Messages
//! are sent over the request/response API; the realtime channel only
//! delivers the counterparty's. `/switch` exercises the
//! leave-before-join path; Ctrl+C and `/back` tear down with a leave
//! before the disconnect.

use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tracing::debug;

use lexlink_config::LexlinkConfig;
use lexlink_core::traits::{RealtimeChannel, TranscriptSource};
use lexlink_core::{CaseId, ChatMessage, ClientEvent, ClientId, LexlinkError, Role, ServerEvent};
use lexlink_realtime::{CaseCoordinator, Inbound, WsChannel};

use crate::context::CliContext;
use crate::shutdown;

pub async fn run_chat(ctx: &mut CliContext, role: Role, case_id: i64) -> Result<(), LexlinkError> {
    if role == Role::Admin {
        return Err(LexlinkError::Validation(
            "chat is available on the client and lawyer portals".into(),
        ));
    }

    let api = ctx.api_for(role)?;
    let token = ctx.store.credential(role).ok_or(LexlinkError::AuthExpired)?;
    let (display_name, account_id) = {
        let entry = ctx.store.entry(role).ok_or(LexlinkError::AuthExpired)?;
        (entry.display_name.clone(), entry.account_id)
    };

    let channel: Arc<dyn RealtimeChannel> =
        Arc::new(WsChannel::new(&ctx.config.realtime, token));
    let transcripts: Arc<dyn TranscriptSource> = Arc::new(api.clone());
    let mut coordinator = CaseCoordinator::new(channel, transcripts);

    coordinator.connect().await?;

    // Clients also sit in their notification room for call signaling.
    if role == Role::Client {
        coordinator
            .send(ClientEvent::JoinClientRoom {
                client_id: ClientId(account_id),
            })
            .await?;
    }

    if let Err(e) = coordinator.open_case(CaseId(case_id)).await {
        let _ = coordinator.shutdown().await;
        ctx.forget_if_expired(role, &e);
        return Err(e);
    }

    println!("{} ({})", format!("case #{case_id}").bold(), coordinator.state());
    for message in coordinator.transcript() {
        print_message(role, message);
    }
    println!("{}", "commands: /switch <case-id>, /back".dimmed());

    // Receive pump: the channel handle is shared, the coordinator state
    // stays owned by this loop.
    let (event_tx, mut event_rx) = mpsc::channel(64);
    let pump_channel = coordinator.channel();
    let pump = tokio::spawn(async move {
        loop {
            match pump_channel.next_event().await {
                Ok(event) => {
                    if event_tx.send(Ok(event)).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = event_tx.send(Err(e)).await;
                    break;
                }
            }
        }
    });

    // Readline runs on its own thread; lines arrive over a channel so
    // inbound events keep rendering while the user types.
    let (line_tx, mut line_rx) = mpsc::channel::<String>(8);
    let prompt = format!("{display_name}> ");
    std::thread::spawn(move || {
        let Ok(mut editor) = rustyline::DefaultEditor::new() else {
            return;
        };
        loop {
            match editor.readline(&prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    if line_tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(_) => break,
            }
        }
    });

    let shutdown_token = shutdown::install_signal_handler();

    loop {
        tokio::select! {
            _ = shutdown_token.cancelled() => break,

            line = line_rx.recv() => {
                let Some(line) = line else { break };
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if line == "/back" {
                    break;
                }
                if let Some(rest) = line.strip_prefix("/switch") {
                    match rest.trim().parse::<i64>() {
                        Ok(id) => match coordinator.open_case(CaseId(id)).await {
                            Ok(()) => {
                                println!("{}", format!("case #{id}").bold());
                                for message in coordinator.transcript() {
                                    print_message(role, message);
                                }
                            }
                            Err(e) => eprintln!("{}: {e}", "switch failed".red()),
                        },
                        Err(_) => eprintln!("usage: /switch <case-id>"),
                    }
                    continue;
                }

                let Some(case) = coordinator.joined_case() else { continue };
                match api.send_case_message(case, &line).await {
                    Ok(message) => {
                        // Own messages render from the stored row; the
                        // broadcast echo is deduplicated on arrival.
                        coordinator.record_sent(message.clone());
                        print_message(role, &message);
                    }
                    Err(e) => eprintln!("{}: {e}", "send failed".red()),
                }
            }

            event = event_rx.recv() => {
                let Some(event) = event else { break };
                match event {
                    Ok(event) => handle_inbound(&ctx.config, role, &mut coordinator, event),
                    Err(e) => {
                        eprintln!("{}: {e}", "realtime channel lost".red());
                        break;
                    }
                }
            }
        }
    }

    pump.abort();
    coordinator.shutdown().await?;
    Ok(())
}

fn handle_inbound(
    config: &LexlinkConfig,
    role: Role,
    coordinator: &mut CaseCoordinator,
    event: ServerEvent,
) {
    match coordinator.handle_event(event) {
        Inbound::Appended(message) => print_message(role, &message),
        Inbound::Dropped => {}
        Inbound::Notice(notice) => match notice {
            ServerEvent::Status { message } => debug!(%message, "room status"),
            ServerEvent::IncomingCall {
                appointment_id,
                client_jwt,
                lawyer_jwt,
            } => {
                let jwt = match role {
                    Role::Client => client_jwt,
                    _ => lawyer_jwt,
                };
                println!(
                    "{} join at {}/appointment-{}?jwt={jwt}",
                    "incoming call:".cyan().bold(),
                    config.conference.room_base_url,
                    appointment_id.0,
                );
            }
            ServerEvent::CallError { message } => {
                eprintln!("{}: {message}", "call failed".red());
            }
            ServerEvent::KycStatusUpdated { kyc_status } => {
                println!("{} {kyc_status}", "KYC status updated:".yellow());
            }
            ServerEvent::NewMessage(_) => {}
        },
    }
}

fn print_message(role: Role, message: &ChatMessage) {
    let tag = if message.sender == role {
        "you".green().to_string()
    } else {
        message.sender.to_string().cyan().to_string()
    };
    println!(
        "[{}] {tag}: {}",
        message.created_at.format("%H:%M"),
        message.message,
    );
}

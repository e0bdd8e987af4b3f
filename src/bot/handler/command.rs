//! `/raid` command handler.
//!
//! Every subcommand defers an ephemeral response first, then edits it with the result so
//! slow Discord or database calls never hit the interaction deadline.

use chrono::Utc;
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateMessage, CreateThread, EditInteractionResponse,
};

use crate::{
    bot::{
        command::{flatten_options, RaidCommand},
        component::signup_controls,
        embed::summary_embed,
        handler::{refresh_announcement, user_message},
    },
    error::AppError,
    model::raid_event::{
        AnnouncementParams, CreateRaidEventParams, RaidEvent, UpdateRaidEventParams,
    },
    service::{host::SerenityHost, raid_event::RaidEventService, summary::SummaryService},
    state::BotState,
};

const LIST_LIMIT: usize = 1900;

pub async fn handle_raid_command(state: &BotState, ctx: Context, command: CommandInteraction) {
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /raid response: {:?}", e);
        return;
    }

    let response = match run(state, &ctx, &command).await {
        Ok(response) => response,
        Err(e) => {
            if !matches!(e, AppError::BadRequest(_) | AppError::NotFound(_)) {
                tracing::error!("Failed to handle /raid command: {}", e);
            }
            EditInteractionResponse::new().content(user_message(&e))
        }
    };

    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /raid command: {:?}", e);
    }
}

async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("Raids can only be managed in a server".to_string()))?
        .get();

    let options = command.data.options();
    let (subcommand, args) = flatten_options(&options)
        .ok_or_else(|| AppError::BadRequest("Missing subcommand".to_string()))?;

    let host = SerenityHost::new(ctx.http.clone());
    let service = RaidEventService::new(&state.db, &host, &state.locks);

    match RaidCommand::parse(subcommand, &args)? {
        RaidCommand::Create {
            name,
            description,
            start_time,
            end_time,
        } => {
            let event = service
                .create_event(CreateRaidEventParams {
                    guild_id,
                    channel_id: command.channel_id.get(),
                    created_by: command.user.id.get(),
                    name,
                    description,
                    start_time,
                    end_time,
                })
                .await?;

            let event = match announce(state, ctx, &host, event.id).await {
                Ok(event) => event,
                Err(e) => {
                    service.delete_event(guild_id, event.id).await?;
                    return Err(e);
                }
            };
            let event = service.bridge_scheduled_event(event, Utc::now()).await?;

            Ok(EditInteractionResponse::new().content(format!(
                "Created raid #{} **{}**.",
                event.id, event.name
            )))
        }
        RaidCommand::Edit {
            event_id,
            name,
            description,
            start_time,
            end_time,
        } => {
            let event = service
                .update_event(
                    guild_id,
                    UpdateRaidEventParams {
                        id: event_id,
                        name,
                        description,
                        start_time,
                        end_time,
                    },
                )
                .await?;

            refresh_announcement(state, ctx, event.id).await?;

            Ok(EditInteractionResponse::new()
                .content(format!("Updated raid #{} **{}**.", event.id, event.name)))
        }
        RaidCommand::Delete { event_id } => {
            let event = service.delete_event(guild_id, event_id).await?;

            Ok(EditInteractionResponse::new()
                .content(format!("Deleted raid #{} **{}**.", event.id, event.name)))
        }
        RaidCommand::Preview { event_id } => {
            service.get_event(guild_id, event_id).await?;

            let (event, summary) = SummaryService::new(&state.db, &host, &state.locks)
                .refresh(event_id, true)
                .await?;

            Ok(EditInteractionResponse::new().embed(summary_embed(&event, &summary)?))
        }
        RaidCommand::List => {
            let events = service.list_events(guild_id).await?;

            Ok(EditInteractionResponse::new().content(list_content(&events)))
        }
    }
}

/// Posts the announcement with its controls and optional thread, then records the ids.
async fn announce(
    state: &BotState,
    ctx: &Context,
    host: &SerenityHost,
    event_id: i32,
) -> Result<RaidEvent, AppError> {
    let (event, summary) = SummaryService::new(&state.db, host, &state.locks)
        .refresh(event_id, false)
        .await?;

    let channel_id = ChannelId::new(event.channel_id);
    let message = channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(summary_embed(&event, &summary)?)
                .components(signup_controls(event.id)),
        )
        .await?;

    let thread_id = if state.create_threads {
        match channel_id
            .create_thread_from_message(&ctx.http, message.id, CreateThread::new(&event.name))
            .await
        {
            Ok(thread) => Some(thread.id.get()),
            Err(e) => {
                tracing::warn!(
                    "Failed to open discussion thread for raid event {}: {:?}",
                    event.id,
                    e
                );
                None
            }
        }
    } else {
        None
    };

    RaidEventService::new(&state.db, host, &state.locks)
        .attach_announcement(AnnouncementParams {
            event_id: event.id,
            channel_id: event.channel_id,
            message_id: message.id.get(),
            thread_id,
        })
        .await
}

/// One line per event, cut off before Discord's message length limit.
fn list_content(events: &[RaidEvent]) -> String {
    if events.is_empty() {
        return "No raids scheduled.".to_string();
    }

    let mut content = String::new();
    for (shown, event) in events.iter().enumerate() {
        let line = format!(
            "`#{}` **{}** - {}{}\n",
            event.id,
            event.name,
            event.start_time,
            if event.event_started { " (started)" } else { "" }
        );

        if content.len() + line.len() > LIST_LIMIT {
            content.push_str(&format!("… and {} more", events.len() - shown));
            break;
        }
        content.push_str(&line);
    }

    content
}

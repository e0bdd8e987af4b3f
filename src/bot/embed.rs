//! Announcement embed for a raid event.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{
    error::internal::InternalError,
    util::time::discord_timestamp,
    model::{
        category::{Role, Status},
        raid_event::RaidEvent,
    },
    service::summary::RaidSummary,
};

const EMBED_COLOR: u32 = 0xC69B3A;
const EMBED_TOTAL_LIMIT: usize = 6000;
const FIELD_VALUE_LIMIT: usize = 1024;
const TITLE_LIMIT: usize = 256;
const DESCRIPTION_LIMIT: usize = 2048;
const TIME_LIMIT: usize = 256;
const ELLIPSIS: char = '…';
const EMPTY_SHEET: &str = "No sign-ups yet.";

/// Builds the announcement embed for an event from its rendered summary.
///
/// The embed carries the event name as title, description, start and end times, a line
/// with sign-up and role counts, then one field per class block followed by the
/// supplementary groups.
///
/// Every field stays within 1024 bytes and the whole embed within 6000. The budget left
/// after the fixed parts is shared between the blocks in order; a block that needs less
/// than its share leaves the rest to the blocks after it.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready to post or edit into the announcement
/// - `Err(InternalError::InvalidDiscordTimestamp)` - Creation time is out of Discord's range
pub fn summary_embed(
    event: &RaidEvent,
    summary: &RaidSummary,
) -> Result<CreateEmbed, InternalError> {
    let timestamp = discord_timestamp(event.created_at)?;

    let title = truncate(&event.name, TITLE_LIMIT);
    let description = truncate(&event.description, DESCRIPTION_LIMIT);
    let footer = format!("Raid #{}", event.id);

    let mut fields = vec![(
        "Start".to_string(),
        truncate(&event.start_time, TIME_LIMIT),
        true,
    )];
    if let Some(end_time) = &event.end_time {
        fields.push(("End".to_string(), truncate(end_time, TIME_LIMIT), true));
    }
    fields.push(("Sign-ups".to_string(), counts_line(summary), false));

    let blocks: Vec<(String, &[String], bool)> = summary
        .classes
        .iter()
        .map(|block| {
            let name = format!(
                "{} {} ({})",
                block.class.emoji(),
                block.class.label(),
                block.lines.len()
            );
            (name, block.lines.as_slice(), true)
        })
        .chain(
            summary
                .groups
                .iter()
                .map(|block| (block.title.to_string(), block.lines.as_slice(), false)),
        )
        .collect();

    if blocks.is_empty() {
        fields.push(("\u{200b}".to_string(), EMPTY_SHEET.to_string(), false));
    }

    let used = title.len()
        + description.len()
        + footer.len()
        + fields
            .iter()
            .map(|(name, value, _)| name.len() + value.len())
            .sum::<usize>();
    let mut remaining = EMBED_TOTAL_LIMIT.saturating_sub(used);

    for (index, (name, lines, inline)) in blocks.iter().enumerate() {
        let share = remaining / (blocks.len() - index);
        let limit = share.saturating_sub(name.len()).min(FIELD_VALUE_LIMIT);
        let value = field_value(lines, limit);

        remaining = remaining.saturating_sub(name.len() + value.len());
        fields.push((name.clone(), value, *inline));
    }

    let mut embed = CreateEmbed::new()
        .title(title)
        .color(EMBED_COLOR)
        .fields(fields)
        .footer(CreateEmbedFooter::new(footer))
        .timestamp(timestamp);

    if !description.is_empty() {
        embed = embed.description(description);
    }

    Ok(embed)
}

fn counts_line(summary: &RaidSummary) -> String {
    format!(
        "✅ Signed: **{}** | {} Late: **{}** | {} {} | {} {} | {} {}",
        summary.signed,
        Status::Late.emoji(),
        summary.late,
        Role::Tank.emoji(),
        summary.tanks,
        Role::Healer.emoji(),
        summary.healers,
        Role::Dps.emoji(),
        summary.dps,
    )
}

/// Joins lines into a field value of at most `limit` bytes, cutting at a line boundary.
fn field_value(lines: &[String], limit: usize) -> String {
    let joined_len: usize = lines.iter().map(|line| line.len() + 1).sum();
    if joined_len <= limit + 1 {
        return lines.join("\n");
    }

    let mut value = String::new();
    for (shown, line) in lines.iter().enumerate() {
        let more = format!("… and {} more", lines.len() - shown);
        if value.len() + line.len() + 1 + more.len() > limit {
            if value.len() + more.len() <= limit {
                value.push_str(&more);
            } else {
                value = truncate(&more, limit);
            }
            break;
        }
        value.push_str(line);
        value.push('\n');
    }

    value
}

/// Cuts text to at most `limit` bytes at a character boundary, marking the cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len_utf8());
    let end = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= keep)
        .last()
        .unwrap_or(0);

    let mut cut = text[..end].to_string();
    if limit >= ELLIPSIS.len_utf8() {
        cut.push(ELLIPSIS);
    }
    cut
}

//! `/raid` slash command definition and argument parsing.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, Permissions, ResolvedOption,
    ResolvedValue,
};

use crate::error::AppError;

pub const COMMAND_NAME: &str = "raid";

/// Value that clears the optional end time in `/raid edit`.
const CLEAR_VALUE: &str = "-";

/// A parsed `/raid` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaidCommand {
    Create {
        name: String,
        description: String,
        start_time: String,
        end_time: Option<String>,
    },
    Edit {
        event_id: i32,
        name: Option<String>,
        description: Option<String>,
        start_time: Option<String>,
        /// Outer Option indicates field presence, inner for nullable value.
        end_time: Option<Option<String>>,
    },
    Delete {
        event_id: i32,
    },
    Preview {
        event_id: i32,
    },
    List,
}

/// Builds the `/raid` command with its subcommands.
///
/// Managing raids requires the Manage Events permission by default; server admins can
/// adjust this per role in the integration settings.
pub fn raid_command() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Manage raid sign-ups")
        .default_member_permissions(Permissions::MANAGE_EVENTS)
        .add_option(
            subcommand("create", "Announce a new raid with sign-up controls")
                .add_sub_option(text("name", "Name of the raid", true))
                .add_sub_option(text("description", "Details shown in the announcement", true))
                .add_sub_option(text(
                    "start",
                    "Start time, e.g. <t:1700000000:F> or 2026-10-17 19:30 (UTC)",
                    true,
                ))
                .add_sub_option(text("end", "End time", false)),
        )
        .add_option(
            subcommand("edit", "Change a raid's details")
                .add_sub_option(event_option())
                .add_sub_option(text("name", "New name", false))
                .add_sub_option(text("description", "New description", false))
                .add_sub_option(text("start", "New start time", false))
                .add_sub_option(text("end", "New end time, or - to clear it", false)),
        )
        .add_option(
            subcommand("delete", "Delete a raid and its announcement")
                .add_sub_option(event_option()),
        )
        .add_option(
            subcommand("preview", "Show the current sign-ups privately")
                .add_sub_option(event_option()),
        )
        .add_option(subcommand("list", "List this server's raids"))
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn text(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(required)
}

fn event_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "event", "Raid number")
        .required(true)
        .min_int_value(1)
}

/// Flattens resolved interaction options into the subcommand name and its arguments.
///
/// # Returns
/// - `Some((subcommand, args))` - Argument values rendered as strings
/// - `None` - The interaction carried no subcommand
pub fn flatten_options<'a>(
    options: &[ResolvedOption<'a>],
) -> Option<(&'a str, Vec<(&'a str, String)>)> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::SubCommand(args) => {
            let args = args
                .iter()
                .filter_map(|arg| {
                    let value = match &arg.value {
                        ResolvedValue::String(value) => value.to_string(),
                        ResolvedValue::Integer(value) => value.to_string(),
                        _ => return None,
                    };
                    Some((arg.name, value))
                })
                .collect();
            Some((option.name, args))
        }
        _ => None,
    })
}

impl RaidCommand {
    /// Parses a subcommand and its arguments.
    ///
    /// # Returns
    /// - `Ok(RaidCommand)` - The parsed command
    /// - `Err(AppError::BadRequest)` - Unknown subcommand or a missing or invalid argument
    pub fn parse(subcommand: &str, args: &[(&str, String)]) -> Result<Self, AppError> {
        let get = |name: &str| {
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| value.trim().to_string())
        };
        let require = |name: &str| {
            get(name).ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'", name)))
        };
        let event_id = || -> Result<i32, AppError> {
            let value = require("event")?;
            value
                .parse::<i32>()
                .ok()
                .filter(|id| *id > 0)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid raid number '{}'", value)))
        };

        match subcommand {
            "create" => Ok(RaidCommand::Create {
                name: require("name")?,
                description: require("description")?,
                start_time: require("start")?,
                end_time: get("end").filter(|end| !end.is_empty() && end != CLEAR_VALUE),
            }),
            "edit" => Ok(RaidCommand::Edit {
                event_id: event_id()?,
                name: get("name"),
                description: get("description"),
                start_time: get("start"),
                end_time: get("end").map(|end| Some(end).filter(|end| end != CLEAR_VALUE)),
            }),
            "delete" => Ok(RaidCommand::Delete {
                event_id: event_id()?,
            }),
            "preview" => Ok(RaidCommand::Preview {
                event_id: event_id()?,
            }),
            "list" => Ok(RaidCommand::List),
            other => Err(AppError::BadRequest(format!(
                "Unknown subcommand '{}'",
                other
            ))),
        }
    }
}

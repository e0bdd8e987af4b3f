use crate::error::{config::ConfigError, AppError};

const DEFAULT_SWEEP_SCHEDULE: &str = "0 * * * * *";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Registers slash commands in this guild only instead of globally.
    pub discord_guild_id: Option<u64>,

    /// Cron expression (with seconds) for the event lifecycle sweep.
    pub sweep_schedule: String,
    /// Open a discussion thread on every new raid announcement.
    pub create_threads: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: optional("DISCORD_GUILD_ID")
                .map(|value| parse("DISCORD_GUILD_ID", value))
                .transpose()?,
            sweep_schedule: optional("RAID_SWEEP_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_SWEEP_SCHEDULE.to_string()),
            create_threads: optional("RAID_CREATE_THREADS")
                .map(|value| parse_bool("RAID_CREATE_THREADS", value))
                .transpose()?
                .unwrap_or(true),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse(name: &str, value: String) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

fn parse_bool(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

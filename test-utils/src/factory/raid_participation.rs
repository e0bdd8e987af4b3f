//! Participation factory for creating cached member selections.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participation rows.
///
/// All selection columns default to `None`.
pub struct RaidParticipationFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    guild_id: String,
    user_id: String,
    class: Option<String>,
    spec: Option<String>,
    role: Option<String>,
    offspec_role: Option<String>,
}

impl<'a> RaidParticipationFactory<'a> {
    /// Creates a new factory for a member of an event in guild `"123"`.
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: impl Into<String>) -> Self {
        Self {
            db,
            event_id,
            guild_id: "123".to_string(),
            user_id: user_id.into(),
            class: None,
            spec: None,
            role: None,
            offspec_role: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn offspec_role(mut self, offspec_role: impl Into<String>) -> Self {
        self.offspec_role = Some(offspec_role.into());
        self
    }

    /// Builds and inserts the participation row.
    ///
    /// # Returns
    /// - `Ok(entity::raid_participation::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::raid_participation::Model, DbErr> {
        entity::raid_participation::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            class: ActiveValue::Set(self.class),
            spec: ActiveValue::Set(self.spec),
            role: ActiveValue::Set(self.role),
            offspec_role: ActiveValue::Set(self.offspec_role),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty participation row for a member of an event.
pub async fn create_participation(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: impl Into<String>,
) -> Result<entity::raid_participation::Model, DbErr> {
    RaidParticipationFactory::new(db, event_id, user_id)
        .build()
        .await
}

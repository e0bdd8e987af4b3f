use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::{error::AppError, model::participation::Participation};

/// Stores each member's cached class/spec/role/offspec selection per event.
pub struct RaidParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaidParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a member's participation record for an event
    ///
    /// # Returns
    /// - `Ok(Some(Participation))`: The record if the member has selected anything
    /// - `Ok(None)`: The member has no record for this event
    pub async fn get_participation(
        &self,
        event_id: i32,
        user_id: u64,
    ) -> Result<Option<Participation>, AppError> {
        let row = self.find_row(event_id, user_id).await?;

        row.map(Participation::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    /// Gets all participation records of an event keyed by member id
    pub async fn get_by_event(&self, event_id: i32) -> Result<HashMap<u64, Participation>, AppError> {
        let rows = entity::prelude::RaidParticipation::find()
            .filter(entity::raid_participation::Column::EventId.eq(event_id))
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|row| {
                let participation = Participation::from_entity(row)?;
                Ok((participation.user_id, participation))
            })
            .collect()
    }

    /// Inserts or replaces a member's participation record
    pub async fn save_participation(&self, participation: &Participation) -> Result<(), AppError> {
        let existing = self
            .find_row(participation.event_id, participation.user_id)
            .await?;

        let class = participation.class.map(|class| class.key().to_string());
        let spec = participation.spec.map(|spec| spec.key().to_string());
        let role = participation.role.map(|role| role.key().to_string());
        let offspec = participation.offspec.map(|offspec| offspec.key().to_string());

        match existing {
            Some(row) => {
                let mut active_model: entity::raid_participation::ActiveModel = row.into();
                active_model.class = ActiveValue::Set(class);
                active_model.spec = ActiveValue::Set(spec);
                active_model.role = ActiveValue::Set(role);
                active_model.offspec_role = ActiveValue::Set(offspec);
                active_model.update(self.db).await?;
            }
            None => {
                entity::raid_participation::ActiveModel {
                    event_id: ActiveValue::Set(participation.event_id),
                    guild_id: ActiveValue::Set(participation.guild_id.to_string()),
                    user_id: ActiveValue::Set(participation.user_id.to_string()),
                    class: ActiveValue::Set(class),
                    spec: ActiveValue::Set(spec),
                    role: ActiveValue::Set(role),
                    offspec_role: ActiveValue::Set(offspec),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Deletes the records of the given members for an event
    pub async fn delete_members(&self, event_id: i32, user_ids: &[u64]) -> Result<u64, AppError> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::RaidParticipation::delete_many()
            .filter(entity::raid_participation::Column::EventId.eq(event_id))
            .filter(
                entity::raid_participation::Column::UserId
                    .is_in(user_ids.iter().map(|id| id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes all participation records of an event
    pub async fn delete_by_event(&self, event_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::RaidParticipation::delete_many()
            .filter(entity::raid_participation::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn find_row(
        &self,
        event_id: i32,
        user_id: u64,
    ) -> Result<Option<entity::raid_participation::Model>, AppError> {
        Ok(entity::prelude::RaidParticipation::find()
            .filter(entity::raid_participation::Column::EventId.eq(event_id))
            .filter(entity::raid_participation::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?)
    }
}

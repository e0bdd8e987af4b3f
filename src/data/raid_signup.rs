use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{category::Category, sheet::SignupSheet},
    util::parse::parse_u64_from_string,
};

/// Stores the `signed_up` lists of each event, one row per member per category.
pub struct RaidSignupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaidSignupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the sign-up sheet of an event with lists in insertion order
    ///
    /// # Returns
    /// - `Ok(SignupSheet)`: The sheet, empty if nobody signed up
    /// - `Err(AppError::InternalErr)`: A row holds an unknown category or bad user id
    pub async fn get_sheet(&self, event_id: i32) -> Result<SignupSheet, AppError> {
        let rows = entity::prelude::RaidSignup::find()
            .filter(entity::raid_signup::Column::EventId.eq(event_id))
            .order_by_asc(entity::raid_signup::Column::Id)
            .all(self.db)
            .await?;

        let entries = rows
            .into_iter()
            .map(|row| {
                let category = Category::from_key(&row.category).ok_or_else(|| {
                    InternalError::UnknownStoredKey {
                        kind: "category",
                        key: row.category.clone(),
                    }
                })?;
                let user_id = parse_u64_from_string(&row.user_id)?;
                Ok((category, user_id))
            })
            .collect::<Result<Vec<_>, InternalError>>()?;

        Ok(SignupSheet::from_entries(entries))
    }

    /// Appends a member to the end of a category list
    pub async fn add(&self, event_id: i32, user_id: u64, category: Category) -> Result<(), AppError> {
        entity::raid_signup::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            category: ActiveValue::Set(category.key().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a member from one category list
    ///
    /// # Returns
    /// - `Ok(true)`: The member was in the list
    /// - `Ok(false)`: Nothing to remove
    pub async fn remove(
        &self,
        event_id: i32,
        user_id: u64,
        category: Category,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::RaidSignup::delete_many()
            .filter(entity::raid_signup::Column::EventId.eq(event_id))
            .filter(entity::raid_signup::Column::UserId.eq(user_id.to_string()))
            .filter(entity::raid_signup::Column::Category.eq(category.key()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes the given members from every list of an event
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows deleted
    pub async fn remove_members(&self, event_id: i32, user_ids: &[u64]) -> Result<u64, AppError> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::RaidSignup::delete_many()
            .filter(entity::raid_signup::Column::EventId.eq(event_id))
            .filter(
                entity::raid_signup::Column::UserId
                    .is_in(user_ids.iter().map(|id| id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes all sign-up rows of an event
    pub async fn delete_by_event(&self, event_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::RaidSignup::delete_many()
            .filter(entity::raid_signup::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

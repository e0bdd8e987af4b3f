use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_raid_event_table::RaidEvent;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaidSignup::Table)
                    .if_not_exists()
                    .col(pk_auto(RaidSignup::Id))
                    .col(integer(RaidSignup::EventId))
                    .col(string(RaidSignup::UserId))
                    .col(string(RaidSignup::Category))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raid_signup_event_id")
                            .from(RaidSignup::Table, RaidSignup::EventId)
                            .to(RaidEvent::Table, RaidEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A member can only appear once in a given category list
        manager
            .create_index(
                Index::create()
                    .name("idx_raid_signup_unique")
                    .table(RaidSignup::Table)
                    .col(RaidSignup::EventId)
                    .col(RaidSignup::UserId)
                    .col(RaidSignup::Category)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_raid_signup_unique")
                    .table(RaidSignup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RaidSignup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaidSignup {
    Table,
    Id,
    EventId,
    UserId,
    Category,
}

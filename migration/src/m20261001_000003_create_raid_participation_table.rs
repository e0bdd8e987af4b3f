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
                    .table(RaidParticipation::Table)
                    .if_not_exists()
                    .col(pk_auto(RaidParticipation::Id))
                    .col(integer(RaidParticipation::EventId))
                    .col(string(RaidParticipation::GuildId))
                    .col(string(RaidParticipation::UserId))
                    .col(string_null(RaidParticipation::Class))
                    .col(string_null(RaidParticipation::Spec))
                    .col(string_null(RaidParticipation::Role))
                    .col(string_null(RaidParticipation::OffspecRole))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_raid_participation_event_id")
                            .from(RaidParticipation::Table, RaidParticipation::EventId)
                            .to(RaidEvent::Table, RaidEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_raid_participation_unique")
                    .table(RaidParticipation::Table)
                    .col(RaidParticipation::EventId)
                    .col(RaidParticipation::UserId)
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
                    .name("idx_raid_participation_unique")
                    .table(RaidParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RaidParticipation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaidParticipation {
    Table,
    Id,
    EventId,
    GuildId,
    UserId,
    Class,
    Spec,
    Role,
    OffspecRole,
}

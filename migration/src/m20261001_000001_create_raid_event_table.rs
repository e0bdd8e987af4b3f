use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaidEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(RaidEvent::Id))
                    .col(string(RaidEvent::GuildId))
                    .col(string(RaidEvent::Name))
                    .col(text(RaidEvent::Description))
                    .col(string(RaidEvent::StartTime))
                    .col(string_null(RaidEvent::EndTime))
                    .col(string(RaidEvent::ChannelId))
                    .col(string_null(RaidEvent::MessageId))
                    .col(string_null(RaidEvent::ThreadId))
                    .col(string_null(RaidEvent::ScheduledEventId))
                    .col(boolean(RaidEvent::EventStarted).default(false))
                    .col(string(RaidEvent::CreatedBy))
                    .col(
                        timestamp(RaidEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The lifecycle sweep and the /raid list command both filter by guild
        manager
            .create_index(
                Index::create()
                    .name("idx_raid_event_guild_id")
                    .table(RaidEvent::Table)
                    .col(RaidEvent::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_raid_event_guild_id")
                    .table(RaidEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RaidEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaidEvent {
    Table,
    Id,
    GuildId,
    Name,
    Description,
    StartTime,
    EndTime,
    ChannelId,
    MessageId,
    ThreadId,
    ScheduledEventId,
    EventStarted,
    CreatedBy,
    CreatedAt,
}

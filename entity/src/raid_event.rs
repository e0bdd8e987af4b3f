use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "raid_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub channel_id: String,
    pub message_id: Option<String>,
    pub thread_id: Option<String>,
    pub scheduled_event_id: Option<String>,
    pub event_started: bool,
    pub created_by: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::raid_signup::Entity")]
    RaidSignup,
    #[sea_orm(has_many = "super::raid_participation::Entity")]
    RaidParticipation,
}

impl Related<super::raid_signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaidSignup.def()
    }
}

impl Related<super::raid_participation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaidParticipation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

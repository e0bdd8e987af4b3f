use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "raid_participation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub class: Option<String>,
    pub spec: Option<String>,
    pub role: Option<String>,
    pub offspec_role: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::raid_event::Entity",
        from = "Column::EventId",
        to = "super::raid_event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RaidEvent,
}

impl Related<super::raid_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaidEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// One member in one category list of an event. List order follows `id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "raid_signup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub user_id: String,
    pub category: String,
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

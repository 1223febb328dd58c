//! Occupancy record entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "occupancy_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub slot_id: String,

    pub user_id: i32,

    pub plate: String,

    pub model: String,

    pub arrival_at: DateTimeUtc,

    /// NULL while the vehicle is still parked; at most one open record per
    /// slot at any instant
    #[sea_orm(nullable)]
    pub exit_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::slot::Entity",
        from = "Column::SlotId",
        to = "super::slot::Column::SlotId"
    )]
    Slot,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

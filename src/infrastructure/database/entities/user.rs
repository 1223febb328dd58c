//! User entity (loyalty-relevant fields only)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    /// Monotonic counter of successful parks; +1 per park transaction
    pub parking_count: i64,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::occupancy_record::Entity")]
    OccupancyRecords,
}

impl Related<super::occupancy_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OccupancyRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

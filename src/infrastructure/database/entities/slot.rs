//! Slot entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "slots")]
pub struct Model {
    /// Stable slot identifier, e.g. "SLOT-01"
    #[sea_orm(primary_key, auto_increment = false)]
    pub slot_id: String,

    /// Named zone; immutable after provisioning
    pub area: String,

    /// Slot status: AVAILABLE, OCCUPIED, RESERVED, UNAVAILABLE
    pub status: String,

    pub updated_at: DateTimeUtc,
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

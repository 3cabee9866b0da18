use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "establishments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub establishment_name: String,
    pub establishment_type: String,
    /// Administrative district used as a location filter.
    pub barangay: String,
    pub address: String,
    pub owner_name: String,
    pub owner_contact: String,
    pub last_inspection_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inspection_reports::Entity")]
    InspectionReports,
    #[sea_orm(has_many = "super::inspection_follow_ups::Entity")]
    InspectionFollowUps,
    #[sea_orm(has_many = "super::inspection_certificates::Entity")]
    InspectionCertificates,
}

impl Related<super::inspection_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InspectionReports.def()
    }
}

impl Related<super::inspection_follow_ups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InspectionFollowUps.def()
    }
}

impl Related<super::inspection_certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InspectionCertificates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection_certificates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub certificate_number: String,
    pub certificate_type: String,
    pub certificate_type_full: String,
    pub inspection_id: i32,
    pub establishment_id: i32,
    pub issue_date: String,
    pub valid_until: String,
    pub issued_by: i32,
    pub revoked: bool,
    pub revoked_at: Option<String>,
    pub revoked_reason: Option<String>,
    pub revoked_by: Option<i32>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inspection_reports::Entity",
        from = "Column::InspectionId",
        to = "super::inspection_reports::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Report,
    #[sea_orm(
        belongs_to = "super::establishments::Entity",
        from = "Column::EstablishmentId",
        to = "super::establishments::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Establishment,
}

impl Related<super::inspection_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::establishments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Establishment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

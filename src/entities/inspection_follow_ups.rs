use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection_follow_ups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inspection_id: i32,
    pub establishment_id: i32,
    /// compliance_check | violation_rectification | training | re_inspection |
    /// other
    pub follow_up_type: String,
    pub scheduled_date: String,
    pub actual_date: Option<String>,
    /// pending | scheduled | in_progress | completed | cancelled | overdue
    pub status: String,
    pub assigned_to: Option<i32>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
    pub compliance_verified: bool,
    pub verified_by: Option<i32>,
    pub verified_at: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AssignedTo",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Assignee,
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

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub report_number: String,
    pub establishment_id: i32,
    /// ISO date (YYYY-MM-DD).
    pub inspection_date: String,
    pub inspection_type: String,
    /// draft | submitted | under_review | approved | rejected | completed |
    /// revision_requested
    pub status: String,
    pub overall_compliance_score: i32,
    pub risk_assessment: String,
    pub fire_hazard_level: String,
    pub recommendations: Option<String>,
    pub corrective_actions_required: Option<String>,
    pub compliance_deadline: Option<String>,
    pub inspected_by: i32,
    pub admin_reviewed_by: Option<i32>,
    pub admin_reviewed_at: Option<String>,
    pub admin_review_notes: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
        from = "Column::InspectedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Inspector,
    #[sea_orm(has_many = "super::inspection_violations::Entity")]
    Violations,
    #[sea_orm(has_many = "super::inspection_follow_ups::Entity")]
    FollowUps,
    #[sea_orm(has_many = "super::inspection_certificates::Entity")]
    Certificates,
}

impl Related<super::establishments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Establishment.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspector.def()
    }
}

impl Related<super::inspection_violations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Violations.def()
    }
}

impl Related<super::inspection_follow_ups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FollowUps.def()
    }
}

impl Related<super::inspection_certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

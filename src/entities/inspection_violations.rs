use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection_violations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inspection_id: i32,
    pub violation_code: String,
    pub violation_description: String,
    pub section_violated: Option<String>,
    /// critical | major | minor
    pub severity: String,
    pub fine_amount: Option<f64>,
    pub compliance_deadline: Option<String>,
    /// pending | rectified | overdue | escalated | waived
    pub status: String,
    pub rectified_at: Option<String>,
    /// Stored upload filename for rectification evidence.
    pub rectified_evidence: Option<String>,
    pub admin_notes: Option<String>,
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
}

impl Related<super::inspection_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

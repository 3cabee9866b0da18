use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::entities::establishments;

pub struct EstablishmentRepository {
    conn: DatabaseConnection,
}

impl EstablishmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Option<establishments::Model>> {
        establishments::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query establishment")
    }

    pub async fn list(&self) -> Result<Vec<establishments::Model>> {
        establishments::Entity::find()
            .order_by_asc(establishments::Column::EstablishmentName)
            .all(&self.conn)
            .await
            .context("Failed to list establishments")
    }

    /// Filter dropdown options: sorted distinct barangays, blanks excluded.
    pub async fn distinct_barangays(&self) -> Result<Vec<String>> {
        let rows: Vec<String> = establishments::Entity::find()
            .select_only()
            .column(establishments::Column::Barangay)
            .filter(establishments::Column::Barangay.ne(""))
            .distinct()
            .order_by_asc(establishments::Column::Barangay)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to list barangays")?;

        Ok(rows)
    }

    pub async fn distinct_types(&self) -> Result<Vec<String>> {
        let rows: Vec<String> = establishments::Entity::find()
            .select_only()
            .column(establishments::Column::EstablishmentType)
            .filter(establishments::Column::EstablishmentType.ne(""))
            .distinct()
            .order_by_asc(establishments::Column::EstablishmentType)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to list establishment types")?;

        Ok(rows)
    }

    /// Stamp the last inspection date (certificate issue/revocation side effect).
    pub async fn set_last_inspection_date(&self, id: i32, date: &str) -> Result<()> {
        use sea_orm::{ActiveModelTrait, ActiveValue::Set};

        let Some(model) = establishments::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(());
        };

        let mut active: establishments::ActiveModel = model.into();
        active.last_inspection_date = Set(Some(date.to_string()));
        active.update(&self.conn).await?;

        Ok(())
    }
}

//! Write-side statements

use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, EntityTrait, ExprTrait, QueryFilter, Set};
use tracing::{debug, trace};

use super::SeaOrmStorage;
use super::retry;
use crate::errors::{Result, TrackerError};
use crate::storage::entities::mobile_search;

impl SeaOrmStorage {
    /// Single-statement upsert: insert with `click_count = 1`, or increment
    /// the existing row and refresh `last_updated`.
    ///
    /// The increment is evaluated by the database, so concurrent calls for
    /// the same number never lose counts.
    pub async fn upsert_search(&self, mobile_number: &str) -> Result<()> {
        let db = &self.db;
        retry::with_retry(
            &format!("upsert_search({})", mobile_number),
            self.retry_config,
            || async {
                let model = mobile_search::ActiveModel {
                    mobile_number: Set(mobile_number.to_string()),
                    click_count: Set(1),
                    last_updated: Set(Utc::now()),
                    ..Default::default()
                };

                mobile_search::Entity::insert(model)
                    .on_conflict(
                        OnConflict::column(mobile_search::Column::MobileNumber)
                            .value(
                                mobile_search::Column::ClickCount,
                                Expr::col((
                                    mobile_search::Entity,
                                    mobile_search::Column::ClickCount,
                                ))
                                .add(1),
                            )
                            .update_column(mobile_search::Column::LastUpdated)
                            .to_owned(),
                    )
                    .exec_without_returning(db)
                    .await
            },
        )
        .await
        .map_err(|e| TrackerError::database_operation(format!("Search upsert failed: {}", e)))?;

        trace!("Recorded search for {}", mobile_number);
        Ok(())
    }

    /// Set `name` on the tracking row for `mobile_number`. No row, no change.
    pub async fn update_search_name(&self, mobile_number: &str, name: &str) -> Result<()> {
        let db = &self.db;
        let updated = retry::with_retry(
            &format!("update_search_name({})", mobile_number),
            self.retry_config,
            || async {
                mobile_search::Entity::update_many()
                    .col_expr(mobile_search::Column::Name, Expr::value(name.to_string()))
                    .filter(mobile_search::Column::MobileNumber.eq(mobile_number))
                    .exec(db)
                    .await
            },
        )
        .await
        .map_err(|e| TrackerError::database_operation(format!("Name update failed: {}", e)))?;

        debug!(
            "Name reconciled for {} ({} rows)",
            mobile_number, updated.rows_affected
        );
        Ok(())
    }
}

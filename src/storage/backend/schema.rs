//! Idempotent table and index creation
//!
//! Every statement uses `IF NOT EXISTS`, so running this against a populated
//! database is a no-op.

use sea_orm::sea_query::{ColumnDef, Index, IndexCreateStatement, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::{debug, info};

use crate::errors::{Result, TrackerError};
use crate::storage::entities::{mobile_search, test_result};

fn mobile_searches_table() -> TableCreateStatement {
    Table::create()
        .table(mobile_search::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(mobile_search::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            // 校验前记录的输入也要能存下，不限长度
            ColumnDef::new(mobile_search::Column::MobileNumber)
                .text()
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(mobile_search::Column::ClickCount)
                .big_integer()
                .not_null()
                .default(1),
        )
        .col(
            ColumnDef::new(mobile_search::Column::Name)
                .string_len(255)
                .null(),
        )
        .col(
            ColumnDef::new(mobile_search::Column::LastUpdated)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn test_results_table() -> TableCreateStatement {
    Table::create()
        .table(test_result::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(test_result::Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(test_result::Column::Name)
                .string_len(255)
                .not_null(),
        )
        .col(
            ColumnDef::new(test_result::Column::Phone)
                .string_len(20)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(test_result::Column::CurrentGroup)
                .string_len(100)
                .null(),
        )
        .col(ColumnDef::new(test_result::Column::ExamDate).date().null())
        .col(
            ColumnDef::new(test_result::Column::Result)
                .string_len(100)
                .null(),
        )
        .to_owned()
}

fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("idx_mobile_searches_mobile_number")
            .table(mobile_search::Entity)
            .col(mobile_search::Column::MobileNumber)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_mobile_searches_last_updated")
            .table(mobile_search::Entity)
            .col(mobile_search::Column::LastUpdated)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_test_results_phone")
            .table(test_result::Entity)
            .col(test_result::Column::Phone)
            .to_owned(),
    ]
}

/// Create both tables and their lookup indexes if they are missing.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    for table in [mobile_searches_table(), test_results_table()] {
        db.execute(&table)
            .await
            .map_err(|e| TrackerError::database_operation(format!("Create table failed: {}", e)))?;
    }

    for index in indexes() {
        db.execute(&index)
            .await
            .map_err(|e| TrackerError::database_operation(format!("Create index failed: {}", e)))?;
    }

    debug!("Schema statements applied");
    info!("Database schema ready");
    Ok(())
}

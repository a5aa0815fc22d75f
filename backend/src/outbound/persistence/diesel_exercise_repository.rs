//! PostgreSQL-backed `ExerciseRepository`.
//!
//! The date bounds and cap are pushed into SQL; rows come back in insertion
//! order via the `seq` column.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ExerciseRepository, ExerciseRepositoryError};
use crate::domain::{
    Description, DurationMinutes, ExerciseDate, ExerciseEntry, ExerciseId, ExerciseLogFilter,
    UserId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel implementation of [`ExerciseRepository`].
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExerciseRepositoryError {
    map_basic_pool_error(error, ExerciseRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ExerciseRepositoryError {
    map_basic_diesel_error(
        error,
        ExerciseRepositoryError::query,
        ExerciseRepositoryError::connection,
    )
}

fn row_to_entry(row: ExerciseRow) -> Result<ExerciseEntry, ExerciseRepositoryError> {
    let minutes = u32::try_from(row.duration_minutes).map_err(|_| {
        warn!(exercise_id = %row.id, value = row.duration_minutes, "stored duration out of range");
        ExerciseRepositoryError::query("stored duration out of range")
    })?;
    Ok(ExerciseEntry::from_parts(
        ExerciseId::from_uuid(row.id),
        UserId::from_uuid(row.user_id),
        Description::new(row.description),
        DurationMinutes::new(minutes),
        ExerciseDate::new(row.performed_on),
    ))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, entry: &ExerciseEntry) -> Result<(), ExerciseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewExerciseRow {
            id: *entry.id().as_uuid(),
            user_id: *entry.user_id().as_uuid(),
            description: entry.description().as_ref(),
            duration_minutes: i64::from(entry.duration().minutes()),
            performed_on: entry.date().as_naive(),
        };
        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_for_user(
        &self,
        filter: &ExerciseLogFilter,
    ) -> Result<Vec<ExerciseEntry>, ExerciseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = exercises::table
            .filter(exercises::user_id.eq(*filter.user_id.as_uuid()))
            .select(ExerciseRow::as_select())
            .into_boxed();
        if let Some(from) = filter.from {
            query = query.filter(exercises::performed_on.ge(from.as_naive()));
        }
        if let Some(to) = filter.to {
            query = query.filter(exercises::performed_on.le(to.as_naive()));
        }
        let rows = query
            .order(exercises::seq.asc())
            .limit(i64::from(filter.limit.get()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_entry).collect()
    }
}

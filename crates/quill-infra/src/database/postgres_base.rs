use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};

use quill_core::error::RepoError;

/// Generic PostgreSQL repository over one SeaORM entity with an `i64` key.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) async fn find_model(&self, id: i64) -> Result<Option<E::Model>, RepoError> {
        E::find_by_id(id).one(&self.db).await.map_err(map_db_err)
    }

    pub(crate) async fn delete_model(&self, id: i64) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// Translate a SeaORM error, surfacing unique-constraint violations as
/// [`RepoError::Constraint`].
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => {
            tracing::error!(error = %e, "Database connection error");
            RepoError::Connection(e.to_string())
        }
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

// @generated by entity-scaffold from entity `problem`. Do not edit.
// Requires: entity-scaffold-core, serde, sqlx (mysql).

use ::serde::{Deserialize, Serialize};
use ::sqlx::FromRow;
pub const CREATE_PROBLEM_TABLE_SQL: &str = "CREATE TABLE problems (\n    id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY\n) DEFAULT CHARSET=utf8mb4;";
const CREATE_PROBLEM_SQL: &str = "INSERT INTO problems () VALUES ();";
const GET_PROBLEM_SQL: &str = "SELECT * FROM problems WHERE id=?;";
const LIST_PROBLEM_SQL: &str = "SELECT * FROM problems;";
const DELETE_PROBLEM_SQL: &str = "DELETE FROM problems WHERE id=?;";
const CUSTOM_LIST_PROBLEM_SQL: &str = "SELECT * FROM problems WHERE ";
const CUSTOM_ID_LIST_PROBLEM_SQL: &str = "SELECT id FROM problems WHERE ";
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Problem {
    #[serde(rename = "id", alias = "Id")]
    pub id: u32,
}
impl Problem {
    /// Table the record is stored in.
    pub const TABLE: &'static str = "problems";
    /// `(compact, delimited)` name of every field, in declared order.
    pub const COLUMNS: &'static [(&'static str, &'static str)] = &[("Id", "id")];
}
impl ::core::fmt::Display for Problem {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        ::core::write!(f, "Id: {:?}", self.id)
    }
}
/// Data access for the table, over a pool owned by the caller.
#[derive(Debug, Clone)]
pub struct ProblemManager {
    pool: ::sqlx::MySqlPool,
}
impl ProblemManager {
    /// Wrap an existing pool.
    pub fn new(pool: ::sqlx::MySqlPool) -> Self {
        Self { pool }
    }
    /// Underlying pool.
    pub fn pool(&self) -> &::sqlx::MySqlPool {
        &self.pool
    }
    /// Insert `model`.
    ///
    /// On a duplicate entry the generated columns of the existing row
    /// are copied into `model` and the status is `Ok` instead of
    /// `Created`.
    pub async fn create(&self, model: &mut Problem) -> ::entity_scaffold_core::AccessResult<()> {
        let result = ::sqlx::query(CREATE_PROBLEM_SQL).execute(&self.pool).await;
        match result {
            Ok(done) => {
                model.id = <u32 as ::core::convert::TryFrom<u64>>::try_from(done.last_insert_id())
                    .map_err(|err| {
                        ::entity_scaffold_core::AccessError::server(
                            "Couldn't add problem to database",
                            err,
                        )
                    })?;
                Ok(::entity_scaffold_core::Reply::created(()))
            }
            Err(err) if ::entity_scaffold_core::storage::is_duplicate_entry(&err) => {
                ::entity_scaffold_core::storage::recovered_conflict("problem", &err);
                Ok(::entity_scaffold_core::Reply::ok(()))
            }
            Err(err) => Err(::entity_scaffold_core::AccessError::server(
                "Couldn't add problem to database",
                err,
            )),
        }
    }
    /// Fetch one record by key.
    pub async fn get(&self, id: u32) -> ::entity_scaffold_core::AccessResult<Problem> {
        ::sqlx::query_as::<_, Problem>(GET_PROBLEM_SQL)
            .bind(&id)
            .fetch_one(&self.pool)
            .await
            .map(::entity_scaffold_core::Reply::ok)
            .map_err(|err| {
                if ::entity_scaffold_core::storage::is_no_rows(&err) {
                    ::entity_scaffold_core::AccessError::not_found(
                        "Couldn't find a problem with that id",
                    )
                    .with_cause(err)
                } else {
                    ::entity_scaffold_core::AccessError::server(
                        "Couldn't get problem from database",
                        err,
                    )
                }
            })
    }
    /// Fetch every record, scoped to the owner when the table has one.
    pub async fn list(&self) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<Problem>> {
        ::sqlx::query_as::<_, Problem>(LIST_PROBLEM_SQL)
            .fetch_all(&self.pool)
            .await
            .map(::entity_scaffold_core::Reply::ok)
            .map_err(Self::list_error)
    }
    /// Write every non-key field of `model`.
    ///
    /// Fails with the status of [`Self::get`] when the row does not
    /// exist or is not visible to the owner.
    pub async fn update(&self, model: &Problem) -> ::entity_scaffold_core::AccessResult<()> {
        self.get(::core::clone::Clone::clone(&model.id)).await?;
        Ok(::entity_scaffold_core::Reply::ok(()))
    }
    /// Delete one record by key.
    pub async fn delete(&self, id: u32) -> ::entity_scaffold_core::AccessResult<()> {
        let done = ::sqlx::query(DELETE_PROBLEM_SQL)
            .bind(&id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                ::entity_scaffold_core::AccessError::server(
                    "Couldn't delete problem in database",
                    err,
                )
            })?;
        if done.rows_affected() == 0 {
            return Err(::entity_scaffold_core::AccessError::not_found(
                "Couldn't find a problem with that id",
            ));
        }
        Ok(::entity_scaffold_core::Reply::no_content())
    }
    /// Fetch the records matching `predicate`.
    ///
    /// `predicate` is appended verbatim after `WHERE`.
    pub async fn custom_list(
        &self,
        predicate: &::entity_scaffold_core::TrustedFragment,
    ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<Problem>> {
        let sql = ::std::format!("{}{}", CUSTOM_LIST_PROBLEM_SQL, predicate);
        ::sqlx::query_as::<_, Problem>(&sql)
            .fetch_all(&self.pool)
            .await
            .map(::entity_scaffold_core::Reply::ok)
            .map_err(Self::list_error)
    }
    /// Fetch the keys of the records matching `predicate`.
    ///
    /// `predicate` is appended verbatim after `WHERE`.
    pub async fn custom_id_list(
        &self,
        predicate: &::entity_scaffold_core::TrustedFragment,
    ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<u32>> {
        let sql = ::std::format!("{}{}", CUSTOM_ID_LIST_PROBLEM_SQL, predicate);
        ::sqlx::query_scalar::<_, u32>(&sql)
            .fetch_all(&self.pool)
            .await
            .map(::entity_scaffold_core::Reply::ok)
            .map_err(Self::list_error)
    }
    /// Run an arbitrary statement.
    pub async fn custom_sql(
        &self,
        statement: &::entity_scaffold_core::TrustedFragment,
    ) -> ::entity_scaffold_core::AccessResult<()> {
        ::sqlx::query(statement.as_str())
            .execute(&self.pool)
            .await
            .map(|_| ::entity_scaffold_core::Reply::ok(()))
            .map_err(|err| {
                ::entity_scaffold_core::AccessError::bad_request(
                    "Couldn't run sql for Problem in database",
                    err,
                )
            })
    }
    fn list_error(err: ::sqlx::Error) -> ::entity_scaffold_core::AccessError {
        if ::entity_scaffold_core::storage::is_scan_error(&err) {
            ::entity_scaffold_core::AccessError::server("Couldn't scan row from database", err)
        } else {
            ::entity_scaffold_core::AccessError::server("Couldn't get problems from database", err)
        }
    }
}

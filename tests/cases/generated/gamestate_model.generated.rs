// @generated by entity-scaffold from entity `gamestate`. Do not edit.
// Requires: entity-scaffold-core, serde, sqlx (mysql).

use ::serde::{Deserialize, Serialize};
use ::sqlx::FromRow;
pub const CREATE_GAMESTATE_TABLE_SQL: &str = "CREATE TABLE gamestates (\n    user_id BIGINT UNSIGNED PRIMARY KEY,\n    target INT UNSIGNED NOT NULL\n) DEFAULT CHARSET=utf8mb4;";
const CREATE_GAMESTATE_SQL: &str = "INSERT INTO gamestates (user_id, target) VALUES (?, ?);";
const GET_GAMESTATE_SQL: &str = "SELECT * FROM gamestates WHERE user_id=?;";
const LIST_GAMESTATE_SQL: &str = "SELECT * FROM gamestates WHERE user_id=?;";
const UPDATE_GAMESTATE_SQL: &str = "UPDATE gamestates SET target=? WHERE user_id=?;";
const DELETE_GAMESTATE_SQL: &str = "DELETE FROM gamestates WHERE user_id=?;";
const CUSTOM_LIST_GAMESTATE_SQL: &str = "SELECT * FROM gamestates WHERE ";
const CUSTOM_ID_LIST_GAMESTATE_SQL: &str = "SELECT user_id FROM gamestates WHERE ";
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Gamestate {
    #[serde(rename = "user_id", alias = "UserId")]
    pub user_id: u32,
    #[serde(rename = "target", alias = "Target")]
    pub target: u32,
}
impl Gamestate {
    /// Table the record is stored in.
    pub const TABLE: &'static str = "gamestates";
    /// `(compact, delimited)` name of every field, in declared order.
    pub const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("UserId", "user_id"), ("Target", "target")];
}
impl ::core::fmt::Display for Gamestate {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        ::core::write!(f, "UserId: {:?}, Target: {:?}", self.user_id, self.target)
    }
}
/// Data access for the table, over a pool owned by the caller.
#[derive(Debug, Clone)]
pub struct GamestateManager {
    pool: ::sqlx::MySqlPool,
}
impl GamestateManager {
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
    pub async fn create(&self, model: &mut Gamestate) -> ::entity_scaffold_core::AccessResult<()> {
        let result = ::sqlx::query(CREATE_GAMESTATE_SQL)
            .bind(&model.user_id)
            .bind(&model.target)
            .execute(&self.pool)
            .await;
        match result {
            Ok(_) => Ok(::entity_scaffold_core::Reply::created(())),
            Err(err) if ::entity_scaffold_core::storage::is_duplicate_entry(&err) => {
                ::entity_scaffold_core::storage::recovered_conflict("gamestate", &err);
                Ok(::entity_scaffold_core::Reply::ok(()))
            }
            Err(err) => Err(::entity_scaffold_core::AccessError::server(
                "Couldn't add gamestate to database",
                err,
            )),
        }
    }
    /// Fetch one record by key.
    pub async fn get(&self, user_id: u32) -> ::entity_scaffold_core::AccessResult<Gamestate> {
        ::sqlx::query_as::<_, Gamestate>(GET_GAMESTATE_SQL)
            .bind(&user_id)
            .fetch_one(&self.pool)
            .await
            .map(::entity_scaffold_core::Reply::ok)
            .map_err(|err| {
                if ::entity_scaffold_core::storage::is_no_rows(&err) {
                    ::entity_scaffold_core::AccessError::not_found(
                        "Couldn't find a gamestate with that user_id",
                    )
                    .with_cause(err)
                } else {
                    ::entity_scaffold_core::AccessError::server(
                        "Couldn't get gamestate from database",
                        err,
                    )
                }
            })
    }
    /// Fetch every record, scoped to the owner when the table has one.
    pub async fn list(
        &self,
        user_id: u32,
    ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<Gamestate>> {
        ::sqlx::query_as::<_, Gamestate>(LIST_GAMESTATE_SQL)
            .bind(&user_id)
            .fetch_all(&self.pool)
            .await
            .map(::entity_scaffold_core::Reply::ok)
            .map_err(Self::list_error)
    }
    /// Write every non-key field of `model`.
    ///
    /// Fails with the status of [`Self::get`] when the row does not
    /// exist or is not visible to the owner.
    pub async fn update(&self, model: &Gamestate) -> ::entity_scaffold_core::AccessResult<()> {
        self.get(::core::clone::Clone::clone(&model.user_id))
            .await?;
        ::sqlx::query(UPDATE_GAMESTATE_SQL)
            .bind(&model.target)
            .bind(&model.user_id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                ::entity_scaffold_core::AccessError::server(
                    "Couldn't update gamestate in database",
                    err,
                )
            })?;
        Ok(::entity_scaffold_core::Reply::ok(()))
    }
    /// Delete one record by key.
    pub async fn delete(&self, user_id: u32) -> ::entity_scaffold_core::AccessResult<()> {
        let done = ::sqlx::query(DELETE_GAMESTATE_SQL)
            .bind(&user_id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                ::entity_scaffold_core::AccessError::server(
                    "Couldn't delete gamestate in database",
                    err,
                )
            })?;
        if done.rows_affected() == 0 {
            return Err(::entity_scaffold_core::AccessError::not_found(
                "Couldn't find a gamestate with that user_id",
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
    ) -> ::entity_scaffold_core::AccessResult<::std::vec::Vec<Gamestate>> {
        let sql = ::std::format!("{}{}", CUSTOM_LIST_GAMESTATE_SQL, predicate);
        ::sqlx::query_as::<_, Gamestate>(&sql)
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
        let sql = ::std::format!("{}{}", CUSTOM_ID_LIST_GAMESTATE_SQL, predicate);
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
                    "Couldn't run sql for Gamestate in database",
                    err,
                )
            })
    }
    fn list_error(err: ::sqlx::Error) -> ::entity_scaffold_core::AccessError {
        if ::entity_scaffold_core::storage::is_scan_error(&err) {
            ::entity_scaffold_core::AccessError::server("Couldn't scan row from database", err)
        } else {
            ::entity_scaffold_core::AccessError::server(
                "Couldn't get gamestates from database",
                err,
            )
        }
    }
}

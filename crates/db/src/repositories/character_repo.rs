//! Repository for the `characters` table.

use std::collections::HashMap;

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};
use crate::repositories::CompanyRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, created_at, updated_at, company_id";

/// Provides CRUD operations for characters plus company eager loading.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// `id`, `created_at` and `updated_at` are assigned by the database.
    /// `company_id` is stored as given, even if no such company exists.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, age, company_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.company_id)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its ID, without its company.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by its ID with its company attached.
    ///
    /// A dangling `company_id` leaves `company` as `None`.
    pub async fn find_with_company(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let Some(mut character) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        if let Some(company_id) = character.company_id {
            character.company = CompanyRepo::find_by_id(pool, company_id).await?;
        }
        Ok(Some(character))
    }

    /// List all characters ordered by ID, each with its company attached.
    pub async fn list_with_company(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        let mut characters = sqlx::query_as::<_, Character>(&query)
            .fetch_all(pool)
            .await?;

        let mut company_ids: Vec<DbId> = characters.iter().filter_map(|c| c.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();

        let companies: HashMap<DbId, _> = CompanyRepo::list_by_ids(pool, &company_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        for character in &mut characters {
            character.company = character
                .company_id
                .and_then(|cid| companies.get(&cid).cloned());
        }

        tracing::debug!(count = characters.len(), "Loaded characters with companies");
        Ok(characters)
    }

    /// List characters belonging to any of the given companies, ordered by ID.
    pub async fn list_by_companies(
        pool: &PgPool,
        company_ids: &[DbId],
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE company_id = ANY($1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(company_ids)
            .fetch_all(pool)
            .await
    }

    /// Overwrite `name` and `age` and bump `updated_at`.
    ///
    /// `company_id` and `created_at` are never touched. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = $2,
                age = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

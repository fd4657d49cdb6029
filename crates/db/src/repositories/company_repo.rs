//! Repository for the `companies` table.

use std::collections::HashMap;

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};
use crate::repositories::CharacterRepo;

const COLUMNS: &str = "id, name";

/// Provides create and eager-loading reads for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a company by ID without its characters.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find companies by a set of IDs, ordered by ID. Unknown IDs are skipped.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = ANY($1) ORDER BY id ASC");
        sqlx::query_as::<_, Company>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Find a company by ID with its characters loaded.
    pub async fn find_with_characters(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let Some(mut company) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        company.characters = CharacterRepo::list_by_companies(pool, &[id]).await?;
        Ok(Some(company))
    }

    /// List every company ordered by ID, each with its characters loaded.
    ///
    /// Runs two queries (companies, then their characters) and stitches the
    /// results together in memory.
    pub async fn list_with_characters(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id ASC");
        let mut companies = sqlx::query_as::<_, Company>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = companies.iter().map(|c| c.id).collect();
        let characters = CharacterRepo::list_by_companies(pool, &ids).await?;

        let index: HashMap<DbId, usize> = companies
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id, pos))
            .collect();
        for character in characters {
            let slot = character.company_id.and_then(|cid| index.get(&cid).copied());
            if let Some(pos) = slot {
                companies[pos].characters.push(character);
            }
        }

        tracing::debug!(count = companies.len(), "Loaded companies with characters");
        Ok(companies)
    }
}

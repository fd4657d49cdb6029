//! Destructive schema setup and fixture seeding.
//!
//! Every process start drops both tables, recreates them empty and loads the
//! fixture rows. There are no migrations: prior data never survives.

use sqlx::PgPool;

use crate::models::character::CreateCharacter;
use crate::models::company::CreateCompany;
use crate::repositories::{CharacterRepo, CompanyRepo};

const DROP_STATEMENTS: [&str; 2] = [
    "DROP TABLE IF EXISTS characters",
    "DROP TABLE IF EXISTS companies",
];

// `company_id` deliberately carries no REFERENCES clause.
const CREATE_STATEMENTS: [&str; 3] = [
    "CREATE TABLE companies (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE characters (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL DEFAULT '',
        age INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        company_id BIGINT
    )",
    "CREATE INDEX idx_characters_company_id ON characters (company_id)",
];

/// Seed data: each company with its characters as `(name, age)`.
///
/// Companies are inserted in order into freshly created tables, so `musani`
/// gets id 1 and `akaoni` id 2.
pub const FIXTURES: &[(&str, &[(&str, i32)])] = &[
    ("musani", &[("aoi", 21), ("ema", 21)]),
    ("akaoni", &[("shizuka", 21)]),
];

/// Drop and recreate the `companies` and `characters` tables.
pub async fn reset_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in DROP_STATEMENTS.iter().chain(CREATE_STATEMENTS.iter()) {
        sqlx::query(*statement).execute(pool).await?;
    }
    tracing::info!("Schema reset (companies, characters)");
    Ok(())
}

/// Insert the [`FIXTURES`] companies and characters.
pub async fn insert_fixtures(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut inserted = 0usize;
    for (company_name, characters) in FIXTURES {
        let company = CompanyRepo::create(
            pool,
            &CreateCompany {
                name: (*company_name).to_string(),
            },
        )
        .await?;

        for (name, age) in characters.iter() {
            CharacterRepo::create(
                pool,
                &CreateCharacter {
                    name: (*name).to_string(),
                    age: *age,
                    company_id: Some(company.id),
                },
            )
            .await?;
            inserted += 1;
        }
    }
    tracing::info!(companies = FIXTURES.len(), characters = inserted, "Fixtures inserted");
    Ok(())
}

/// Reset the schema and load fixtures. Run once at startup.
pub async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    reset_schema(pool).await?;
    insert_fixtures(pool).await
}

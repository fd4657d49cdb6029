//! Company entity model and DTOs.

use roster_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::character::Character;

/// A company row from the `companies` table.
///
/// `Default` is the zero-valued company returned for unknown ids.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    /// Characters referencing this company. Filled by eager loading, never a column.
    #[sqlx(skip)]
    pub characters: Vec<Character>,
}

/// DTO for creating a new company. Only fixture seeding creates companies.
#[derive(Debug, Clone)]
pub struct CreateCompany {
    pub name: String,
}

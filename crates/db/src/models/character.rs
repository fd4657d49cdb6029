//! Character entity model and DTOs.

use roster_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::company::Company;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Not a foreign key: may be absent or point at a company that does not exist.
    pub company_id: Option<DbId>,
    /// The referenced company, when it was loaded and exists.
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// DTO for creating a new character.
///
/// Omitted fields take their zero value; unknown fields (`id`, timestamps)
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCharacter {
    pub name: String,
    pub age: i32,
    pub company_id: Option<DbId>,
}

/// DTO for updating an existing character.
///
/// Both fields always overwrite the stored row; an omitted field resets to
/// its zero value. Everything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCharacter {
    pub name: String,
    pub age: i32,
}

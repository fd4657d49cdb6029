//! Integration tests for the company and character repositories.

use assert_matches::assert_matches;
use roster_db::models::character::{CreateCharacter, UpdateCharacter};
use roster_db::repositories::{CharacterRepo, CompanyRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_character(name: &str, age: i32, company_id: Option<i64>) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        age,
        company_id,
    }
}

async fn seeded(pool: &PgPool) {
    roster_db::bootstrap(pool).await.unwrap();
}

/// Push both timestamps an hour into the past so a save is observable.
async fn backdate(pool: &PgPool, id: i64) {
    sqlx::query(
        "UPDATE characters
         SET created_at = created_at - INTERVAL '1 hour',
             updated_at = updated_at - INTERVAL '1 hour'
         WHERE id = $1",
    )
    .bind(id)
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_list_companies_with_characters(pool: PgPool) {
    seeded(&pool).await;

    let companies = CompanyRepo::list_with_characters(&pool).await.unwrap();
    assert_eq!(companies.len(), 2);

    assert_eq!(companies[0].name, "musani");
    let musani: Vec<&str> = companies[0].characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(musani, ["aoi", "ema"]);

    assert_eq!(companies[1].name, "akaoni");
    let akaoni: Vec<&str> = companies[1].characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(akaoni, ["shizuka"]);
}

#[sqlx::test]
async fn test_find_company_with_characters(pool: PgPool) {
    seeded(&pool).await;

    let company = CompanyRepo::find_with_characters(&pool, 2).await.unwrap().unwrap();
    assert_eq!(company.name, "akaoni");
    assert_eq!(company.characters.len(), 1);
    assert_matches!(company.characters[0].company, None);
}

#[sqlx::test]
async fn test_find_missing_company(pool: PgPool) {
    seeded(&pool).await;
    assert_matches!(CompanyRepo::find_with_characters(&pool, 999_999).await, Ok(None));
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_assigns_increasing_ids(pool: PgPool) {
    seeded(&pool).await;

    let first = CharacterRepo::create(&pool, &new_character("kai", 19, Some(1)))
        .await
        .unwrap();
    let second = CharacterRepo::create(&pool, &new_character("rin", 22, Some(2)))
        .await
        .unwrap();

    assert_eq!(first.id, 4);
    assert!(second.id > first.id);
    assert_eq!(first.created_at, first.updated_at);
}

#[sqlx::test]
async fn test_create_with_dangling_company(pool: PgPool) {
    seeded(&pool).await;

    let created = CharacterRepo::create(&pool, &new_character("ghost", 40, Some(42)))
        .await
        .unwrap();
    assert_eq!(created.company_id, Some(42));

    let found = CharacterRepo::find_with_company(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.company_id, Some(42));
    assert!(found.company.is_none());
}

#[sqlx::test]
async fn test_create_without_company(pool: PgPool) {
    seeded(&pool).await;

    let created = CharacterRepo::create(&pool, &new_character("loner", 30, None))
        .await
        .unwrap();
    assert_eq!(created.company_id, None);

    let all = CharacterRepo::list_with_company(&pool).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.last().unwrap().company.is_none());
}

#[sqlx::test]
async fn test_list_characters_with_company(pool: PgPool) {
    seeded(&pool).await;

    let characters = CharacterRepo::list_with_company(&pool).await.unwrap();
    let pairs: Vec<(&str, &str)> = characters
        .iter()
        .map(|c| (c.name.as_str(), c.company.as_ref().unwrap().name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [("aoi", "musani"), ("ema", "musani"), ("shizuka", "akaoni")]
    );
}

#[sqlx::test]
async fn test_update_touches_only_name_and_age(pool: PgPool) {
    seeded(&pool).await;
    backdate(&pool, 1).await;
    let before = CharacterRepo::find_by_id(&pool, 1).await.unwrap().unwrap();

    let input = UpdateCharacter {
        name: "aoi-renamed".to_string(),
        age: 22,
    };
    let after = CharacterRepo::update(&pool, 1, &input).await.unwrap().unwrap();

    assert_eq!(after.name, "aoi-renamed");
    assert_eq!(after.age, 22);
    assert_eq!(after.company_id, before.company_id);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[sqlx::test]
async fn test_update_missing_returns_none(pool: PgPool) {
    seeded(&pool).await;
    let input = UpdateCharacter::default();
    assert_matches!(CharacterRepo::update(&pool, 999_999, &input).await, Ok(None));
}

#[sqlx::test]
async fn test_hard_delete(pool: PgPool) {
    seeded(&pool).await;

    assert!(CharacterRepo::hard_delete(&pool, 3).await.unwrap());
    assert_matches!(CharacterRepo::find_by_id(&pool, 3).await, Ok(None));

    // Deleting again matches nothing but is not an error.
    assert!(!CharacterRepo::hard_delete(&pool, 3).await.unwrap());

    let akaoni = CompanyRepo::find_with_characters(&pool, 2).await.unwrap().unwrap();
    assert!(akaoni.characters.is_empty());
}

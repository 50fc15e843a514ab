use anyhow::Result;
use chrono::NaiveDate;
use festival_bot::database::{connection::DatabaseManager, models::*};
use festival_bot::error::FestivalError;
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, month, day).unwrap()
}

fn new_festival(name: &str, start: NaiveDate, end: NaiveDate, link: Option<&str>) -> NewFestival {
    NewFestival {
        name: name.to_string(),
        start_date: start,
        end_date: end,
        link: link.map(str::to_string),
    }
}

#[tokio::test]
async fn test_migrations_create_tables() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let tables = db.table_names().await?;
    assert_eq!(tables, vec!["attendees", "festivals", "users"]);

    Ok(())
}

#[tokio::test]
async fn test_user_get_or_create() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let (user, created) = User::get_or_create(&db.pool, 42, "Alice").await?;
    assert!(created);
    assert_eq!(user.telegram_id, 42);
    assert_eq!(user.name, "Alice");

    let (same, created) = User::get_or_create(&db.pool, 42, "Alice Renamed").await?;
    assert!(!created);
    assert_eq!(same.name, "Alice");

    assert!(User::find_by_telegram_id(&db.pool, 7).await?.is_none());
    assert_eq!(User::count(&db.pool).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_festival_dates_round_trip() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let (festival, created) = Festival::get_or_create(
        &db.pool,
        &new_festival("Wacken", date(8, 2), date(8, 5), Some("https://www.wacken.com")),
    )
    .await?;
    assert!(created);

    let stored = Festival::find_by_id(&db.pool, festival.id).await?.unwrap();
    assert_eq!(stored.start_date, date(8, 2));
    assert_eq!(stored.end_date, date(8, 5));
    assert_eq!(stored.link.as_deref(), Some("https://www.wacken.com"));

    Ok(())
}

#[tokio::test]
async fn test_festival_name_unique_ignoring_case() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    Festival::get_or_create(&db.pool, &new_festival("Wacken", date(8, 2), date(8, 5), None)).await?;

    // Identical fields apart from case resolve to the stored row
    let (festival, created) =
        Festival::get_or_create(&db.pool, &new_festival("WACKEN", date(8, 2), date(8, 5), None)).await?;
    assert!(!created);
    assert_eq!(festival.name, "Wacken");

    let result =
        Festival::get_or_create(&db.pool, &new_festival("wacken", date(8, 3), date(8, 5), None)).await;
    assert!(matches!(result, Err(FestivalError::Conflict { .. })));

    Ok(())
}

#[tokio::test]
async fn test_festival_link_unique_but_optional() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    // Several festivals without a link are fine
    Festival::get_or_create(&db.pool, &new_festival("Wacken", date(8, 2), date(8, 5), None)).await?;
    Festival::get_or_create(&db.pool, &new_festival("Summer Breeze", date(8, 16), date(8, 19), None)).await?;

    Festival::get_or_create(
        &db.pool,
        &new_festival("Fusion", date(6, 28), date(7, 2), Some("https://example.org")),
    )
    .await?;
    let result = Festival::get_or_create(
        &db.pool,
        &new_festival("Rock am Ring", date(6, 2), date(6, 4), Some("https://example.org")),
    )
    .await;
    assert!(matches!(result, Err(FestivalError::Conflict { .. })));
    assert_eq!(Festival::count(&db.pool).await?, 3);

    Ok(())
}

#[tokio::test]
async fn test_festival_search_is_literal_substring() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    Festival::get_or_create(&db.pool, &new_festival("100% Metal", date(7, 1), date(7, 2), None)).await?;
    Festival::get_or_create(&db.pool, &new_festival("1000 Metal", date(7, 3), date(7, 4), None)).await?;

    let matches = Festival::search(&db.pool, "100%").await?;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "100% Metal");

    let matches = Festival::search(&db.pool, "METAL").await?;
    assert_eq!(matches.len(), 2);

    assert!(Festival::search(&db.pool, "_").await?.is_empty());

    Festival::get_or_create(&db.pool, &new_festival("Summer Breeze Dinkelsbühl", date(8, 16), date(8, 19), None)).await?;
    let matches = Festival::search(&db.pool, "DINKELSBÜHL").await?;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Summer Breeze Dinkelsbühl");

    Ok(())
}

#[tokio::test]
async fn test_festival_list_ordered_by_start_date() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    Festival::get_or_create(&db.pool, &new_festival("Summer Breeze", date(8, 16), date(8, 19), None)).await?;
    Festival::get_or_create(&db.pool, &new_festival("Rock am Ring", date(6, 2), date(6, 4), None)).await?;
    Festival::get_or_create(&db.pool, &new_festival("Wacken", date(8, 2), date(8, 5), None)).await?;

    let names: Vec<String> = Festival::list(&db.pool).await?.into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Rock am Ring", "Wacken", "Summer Breeze"]);

    Ok(())
}

#[tokio::test]
async fn test_attendee_rows() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    User::get_or_create(&db.pool, 42, "Alice").await?;
    User::get_or_create(&db.pool, 43, "Bob").await?;
    let (wacken, _) =
        Festival::get_or_create(&db.pool, &new_festival("Wacken", date(8, 2), date(8, 5), None)).await?;

    let attendee = Attendee::create(&db.pool, wacken.id, 42, AttendanceStatus::Maybe).await?;
    Attendee::create(&db.pool, wacken.id, 43, AttendanceStatus::HasTicket).await?;

    // Only one row per (festival, user)
    assert!(Attendee::create(&db.pool, wacken.id, 42, AttendanceStatus::Attending).await.is_err());

    Attendee::update_status(&db.pool, attendee.id, AttendanceStatus::Attending).await?;
    let stored = Attendee::find(&db.pool, wacken.id, 42).await?.unwrap();
    assert_eq!(stored.id, attendee.id);
    assert_eq!(stored.status, AttendanceStatus::Attending);

    let for_user = Attendee::for_user(&db.pool, 42).await?;
    assert_eq!(for_user.len(), 1);
    assert_eq!(for_user[0].festival(), wacken);

    let for_festival = Attendee::for_festival(&db.pool, wacken.id).await?;
    let names: Vec<&str> = for_festival.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);

    assert_eq!(Attendee::delete(&db.pool, wacken.id, 42).await?, 1);
    assert_eq!(Attendee::delete(&db.pool, wacken.id, 42).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_attendee_requires_existing_user() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let (wacken, _) =
        Festival::get_or_create(&db.pool, &new_festival("Wacken", date(8, 2), date(8, 5), None)).await?;

    let result = Attendee::create(&db.pool, wacken.id, 999, AttendanceStatus::Attending).await;
    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests listing an empty tome collection.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_for_new_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = TomeCollection::new(db.clone()).list().await?;

    assert!(entries.is_empty());

    Ok(())
}

/// Tests entries come back oldest first regardless of insertion order.
///
/// Expected: Ok with entries ordered by date_added ascending
#[tokio::test]
async fn orders_entries_by_date_added() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TomeFactory::new(db)
        .username("Third")
        .date_added(base_time() + Duration::hours(2))
        .build()
        .await?;
    TomeFactory::new(db)
        .username("First")
        .date_added(base_time())
        .build()
        .await?;
    TomeFactory::new(db)
        .username("Second")
        .date_added(base_time() + Duration::hours(1))
        .build()
        .await?;

    let entries = TomeCollection::new(db.clone()).list().await?;

    let names: Vec<&str> = entries.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert_eq!(entries[0].date_added, base_time());

    Ok(())
}

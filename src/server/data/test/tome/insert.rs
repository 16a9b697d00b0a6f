use super::*;

/// Tests inserting a player stamps the entry with the current time.
///
/// Expected: Ok with entry persisted and date_added within the call window
#[tokio::test]
async fn inserts_entry_with_current_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let entry = TomeCollection::new(db.clone()).insert("Salted").await?;
    let after = Utc::now();

    assert_eq!(entry.username, "Salted");
    assert!(entry.date_added >= before && entry.date_added <= after);

    let count = entity::prelude::Tome::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests newly inserted players land at the end of the list.
///
/// Expected: Ok with the new entry listed last
#[tokio::test]
async fn appends_after_existing_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TomeFactory::new(db)
        .username("Earlier")
        .date_added(base_time())
        .build()
        .await?;

    let collection = TomeCollection::new(db.clone());
    collection.insert("Later").await?;

    let entries = collection.list().await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].username, "Later");

    Ok(())
}

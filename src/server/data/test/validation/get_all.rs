use super::*;

/// Tests reading an empty validation table.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Validation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let records = ValidationRepository::new(db.clone()).get_all().await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests reading validation records as guild identities.
///
/// Expected: Ok with every record in insertion order, names as stored
#[tokio::test]
async fn returns_records_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Validation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::validation::ValidationFactory::new(db)
        .wynn_guild_name("Beta Guild")
        .wynn_guild_id("g-2")
        .build()
        .await?;
    factory::validation::ValidationFactory::new(db)
        .wynn_guild_name("Alpha Guild")
        .wynn_guild_id("g-1")
        .build()
        .await?;

    let records = ValidationRepository::new(db.clone()).read_all().await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].guild_id, "g-2");
    assert_eq!(records[0].guild_name, "Beta Guild");
    assert_eq!(records[1].guild_id, "g-1");

    Ok(())
}

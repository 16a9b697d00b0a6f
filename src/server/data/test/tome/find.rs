use super::*;

/// Tests finding an entry using different casing than it was stored with.
///
/// Expected: Ok(Some) with the stored username
#[tokio::test]
async fn finds_username_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TomeFactory::new(db).username("Salted").build().await?;

    let entry = TomeCollection::new(db.clone()).find("sALTED").await?;

    assert!(entry.is_some());
    assert_eq!(entry.unwrap().username, "Salted");

    Ok(())
}

/// Tests finding a player who is not on the list.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TomeFactory::new(db).username("Salted").build().await?;

    let entry = TomeCollection::new(db.clone()).find("Salt").await?;

    assert!(entry.is_none());

    Ok(())
}

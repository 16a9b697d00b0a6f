use super::*;

/// Tests removing a player regardless of casing.
///
/// Expected: Ok(true) and entry gone from the collection
#[tokio::test]
async fn deletes_username_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TomeFactory::new(db).username("Salted").build().await?;
    TomeFactory::new(db).username("Other").build().await?;

    let collection = TomeCollection::new(db.clone());
    let removed = collection.delete("salted").await?;

    assert!(removed);
    assert!(collection.find("Salted").await?.is_none());
    assert_eq!(entity::prelude::Tome::find().count(db).await?, 1);

    Ok(())
}

/// Tests removing a player who is not on the list.
///
/// Expected: Ok(false) and nothing removed
#[tokio::test]
async fn returns_false_for_missing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TomeFactory::new(db).username("Salted").build().await?;

    let removed = TomeCollection::new(db.clone()).delete("Nobody").await?;

    assert!(!removed);
    assert_eq!(entity::prelude::Tome::find().count(db).await?, 1);

    Ok(())
}

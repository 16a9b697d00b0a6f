use super::*;

/// Tests fetching one member's counters.
///
/// Expected: Ok(Some) with every counter carried over
#[tokio::test]
async fn finds_record_by_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AspectFactory::new(db)
        .uuid("member")
        .aspects(4)
        .emeralds(128)
        .raids(2)
        .build()
        .await?;

    let record = AspectCollection::new(db.clone()).find("member").await?.unwrap();

    assert_eq!(record.aspects, 4);
    assert_eq!(record.emeralds, 128);
    assert_eq!(record.raids, 2);

    Ok(())
}

/// Tests fetching a member with no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = AspectCollection::new(db.clone()).find("nobody").await?;

    assert!(record.is_none());

    Ok(())
}

use super::*;

/// Tests the leaderboard orders members by aspect count.
///
/// Expected: Ok with highest count first, truncated to the limit
#[tokio::test]
async fn returns_highest_counts_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (uuid, aspects) in [("low", 1), ("high", 30), ("mid", 12), ("zero", 0)] {
        AspectFactory::new(db).uuid(uuid).aspects(aspects).build().await?;
    }

    let records = AspectCollection::new(db.clone()).top(3).await?;

    let uuids: Vec<&str> = records.iter().map(|r| r.uuid.as_str()).collect();
    assert_eq!(uuids, vec!["high", "mid", "low"]);

    Ok(())
}

/// Tests ties are broken by insertion order.
///
/// Expected: Ok with earlier member first
#[tokio::test]
async fn breaks_ties_by_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AspectFactory::new(db).uuid("first").aspects(5).build().await?;
    AspectFactory::new(db).uuid("second").aspects(5).build().await?;

    let records = AspectCollection::new(db.clone()).top(10).await?;

    assert_eq!(records[0].uuid, "first");
    assert_eq!(records[1].uuid, "second");

    Ok(())
}

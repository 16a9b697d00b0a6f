use super::*;

/// Tests adjusting a member seen for the first time.
///
/// Expected: Ok with a new record holding the delta and zeroed counters
#[tokio::test]
async fn creates_record_for_new_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = AspectCollection::new(db.clone())
        .add_aspects("member", 3)
        .await?;

    assert_eq!(record.uuid, "member");
    assert_eq!(record.aspects, 3);
    assert_eq!(record.emeralds, 0);
    assert_eq!(record.raids, 0);
    assert_eq!(entity::prelude::Aspect::find().count(db).await?, 1);

    Ok(())
}

/// Tests adjusting an existing member in both directions.
///
/// Expected: Ok with the count updated in place and other counters untouched
#[tokio::test]
async fn adjusts_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AspectFactory::new(db)
        .uuid("member")
        .aspects(10)
        .emeralds(64)
        .build()
        .await?;

    let collection = AspectCollection::new(db.clone());
    collection.add_aspects("member", 5).await?;
    let record = collection.add_aspects("member", -12).await?;

    assert_eq!(record.aspects, 3);
    assert_eq!(record.emeralds, 64);
    assert_eq!(entity::prelude::Aspect::find().count(db).await?, 1);

    Ok(())
}

use super::*;

/// Tests handing out aspects to new and existing members in one call.
///
/// Expected: Ok with each listed member one lower, new members created at -1
#[tokio::test]
async fn lowers_each_listed_member_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AspectFactory::new(db)
        .uuid("owed")
        .aspects(3)
        .raids(7)
        .build()
        .await?;

    let records = AspectCollection::new(db.clone())
        .give_aspects(&["owed".to_string(), "new".to_string()])
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].uuid, "owed");
    assert_eq!(records[0].aspects, 2);
    assert_eq!(records[0].raids, 7);
    assert_eq!(records[1].uuid, "new");
    assert_eq!(records[1].aspects, -1);
    assert_eq!(entity::prelude::Aspect::find().count(db).await?, 2);

    Ok(())
}

/// Tests a member listed twice receives two aspects.
///
/// Expected: Ok with the member lowered by two and a single record stored
#[tokio::test]
async fn counts_repeated_members_separately() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let collection = AspectCollection::new(db.clone());
    collection
        .give_aspects(&["member".to_string(), "member".to_string()])
        .await?;

    let record = collection.find("member").await?.unwrap();
    assert_eq!(record.aspects, -2);
    assert_eq!(entity::prelude::Aspect::find().count(db).await?, 1);

    Ok(())
}

/// Tests an empty list changes nothing.
///
/// Expected: Ok with no records
#[tokio::test]
async fn ignores_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let records = AspectCollection::new(db.clone()).give_aspects(&[]).await?;

    assert!(records.is_empty());
    assert_eq!(entity::prelude::Aspect::find().count(db).await?, 0);

    Ok(())
}

use super::*;

/// Tests counting entries added before a given entry.
///
/// Expected: Ok with the number of strictly earlier entries
#[tokio::test]
async fn counts_strictly_earlier_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut entries = Vec::new();
    for (offset, name) in ["First", "Second", "Third"].into_iter().enumerate() {
        let entry = TomeFactory::new(db)
            .username(name)
            .date_added(base_time() + Duration::hours(offset as i64))
            .build()
            .await?;
        entries.push(TomeEntry::from_entity(entry));
    }

    let collection = TomeCollection::new(db.clone());

    assert_eq!(collection.count_added_before(&entries[0]).await?, 0);
    assert_eq!(collection.count_added_before(&entries[2]).await?, 2);

    Ok(())
}

/// Tests entries sharing a timestamp are ordered by insertion, as in `list`.
///
/// Expected: Ok(0) for the first entry and Ok(1) for the second
#[tokio::test]
async fn breaks_timestamp_ties_by_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = TomeFactory::new(db).date_added(base_time()).build().await?;
    let second = TomeFactory::new(db).date_added(base_time()).build().await?;

    let collection = TomeCollection::new(db.clone());
    let listed = collection.list().await?;

    assert_eq!(listed[0].id, first.id);
    assert_eq!(
        collection
            .count_added_before(&TomeEntry::from_entity(first))
            .await?,
        0
    );
    assert_eq!(
        collection
            .count_added_before(&TomeEntry::from_entity(second))
            .await?,
        1
    );

    Ok(())
}

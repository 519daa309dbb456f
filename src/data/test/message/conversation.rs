use super::*;

/// Both directions of a thread come back, oldest first.
#[tokio::test]
async fn returns_both_directions_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let eve = factory::user::create_user(db).await?;

    let repo = MessageRepository::new(db);
    repo.create(alice.id, bob.id, "Hello".to_string()).await?;
    repo.create(bob.id, alice.id, "Hi back".to_string()).await?;
    repo.create(eve.id, alice.id, "Unrelated".to_string()).await?;

    let thread = repo.conversation(alice.id, bob.id).await?;

    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].content, "Hello");
    assert_eq!(thread[1].content, "Hi back");

    Ok(())
}

/// Opening a thread marks the peer's messages as read; unread counts
/// track what remains per sender.
#[tokio::test]
async fn mark_read_clears_unread_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let eve = factory::user::create_user(db).await?;

    let repo = MessageRepository::new(db);
    repo.create(bob.id, alice.id, "One".to_string()).await?;
    repo.create(bob.id, alice.id, "Two".to_string()).await?;
    repo.create(eve.id, alice.id, "Three".to_string()).await?;

    let counts = repo.unread_counts(alice.id).await?;
    assert_eq!(counts.get(&bob.id), Some(&2));
    assert_eq!(counts.get(&eve.id), Some(&1));

    repo.mark_read(alice.id, bob.id).await?;

    let counts = repo.unread_counts(alice.id).await?;
    assert!(counts.get(&bob.id).is_none());
    assert_eq!(counts.get(&eve.id), Some(&1));

    Ok(())
}

/// New messages start unread.
#[tokio::test]
async fn new_messages_are_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo.create(alice.id, bob.id, "Hello".to_string()).await?;

    assert!(!message.is_read);

    Ok(())
}

use anyhow::Context;
use hlavi_board::{
    BoardConfig, BoardSession, CardId, ColumnKind, DragTransfer, InsertPoint, MemoryStorage,
    Storage,
};

fn titles(session: &BoardSession<impl Storage>, column: ColumnKind) -> Vec<String> {
    session
        .cards_in(column)
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

async fn add(session: &mut BoardSession<impl Storage>, column: ColumnKind, title: &str) -> anyhow::Result<()> {
    session.open_composer(column);
    session.set_draft(column, title);
    anyhow::ensure!(session.submit_card(column).await?, "card {} was not added", title);
    Ok(())
}

fn id_of(session: &BoardSession<impl Storage>, title: &str) -> anyhow::Result<CardId> {
    session
        .state()
        .cards()
        .iter()
        .find(|c| c.title == title)
        .map(|c| c.id.clone())
        .with_context(|| format!("no card titled {}", title))
}

#[tokio::test]
async fn drag_between_columns_and_reorder() -> anyhow::Result<()> {
    let mut session = BoardSession::open(MemoryStorage::new(), BoardConfig::default()).await?;

    add(&mut session, ColumnKind::Todo, "Write README").await?;
    add(&mut session, ColumnKind::Todo, "Cut release").await?;
    add(&mut session, ColumnKind::Doing, "Fix login").await?;

    // Drag "Fix login" into Todo, aiming above the first card
    let fix = id_of(&session, "Fix login")?;
    let transfer = session.start_drag(fix.clone()).context("drag did not start")?;
    let boundaries = session
        .registry()
        .describe(ColumnKind::Todo, &[100.0, 160.0, 220.0]);
    let point = session.drag_over_column(ColumnKind::Todo, 120.0, &boundaries);
    assert_eq!(point, Some(InsertPoint::Before(id_of(&session, "Write README")?)));
    assert!(session.drop_on_column(ColumnKind::Todo, &transfer).await?);

    assert_eq!(titles(&session, ColumnKind::Todo), vec!["Fix login", "Write README", "Cut release"]);
    assert!(titles(&session, ColumnKind::Doing).is_empty());

    // Drag it back down to the end of Todo
    let transfer = session.start_drag(fix).context("drag did not start")?;
    let boundaries = session
        .registry()
        .describe(ColumnKind::Todo, &[100.0, 160.0, 220.0, 280.0]);
    let point = session.drag_over_column(ColumnKind::Todo, 900.0, &boundaries);
    assert_eq!(point, Some(InsertPoint::End));
    assert!(session.drop_on_column(ColumnKind::Todo, &transfer).await?);

    assert_eq!(titles(&session, ColumnKind::Todo), vec!["Write README", "Cut release", "Fix login"]);
    assert_eq!(session.state().len(), 3);
    Ok(())
}

#[tokio::test]
async fn drop_from_native_payload() -> anyhow::Result<()> {
    let mut session = BoardSession::open(MemoryStorage::new(), BoardConfig::default()).await?;
    add(&mut session, ColumnKind::Backlog, "Spike").await?;

    let id = id_of(&session, "Spike")?;
    session.start_drag(id.clone());
    let transfer = DragTransfer::from_data(id.as_str());

    assert!(session.drop_on_column(ColumnKind::Done, &transfer).await?);
    assert_eq!(titles(&session, ColumnKind::Done), vec!["Spike"]);

    // a payload naming nothing on the board is ignored
    let stale = DragTransfer::from_data("gone");
    assert!(!session.drop_on_column(ColumnKind::Todo, &stale).await?);
    assert!(!session.drop_on_delete_zone(&stale).await?);
    Ok(())
}

#[cfg(feature = "file-storage")]
#[tokio::test]
async fn board_survives_reopen() -> anyhow::Result<()> {
    use hlavi_board::FileStorage;

    let temp_dir = tempfile::TempDir::new()?;

    {
        let mut session =
            BoardSession::open(FileStorage::new(temp_dir.path()), BoardConfig::default()).await?;
        add(&mut session, ColumnKind::Todo, "Persist me").await?;
        add(&mut session, ColumnKind::Todo, "Delete me").await?;

        let doomed = id_of(&session, "Delete me")?;
        let transfer = session.start_drag(doomed).context("drag did not start")?;
        session.drag_over_delete_zone();
        assert!(session.drop_on_delete_zone(&transfer).await?);
    }

    let session =
        BoardSession::open(FileStorage::new(temp_dir.path()), BoardConfig::default()).await?;
    assert_eq!(titles(&session, ColumnKind::Todo), vec!["Persist me"]);

    // reopening and saving again leaves the stored bytes alone
    let before = session.storage().get("cards").await?.context("nothing stored")?;
    let mut gateway = hlavi_board::PersistenceGateway::new(FileStorage::new(temp_dir.path()), "cards");
    let board = gateway.load().await?;
    gateway.save(&board).await?;
    let after = session.storage().get("cards").await?.context("nothing stored")?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn malformed_store_starts_empty_and_recovers() -> anyhow::Result<()> {
    let storage = MemoryStorage::with_entry("cards", "{ definitely not cards");
    let mut session = BoardSession::open(storage, BoardConfig::default()).await?;

    assert!(session.state().is_empty());

    add(&mut session, ColumnKind::Doing, "Fresh start").await?;
    let stored = session.storage().get("cards").await?.context("nothing stored")?;
    assert!(stored.starts_with('['));
    Ok(())
}

#[cfg(feature = "file-storage")]
#[tokio::test]
async fn corrupt_bytes_on_disk_open_an_empty_board() -> anyhow::Result<()> {
    use hlavi_board::FileStorage;

    let temp_dir = tempfile::TempDir::new()?;
    let storage = FileStorage::new(temp_dir.path());
    tokio::fs::create_dir_all(storage.root_path()).await?;
    tokio::fs::write(storage.root_path().join("cards.json"), [0x5b, 0xff, 0xfe, 0x5d]).await?;

    let mut session = BoardSession::open(storage, BoardConfig::default()).await?;
    assert!(session.state().is_empty());

    add(&mut session, ColumnKind::Todo, "Rebuilt").await?;
    let stored = session.storage().get("cards").await?.context("nothing stored")?;
    assert!(stored.contains("Rebuilt"));
    Ok(())
}

use super::*;
use rustc_hash::FxHashSet;

fn id(s: &str) -> ItemId {
    ItemId::from(s)
}

fn seeded() -> FileSystemStore {
    FileSystemStore::new(FileSystemState::new(vec![
        Item::folder(
            "folder-1",
            "Docs",
            vec![
                Item::file("file-2", "a.txt", "alpha"),
                Item::folder("folder-3", "Inner", vec![Item::file("file-4", "deep.txt", "")]),
            ],
        ),
        Item::folder("folder-5", "Pictures", vec![]),
        Item::file("file-6", "notes.txt", ""),
    ]))
}

fn all_ids(store: &FileSystemStore) -> Vec<ItemId> {
    let mut ids = Vec::new();
    store.state().for_each_item(|item| ids.push(item.id.clone()));
    ids
}

fn assert_ids_unique(store: &FileSystemStore) {
    let ids = all_ids(store);
    let unique: FxHashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
    assert_eq!(store.len(), ids.len());
}

#[test]
fn create_at_root_appends() {
    let mut store = seeded();
    let item = store.create(ItemKind::Folder, "Music", &[]).unwrap();

    assert!(item.id.as_str().starts_with("folder-"));
    assert_eq!(item.children(), Some(&[][..]));
    assert_eq!(store.items().last(), Some(&item));
    assert!(store.contains(&item.id));
}

#[test]
fn create_file_has_empty_content() {
    let mut store = seeded();
    let item = store.create(ItemKind::File, "todo.txt", &[]).unwrap();

    assert!(item.id.as_str().starts_with("file-"));
    assert_eq!(item.content(), Some(""));
}

#[test]
fn create_with_single_segment_path_appends_to_that_folder() {
    let mut store = seeded();
    let item = store.create(ItemKind::File, "b.txt", &[id("folder-1")]).unwrap();

    let children = store.children_of(&id("folder-1")).unwrap();
    assert_eq!(children.last().map(|c| &c.id), Some(&item.id));
    assert_eq!(store.items().len(), 3);
}

#[test]
fn create_follows_nested_path() {
    let mut store = seeded();
    let item = store
        .create(ItemKind::Folder, "Deeper", &[id("folder-1"), id("folder-3")])
        .unwrap();

    let inner = store.children_of(&id("folder-3")).unwrap();
    assert!(inner.iter().any(|c| c.id == item.id));
}

#[test]
fn create_rejects_path_that_skips_levels() {
    let mut store = seeded();
    // folder-3 is not a root item, so it cannot start a path.
    let err = store
        .create(ItemKind::File, "x.txt", &[id("folder-3")])
        .unwrap_err();
    assert!(matches!(err, DesktopError::NotFound(ref missing) if missing == &id("folder-3")));
}

#[test]
fn create_in_reaches_any_depth() {
    let mut store = seeded();
    let item = store
        .create_in(ItemKind::File, "deeper.txt", Some(&id("folder-3")))
        .unwrap();
    assert_eq!(store.find(&item.id), Some(&item));
}

#[test]
fn create_inside_file_is_rejected() {
    let mut store = seeded();
    let err = store
        .create_in(ItemKind::File, "x", Some(&id("file-6")))
        .unwrap_err();
    assert!(matches!(err, DesktopError::NotAFolder(_)));

    let err = store
        .create(ItemKind::File, "x", &[id("file-6")])
        .unwrap_err();
    assert!(matches!(err, DesktopError::NotAFolder(_)));
}

#[test]
fn create_validates_names() {
    let mut store = seeded();
    assert!(matches!(
        store.create(ItemKind::Folder, "   ", &[]),
        Err(DesktopError::InvalidName)
    ));
    assert!(matches!(
        store.create(ItemKind::Folder, "Docs", &[]),
        Err(DesktopError::DuplicateName(_))
    ));
    // Same name in a different folder is fine.
    assert!(store.create(ItemKind::File, "notes.txt", &[id("folder-1")]).is_ok());

    let trimmed = store.create(ItemKind::Folder, "  Music ", &[]).unwrap();
    assert_eq!(trimmed.name, "Music");
}

#[test]
fn ids_stay_unique_under_rapid_creation() {
    let mut store = seeded();
    for i in 0..200 {
        let kind = if i % 2 == 0 { ItemKind::Folder } else { ItemKind::File };
        store.create(kind, &format!("item {i}"), &[]).unwrap();
    }
    assert_ids_unique(&store);
}

#[test]
fn generated_ids_skip_existing_ones() {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;
    // Pre-occupy the next few milliseconds' ids.
    let taken: Vec<Item> = (0..50)
        .map(|i| Item::folder(format!("folder-{}", now + i), format!("f{i}"), vec![]))
        .collect();
    let mut store = FileSystemStore::new(FileSystemState::new(taken));

    for i in 0..20 {
        store.create(ItemKind::Folder, &format!("new {i}"), &[]).unwrap();
    }
    assert_ids_unique(&store);
}

#[test]
fn rename_changes_only_target() {
    let mut store = seeded();
    let before = store.state().clone();
    assert!(store.rename(&id("file-4"), "renamed.txt").unwrap());

    assert_eq!(store.find(&id("file-4")).unwrap().name, "renamed.txt");

    let mut expected = before;
    expected.items[0].children_mut().unwrap()[1].children_mut().unwrap()[0].name =
        "renamed.txt".to_string();
    assert_eq!(store.state(), &expected);
}

#[test]
fn rename_errors() {
    let mut store = seeded();
    assert!(matches!(
        store.rename(&id("missing"), "x"),
        Err(DesktopError::NotFound(_))
    ));
    assert!(matches!(
        store.rename(&id("file-2"), ""),
        Err(DesktopError::InvalidName)
    ));
    assert!(matches!(
        store.rename(&id("file-2"), "Inner"),
        Err(DesktopError::DuplicateName(_))
    ));
    // Renaming to the current name is a no-op.
    let before = store.state().clone();
    assert!(!store.rename(&id("file-2"), "a.txt").unwrap());
    assert!(!store.rename(&id("file-2"), "  a.txt ").unwrap());
    assert_eq!(store.state(), &before);
}

#[test]
fn delete_removes_subtree_only() {
    let mut store = seeded();
    let removed = store.delete(&id("folder-3")).unwrap();

    assert_eq!(removed.name, "Inner");
    assert!(store.find(&id("folder-3")).is_none());
    assert!(store.find(&id("file-4")).is_none());
    assert!(!store.contains(&id("file-4")));

    let expected = FileSystemState::new(vec![
        Item::folder("folder-1", "Docs", vec![Item::file("file-2", "a.txt", "alpha")]),
        Item::folder("folder-5", "Pictures", vec![]),
        Item::file("file-6", "notes.txt", ""),
    ]);
    assert_eq!(store.state(), &expected);
    assert_ids_unique(&store);
}

#[test]
fn delete_missing_is_not_found() {
    let mut store = seeded();
    assert!(matches!(
        store.delete(&id("nope")),
        Err(DesktopError::NotFound(_))
    ));
    assert_eq!(store.items().len(), 3);
}

#[test]
fn delete_truncates_breadcrumb() {
    let mut store = seeded();
    store.navigate_to(&id("folder-1")).unwrap();
    store.navigate_to(&id("folder-3")).unwrap();
    assert_eq!(store.current_items()[0].id, id("file-4"));

    store.delete(&id("folder-3")).unwrap();
    assert_eq!(store.current_path(), &[id("folder-1")]);
}

#[test]
fn find_is_depth_first() {
    let store = seeded();
    assert_eq!(store.find(&id("file-4")).unwrap().name, "deep.txt");
    assert!(store.find(&id("absent")).is_none());
}

#[test]
fn navigation_walks_breadcrumb() {
    let mut store = seeded();
    assert_eq!(store.current_items().len(), 3);

    store.navigate_to(&id("folder-1")).unwrap();
    assert_eq!(store.current_items().len(), 2);

    assert!(matches!(
        store.navigate_to(&id("file-2")),
        Err(DesktopError::NotAFolder(_))
    ));
    assert!(matches!(
        store.navigate_to(&id("folder-5")),
        Err(DesktopError::NotFound(_))
    ));

    assert!(store.navigate_up());
    assert!(!store.navigate_up());
    assert_eq!(store.current_items().len(), 3);
}

#[test]
fn current_items_stops_at_unresolvable_segment() {
    let mut state = seeded().state().clone();
    state.current_path = vec![id("folder-1"), id("ghost"), id("folder-3")];
    let store = FileSystemStore::new(state);
    assert_eq!(store.current_items().len(), 2);
}

#[test]
fn write_content_targets_files_only() {
    let mut store = seeded();
    store.write_content(&id("file-2"), "beta").unwrap();
    assert_eq!(store.find(&id("file-2")).unwrap().content(), Some("beta"));

    assert!(matches!(
        store.write_content(&id("folder-1"), "x"),
        Err(DesktopError::NotAFile(_))
    ));
}

#[test]
fn mixed_operation_sequences_keep_ids_unique() {
    let mut store = seeded();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    for step in 0..300 {
        let ids = all_ids(&store);
        match next() % 4 {
            0 | 1 => {
                let folders: Vec<ItemId> = ids
                    .iter()
                    .filter(|i| store.find(i).is_some_and(Item::is_folder))
                    .cloned()
                    .collect();
                let parent = if folders.is_empty() || next() % 3 == 0 {
                    None
                } else {
                    Some(folders[(next() as usize) % folders.len()].clone())
                };
                let kind = if next() % 2 == 0 { ItemKind::Folder } else { ItemKind::File };
                let _ = store.create_in(kind, &format!("n{step}"), parent.as_ref());
            }
            2 if !ids.is_empty() => {
                let target = &ids[(next() as usize) % ids.len()];
                let _ = store.rename(target, &format!("r{step}"));
            }
            3 if !ids.is_empty() => {
                let target = ids[(next() as usize) % ids.len()].clone();
                store.delete(&target).unwrap();
                assert!(store.find(&target).is_none());
            }
            _ => {}
        }
        assert_ids_unique(&store);
    }
}

use super::*;
use crate::models::{FileSystemState, Point};

fn fs() -> FileSystemStore {
    FileSystemStore::new(FileSystemState::new(vec![
        Item::folder("folder-1", "Docs", vec![Item::file("file-2", "a.txt", "")]),
        Item::folder("folder-3", "Pictures", vec![]),
        Item::file("file-4", "notes.txt", ""),
    ]))
}

fn bounds() -> Bounds {
    Bounds::new(10, 10, 200, 100)
}

fn open(wm: &mut WindowManager, fs: &FileSystemStore, folder: &str) -> WindowId {
    let item = fs.find(&ItemId::from(folder)).unwrap();
    wm.open(item, bounds()).unwrap().id
}

fn assert_strict_top(wm: &WindowManager, id: &WindowId) {
    let top = wm.get(id).unwrap().z_index;
    for w in wm.windows() {
        if &w.id != id {
            assert!(w.z_index < top, "{} ({}) not below {} ({})", w.id, w.z_index, id, top);
        }
    }
    assert_eq!(top, wm.max_z_index());
}

#[test]
fn open_stacks_on_top_and_activates() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-3");

    assert_ne!(a, b);
    assert_eq!(wm.get(&a).unwrap().z_index, 1);
    assert_eq!(wm.get(&b).unwrap().z_index, 2);
    assert!(!wm.get(&b).unwrap().is_minimized);
    assert_eq!(wm.active(), Some(&b));
    assert_strict_top(&wm, &b);
}

#[test]
fn open_rejects_files() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let file = fs.find(&ItemId::from("file-4")).unwrap();
    assert!(matches!(
        wm.open(file, bounds()),
        Err(DesktopError::NotAFolder(_))
    ));
    assert!(wm.windows().is_empty());
}

#[test]
fn same_folder_can_open_twice() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-1");
    assert_ne!(a, b);
    assert_eq!(wm.windows().len(), 2);
}

#[test]
fn focus_raises_and_restores() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-3");
    let c = open(&mut wm, &fs, "folder-1");

    wm.minimize(&a);
    assert!(wm.focus(&a));
    assert!(!wm.get(&a).unwrap().is_minimized);
    assert_strict_top(&wm, &a);
    assert_eq!(wm.active(), Some(&a));

    // b and c keep their relative order.
    assert!(wm.get(&b).unwrap().z_index < wm.get(&c).unwrap().z_index);

    assert!(wm.focus(&b));
    assert!(wm.focus(&b));
    assert_strict_top(&wm, &b);
    assert!(!wm.focus(&WindowId::new("window-404")));
}

#[test]
fn minimize_toggles_only_the_target() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-3");

    assert!(wm.minimize(&b));
    assert!(wm.get(&b).unwrap().is_minimized);
    assert!(!wm.get(&a).unwrap().is_minimized);
    assert_eq!(wm.active(), Some(&a));

    assert!(wm.minimize(&b));
    assert!(!wm.get(&b).unwrap().is_minimized);
    assert!(!wm.minimize(&WindowId::new("window-404")));
}

#[test]
fn close_hands_activity_to_topmost_visible() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-3");
    let c = open(&mut wm, &fs, "folder-1");
    wm.minimize(&b);

    assert!(wm.close(&c));
    assert_eq!(wm.active(), Some(&a));
    assert!(!wm.close(&c));

    wm.close(&a);
    assert_eq!(wm.active(), None);
    assert_eq!(wm.windows().len(), 1);
}

#[test]
fn z_counter_never_reuses_values() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    wm.focus(&a);
    wm.close(&a);
    let b = open(&mut wm, &fs, "folder-3");
    assert_eq!(wm.get(&b).unwrap().z_index, 3);
}

#[test]
fn maximize_and_restore() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let viewport = Size::new(800, 600);

    assert!(wm.toggle_maximize(&a, viewport));
    let w = wm.get(&a).unwrap();
    assert!(w.is_maximized);
    assert_eq!(w.bounds, Bounds::new(0, 0, 800, 600));

    wm.fit_maximized(Size::new(1024, 768));
    assert_eq!(wm.get(&a).unwrap().bounds, Bounds::new(0, 0, 1024, 768));

    assert!(wm.toggle_maximize(&a, viewport));
    let w = wm.get(&a).unwrap();
    assert!(!w.is_maximized);
    assert_eq!(w.bounds, bounds());
}

#[test]
fn apply_geometry_reports_changes() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");

    assert!(wm.apply_geometry(&a, GeometryUpdate::Move(Point::new(-50, 900))));
    assert_eq!(wm.get(&a).unwrap().bounds, Bounds::new(-50, 900, 200, 100));
    assert!(!wm.apply_geometry(&a, GeometryUpdate::Move(Point::new(-50, 900))));

    let reshaped = Bounds::new(0, 0, 10, 10);
    assert!(wm.apply_geometry(&a, GeometryUpdate::Reshape(reshaped)));
    assert_eq!(wm.get(&a).unwrap().bounds, reshaped);
}

#[test]
fn titles_follow_renames_in_the_store() {
    let mut fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");

    fs.rename(&ItemId::from("folder-1"), "Papers").unwrap();
    assert_eq!(wm.title(&a, &fs).as_deref(), Some("Papers"));

    let bar = wm.taskbar(&fs);
    assert_eq!(bar.len(), 1);
    assert_eq!(bar[0].title, "Papers");
    assert!(bar[0].is_active);
}

#[test]
fn close_missing_drops_windows_of_deleted_folders() {
    let mut fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-3");

    fs.delete(&ItemId::from("folder-1")).unwrap();
    let closed = wm.close_missing(&fs);

    assert_eq!(closed, vec![a]);
    assert_eq!(wm.windows().len(), 1);
    assert_eq!(wm.active(), Some(&b));
}

#[test]
fn paint_order_skips_minimized_and_sorts_by_z() {
    let fs = fs();
    let mut wm = WindowManager::new();
    let a = open(&mut wm, &fs, "folder-1");
    let b = open(&mut wm, &fs, "folder-3");
    let c = open(&mut wm, &fs, "folder-1");
    wm.focus(&a);
    wm.minimize(&b);

    let order: Vec<&WindowId> = wm.paint_order().into_iter().map(|w| &w.id).collect();
    assert_eq!(order, vec![&c, &a]);
    assert_eq!(wm.topmost_visible().map(|w| &w.id), Some(&a));
}

use bookshelf_core::{
    open_shelf, BookForm, BookRepository, BookStorage, EventOutcome, ListRegion,
    MemoryKeyValueStore, ShelfController, ShelfEvent, StorageConfig, ViewMode,
};

fn memory_controller() -> (ShelfController, MemoryKeyValueStore) {
    let store = MemoryKeyValueStore::new();
    let repo = BookRepository::open(BookStorage::new(store.clone()));
    let mut controller = ShelfController::with_list_regions(repo);
    controller.initialize();
    (controller, store)
}

fn titles(region: &ListRegion) -> Vec<&str> {
    region.items().iter().map(|item| item.title.as_str()).collect()
}

fn seed(controller: &mut ShelfController) {
    for (title, done) in [("Bumi", false), ("Laut Bercerita", true), ("Bumi Manusia", true)] {
        let mut form = BookForm::new(title, "author", "2000", done);
        controller.submit_book(&mut form);
    }
}

#[test]
fn submit_book_creates_renders_and_resets_form() {
    let (mut controller, _) = memory_controller();
    let mut form = BookForm::new("Laskar Pelangi", "Andrea Hirata", "2005", false);

    let book = controller.submit_book(&mut form);

    assert_eq!(book.year, 2005);
    assert_eq!(form, BookForm::default());
    assert_eq!(titles(controller.incomplete()), vec!["Laskar Pelangi"]);
    assert!(controller.complete().is_empty());
    let item = &controller.incomplete().items()[0];
    assert_eq!(item.author_label, "Penulis: Andrea Hirata");
    assert_eq!(item.year_label, "Tahun: 2005");
    assert_eq!(item.toggle_label, "Selesai dibaca");
}

#[test]
fn submit_book_accepts_empty_title_and_unparsable_year() {
    let (mut controller, _) = memory_controller();
    let mut form = BookForm::new("", "", "unknown", true);

    let book = controller.submit_book(&mut form);

    assert_eq!(book.title, "");
    assert_eq!(book.year, 0);
    assert_eq!(controller.complete().len(), 1);
}

#[test]
fn search_renders_filtered_subset_without_touching_collection() {
    let (mut controller, _) = memory_controller();
    seed(&mut controller);

    let summary = controller.submit_search("BUMI");

    assert_eq!(summary.total(), 2);
    assert_eq!(titles(controller.incomplete()), vec!["Bumi"]);
    assert_eq!(titles(controller.complete()), vec!["Bumi Manusia"]);
    assert_eq!(controller.repository().len(), 3);
    assert_eq!(
        controller.view_mode(),
        &ViewMode::Filtered {
            query: "BUMI".to_string()
        }
    );
}

#[test]
fn toggle_after_search_renders_full_collection() {
    let (mut controller, _) = memory_controller();
    seed(&mut controller);
    controller.submit_search("manusia");
    let id = controller.complete().items()[0].book_id;

    assert_eq!(controller.click_toggle(id), Some(false));

    assert_eq!(controller.view_mode(), &ViewMode::All);
    assert_eq!(titles(controller.incomplete()), vec!["Bumi", "Bumi Manusia"]);
    assert_eq!(titles(controller.complete()), vec!["Laut Bercerita"]);
    assert_eq!(
        controller.incomplete().items()[1].toggle_label,
        "Selesai dibaca"
    );
}

#[test]
fn delete_removes_item_and_persists() {
    let (mut controller, store) = memory_controller();
    seed(&mut controller);
    let id = controller.incomplete().items()[0].book_id;

    assert_eq!(controller.click_delete(id), 1);

    assert!(controller.incomplete().is_empty());
    let reopened = BookRepository::open(BookStorage::new(store));
    assert!(reopened.find_by_id(id).is_none());
    assert_eq!(reopened.len(), 2);
}

#[test]
fn dispatch_routes_events_and_reports_summaries() {
    let (mut controller, _) = memory_controller();

    let form = BookForm::new("Bumi", "Tere Liye", "2014", false);
    let added = controller.dispatch(ShelfEvent::AddBook(form));
    let EventOutcome::Added { book, summary } = added else {
        panic!("expected Added outcome");
    };
    assert_eq!(summary.incomplete, 1);

    let toggled = controller.dispatch(ShelfEvent::ToggleComplete(book.id));
    assert_eq!(
        toggled,
        EventOutcome::Toggled {
            book_id: book.id,
            is_complete: Some(true),
            summary: controller.last_render(),
        }
    );
    assert_eq!(toggled.summary().complete, 1);

    let searched = controller.dispatch(ShelfEvent::Search("nothing".to_string()));
    assert_eq!(searched.summary().total(), 0);

    let deleted = controller.dispatch(ShelfEvent::Delete(book.id));
    assert!(matches!(deleted, EventOutcome::Deleted { removed: 1, .. }));
    assert_eq!(deleted.summary().total(), 0);
}

#[test]
fn unknown_ids_leave_view_rendered() {
    let (mut controller, _) = memory_controller();
    seed(&mut controller);

    assert_eq!(controller.click_toggle(12345), None);
    assert_eq!(controller.click_delete(12345), 0);
    assert_eq!(controller.last_render().total(), 3);
}

#[test]
fn open_shelf_renders_persisted_books() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::Sqlite(dir.path().join("shelf.sqlite3"));

    {
        let mut shelf = open_shelf(&config);
        seed(&mut shelf);
    }

    let shelf = open_shelf(&config);
    assert_eq!(shelf.last_render().incomplete, 1);
    assert_eq!(shelf.last_render().complete, 2);
    let (incomplete, complete) = shelf.into_regions();
    assert_eq!(titles(&incomplete), vec!["Bumi"]);
    assert_eq!(titles(&complete), vec!["Laut Bercerita", "Bumi Manusia"]);
}

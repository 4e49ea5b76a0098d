use restaurant_ledger::application::catalog::house_menu;
use restaurant_ledger::domain::menu::CategoryKind;
use restaurant_ledger::domain::ports::MenuStore;
use restaurant_ledger::infrastructure::json_file::JsonFileMenuStore;
use tempfile::tempdir;

#[test]
fn test_house_menu_survives_file_round_trip() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileMenuStore::new(dir.path().join("menu.json"));
    let menu = house_menu().unwrap();

    store.save(&menu).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, menu);
}

#[test]
fn test_loads_file_written_with_snake_case_details() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("menu.json");
    std::fs::write(
        &path,
        r#"[
    {"name": "Coke", "price": 2.5, "type": "Beverage", "details": {"size": "Large"}},
    {"name": "Spring Rolls", "price": 5.0, "type": "Appetizer", "details": {"portion_size": "Medium"}},
    {"name": "Tiramisu", "price": 7.0, "type": "Dessert", "details": {}},
    {"name": "Spaghetti", "price": 12, "type": "MainCourse", "details": {}}
]"#,
    )
    .unwrap();

    let items = JsonFileMenuStore::new(&path).load().unwrap();

    let kinds: Vec<CategoryKind> = items.iter().map(|item| item.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            CategoryKind::Beverage,
            CategoryKind::Appetizer,
            CategoryKind::MainCourse
        ]
    );
    assert_eq!(items[1].to_string(), "Spring Rolls - $5.00 (Medium)");
    assert_eq!(items[2].to_string(), "Spaghetti - $12.00");
}

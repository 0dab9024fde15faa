#[cfg(test)]
use crate::catalog::Catalog;

#[test]
fn category_ids_are_monotonic_and_never_reused() {
    let mut catalog = Catalog::new();
    let first = catalog.new_category("Beverages", "Drinks");
    let second = catalog.new_category("Snacks", "Salty and sweet");
    assert!(second > first);

    catalog.remove_category(second).unwrap();
    let third = catalog.new_category("Dairy", "Milk and cheese");
    assert!(third > second);
}

#[test]
fn product_ids_are_monotonic_and_never_reused() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    let first = catalog
        .new_product("Cola", "330ml can", 500, 10, beverages)
        .unwrap();
    let second = catalog
        .new_product("Water", "500ml bottle", 150, 30, beverages)
        .unwrap();
    assert!(second > first);

    catalog.remove_product(second);
    let third = catalog
        .new_product("Tonic", "200ml can", 420, 6, beverages)
        .unwrap();
    assert!(third > second);
}

#[test]
fn product_creation_requires_existing_category() {
    let mut catalog = Catalog::new();
    match catalog.new_product("Cola", "330ml can", 500, 10, 99) {
        Ok(_) => panic!("product created without a category"),
        Err(e) => assert_eq!(format!("{}", e), "Category not found"),
    }
    assert!(catalog.products.is_empty());
}

#[test]
fn referenced_category_cannot_be_removed() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    catalog
        .new_product("Cola", "330ml can", 500, 10, beverages)
        .unwrap();

    match catalog.remove_category(beverages) {
        Ok(_) => panic!("removed a category still referenced by a product"),
        Err(e) => assert_eq!(
            format!("{}", e),
            "Cannot remove category: there are products associated with it"
        ),
    }
    assert_eq!(catalog.categories.len(), 1);
}

#[test]
fn unreferenced_category_removal_shrinks_the_list() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    let snacks = catalog.new_category("Snacks", "Salty and sweet");

    catalog.remove_category(snacks).unwrap();
    assert_eq!(catalog.categories.len(), 1);
    assert!(catalog.categories.category(snacks).is_none());
    assert!(catalog.categories.category(beverages).is_some());
}

#[test]
fn product_update_touches_exactly_the_editable_fields() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    let id = catalog
        .new_product("Cola", "330ml can", 500, 10, beverages)
        .unwrap();
    let before = catalog.products.product(id).unwrap().clone();

    catalog
        .update_product(id, "Cola Zero", "330ml can, no sugar", 550, 8)
        .unwrap();
    let after = catalog.products.product(id).unwrap();

    assert_eq!(after.name, "Cola Zero");
    assert_eq!(after.description, "330ml can, no sugar");
    assert_eq!(after.price, 550);
    assert_eq!(after.quantity, 8);
    assert!(after.updated_at >= before.updated_at);
    assert_eq!(after.id, before.id);
    assert_eq!(after.category_id, before.category_id);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn updating_an_absent_product_reports_not_found() {
    let mut catalog = Catalog::new();
    match catalog.update_product(7, "Cola", "330ml can", 500, 10) {
        Ok(_) => panic!("updated a product that does not exist"),
        Err(e) => assert_eq!(format!("{}", e), "Product not found"),
    }
}

#[test]
fn category_update_keeps_creation_time() {
    let mut catalog = Catalog::new();
    let id = catalog.new_category("Beverages", "Drinks");
    let created_at = catalog.categories.category(id).unwrap().created_at;

    catalog.update_category(id, "Drinks", "Beverages of all kinds").unwrap();
    let category = catalog.categories.category(id).unwrap();
    assert_eq!(category.name, "Drinks");
    assert_eq!(category.description, "Beverages of all kinds");
    assert_eq!(category.created_at, created_at);
}

#[test]
fn beverages_and_cola_lifecycle() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    assert_eq!(beverages, 1);

    let cola = catalog
        .new_product("Cola", "330ml can", 500, 10, beverages)
        .unwrap();
    assert_eq!(cola, 1);

    assert!(catalog.remove_category(beverages).is_err());
    assert_eq!(catalog.categories.len(), 1);

    catalog.remove_product(cola);
    assert!(catalog.products.is_empty());

    catalog.remove_category(beverages).unwrap();
    assert!(catalog.categories.is_empty());
}

#[test]
fn category_find_is_case_insensitive() {
    let mut catalog = Catalog::new();
    let id = catalog.new_category("Beverages", "Drinks");

    let found = catalog.find_category("beverages").unwrap();
    assert_eq!(found.id, id);
}

#[test]
fn category_find_matches_id_before_later_names() {
    let mut catalog = Catalog::new();
    catalog.new_category("Beverages", "Drinks");
    catalog.new_category("1", "Oddly named");

    // "1" parses as an id, and the id match on the first record wins by
    // collection order.
    let found = catalog.find_category("1").unwrap();
    assert_eq!(found.name, "Beverages");
}

#[test]
fn product_search_matches_by_category_name_substring() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    let snacks = catalog.new_category("Snacks", "Salty and sweet");
    catalog
        .new_product("Cola", "330ml can", 500, 10, beverages)
        .unwrap();
    catalog
        .new_product("Peanuts", "200g bag", 320, 25, snacks)
        .unwrap();

    let results = catalog.search_products("bever");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Cola");

    let results = catalog.search_products("col");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Cola");

    assert!(catalog.search_products("missing").is_empty());
}

#[test]
fn non_numeric_search_term_never_matches_by_id() {
    let mut catalog = Catalog::new();
    let beverages = catalog.new_category("Beverages", "Drinks");
    catalog
        .new_product("Cola", "330ml can", 500, 10, beverages)
        .unwrap();

    assert!(catalog.search_products("nine").is_empty());
    assert!(catalog.find_category("nine").is_none());
}

#[test]
fn sample_catalog_is_consistent() {
    let catalog = Catalog::sample();
    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.products.len(), 3);
    for product in &catalog.products.products {
        assert!(catalog.categories.category(product.category_id).is_some());
    }
}

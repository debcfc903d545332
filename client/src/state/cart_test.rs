use super::*;
use crate::state::product::ProductDraft;
use crate::util::storage::MemoryStorage;

fn stores() -> (CatalogStore<MemoryStorage>, CartStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (CatalogStore::open(storage.clone()), CartStore::open(storage.clone()), storage)
}

fn stored_lines(storage: &MemoryStorage) -> Vec<CartLine> {
    load_json(storage, CART_KEY).expect("cart slot should be written")
}

#[test]
fn adding_same_id_twice_makes_one_line() {
    let (catalog, mut cart, storage) = stores();
    assert!(add_to_cart_by_id(&catalog, &mut cart, 1));
    assert!(add_to_cart_by_id(&catalog, &mut cart, 1));
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(stored_lines(&storage), cart.lines());
}

#[test]
fn add_snapshots_product_fields() {
    let (catalog, mut cart, _) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 2);
    let line = &cart.lines()[0];
    assert_eq!(line.id, 2);
    assert_eq!(line.name, "Office Laptop Slim");
    assert_eq!(line.price, 850.0);
    assert_eq!(line.image, "images/laptopImage2.png");
}

#[test]
fn add_unknown_id_leaves_cart_untouched() {
    let (catalog, mut cart, storage) = stores();
    assert!(!add_to_cart_by_id(&catalog, &mut cart, 42));
    assert!(cart.lines().is_empty());
    assert_eq!(storage.get_item(CART_KEY).unwrap(), None);
}

#[test]
fn item_count_sums_quantities() {
    let (catalog, mut cart, _) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    add_to_cart_by_id(&catalog, &mut cart, 2);
    add_to_cart_by_id(&catalog, &mut cart, 2);
    assert_eq!(cart.item_count(), 3);
}

#[test]
fn lines_survive_product_deletion() {
    let (mut catalog, mut cart, storage) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    catalog.delete(1);
    let reopened = CartStore::open(storage);
    assert_eq!(reopened.lines()[0].name, "Gaming Laptop Pro");
    assert_eq!(reopened.lines()[0].line_total(), 1200.0);
}

#[test]
fn snapshot_is_not_refreshed_by_catalog_edits() {
    let (mut catalog, mut cart, _) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    let edit = ProductDraft { name: "Gaming Laptop Max".to_owned(), price: "1500".to_owned(), ..ProductDraft::default() };
    catalog.update(1, &edit).unwrap();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    assert_eq!(cart.lines()[0].name, "Gaming Laptop Pro");
    assert_eq!(cart.lines()[0].quantity, 2);
}

#[test]
fn decrease_removes_line_at_one() {
    let (catalog, mut cart, _) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    cart.increase(1);
    cart.decrease(1);
    assert_eq!(cart.lines()[0].quantity, 1);
    cart.decrease(1);
    assert!(cart.lines().is_empty());
}

#[test]
fn quantity_changes_on_absent_ids_are_noops() {
    let (catalog, mut cart, _) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    cart.increase(9);
    cart.decrease(9);
    cart.remove(9);
    assert_eq!(cart.item_count(), 1);
}

#[test]
fn remove_and_clear_persist() {
    let (catalog, mut cart, storage) = stores();
    add_to_cart_by_id(&catalog, &mut cart, 1);
    add_to_cart_by_id(&catalog, &mut cart, 2);
    cart.remove(1);
    assert_eq!(stored_lines(&storage).len(), 1);
    cart.clear();
    assert!(stored_lines(&storage).is_empty());
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn line_total_multiplies_price_by_quantity() {
    let line = CartLine { id: 1, name: "Desk Lamp".to_owned(), price: 12.5, quantity: 3, image: String::new() };
    assert_eq!(line.line_total(), 37.5);
}

#[test]
fn quantities_saturate_at_max() {
    let raw = format!(
        r#"[{{"id":1,"name":"Bulk","price":1,"quantity":{max},"image":""}},{{"id":2,"name":"Single","price":1,"quantity":1,"image":""}}]"#,
        max = u32::MAX
    );
    let (catalog, _, _) = stores();
    let mut cart = CartStore::open(MemoryStorage::new().with_item(CART_KEY, &raw));
    assert_eq!(cart.item_count(), u32::MAX);
    cart.increase(1);
    add_to_cart_by_id(&catalog, &mut cart, 1);
    assert_eq!(cart.lines()[0].quantity, u32::MAX);
}

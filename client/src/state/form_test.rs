use super::*;
use crate::util::storage::MemoryStorage;

fn catalog() -> CatalogStore<MemoryStorage> {
    CatalogStore::open(MemoryStorage::new())
}

#[test]
fn form_starts_creating_with_add_label() {
    let form = ProductForm::default();
    assert_eq!(form.mode, FormMode::Creating);
    assert_eq!(form.submit_label(), "Add Product");
    assert_eq!(form.draft.rating, "5");
    assert!(!form.name_invalid);
}

#[test]
fn submit_in_creating_mode_appends_and_clears() {
    let mut catalog = catalog();
    let mut form = ProductForm::default();
    form.draft.name = "Desk Lamp".to_owned();
    form.draft.price = "20".to_owned();
    assert_eq!(form.submit(&mut catalog), Ok(SubmitOutcome::Added(3)));
    assert_eq!(form, ProductForm::default());
    assert_eq!(catalog.get(3).unwrap().price, 20.0);
}

#[test]
fn begin_edit_loads_product_and_switches_label() {
    let catalog = catalog();
    let mut form = ProductForm::default();
    form.begin_edit(catalog.get(2).unwrap());
    assert_eq!(form.mode, FormMode::Editing(2));
    assert_eq!(form.submit_label(), "Update Product");
    assert_eq!(form.draft.name, "Office Laptop Slim");
    assert_eq!(form.draft.price, "850");
    assert_eq!(form.draft.rating, "4");
}

#[test]
fn editing_another_product_discards_draft() {
    let catalog = catalog();
    let mut form = ProductForm::default();
    form.begin_edit(catalog.get(1).unwrap());
    form.draft.name = "Half typed".to_owned();
    form.begin_edit(catalog.get(2).unwrap());
    assert_eq!(form.mode, FormMode::Editing(2));
    assert_eq!(form.draft.name, "Office Laptop Slim");
}

#[test]
fn submit_in_editing_mode_updates_and_returns_to_creating() {
    let mut catalog = catalog();
    let mut form = ProductForm::default();
    form.begin_edit(catalog.get(1).unwrap());
    form.draft.stock = "3".to_owned();
    assert_eq!(form.submit(&mut catalog), Ok(SubmitOutcome::Updated(1)));
    assert_eq!(form.mode, FormMode::Creating);
    assert_eq!(catalog.get(1).unwrap().stock, 3);
    assert_eq!(catalog.products().len(), 2);
}

#[test]
fn submit_for_deleted_product_is_noop_and_resets() {
    let mut catalog = catalog();
    let mut form = ProductForm::default();
    form.begin_edit(catalog.get(2).unwrap());
    catalog.delete(2);
    assert_eq!(form.submit(&mut catalog), Ok(SubmitOutcome::Missing(2)));
    assert_eq!(form.mode, FormMode::Creating);
    assert_eq!(catalog.products().len(), 1);
}

#[test]
fn invalid_name_flags_field_and_keeps_state() {
    let mut catalog = catalog();
    let mut form = ProductForm::default();
    form.draft.name = "!!".to_owned();
    form.draft.price = "5".to_owned();
    assert!(form.submit(&mut catalog).is_err());
    assert!(form.name_invalid);
    assert_eq!(form.draft.price, "5");
    assert_eq!(catalog.products().len(), 2);
}

#[test]
fn invalid_name_while_editing_stays_in_editing() {
    let mut catalog = catalog();
    let mut form = ProductForm::default();
    form.begin_edit(catalog.get(1).unwrap());
    form.draft.name = "x".to_owned();
    assert!(form.submit(&mut catalog).is_err());
    assert_eq!(form.mode, FormMode::Editing(1));
    assert_eq!(catalog.get(1).unwrap().name, "Gaming Laptop Pro");
}

#[test]
fn clear_discards_edit_and_invalid_flag() {
    let catalog = catalog();
    let mut form = ProductForm::default();
    form.begin_edit(catalog.get(1).unwrap());
    form.name_invalid = true;
    form.clear();
    assert_eq!(form, ProductForm::default());
}

#[test]
fn exhausted_ids_do_not_flag_the_name() {
    let raw = format!(
        r#"[{{"id":{},"name":"Last One","price":1,"image":"","category":"Home","stock":1,"rating":1}}]"#,
        u32::MAX
    );
    let mut catalog = CatalogStore::open(MemoryStorage::new().with_item(crate::config::PRODUCTS_KEY, &raw));
    let mut form = ProductForm::default();
    form.draft.name = "Valid Name".to_owned();
    assert_eq!(form.submit(&mut catalog), Err(CatalogError::IdsExhausted));
    assert!(!form.name_invalid);
    assert_eq!(form.draft.name, "Valid Name");
}

use super::*;

#[test]
fn current_page_item_is_active() {
    assert_eq!(page_item_class(2, 2), "page-item active");
}

#[test]
fn other_page_items_are_plain() {
    assert_eq!(page_item_class(1, 2), "page-item");
    assert_eq!(page_item_class(3, 2), "page-item");
}

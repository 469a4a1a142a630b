use swipr_core::PriceLookup;
use swipr_engine::PriceTable;

#[test]
fn builtin_table_prices_the_sample_list() {
    let table = PriceTable::builtin().expect("builtin prices");
    assert_eq!(table.len(), 5);
    assert_eq!(table.price_cents("Honey"), Some(499));
    assert_eq!(table.price_cents("Soy Sauce"), Some(249));
    assert_eq!(table.price_cents("Eggs"), Some(399));
}

#[test]
fn unpriced_ingredients_return_none_not_zero() {
    let table = PriceTable::builtin().expect("builtin prices");
    // Part of the Mediterranean Bowl but deliberately not in the table.
    assert_eq!(table.price_cents("Feta Cheese"), None);
}

#[test]
fn tables_can_be_built_from_entries() {
    let table = PriceTable::from_entries([("Milk".to_string(), 299)]);
    assert!(!table.is_empty());
    assert_eq!(table.price_cents("Milk"), Some(299));
}

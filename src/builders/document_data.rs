//! `$document_data` root fragment: reading orders and their section lists
//! (§4.G).

use crate::content::{ContentModel, ReadingOrder};
use crate::fragment::Fragment;
use crate::value::{Struct, Value};

pub const FTYPE_DOCUMENT_DATA: u64 = 538;

const SYM_READING_ORDERS: u64 = 169;
const SYM_READING_ORDER_NAME: u64 = 178;
const SYM_SECTIONS: u64 = 170;
const SYM_DEFAULT_READING_ORDER: u64 = 351;

/// Builds `$document_data` from the content model's reading orders. Each
/// reading order's sections are carried as deferred symbol-by-name
/// references, resolved against the local table at finalization.
pub fn build_document_data(content: &ContentModel) -> Fragment {
    let orders: Vec<Value> = content
        .reading_orders
        .iter()
        .map(reading_order_to_value)
        .collect();
    let value = Struct::new().set(SYM_READING_ORDERS, Value::List(orders));
    Fragment::singleton(FTYPE_DOCUMENT_DATA, Value::Struct(value))
}

fn reading_order_to_value(order: &ReadingOrder) -> Value {
    let sections = order
        .sections
        .iter()
        .cloned()
        .map(Value::SymbolByName)
        .collect();
    let mut entry = Struct::new().set(SYM_SECTIONS, Value::List(sections));
    if order.name != "default" {
        entry = entry.set(SYM_READING_ORDER_NAME, Value::String(order.name.clone()));
    } else {
        entry = entry.set(SYM_READING_ORDER_NAME, Value::SymbolById(SYM_DEFAULT_READING_ORDER));
    }
    Value::Struct(entry)
}

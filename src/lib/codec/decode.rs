use serde_json::Value;

/// One entry of a record's descriptor table: the JSON key the value is
/// read from and the slot it lands in.
pub struct Field<'a> {
    pub name: &'static str,
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, slot: Slot<'a>) -> Self {
        Field { name, slot }
    }
}

/// Write location for one decoded field. Identifiers, counts and
/// timestamps all go through `Int` at 64-bit width so large chat and
/// user ids never overflow.
pub enum Slot<'a> {
    Int(&'a mut i64),
    Float(&'a mut f64),
    Flag(&'a mut bool),
    Text(&'a mut Option<String>),
    Record(&'a mut dyn RecordSlot),
    Many(&'a mut dyn ListSlot),
    Ints(&'a mut Vec<i64>),
}

/// A record type takes part in decoding by describing itself as a table
/// of named slots. New record types are added by writing a new table,
/// not by touching the walker.
pub trait Decode: Default {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

pub trait RecordSlot {
    fn fill_from(&mut self, value: &Value);
}

impl<T: Decode> RecordSlot for Option<Box<T>> {
    fn fill_from(&mut self, value: &Value) {
        let record = self.get_or_insert_with(Default::default);
        fill(record.as_mut(), value);
    }
}

pub trait ListSlot {
    fn push_from(&mut self, value: &Value);
}

impl<T: Decode> ListSlot for Vec<T> {
    fn push_from(&mut self, value: &Value) {
        let mut record = T::default();
        fill(&mut record, value);
        self.push(record);
    }
}

/// Decodes one JSON object into a fresh record.
pub fn decode<T: Decode>(value: &Value) -> T {
    let mut record = T::default();
    fill(&mut record, value);
    record
}

/// Walks the record's descriptor table over a JSON object and stores
/// every field whose key is present. An absent key leaves the slot at
/// its default, which is how all optional fields are modelled (the API
/// omits fields instead of sending null). A value of a kind the slot
/// does not expect is skipped, so fields this client does not model yet
/// pass through harmlessly.
pub fn fill(target: &mut impl Decode, value: &Value) {
    let object = match value.as_object() {
        Some(object) => object,
        None => return,
    };
    for field in target.fields() {
        if let Some(found) = object.get(field.name) {
            store(field.slot, found);
        }
    }
}

fn store(slot: Slot<'_>, value: &Value) {
    match (slot, value) {
        (_, Value::Null) => {}
        (Slot::Int(slot), Value::Number(number)) => {
            if let Some(number) = number.as_i64() {
                *slot = number;
            }
        }
        (Slot::Float(slot), Value::Number(number)) => {
            if let Some(number) = number.as_f64() {
                *slot = number;
            }
        }
        // The API only ever sends `true`; absence stands for false. An
        // explicit false still stores cleanly.
        (Slot::Flag(slot), Value::Bool(flag)) => *slot = *flag,
        (Slot::Text(slot), Value::String(text)) => *slot = Some(text.clone()),
        (Slot::Record(slot), Value::Object(_)) => slot.fill_from(value),
        (Slot::Many(slot), Value::Array(items)) => {
            for item in items {
                slot.push_from(item);
            }
        }
        (Slot::Ints(slot), Value::Array(items)) => {
            for item in items {
                if let Some(number) = item.as_i64() {
                    slot.push(number);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Inner {
        id: i64,
        label: Option<String>,
    }

    impl Decode for Inner {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("id", Slot::Int(&mut self.id)),
                Field::new("label", Slot::Text(&mut self.label)),
            ]
        }
    }

    #[derive(Default)]
    struct Outer {
        count: i64,
        ratio: f64,
        active: bool,
        name: Option<String>,
        child: Option<Box<Inner>>,
        items: Vec<Inner>,
        positions: Vec<i64>,
    }

    impl Decode for Outer {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("count", Slot::Int(&mut self.count)),
                Field::new("ratio", Slot::Float(&mut self.ratio)),
                Field::new("active", Slot::Flag(&mut self.active)),
                Field::new("name", Slot::Text(&mut self.name)),
                Field::new("child", Slot::Record(&mut self.child)),
                Field::new("items", Slot::Many(&mut self.items)),
                Field::new("positions", Slot::Ints(&mut self.positions)),
            ]
        }
    }

    #[test]
    fn fills_scalars_and_leaves_absent_fields_default() {
        let outer: Outer = decode(&json!({"count": 7, "name": "seven"}));
        assert_eq!(outer.count, 7);
        assert_eq!(outer.name.as_deref(), Some("seven"));
        assert_eq!(outer.ratio, 0.0);
        assert!(!outer.active);
        assert!(outer.child.is_none());
        assert!(outer.items.is_empty());
    }

    #[test]
    fn decodes_nested_record_and_list() {
        let outer: Outer = decode(&json!({
            "child": {"id": 1, "label": "a"},
            "items": [{"id": 2}, {"id": 3, "label": "c"}],
            "positions": [5, 8, 13],
        }));
        let child = outer.child.expect("child decoded");
        assert_eq!(child.id, 1);
        assert_eq!(child.label.as_deref(), Some("a"));
        assert_eq!(outer.items.len(), 2);
        assert_eq!(outer.items[1].id, 3);
        assert!(outer.items[0].label.is_none());
        assert_eq!(outer.positions, vec![5, 8, 13]);
    }

    #[test]
    fn explicit_false_and_null_do_not_panic() {
        let outer: Outer = decode(&json!({
            "active": false,
            "name": null,
            "child": null,
        }));
        assert!(!outer.active);
        assert!(outer.name.is_none());
        assert!(outer.child.is_none());
    }

    #[test]
    fn mismatched_shapes_are_skipped() {
        let outer: Outer = decode(&json!({
            "count": "not a number",
            "name": 13,
            "child": [1, 2],
            "items": {"id": 9},
        }));
        assert_eq!(outer.count, 0);
        assert!(outer.name.is_none());
        assert!(outer.child.is_none());
        assert!(outer.items.is_empty());
    }

    #[test]
    fn non_object_input_is_ignored() {
        let outer: Outer = decode(&json!([1, 2, 3]));
        assert_eq!(outer.count, 0);
    }

    #[test]
    fn true_flag_is_stored() {
        let outer: Outer = decode(&json!({"active": true}));
        assert!(outer.active);
    }
}

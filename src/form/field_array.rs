use serde_json::Value;

use super::Form;

/// List operations on one array-valued field of a [`Form`].
///
/// Obtained from [`Form::field_array`], which turns a missing or non-array
/// value into an empty list. Operations with an out-of-range index leave the
/// list and the dirty flag as they were; everything else marks the form
/// dirty.
#[derive(Debug)]
pub struct FieldArray<'a> {
    form: &'a mut Form,
    field: String,
}

impl<'a> FieldArray<'a> {
    pub(super) fn new(form: &'a mut Form, field: String) -> Self {
        if !form.values.get(&field).is_some_and(Value::is_array) {
            form.values.insert(field.clone(), Value::Array(Vec::new()));
        }
        Self { form, field }
    }

    pub fn fields(&self) -> &[Value] {
        self.form
            .values
            .get(&self.field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    fn apply(&mut self, op: impl FnOnce(&mut Vec<Value>) -> bool) {
        let mut items = match self.form.values.remove(&self.field) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        let changed = op(&mut items);
        self.form.values.insert(self.field.clone(), Value::Array(items));
        if changed {
            self.form.is_dirty = true;
        }
    }

    pub fn append(&mut self, value: Value) {
        self.apply(|items| {
            items.push(value);
            true
        });
    }

    pub fn prepend(&mut self, value: Value) {
        self.apply(|items| {
            items.insert(0, value);
            true
        });
    }

    /// Inserts before `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: Value) {
        self.apply(|items| {
            if index > items.len() {
                return false;
            }
            items.insert(index, value);
            true
        });
    }

    pub fn remove(&mut self, index: usize) {
        self.apply(|items| {
            if index >= items.len() {
                return false;
            }
            items.remove(index);
            true
        });
    }

    /// Moves the item at `from` so it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) {
        self.apply(|items| {
            if from >= items.len() || to >= items.len() {
                return false;
            }
            let item = items.remove(from);
            items.insert(to, item);
            true
        });
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.apply(|items| {
            if a >= items.len() || b >= items.len() {
                return false;
            }
            items.swap(a, b);
            true
        });
    }

    pub fn replace(&mut self, index: usize, value: Value) {
        self.apply(|items| match items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        });
    }

    pub fn clear(&mut self) {
        self.apply(|items| {
            items.clear();
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::form::{Form, Schema};

    fn form() -> Form {
        Form::new(Schema::new())
    }

    #[test]
    fn test_coerces_missing_and_non_array() {
        let mut form = form();
        assert!(form.field_array("tags").is_empty());
        assert_eq!(form.values().get("tags"), Some(&json!([])));

        form.set_field_value("tags", json!("oops"));
        assert!(form.field_array("tags").fields().is_empty());
    }

    #[test]
    fn test_append_prepend_insert() {
        let mut form = form();
        let mut tags = form.field_array("tags");
        tags.append(json!("b"));
        tags.prepend(json!("a"));
        tags.insert(2, json!("c"));
        tags.insert(9, json!("z"));
        assert_eq!(tags.fields(), &[json!("a"), json!("b"), json!("c")]);
        assert!(form.is_dirty());
    }

    #[test]
    fn test_move_swap_replace_remove() {
        let mut form = form();
        form.set_field_value("n", json!([1, 2, 3, 4]));
        let mut n = form.field_array("n");
        n.move_item(0, 3);
        assert_eq!(n.fields(), &[json!(2), json!(3), json!(4), json!(1)]);
        n.swap(0, 1);
        assert_eq!(n.fields(), &[json!(3), json!(2), json!(4), json!(1)]);
        n.replace(2, json!(40));
        n.remove(0);
        assert_eq!(n.fields(), &[json!(2), json!(40), json!(1)]);
        n.clear();
        assert!(n.is_empty());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut form = form();
        let mut tags = form.field_array("tags");
        tags.remove(0);
        tags.swap(0, 1);
        tags.move_item(0, 0);
        tags.replace(3, json!("x"));
        assert!(tags.is_empty());
        assert!(!form.is_dirty());
    }
}

use crate::error::SchemaError;
use crate::flatten::{flatten, FlatRecord};
use indexmap::IndexSet;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A rectangular, row-ordered record set with a stable column schema.
///
/// Serializes as a column → array-of-values mapping, which is the shape the
/// HTTP layer returns.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    columns: IndexSet<String>,
    rows: Vec<Vec<Value>>,
}

impl RecordSet {
    /// Builds a record set from one JSON object or an array of values.
    ///
    /// A lone object becomes a singleton list. Every element is flattened;
    /// the column schema is the union of keys in first-seen order; rows
    /// missing a column are null-filled; row order is preserved.
    pub fn assemble(data: &Value) -> Result<Self, SchemaError> {
        let records: Vec<FlatRecord> = match data {
            Value::Object(_) => vec![flatten(data)],
            Value::Array(elements) => elements.iter().map(flatten).collect(),
            Value::String(_) => return Err(SchemaError::UnsupportedShape("a string")),
            Value::Number(_) => return Err(SchemaError::UnsupportedShape("a number")),
            Value::Bool(_) => return Err(SchemaError::UnsupportedShape("a boolean")),
            Value::Null => return Err(SchemaError::UnsupportedShape("null")),
        };

        let mut columns = IndexSet::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|column| record.remove(column).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Iterates one column's values, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let index = self.columns.get_index_of(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    /// The first row's value for a column.
    pub fn first(&self, name: &str) -> Option<&Value> {
        let index = self.columns.get_index_of(name)?;
        self.rows.first().map(|row| &row[index])
    }

    /// Adds a column holding one value replicated across every row. An
    /// existing column with the same name is overwritten in place.
    pub fn push_broadcast(&mut self, name: &str, value: Value) {
        if let Some(index) = self.columns.get_index_of(name) {
            for row in &mut self.rows {
                row[index] = value.clone();
            }
        } else {
            self.columns.insert(name.to_string());
            for row in &mut self.rows {
                row.push(value.clone());
            }
        }
    }

    /// Reorders columns so `leading` come first, in the given order; the
    /// remaining columns keep their prior relative order.
    pub fn lead_with(&mut self, leading: &[&str]) {
        let mut order: Vec<usize> = leading
            .iter()
            .filter_map(|name| self.columns.get_index_of(*name))
            .collect();
        for index in 0..self.columns.len() {
            if !order.contains(&index) {
                order.push(index);
            }
        }

        self.columns = order.iter().map(|&i| self.columns[i].clone()).collect();
        for row in &mut self.rows {
            *row = order.iter().map(|&i| row[i].clone()).collect();
        }
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (index, column) in self.columns.iter().enumerate() {
            let values: Vec<&Value> = self.rows.iter().map(|row| &row[index]).collect();
            map.serialize_entry(column, &values)?;
        }
        map.end()
    }
}

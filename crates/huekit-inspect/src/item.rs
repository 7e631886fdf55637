//! Property items collected from an inspectable object.
//!
//! [`Inspectable`] is the seam between a host object and the panel: the
//! object lists its fields and answers get/set by name, and this module
//! turns that into the sorted, grouped, filterable item list a panel
//! renders. Writes go through [`coerce_value`], which clamps numbers into
//! the declared range and validates choices before they reach the object.

use huekit_core::Color;
use thiserror::Error;

use crate::descriptor::{FieldDescriptor, Value, ValueKind};

/// Group name for fields that declare none.
pub const DEFAULT_GROUP: &str = "General";

/// An object whose fields can be listed and edited by name.
pub trait Inspectable {
    /// Descriptors for every field the object wants to expose.
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Current value of a field, or `None` for unknown names.
    fn get(&self, name: &str) -> Option<Value>;

    /// Store a new value. Callers coerce first; implementations may assume
    /// the value kind matches the descriptor.
    fn set(&mut self, name: &str, value: Value) -> Result<(), InspectError>;
}

/// Errors for property access and coercion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InspectError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field {0} is read-only")]
    ReadOnly(String),
    #[error("field {field} expects {expected:?}, got {actual:?}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("{value:?} is not one of the choices for field {field}")]
    InvalidChoice { field: String, value: String },
}

/// One row of the panel: a field's metadata plus its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyItem {
    pub descriptor: FieldDescriptor,
    pub value: Value,
}

/// A named run of items under one group header.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyGroup {
    pub name: String,
    pub items: Vec<PropertyItem>,
}

/// Collect the visible fields of an object as panel items, sorted by order
/// then name.
pub fn collect_items(source: &dyn Inspectable) -> Vec<PropertyItem> {
    let mut items: Vec<PropertyItem> = source
        .fields()
        .into_iter()
        .filter(|descriptor| descriptor.visible)
        .filter_map(|descriptor| match source.get(&descriptor.name) {
            Some(value) => Some(PropertyItem { descriptor, value }),
            None => {
                log::warn!("declared field {:?} has no value, skipping", descriptor.name);
                None
            }
        })
        .collect();

    items.sort_by(|a, b| {
        a.descriptor
            .order
            .cmp(&b.descriptor.order)
            .then_with(|| a.descriptor.name.cmp(&b.descriptor.name))
    });
    items
}

/// Group items by group name, preserving item order; groups appear in
/// first-use order and ungrouped fields fall into [`DEFAULT_GROUP`].
pub fn group_items(items: Vec<PropertyItem>) -> Vec<PropertyGroup> {
    let mut groups: Vec<PropertyGroup> = Vec::new();
    for item in items {
        let name = item
            .descriptor
            .group
            .clone()
            .unwrap_or_else(|| DEFAULT_GROUP.to_string());
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.items.push(item),
            None => groups.push(PropertyGroup {
                name,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Keep the items whose display name contains `query`, case-insensitively.
/// A blank query keeps everything.
pub fn filter_items(items: &[PropertyItem], query: &str) -> Vec<PropertyItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.descriptor.display_name().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Validate and convert a proposed value against a field's descriptor.
///
/// Numbers convert between int and float and clamp into `[min, max]`;
/// choice fields accept matching text; color fields accept a hex string;
/// text fields accept anything by formatting it. Read-only fields reject
/// every write.
pub fn coerce_value(descriptor: &FieldDescriptor, value: Value) -> Result<Value, InspectError> {
    if descriptor.read_only {
        return Err(InspectError::ReadOnly(descriptor.name.clone()));
    }

    let mismatch = |actual: ValueKind| InspectError::TypeMismatch {
        field: descriptor.name.clone(),
        expected: descriptor.kind,
        actual,
    };

    match descriptor.kind {
        ValueKind::Text => Ok(Value::Text(match value {
            Value::Text(text) => text,
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Color(color) => color.to_hex(true),
            Value::Choice(choice) => choice,
        })),
        ValueKind::Bool => match value {
            Value::Bool(b) => Ok(Value::Bool(b)),
            other => Err(mismatch(other.kind())),
        },
        ValueKind::Int => match value {
            Value::Int(i) => Ok(Value::Int(clamp_i64(i, descriptor))),
            Value::Float(f) => Ok(Value::Int(clamp_i64(f.round() as i64, descriptor))),
            other => Err(mismatch(other.kind())),
        },
        ValueKind::Float => match value {
            Value::Float(f) => Ok(Value::Float(f.clamp(descriptor.min, descriptor.max))),
            Value::Int(i) => Ok(Value::Float((i as f64).clamp(descriptor.min, descriptor.max))),
            other => Err(mismatch(other.kind())),
        },
        ValueKind::Color => match value {
            Value::Color(color) => Ok(Value::Color(color)),
            // A hex string typed into the editor's text field.
            Value::Text(text) => Color::from_hex(&text)
                .map(Value::Color)
                .map_err(|_| mismatch(ValueKind::Text)),
            other => Err(mismatch(other.kind())),
        },
        ValueKind::Choice => match value {
            Value::Choice(choice) | Value::Text(choice) => {
                if descriptor.choices.iter().any(|c| c == &choice) {
                    Ok(Value::Choice(choice))
                } else {
                    Err(InspectError::InvalidChoice {
                        field: descriptor.name.clone(),
                        value: choice,
                    })
                }
            }
            other => Err(mismatch(other.kind())),
        },
    }
}

fn clamp_i64(value: i64, descriptor: &FieldDescriptor) -> i64 {
    (value as f64).clamp(descriptor.min, descriptor.max) as i64
}

/// Coerce a value against the descriptor and write it to the object.
/// Returns the value actually stored.
pub fn apply_value(
    source: &mut dyn Inspectable,
    descriptor: &FieldDescriptor,
    value: Value,
) -> Result<Value, InspectError> {
    let coerced = coerce_value(descriptor, value)?;
    source.set(&descriptor.name, coerced.clone())?;
    Ok(coerced)
}

//! Field descriptors and tagged runtime values.
//!
//! A [`FieldDescriptor`] is the metadata an object publishes for one of its
//! editable fields; a [`Value`] is the field's current content. Together
//! they are everything the panel needs to build an editor row without
//! knowing the object's concrete type.

use huekit_core::Color;
use serde::{Deserialize, Serialize};

use crate::registry::EditorKind;

/// A field's current content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Color(Color),
    /// One entry out of the descriptor's choice list.
    Choice(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Color(_) => ValueKind::Color,
            Value::Choice(_) => ValueKind::Choice,
        }
    }

    /// Numeric content as f64, for either integer or float values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Type tag for a field, driving coercion and default editor choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Bool,
    Int,
    Float,
    Color,
    Choice,
}

/// Metadata for one editable field of an inspected object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: ValueKind,
    /// Label shown in the panel; falls back to `name` when absent.
    pub display_name: Option<String>,
    /// Tooltip text.
    pub description: Option<String>,
    /// Group header; ungrouped fields land in the default group.
    pub group: Option<String>,
    /// Sort key; lower comes first, ties break on `name`.
    pub order: i32,
    pub read_only: bool,
    pub visible: bool,
    /// Explicit editor override; `Auto` defers to the value kind.
    pub editor: EditorKind,
    /// Numeric range for slider/number editors.
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Allowed entries for `Choice` fields.
    pub choices: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            display_name: None,
            description: None,
            group: None,
            order: 0,
            read_only: false,
            visible: true,
            editor: EditorKind::Auto,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            choices: Vec::new(),
        }
    }

    /// The label to render: the display name, or the field name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether the numeric range was customized away from the 0..100
    /// default; range-customized numbers get a slider.
    pub fn has_custom_range(&self) -> bool {
        self.min != 0.0 || self.max != 100.0
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_editor(mut self, editor: EditorKind) -> Self {
        self.editor = editor;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

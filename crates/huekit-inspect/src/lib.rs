//! HueKit property inspection.
//!
//! The data-driven half of a property panel: objects describe their editable
//! fields through [`Inspectable`], and the panel turns those descriptions
//! into sorted, grouped, filterable items and resolves which editor widget
//! each one gets. Building the actual widgets stays in the host toolkit;
//! this crate only decides *what* to build.

pub mod descriptor;
pub mod item;
pub mod registry;

pub use descriptor::{FieldDescriptor, Value, ValueKind};
pub use item::{
    DEFAULT_GROUP, InspectError, Inspectable, PropertyGroup, PropertyItem, apply_value,
    coerce_value, collect_items, filter_items, group_items,
};
pub use registry::{EditorKind, EditorRegistry, resolve_editor};

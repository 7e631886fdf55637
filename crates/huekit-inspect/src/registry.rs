//! Editor-kind resolution and the host factory registry.
//!
//! Resolution is a fixed three-step order: an explicit kind on the
//! descriptor wins, otherwise the value kind picks a default, otherwise the
//! text editor catches everything. The registry itself is generic over the
//! host's editor type, so toolkits plug in whatever their widgets are.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{FieldDescriptor, ValueKind};
use crate::item::PropertyItem;

/// The editor widget kind a field resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditorKind {
    /// Resolve from the field's value kind.
    #[default]
    Auto,
    TextBox,
    /// Free-form numeric entry; the default for unconstrained numbers.
    NumberBox,
    /// Masked text entry. Never chosen automatically.
    Password,
    CheckBox,
    ComboBox,
    Slider,
    ColorPicker,
    /// A host-registered editor looked up by name.
    Custom(String),
}

/// Resolve which editor a field gets.
///
/// An explicit non-`Auto` kind on the descriptor is honored as-is. `Auto`
/// falls back to the value kind: text→TextBox, bool→CheckBox,
/// choice→ComboBox, color→ColorPicker; numbers get a Slider when the
/// descriptor declares a range and a NumberBox otherwise.
pub fn resolve_editor(descriptor: &FieldDescriptor) -> EditorKind {
    if descriptor.editor != EditorKind::Auto {
        return descriptor.editor.clone();
    }

    match descriptor.kind {
        ValueKind::Text => EditorKind::TextBox,
        ValueKind::Bool => EditorKind::CheckBox,
        ValueKind::Choice => EditorKind::ComboBox,
        ValueKind::Color => EditorKind::ColorPicker,
        ValueKind::Int | ValueKind::Float => {
            if descriptor.has_custom_range() {
                EditorKind::Slider
            } else {
                EditorKind::NumberBox
            }
        }
    }
}

type EditorFactory<E> = Box<dyn Fn(&PropertyItem) -> E>;

/// Maps editor kinds to the host's widget factories.
///
/// Hosts register one factory per kind they support; [`create`] resolves an
/// item's kind and builds the editor, falling back to the text factory when
/// the resolved kind has none registered.
///
/// [`create`]: EditorRegistry::create
pub struct EditorRegistry<E> {
    factories: HashMap<EditorKind, EditorFactory<E>>,
}

impl<E> Default for EditorRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EditorRegistry<E> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register the factory for an editor kind, replacing any previous one.
    pub fn register(
        &mut self,
        kind: EditorKind,
        factory: impl Fn(&PropertyItem) -> E + 'static,
    ) -> &mut Self {
        self.factories.insert(kind, Box::new(factory));
        self
    }

    pub fn supports(&self, kind: &EditorKind) -> bool {
        self.factories.contains_key(kind)
    }

    /// Build the editor for an item.
    ///
    /// Returns `None` only when neither the resolved kind nor the TextBox
    /// fallback has a factory.
    pub fn create(&self, item: &PropertyItem) -> Option<E> {
        let kind = resolve_editor(&item.descriptor);
        if let Some(factory) = self.factories.get(&kind) {
            return Some(factory(item));
        }

        if kind != EditorKind::TextBox {
            log::warn!(
                "no editor factory registered for {:?} (field {:?}), falling back to text",
                kind,
                item.descriptor.name
            );
            if let Some(fallback) = self.factories.get(&EditorKind::TextBox) {
                return Some(fallback(item));
            }
        }
        None
    }
}

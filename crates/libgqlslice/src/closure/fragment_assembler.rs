use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
enum FragmentSlot {
    Deferred,
    Rendered(String),
}

/// Ordered, per-type-name deduplicated collection of output fragments.
///
/// A slot's position is fixed the first time its type name is seen, and
/// every later attempt to add the same name is dropped. Slots may either be
/// rendered immediately or deferred until [`finish_with()`] so that their
/// content reflects everything accumulated during the walk.
///
/// [`finish_with()`]: FragmentAssembler::finish_with
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentAssembler {
    slots: IndexMap<String, FragmentSlot>,
}
impl FragmentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.slots.contains_key(type_name)
    }

    /// Reserve the next position for `type_name`; its text is produced later
    /// by the renderer handed to [`finish_with()`](Self::finish_with).
    /// Returns `false` if the name already has a slot.
    pub fn defer(&mut self, type_name: &str) -> bool {
        if self.slots.contains_key(type_name) {
            return false;
        }
        self.slots.insert(type_name.to_string(), FragmentSlot::Deferred);
        true
    }

    /// Emit all fragments in slot order. Deferred slots are dropped.
    pub fn finish(self) -> Vec<String> {
        self.finish_with(|_| None)
    }

    /// Emit all fragments in slot order, asking `render` for the text of each
    /// deferred slot. A deferred slot `render` returns `None` for is dropped.
    pub fn finish_with<F>(self, mut render: F) -> Vec<String>
    where
        F: FnMut(&str) -> Option<String>,
    {
        self.slots.into_iter()
            .filter_map(|(type_name, slot)| match slot {
                FragmentSlot::Deferred => render(type_name.as_str()),
                FragmentSlot::Rendered(fragment) => Some(fragment),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Append an already-rendered fragment for `type_name`. Returns `false`
    /// (and drops `fragment`) if the name already has a slot.
    pub fn push(&mut self, type_name: &str, fragment: String) -> bool {
        if self.slots.contains_key(type_name) {
            return false;
        }
        self.slots.insert(type_name.to_string(), FragmentSlot::Rendered(fragment));
        true
    }
}

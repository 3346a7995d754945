//! Rotating example searches shown in the empty search field.

/// The search input: what the user typed and the hint shown when it is empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SearchField {
    pub(crate) value: String,
    pub(crate) placeholder: String,
}

impl SearchField {
    /// Text to show for the field: the typed value, or the hint when empty.
    pub(crate) fn display(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}

/// Cycles through a fixed list of phrases, one step per tick.
#[derive(Debug, Clone)]
pub(crate) struct PlaceholderCycle {
    phrases: &'static [&'static str],
    index: usize,
}

impl PlaceholderCycle {
    pub(crate) fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases, index: 0 }
    }

    pub(crate) fn current(&self) -> Option<&'static str> {
        self.phrases.get(self.index).copied()
    }

    /// Sets the current phrase as the field's placeholder. Never touches `value`.
    pub(crate) fn apply(&self, field: &mut SearchField) {
        if let Some(phrase) = self.current() {
            phrase.clone_into(&mut field.placeholder);
        }
    }

    /// Advances to the next phrase, wrapping at the end, and applies it.
    pub(crate) fn tick(&mut self, field: &mut SearchField) {
        if self.phrases.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.phrases.len();
        self.apply(field);
    }
}

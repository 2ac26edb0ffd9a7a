//! Ordered content items with a selection cursor.

/// Enabled state of the previous/next navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub previous: bool,
    pub next: bool,
}

/// Ordered sequence of decoded content images plus the index of the one
/// currently shown.
///
/// The index is always valid, or the collection is empty.
#[derive(Debug, Clone)]
pub struct ContentCollection<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Default for ContentCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
        }
    }
}

impl<T> ContentCollection<T> {
    /// Create a collection with the first item selected.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the selected item, `None` when empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current)
    }

    /// The selected item, `None` when empty.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Select `index`. Returns `true` if the selection changed; out of range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    /// Move to the next item. Returns `false` at the end.
    pub fn select_next(&mut self) -> bool {
        self.select(self.current + 1)
    }

    /// Move to the previous item. Returns `false` at the start.
    pub fn select_previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Which navigation controls should be enabled.
    pub fn navigation(&self) -> NavigationState {
        if self.items.is_empty() {
            return NavigationState::default();
        }
        NavigationState {
            previous: self.current > 0,
            next: self.current + 1 < self.items.len(),
        }
    }

    /// Human-readable position, e.g. `Photo 2 of 5`. Empty when there are no
    /// items.
    pub fn counter_label(&self) -> String {
        counter_label(self.current_index(), self.items.len())
    }
}

/// Counter text for a 0-based position, e.g. `Photo 2 of 5`; empty with no
/// items.
pub fn counter_label(index: Option<usize>, len: usize) -> String {
    match index {
        Some(index) if len > 0 => format!("Photo {} of {}", index + 1, len),
        _ => String::new(),
    }
}

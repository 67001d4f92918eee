//! Generic selection state: a list of options, the selected one, and an
//! optional callback fired when the selection changes.

use std::fmt;

pub struct SelectableList<T> {
    options: Vec<T>,
    selected: usize,
    on_select: Option<Box<dyn FnMut(&T)>>,
}

impl<T> SelectableList<T> {
    /// Build a list with the first option selected. Returns `None` when
    /// `options` is empty.
    pub fn new(options: Vec<T>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            selected: 0,
            on_select: None,
        })
    }

    /// Build a list that is never empty, with `first` selected.
    pub fn from_first(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut options = vec![first];
        options.extend(rest);
        Self {
            options,
            selected: 0,
            on_select: None,
        }
    }

    pub fn with_on_select(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected(&self) -> &T {
        &self.options[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select by position. Out-of-range positions are ignored and return
    /// `false`. The callback only fires when the selection actually changes.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        if index != self.selected {
            self.selected = index;
            if let Some(cb) = self.on_select.as_mut() {
                cb(&self.options[index]);
            }
        }
        true
    }

    /// Select the first option matching `pred`.
    pub fn select_where(&mut self, pred: impl Fn(&T) -> bool) -> bool {
        match self.options.iter().position(pred) {
            Some(i) => self.select(i),
            None => false,
        }
    }

    pub fn into_selected(mut self) -> T {
        self.options.swap_remove(self.selected)
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableList")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_selection.rs"]
mod tests;

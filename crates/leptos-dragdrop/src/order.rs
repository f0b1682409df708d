//! Ordered sequence model behind drag-to-reorder lists.
//!
//! Everything here is plain data: no DOM, no signals. The Leptos wiring in
//! the crate root feeds pointer coordinates in and reads the order back out.

use std::cmp::Ordering;
use std::fmt;

/// Where the dragged item lands relative to the hovered target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// CSS modifier used for the insertion indicator
    pub fn class(&self) -> &'static str {
        match self {
            DropPosition::Before => "drop-before",
            DropPosition::After => "drop-after",
        }
    }
}

/// Placement heuristic: above the vertical midpoint of the target means before.
pub fn compute_drop_position(target_top: f64, target_height: f64, pointer_y: f64) -> DropPosition {
    if pointer_y < target_top + target_height / 2.0 {
        DropPosition::Before
    } else {
        DropPosition::After
    }
}

/// Anything with a stable integer identity can live in an [`OrderedList`]
pub trait Keyed {
    fn key(&self) -> u32;
}

/// Ordered sequence of uniquely keyed items.
///
/// Position is implicit: the index in the sequence. Ids never repeat.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> OrderedList<T> {
    /// Build from server order. Later duplicates of an id are dropped.
    pub fn new(items: Vec<T>) -> Self {
        let mut list = Self::default();
        for item in items {
            list.push(item);
        }
        list
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(Keyed::key).collect()
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.key() == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Append at the end. Returns false (and keeps the list) if the id exists.
    pub fn push(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.index_of(id)?;
        Some(self.items.remove(index))
    }

    /// Stable reorder by a comparator. Items are only permuted, never added or lost.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.items.sort_by(compare);
    }

    /// Move `dragged` directly before or after `target`.
    ///
    /// Returns true if the sequence changed. Dropping an item on itself, or
    /// naming an id that is not in the list, is a no-op.
    pub fn commit_drop(&mut self, dragged: u32, target: u32, position: DropPosition) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(_)) = (self.index_of(dragged), self.index_of(target)) else {
            return false;
        };
        let previous = self.ids();
        let item = self.items.remove(from);
        // target index shifts once the dragged item is out
        let Some(target_index) = self.index_of(target) else {
            self.items.insert(from, item);
            return false;
        };
        let insert_at = match position {
            DropPosition::Before => target_index,
            DropPosition::After => target_index + 1,
        };
        self.items.insert(insert_at, item);
        self.ids() != previous
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Rejected drag start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragError {
    AlreadyDragging(u32),
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::AlreadyDragging(id) => write!(f, "Drag already in progress for item {}", id),
        }
    }
}

impl std::error::Error for DragError {}

/// Single active drag at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    dragging: Option<u32>,
}

impl DragSession {
    pub fn begin(&mut self, id: u32) -> Result<(), DragError> {
        match self.dragging {
            Some(active) => Err(DragError::AlreadyDragging(active)),
            None => {
                self.dragging = Some(id);
                Ok(())
            }
        }
    }

    pub fn current(&self) -> Option<u32> {
        self.dragging
    }

    pub fn is_active(&self) -> bool {
        self.dragging.is_some()
    }

    /// Finish the drag, handing back the item that was being dragged
    pub fn end(&mut self) -> Option<u32> {
        self.dragging.take()
    }
}

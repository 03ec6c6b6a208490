// ABOUTME: Ordered store of column records.
// ABOUTME: Insertion order is visual order; ids are container-scoped.

use colonnade_core::Point;

use crate::column::{Column, ColumnId, Pane};

/// Visual overlay state interpolated by animations. Never affects store
/// order or the laid-out frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VisualState {
    pub translation: Point,
    pub scale: f32,
    pub alpha: f32,
}

impl VisualState {
    pub fn resting() -> Self {
        Self {
            translation: Point::ZERO,
            scale: 1.0,
            alpha: 1.0,
        }
    }
}

pub(crate) struct ColumnRecord {
    pub column: Column,
    pub pane: Box<dyn Pane>,
    pub visual: VisualState,
}

/// Ordered sequence of columns plus the container-scoped id allocator
pub struct ColumnStore {
    records: Vec<ColumnRecord>,
    next_id: u64,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
        }
    }

    pub fn allocate_id(&mut self) -> ColumnId {
        let id = ColumnId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: ColumnId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: ColumnId) -> Option<usize> {
        self.records.iter().position(|r| r.column.id == id)
    }

    /// Columns in visual (left-to-right) order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.records.iter().map(|r| &r.column)
    }

    pub fn ids(&self) -> Vec<ColumnId> {
        self.records.iter().map(|r| r.column.id).collect()
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.records
            .iter()
            .find(|r| r.column.id == id)
            .map(|r| &r.column)
    }

    /// Find the column whose laid-out frame contains a point. O(n); the
    /// number of open columns is bounded by screen real estate.
    pub fn column_at(&self, point: Point) -> Option<&Column> {
        self.columns().find(|c| c.frame.contains(point))
    }

    pub(crate) fn insert_at(&mut self, index: usize, record: ColumnRecord) {
        debug_assert!(!self.contains(record.column.id));
        let index = index.min(self.records.len());
        self.records.insert(index, record);
    }

    pub(crate) fn remove(&mut self, id: ColumnId) -> Option<(usize, ColumnRecord)> {
        let index = self.index_of(id)?;
        Some((index, self.records.remove(index)))
    }

    pub(crate) fn get(&self, id: ColumnId) -> Option<&ColumnRecord> {
        self.records.iter().find(|r| r.column.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ColumnId) -> Option<&mut ColumnRecord> {
        self.records.iter_mut().find(|r| r.column.id == id)
    }

    pub(crate) fn records(&self) -> &[ColumnRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [ColumnRecord] {
        &mut self.records
    }
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::store_with_frames;
    use super::*;
    use colonnade_core::Rect;

    #[test]
    fn allocated_ids_are_unique() {
        let mut store = ColumnStore::new();
        let a = store.allocate_id();
        let b = store.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn insertion_order_is_visual_order() {
        let store = store_with_frames(&[
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(100.0, 0.0, 100.0, 50.0),
        ]);
        let ids = store.ids();
        assert_eq!(store.index_of(ids[0]), Some(0));
        assert_eq!(store.index_of(ids[1]), Some(1));
    }

    #[test]
    fn remove_returns_record_and_index() {
        let mut store = store_with_frames(&[
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(100.0, 0.0, 100.0, 50.0),
        ]);
        let ids = store.ids();
        let (index, record) = store.remove(ids[0]).unwrap();
        assert_eq!(index, 0);
        assert_eq!(record.column.id, ids[0]);
        assert_eq!(store.len(), 1);
        assert!(store.remove(ids[0]).is_none());
    }

    #[test]
    fn column_at_uses_half_open_frames() {
        let store = store_with_frames(&[
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(100.0, 0.0, 100.0, 50.0),
        ]);
        let ids = store.ids();
        let hit = store.column_at(Point::new(100.0, 0.0)).unwrap();
        assert_eq!(hit.id, ids[1]);
        assert!(store.column_at(Point::new(200.0, 0.0)).is_none());
    }
}

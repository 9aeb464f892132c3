//! Flat `SurfaceId -> Sphere` table in insertion order.

use std::collections::HashMap;

use outline_geometry::Sphere;

use crate::surface::{Surface, SurfaceId};

/// Arena of tracked surfaces plus an id index into it.
///
/// Iteration order is first-insertion order; updating a surface keeps its
/// slot. Marker enumeration depends on this order.
#[derive(Debug, Default)]
pub(crate) struct SurfaceTable {
    slots: Vec<Surface>,
    index: HashMap<SurfaceId, usize>,
}

impl SurfaceTable {
    /// Inserts a surface or replaces its sphere in place.
    pub(crate) fn upsert(&mut self, id: SurfaceId, sphere: Sphere) {
        match self.index.get(&id) {
            Some(&slot) => self.slots[slot].sphere = sphere,
            None => {
                self.index.insert(id, self.slots.len());
                self.slots.push(Surface::new(id, sphere));
            }
        }
    }

    /// Removes a surface, keeping the relative order of the rest.
    pub(crate) fn remove(&mut self, id: SurfaceId) -> Option<Surface> {
        let slot = self.index.remove(&id)?;
        let removed = self.slots.remove(slot);
        for later in &self.slots[slot..] {
            if let Some(entry) = self.index.get_mut(&later.id) {
                *entry -= 1;
            }
        }
        Some(removed)
    }

    pub(crate) fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.index.get(&id).map(|&slot| &self.slots[slot])
    }

    pub(crate) fn as_slice(&self) -> &[Surface] {
        &self.slots
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_geometry::Point3;

    fn sphere(x: f64) -> Sphere {
        Sphere::new(Point3::new(x, 0.0, 0.0), 1.0)
    }

    fn ids(table: &SurfaceTable) -> Vec<u64> {
        table.as_slice().iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn test_update_keeps_slot() {
        let mut table = SurfaceTable::default();
        table.upsert(SurfaceId::new(3), sphere(0.0));
        table.upsert(SurfaceId::new(1), sphere(1.0));
        table.upsert(SurfaceId::new(3), sphere(9.0));

        assert_eq!(ids(&table), vec![3, 1]);
        assert_eq!(table.get(SurfaceId::new(3)).map(|s| s.sphere), Some(sphere(9.0)));
    }

    #[test]
    fn test_remove_reindexes_later_slots() {
        let mut table = SurfaceTable::default();
        for id in 1..=4 {
            table.upsert(SurfaceId::new(id), sphere(id as f64));
        }

        assert!(table.remove(SurfaceId::new(2)).is_some());
        assert!(table.remove(SurfaceId::new(2)).is_none());
        assert_eq!(ids(&table), vec![1, 3, 4]);

        table.upsert(SurfaceId::new(4), sphere(40.0));
        assert_eq!(table.get(SurfaceId::new(4)).map(|s| s.sphere), Some(sphere(40.0)));
        assert_eq!(table.as_slice()[2].sphere, sphere(40.0));
    }

    #[test]
    fn test_clear() {
        let mut table = SurfaceTable::default();
        table.upsert(SurfaceId::new(1), sphere(0.0));
        table.clear();
        assert!(table.as_slice().is_empty());
        assert!(table.get(SurfaceId::new(1)).is_none());
    }
}

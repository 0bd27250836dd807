mod nav_mesh;

pub use nav_mesh::NavMesh;

use slotmap::SlotMap;

use crate::error::ObstacleError;
use crate::geometry::Polygon;
use crate::operations::merge::merge;
use crate::operations::offset::expand;

slotmap::new_key_type! {
    /// Unique identifier for an obstacle in an [`ObstacleMap`].
    pub struct ObstacleId;
}

/// Arena that owns the raw obstacle polygons of a level.
///
/// Obstacles are referenced by generational ids, so removing one never
/// invalidates the ids of the others. [`ObstacleMap::build`] turns the
/// current contents into a [`NavMesh`].
#[derive(Debug, Default, Clone)]
pub struct ObstacleMap {
    obstacles: SlotMap<ObstacleId, Polygon>,
}

impl ObstacleMap {
    /// Creates a new, empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an obstacle and returns its ID.
    pub fn insert(&mut self, polygon: Polygon) -> ObstacleId {
        self.obstacles.insert(polygon)
    }

    /// Removes an obstacle, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ObstacleError::NotFound`] if `id` is not in the map.
    pub fn remove(&mut self, id: ObstacleId) -> Result<Polygon, ObstacleError> {
        self.obstacles.remove(id).ok_or(ObstacleError::NotFound)
    }

    /// Returns a reference to the obstacle, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ObstacleError::NotFound`] if `id` is not in the map.
    pub fn obstacle(&self, id: ObstacleId) -> Result<&Polygon, ObstacleError> {
        self.obstacles.get(id).ok_or(ObstacleError::NotFound)
    }

    /// Number of obstacles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Returns `true` if the map holds no obstacles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Iterates over all obstacles with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Polygon)> {
        self.obstacles.iter()
    }

    /// Expands every obstacle by `margin` (the agent radius) and merges the
    /// results into a navigation mesh.
    #[must_use]
    pub fn build(&self, margin: f64) -> NavMesh {
        let expanded: Vec<Polygon> = self.obstacles.values().map(|p| expand(p, margin)).collect();
        let merged = merge(&expanded);
        tracing::debug!(
            obstacles = self.obstacles.len(),
            margin,
            polygons = merged.len(),
            "built navigation mesh"
        );
        NavMesh::from_polygons(merged)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::solid(vec![
            Point2::new(x, y),
            Point2::new(x, y + size),
            Point2::new(x + size, y + size),
            Point2::new(x + size, y),
        ])
        .unwrap()
    }

    #[test]
    fn insert_get_remove() {
        let mut map = ObstacleMap::new();
        let a = map.insert(square(0.0, 0.0, 1.0));
        let b = map.insert(square(5.0, 5.0, 1.0));
        assert_eq!(map.len(), 2);
        assert_eq!(map.obstacle(b).unwrap().vertex(0).point, Point2::new(5.0, 5.0));

        let removed = map.remove(a).unwrap();
        assert_eq!(removed, square(0.0, 0.0, 1.0));
        assert_eq!(map.obstacle(a), Err(ObstacleError::NotFound));
        assert_eq!(map.remove(a), Err(ObstacleError::NotFound));
        assert!(map.obstacle(b).is_ok());
        assert_eq!(map.iter().count(), 1);
    }

    #[test]
    fn empty_map_builds_empty_mesh() {
        let map = ObstacleMap::new();
        assert!(map.is_empty());
        let mesh = map.build(1.0);
        assert!(mesh.polygons().is_empty());
        assert!(mesh.walls().is_empty());
    }

    #[test]
    fn build_merges_touching_obstacles() {
        let mut map = ObstacleMap::new();
        map.insert(square(0.0, 0.0, 1.0));
        map.insert(square(0.0, 1.0, 1.0));
        let mesh = map.build(0.0);
        assert_eq!(mesh.polygons().len(), 1);
        assert_eq!(mesh.walls().len(), 4);
    }

    #[test]
    fn margin_can_join_nearby_obstacles() {
        let mut map = ObstacleMap::new();
        map.insert(square(0.0, 0.0, 1.0));
        map.insert(square(1.5, 0.0, 1.0));
        assert_eq!(map.build(0.0).polygons().len(), 2);
        assert_eq!(map.build(0.5).polygons().len(), 1);
    }
}

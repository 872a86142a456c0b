use itertools::Itertools;
use std::time::Instant;

use super::Scene;
use crate::{
    error::{Error, Result},
    geometry::{BoundingVolume, Collection, Geometry},
    lanes::{LaneReal, LANE_COUNT},
    primitive::{MaterialId, Primitive, PrimitiveArena, PrimitiveId, PrimitiveKind},
    settings::BuildSettings,
    shapes::{AxisAlignedBox, Parallelogram, Plane, Sphere, Triangle},
    soa::Batch,
};

// Order of the batched kinds in the root collection
const KIND_ORDER: [PrimitiveKind; 5] = [
    PrimitiveKind::Sphere,
    PrimitiveKind::Plane,
    PrimitiveKind::Parallelogram,
    PrimitiveKind::AxisAlignedBox,
    PrimitiveKind::Triangle,
];

/// Collects primitives and hand-built nodes, then batches them into a [Scene].
#[derive(Clone, Debug)]
pub struct SceneBuilder<T>
where
    T: LaneReal,
{
    primitives: PrimitiveArena<T>,
    // Primitives that go in the root, batched by kind on build
    loose: Vec<PrimitiveId>,
    geometry: Vec<Geometry<T>>,
}

impl<T> SceneBuilder<T>
where
    T: LaneReal,
{
    /// Creates a new empty `SceneBuilder`.
    pub fn new() -> Self {
        Self {
            primitives: PrimitiveArena::new(),
            loose: Vec::new(),
            geometry: Vec::new(),
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere<T>, material: MaterialId) -> PrimitiveId {
        self.add_primitive(Primitive::new(sphere, material))
    }

    pub fn add_plane(&mut self, plane: Plane<T>, material: MaterialId) -> PrimitiveId {
        self.add_primitive(Primitive::new(plane, material))
    }

    pub fn add_box(&mut self, aabb: AxisAlignedBox<T>, material: MaterialId) -> PrimitiveId {
        self.add_primitive(Primitive::new(aabb, material))
    }

    pub fn add_triangle(&mut self, triangle: Triangle<T>, material: MaterialId) -> PrimitiveId {
        self.add_primitive(Primitive::new(triangle, material))
    }

    pub fn add_parallelogram(
        &mut self,
        parallelogram: Parallelogram<T>,
        material: MaterialId,
    ) -> PrimitiveId {
        self.add_primitive(Primitive::new(parallelogram, material))
    }

    /// Stores `primitive` and schedules it for batching into the root.
    pub fn add_primitive(&mut self, primitive: Primitive<T>) -> PrimitiveId {
        let id = self.primitives.push(primitive);
        self.loose.push(id);
        id
    }

    /// Stores `primitive` without placing it anywhere.
    ///
    /// The returned id is meant for nodes built by hand and given to
    /// [add_geometry](Self::add_geometry).
    pub fn insert_primitive(&mut self, primitive: Primitive<T>) -> PrimitiveId {
        self.primitives.push(primitive)
    }

    /// Adds a hand-built node to the root, after all batched primitives.
    pub fn add_geometry(&mut self, geometry: impl Into<Geometry<T>>) {
        self.geometry.push(geometry.into());
    }

    /// Returns the primitives stored so far.
    pub fn primitives(&self) -> &PrimitiveArena<T> {
        &self.primitives
    }

    /// Batches the collected primitives and assembles the scene.
    ///
    /// Fails if a hand-built node refers to a primitive that isn't in this builder,
    /// or if a batch refuses a primitive.
    pub fn build(self, settings: &BuildSettings) -> Result<Scene<T>> {
        let build_start = Instant::now();

        let Self {
            primitives,
            loose,
            geometry,
        } = self;

        for node in &geometry {
            let mut unknown = None;
            node.visit_primitives(&mut |id| {
                if unknown.is_none() && !primitives.contains(id) {
                    unknown = Some(id);
                }
            });
            if let Some(id) = unknown {
                return Err(Error::UnknownPrimitive(id));
            }
        }

        let mut root = Collection::new();
        let mut batch_count = 0;
        let mut bare_count = 0;
        for kind in KIND_ORDER {
            let ids = loose
                .iter()
                .copied()
                .filter(|&id| primitives.get(id).map(|p| p.kind()) == Some(kind))
                .collect_vec();

            for chunk in &ids.into_iter().chunks(LANE_COUNT) {
                let chunk = chunk.collect_vec();
                if chunk.len() < settings.min_batch_size {
                    bare_count += chunk.len();
                    for id in chunk {
                        root.push(id);
                    }
                    continue;
                }

                let mut batch = Batch::new(kind, settings.overflow);
                for id in chunk {
                    let primitive = primitives.get(id).ok_or(Error::UnknownPrimitive(id))?;
                    batch.push(id, &primitive.shape)?;
                }
                batch.finalize();
                lanetrace_debug!("{} batch with {} lanes occupied", kind, batch.occupied());
                batch_count += 1;

                if settings.bound_batches {
                    root.push(BoundingVolume::enclosing(batch, &primitives));
                } else {
                    root.push(batch);
                }
            }
        }

        let hand_built = geometry.len();
        for node in geometry {
            root.push(node);
        }

        lanetrace_info!(
            "Built scene with {} primitives: {} batches, {} bare, {} hand-built nodes in {:.2}ms",
            primitives.len(),
            batch_count,
            bare_count,
            hand_built,
            (build_start.elapsed().as_micros() as f32) * 1e-3
        );

        Ok(Scene {
            root: Geometry::Collection(root),
            primitives,
        })
    }
}

impl<T> Default for SceneBuilder<T>
where
    T: LaneReal,
{
    fn default() -> Self {
        Self::new()
    }
}

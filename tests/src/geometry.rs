#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_4, SQRT_2};

    use lanetrace::{
        math::{
            normal, point3,
            transforms::{rotation_z, scale, translation, uniform_scale},
            vec3, Bounds3, Matrix4x4, Ray, Transform,
        },
        AxisAlignedBox, Batch, BoundingVolume, Collection, Error, Geometry, Intersectable,
        MaterialId, OverflowPolicy, Plane, Primitive, PrimitiveArena, PrimitiveId,
        PrimitiveKind, Shape, Sphere, TransformedGeometry,
    };

    fn sphere(arena: &mut PrimitiveArena<f64>, x: f64, r: f64) -> PrimitiveId {
        arena.push(Primitive::new(
            Sphere::new(point3(x, 0.0, 0.0), r),
            MaterialId(0),
        ))
    }

    fn fixture_ray() -> Ray<f64> {
        Ray::new(point3(2.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0))
    }

    #[test]
    fn primitive_node() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 10.0, 2.0);

        let node = Geometry::from(id);
        let result = node.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 6.0);
        assert_eq!(
            node.world_bound(&arena),
            Bounds3::new(point3(8.0, -2.0, -2.0), point3(12.0, 2.0, 2.0))
        );

        // Ids the arena doesn't know are never hit
        let missing = Geometry::<f64>::Primitive(PrimitiveId(42));
        assert!(!missing.intersect(&fixture_ray(), &arena).is_hit());
        assert!(missing.world_bound(&arena).is_empty());
    }

    #[test]
    fn collection_nearest() {
        let mut arena = PrimitiveArena::new();
        let far = sphere(&mut arena, 20.0, 2.0);
        let near = sphere(&mut arena, 10.0, 2.0);
        let behind = sphere(&mut arena, -10.0, 2.0);

        let c: Collection<f64> = [far, near, behind].into_iter().map(Geometry::from).collect();
        assert_eq!(c.len(), 3);
        let result = c.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(near));
        assert_abs_diff_eq!(result.distance, 6.0);
        assert_abs_diff_eq!(result.normal, normal(-1.0, 0.0, 0.0));

        assert_eq!(
            c.world_bound(&arena),
            Bounds3::new(point3(-12.0, -2.0, -2.0), point3(22.0, 2.0, 2.0))
        );
    }

    #[test]
    fn collection_tie_keeps_first() {
        let mut arena = PrimitiveArena::new();
        let a = sphere(&mut arena, 10.0, 2.0);
        let b = sphere(&mut arena, 10.0, 2.0);

        let mut c = Collection::new();
        c.push(a);
        c.push(b);
        assert_eq!(c.intersect(&fixture_ray(), &arena).hit, Some(a));

        let mut c = Collection::new();
        c.push(b);
        c.push(a);
        assert_eq!(c.intersect(&fixture_ray(), &arena).hit, Some(b));
    }

    #[test]
    fn empty_collection() {
        let arena = PrimitiveArena::<f64>::new();
        let c = Collection::default();
        assert!(c.is_empty());
        let result = c.intersect(&fixture_ray(), &arena);
        assert!(!result.is_hit());
        assert_eq!(result.distance, f64::INFINITY);
        assert!(c.world_bound(&arena).is_empty());
    }

    #[test]
    fn batch_in_collection() {
        let mut arena = PrimitiveArena::new();
        let bare = sphere(&mut arena, 9.0, 1.0);
        let mut batch = Batch::new(PrimitiveKind::Sphere, OverflowPolicy::Reject);
        for x in [14.0, 12.0] {
            let id = sphere(&mut arena, x, 2.0);
            let shape = arena.get(id).expect("just pushed").shape;
            batch.push(id, &shape).expect("batch has room");
        }
        batch.finalize();

        let mut c = Collection::new();
        c.push(batch);
        c.push(bare);
        // Bare sphere at 8..10 beats the batch at 10..14
        let result = c.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(bare));
        assert_abs_diff_eq!(result.distance, 6.0);

        let ray = Ray::new(point3(2.0, 1.5, 0.0), vec3(1.0, 0.0, 0.0));
        let result = c.intersect(&ray, &arena);
        assert_eq!(result.hit, Some(PrimitiveId(2)));
    }

    #[test]
    fn bounding_volume_prunes() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 10.0, 2.0);

        // A box that doesn't contain the child hides it
        let off = BoundingVolume::new(
            Bounds3::new(point3(-1.0, 50.0, -1.0), point3(1.0, 52.0, 1.0)),
            id,
        );
        assert!(!off.intersect(&fixture_ray(), &arena).is_hit());
        assert_eq!(*off.bound(), off.world_bound(&arena));

        let enclosing = BoundingVolume::enclosing(id, &arena);
        assert_eq!(*enclosing.bound(), arena.get(id).expect("pushed").shape.world_bound());
        let result = enclosing.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 6.0);

        // Box behind the ray
        let ray = Ray::new(point3(20.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert!(!enclosing.intersect(&ray, &arena).is_hit());
    }

    #[test]
    fn bounding_volume_unbounded_child() {
        let mut arena = PrimitiveArena::new();
        let id = arena.push(Primitive::new(
            Plane::new(point3(10.0, 0.0, 0.0), normal(-1.0, 0.0, 0.0)),
            MaterialId(1),
        ));
        let bv = BoundingVolume::enclosing(id, &arena);
        assert!(!bv.bound().is_bounded());
        assert_abs_diff_eq!(bv.intersect(&fixture_ray(), &arena).distance, 8.0);
    }

    #[test]
    fn translated() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 0.0, 2.0);

        let t = TransformedGeometry::new(translation(vec3(10.0, 0.0, 0.0)), id)
            .expect("translation is invertible");
        let result = t.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.normal, normal(-1.0, 0.0, 0.0), epsilon = 1e-9);
        assert_eq!(
            t.world_bound(&arena),
            Bounds3::new(point3(8.0, -2.0, -2.0), point3(12.0, 2.0, 2.0))
        );

        let ray = Ray::new(point3(2.0, 0.0, 0.0), vec3(-1.0, 0.0, 0.0));
        assert!(!t.intersect(&ray, &arena).is_hit());
    }

    #[test]
    fn uniformly_scaled() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 0.0, 1.0);

        let object_to_world = &translation(vec3(10.0, 0.0, 0.0))
            * &uniform_scale(2.0).expect("scale is non-zero");
        assert!(object_to_world.has_uniform_scale());
        let t = TransformedGeometry::new(object_to_world, id).expect("invertible");

        let result = t.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.normal, normal(-1.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn non_uniformly_scaled() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 0.0, 1.0);

        // Ellipsoid spanning x in [6, 14]
        let object_to_world = &translation(vec3(10.0, 0.0, 0.0))
            * &scale(4.0, 1.0, 1.0).expect("scale is non-zero");
        assert!(!object_to_world.has_uniform_scale());
        let t = TransformedGeometry::new(object_to_world, id).expect("invertible");

        let result = t.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.normal, normal(-1.0, 0.0, 0.0), epsilon = 1e-9);

        // Distances stay in units of the world direction
        let ray = Ray::new(point3(10.0, -5.0, 0.0), vec3(0.0, 2.0, 0.0));
        let result = t.intersect(&ray, &arena);
        assert_abs_diff_eq!(result.distance, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.normal, normal(0.0, -1.0, 0.0), epsilon = 1e-9);

        let bound = t.world_bound(&arena);
        assert_abs_diff_eq!(bound.p_min, point3(6.0, -1.0, -1.0), epsilon = 1e-9);
        assert_abs_diff_eq!(bound.p_max, point3(14.0, 1.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn rotated_box() {
        let mut arena = PrimitiveArena::new();
        let id = arena.push(Primitive::new(
            AxisAlignedBox::new(point3(-1.0, -1.0, -1.0), point3(1.0, 1.0, 1.0)),
            MaterialId(0),
        ));
        let t = TransformedGeometry::new(rotation_z(FRAC_PI_4), id).expect("invertible");

        // Hits the face between the corners at (-sqrt2, 0) and (0, sqrt2)
        let ray = Ray::new(point3(-5.0, 0.5, 0.0), vec3(1.0, 0.0, 0.0));
        let result = t.intersect(&ray, &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 5.5 - SQRT_2, epsilon = 1e-9);
        assert_abs_diff_eq!(
            result.normal,
            normal(-1.0, 1.0, 0.0).normalized(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn nested_transforms() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 0.0, 2.0);

        let inner = TransformedGeometry::new(translation(vec3(4.0, 0.0, 0.0)), id)
            .expect("invertible");
        let outer = TransformedGeometry::new(translation(vec3(6.0, 0.0, 0.0)), inner)
            .expect("invertible");
        let result = outer.intersect(&fixture_ray(), &arena);
        assert_eq!(result.hit, Some(id));
        assert_abs_diff_eq!(result.distance, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn singular_transform() {
        let mut arena = PrimitiveArena::new();
        let id = sphere(&mut arena, 0.0, 1.0);

        assert!(matches!(
            TransformedGeometry::<f64>::from_matrix(Matrix4x4::zeros(), id),
            Err(Error::SingularTransform)
        ));

        // A flattening matrix smuggled in with a bogus inverse
        let mut flat = Matrix4x4::<f64>::identity();
        flat.m[0][0] = 0.0;
        let bogus = Transform::new_full(flat, Matrix4x4::identity());
        assert!(matches!(
            TransformedGeometry::new(bogus, id),
            Err(Error::SingularTransform)
        ));
    }

    #[test]
    fn visit_primitives() {
        let mut arena = PrimitiveArena::new();
        let ids = (0..5)
            .map(|i| sphere(&mut arena, i as f64 * 10.0, 1.0))
            .collect::<Vec<_>>();

        let mut batch = Batch::new(PrimitiveKind::Sphere, OverflowPolicy::Reject);
        for &id in &ids[1..3] {
            let shape = arena.get(id).expect("pushed").shape;
            batch.push(id, &shape).expect("batch has room");
        }
        batch.finalize();

        let mut inner = Collection::new();
        inner.push(ids[3]);
        inner.push(
            TransformedGeometry::new(translation(vec3(0.0, 1.0, 0.0)), ids[4])
                .expect("invertible"),
        );

        let mut root = Collection::new();
        root.push(ids[0]);
        root.push(batch);
        root.push(BoundingVolume::enclosing(inner, &arena));

        let mut visited = Vec::new();
        Geometry::from(root).visit_primitives(&mut |id| visited.push(id));
        assert_eq!(visited, ids);
    }
}

// Host-side tests for segment meshes, bounds and the camera fit.

use cyl_core::*;
use glam::Vec3;

fn layout(widths: &[u32], height: u32) -> CarouselLayout {
    let dims: Vec<ImageDims> = widths.iter().map(|&w| ImageDims::new(w, height)).collect();
    CarouselLayout::compute(&dims, 0.005).unwrap()
}

#[test]
fn segment_mesh_shape() {
    let l = layout(&[100, 200, 300], 100);
    let meshes = build_carousel_meshes(&l, 32);
    assert_eq!(meshes.len(), 3);
    for (m, s) in meshes.iter().zip(l.segments()) {
        assert_eq!(m.index, s.index);
        assert_eq!(m.vertices.len(), 33 * 2);
        assert_eq!(m.indices.len(), 32 * 6);
        assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
        let half = (s.relative_height / 2.0) as f32;
        for v in &m.vertices {
            let [x, y, z] = v.position;
            assert!(((x * x + z * z).sqrt() - 1.0).abs() < 1e-5, "off the unit cylinder");
            assert!((y.abs() - half).abs() < 1e-6);
            assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
        }
    }
}

#[test]
fn segment_spans_its_rendered_extent() {
    let l = layout(&[100, 200, 300], 100);
    let s = l.segments()[1];
    let m = SegmentMesh::build(&s, 8);
    let angle = |v: &SegmentVertex| v.position[0].atan2(v.position[2]) as f64;
    let first = angle(&m.vertices[0]);
    let last = angle(&m.vertices[8]);
    assert!((first - s.start).abs() < 1e-5, "starts at {first}, want {}", s.start);
    assert!((last - (s.start + s.rendered_extent)).abs() < 1e-5);
    // top row first, then bottom row
    assert!(m.vertices[0].position[1] > 0.0 && m.vertices[9].position[1] < 0.0);
    assert_eq!(m.vertices[0].uv, [0.0, 0.0]);
    assert_eq!(m.vertices[17].uv, [1.0, 1.0]);
}

#[test]
fn triangles_face_outward() {
    let l = layout(&[100; 5], 100);
    for m in build_carousel_meshes(&l, 16) {
        for tri in m.indices.chunks_exact(3) {
            let p = |i: u32| Vec3::from_array(m.vertices[i as usize].position);
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            let radial = Vec3::new(centroid.x, 0.0, centroid.z);
            assert!(normal.dot(radial) > 0.0, "triangle {tri:?} faces inward");
        }
    }
}

#[test]
fn wireframe_covers_each_edge_once() {
    // two triangles sharing the diagonal: 5 unique edges
    let lines = wireframe_indices(&[0, 1, 3, 1, 2, 3]);
    assert_eq!(lines.len(), 10);
    let l = layout(&[100], 100);
    let m = SegmentMesh::build(&l.segments()[0], 4);
    // 4 columns: 5 verticals, 4 top, 4 bottom, 4 diagonals
    assert_eq!(m.wireframe_indices().len(), 17 * 2);
    assert_eq!(wireframe_lines(std::slice::from_ref(&m)).len(), 17 * 2);
}

#[test]
fn bounds_of_full_ring() {
    let l = layout(&[100; 6], 100);
    let meshes = build_carousel_meshes(&l, 32);
    let b = assembly_bounds(&meshes, l.assembly_offset() as f32).unwrap();
    let size = b.size();
    assert!(size.x > 1.9 && size.x <= 2.0 + 1e-5, "width {}", size.x);
    assert!(size.z > 1.9 && size.z <= 2.0 + 1e-5, "depth {}", size.z);
    let h = l.max_relative_height() as f32;
    assert!((size.y - h).abs() < 1e-5);
    assert!(b.center().y.abs() < 1e-6);
    assert!(assembly_bounds(&[], 0.0).is_none());
    assert_eq!(outline_lines(&b).len(), 24 + 6);
}

#[test]
fn camera_fit_encloses_bounds() {
    let bounds = Bounds {
        min: Vec3::new(-1.0, -0.5, -1.0),
        max: Vec3::new(1.0, 0.5, 1.0),
    };
    for aspect in [0.5_f32, 1.0, 16.0 / 9.0, 3.0] {
        let mut cam = Camera::new(aspect);
        cam.fit_to_bounds(&bounds, 1.0);
        assert_eq!(cam.eye.x, 0.0);
        assert_eq!(cam.eye.y, 0.0);
        assert!(cam.eye.z > bounds.max.z);
        assert!(cam.zfar > cam.eye.z - bounds.min.z);

        // every corner projects inside clip space
        let vp = cam.view_projection();
        for [p, q] in bounds.edge_lines() {
            for c in [p, q] {
                let clip = vp * c.extend(1.0);
                let ndc = clip.truncate() / clip.w;
                assert!(ndc.x.abs() <= 1.0 + 1e-4, "x {} at aspect {aspect}", ndc.x);
                assert!(ndc.y.abs() <= 1.0 + 1e-4, "y {} at aspect {aspect}", ndc.y);
                assert!((0.0..=1.0).contains(&ndc.z), "z {} at aspect {aspect}", ndc.z);
            }
        }
    }
}

#[test]
fn camera_fit_matches_closed_form() {
    let bounds = Bounds {
        min: Vec3::new(-1.0, -0.25, -1.0),
        max: Vec3::new(1.0, 0.25, 1.0),
    };
    let mut cam = Camera::new(1.0);
    cam.fit_to_bounds(&bounds, 1.0);
    // square viewport: horizontal extent dominates
    let half_fov = 12.0_f32.to_radians();
    let expected = 1.0 + 1.0 / half_fov.tan();
    assert!((cam.eye.z - expected).abs() < 1e-4);
    assert!((cam.zfar - (1.0 + expected) * 3.0).abs() < 1e-3);
}

#[test]
fn degenerate_aspect_falls_back_to_square() {
    let mut cam = Camera::new(f32::NAN);
    assert_eq!(cam.aspect, 1.0);
    cam.set_aspect(800, 0);
    assert_eq!(cam.aspect, 800.0);
    cam.set_aspect(0, 600);
    assert_eq!(cam.aspect, 1.0);
}

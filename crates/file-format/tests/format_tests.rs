use scene_format::{
    save_scene, scene_to_string, write_scene, Camera, Light, Pigment, Polyhedron, SaveError,
    Scene, Sphere, SurfaceFinish,
};
use scene_kernel::Point3d;

// ── Helper Functions ─────────────────────────────────────────────────────

/// Section counts and record counts recovered by walking the text the way
/// the renderer reads it.
#[derive(Debug, PartialEq)]
struct SectionCounts {
    declared: [usize; 4],
    records: [usize; 4],
}

fn walk_sections(text: &str) -> SectionCounts {
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.last(), Some(&""), "file must end with a newline");
    let mut pos = 4; // camera block
    let mut declared = [0; 4];
    let mut records = [0; 4];

    for section in 0..4 {
        let count: usize = lines[pos]
            .parse()
            .unwrap_or_else(|_| panic!("expected count line at {pos}, got {:?}", lines[pos]));
        declared[section] = count;
        pos += 1;
        for _ in 0..count {
            let line = lines[pos];
            let consumed = match section {
                1 if line.starts_with("texmap\t") => 3,
                3 if line.contains(" polyhedron ") => {
                    let n: usize = line.rsplit(' ').next().unwrap().parse().unwrap();
                    1 + n
                }
                _ => 1,
            };
            pos += consumed;
            records[section] += 1;
        }
    }

    assert_eq!(pos, lines.len() - 1, "trailing content after objects section");
    SectionCounts { declared, records }
}

fn count_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let mut pos = 4;
    let mut counts = Vec::new();
    let c = lines[pos];
    counts.push(c);
    pos += 1 + c.parse::<usize>().unwrap();
    let c = lines[pos];
    counts.push(c);
    pos += 1;
    for _ in 0..c.parse::<usize>().unwrap() {
        pos += if lines[pos].starts_with("texmap") { 3 } else { 1 };
    }
    let c = lines[pos];
    counts.push(c);
    pos += 1 + c.parse::<usize>().unwrap();
    counts.push(lines[pos]);
    counts
}

fn gallery_like_scene() -> Scene {
    let mut scene = Scene::with_camera(Camera::looking_at(
        Point3d::new(0.0, 50.0, -120.0),
        Point3d::new(0.0, 15.0, 0.0),
        45.0,
    ));
    scene.add_light(Light::at(Point3d::new(100.0, 100.0, -50.0)));
    scene.add_light(Light::at(Point3d::new(-100.0, 100.0, -50.0)).with_color((0.8, 0.8, 1.0)));

    let red = scene.add_pigment(Pigment::solid((1.0, 0.2, 0.2)));
    let floor = scene.add_pigment(Pigment::checker((0.1, 0.1, 0.1), (0.9, 0.9, 0.9), 20.0));
    let tex = scene.add_pigment(Pigment::texmap("marble.ppm"));

    let matte = scene.add_finish(SurfaceFinish::default().with_reflectivity(0.3));
    let shiny = scene.add_finish(SurfaceFinish::phong(0.11, 0.11, 0.3, 1000.0).with_reflectivity(0.7));

    scene.add_object(Sphere::new((0.0, -1000.0, 0.0), 1000.0).with_material(floor, matte));
    scene.add_object(Sphere::new((0.0, 15.0, 50.0), 15.0).with_material(tex, shiny));
    for (i, sides) in [3, 4, 5, 6].into_iter().enumerate() {
        let x = -45.0 + 30.0 * i as f64;
        scene.add_object(Polyhedron::prism((x, 15.0, 20.0), 12.0, 25.0, sides).with_material(red, matte));
        scene.add_object(Polyhedron::pyramid((x, 0.0, 0.0), 15.0, 30.0, sides).with_material(red, shiny));
    }
    scene.add_object(Polyhedron::cube((0.0, 15.0, 30.0), 20.0).with_material(red, matte));
    scene.add_object(Polyhedron::rectangular_box((0.0, -2.0, 0.0), 80.0, 2.0, 80.0));
    scene
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("scene-format-{}-{name}", std::process::id()))
}

// ── Section Layout ───────────────────────────────────────────────────────

#[test]
fn counts_match_records_for_empty_scene() {
    let counts = walk_sections(&scene_to_string(&Scene::new()));
    assert_eq!(counts.declared, [0, 0, 0, 0]);
    assert_eq!(counts.declared, counts.records);
}

#[test]
fn counts_match_records_for_single_entities() {
    let mut scene = Scene::new();
    scene.add_light(Light::default());
    scene.add_pigment(Pigment::texmap("wood.ppm"));
    scene.add_finish(SurfaceFinish::default());
    scene.add_object(Polyhedron::prism((0.0, 0.0, 0.0), 10.0, 10.0, 8));

    let counts = walk_sections(&scene_to_string(&scene));
    assert_eq!(counts.declared, [1, 1, 1, 1]);
    assert_eq!(counts.declared, counts.records);
}

#[test]
fn counts_match_records_for_many_entities() {
    let scene = gallery_like_scene();
    let counts = walk_sections(&scene_to_string(&scene));
    assert_eq!(counts.declared, [2, 3, 2, 12]);
    assert_eq!(counts.declared, counts.records);
}

#[test]
fn one_sphere_scene_count_lines_in_order() {
    let mut scene = Scene::new();
    scene.add_pigment(Pigment::solid((1.0, 0.0, 0.0)));
    scene.add_pigment(Pigment::default_checker());
    scene.add_finish(SurfaceFinish::default());
    scene.add_object(Sphere::default());

    let text = scene_to_string(&scene);
    assert_eq!(count_lines(&text), vec!["0", "2", "1", "1"]);
    assert_eq!(
        text,
        "0 30 -200\n0 10 -100\n0 1 0\n40\n\
         0\n\
         2\nsolid\t1 0 0\nchecker\t0 0 0\t\t1 1 1\t\t40 \n\
         1\n0.30 0.40 0.00\t1\t0.0 0 0\n\
         1\n0 0 sphere\t\t0\t0\t0\t\t10 \n"
    );
}

#[test]
fn finish_line_begins_with_fixed_precision_coefficients() {
    let mut scene = Scene::new();
    scene.add_finish(SurfaceFinish::phong(0.3, 0.4, 0.0, 1.0));
    let text = scene_to_string(&scene);
    let finish_line = text.lines().nth(7).unwrap();
    assert!(finish_line.starts_with("0.30 0.40 0.00"), "{finish_line:?}");
}

// ── Polyhedra ────────────────────────────────────────────────────────────

#[test]
fn cube_planes_written_tab_separated() {
    let mut scene = Scene::new();
    scene.add_object(Polyhedron::cube((0.0, 0.0, 0.0), 10.0));
    let text = scene_to_string(&scene);
    let tail: Vec<&str> = text.lines().skip(7).collect();
    assert_eq!(
        tail,
        vec![
            "1",
            "0 0 polyhedron 6",
            "0\t1\t0\t-5",
            "0\t-1\t0\t-5",
            "1\t0\t0\t-5",
            "-1\t0\t0\t-5",
            "0\t0\t1\t-5",
            "0\t0\t-1\t-5",
        ]
    );
}

#[test]
fn square_prism_first_side_plane() {
    let mut scene = Scene::new();
    scene.add_object(Polyhedron::prism((0.0, 0.0, 0.0), 10.0, 10.0, 4));
    let text = scene_to_string(&scene);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[8], "0 0 polyhedron 6");
    assert_eq!(lines[11], "1\t0\t0\t-10");
}

#[test]
fn every_plane_line_has_four_fields() {
    let text = scene_to_string(&gallery_like_scene());
    let mut in_poly = 0;
    for line in text.lines() {
        if in_poly > 0 {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 4, "{line:?}");
            for field in fields {
                field.parse::<f64>().unwrap_or_else(|_| panic!("bad number {field:?}"));
            }
            in_poly -= 1;
        } else if let Some(rest) = line.split(" polyhedron ").nth(1) {
            in_poly = rest.parse().unwrap();
        }
    }
    assert_eq!(in_poly, 0);
}

// ── Determinism and references ───────────────────────────────────────────

#[test]
fn serialization_is_deterministic() {
    let a = scene_to_string(&gallery_like_scene());
    let b = scene_to_string(&gallery_like_scene());
    assert_eq!(a, b);
}

#[test]
fn out_of_range_material_indices_are_written_unchecked() {
    let mut scene = Scene::new();
    scene.add_object(Sphere::default().with_material(9, 7));
    let text = scene_to_string(&scene);
    assert!(text.ends_with("1\n9 7 sphere\t\t0\t0\t0\t\t10 \n"));
    assert_eq!(scene.unresolved_references().len(), 2);
}

// ── Writing ──────────────────────────────────────────────────────────────

#[test]
fn save_scene_writes_exact_text() {
    let scene = gallery_like_scene();
    let path = temp_path("gallery.txt");
    save_scene(&scene, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, scene_to_string(&scene));
}

#[test]
fn save_scene_replaces_existing_file() {
    let path = temp_path("replace.txt");
    std::fs::write(&path, "stale content that is longer than an empty scene file\n".repeat(10)).unwrap();
    save_scene(&Scene::new(), &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, scene_to_string(&Scene::new()));
}

#[test]
fn unwritable_destination_is_a_single_io_error() {
    let path = temp_path("missing-dir").join("scene.txt");
    let err = save_scene(&Scene::new(), &path).unwrap_err();
    match &err {
        SaveError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("scene.txt"));
    assert!(!path.exists());
}

#[test]
fn write_scene_surfaces_writer_failure() {
    struct FailingWriter;
    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = write_scene(&Scene::new(), &mut FailingWriter).unwrap_err();
    assert!(matches!(err, SaveError::Write(_)));
    assert!(err.to_string().contains("disk full"));
}

//! Canned demonstration scenes.
//!
//! Every preset resolves all of its pigment and finish references.

use scene_format::{Camera, Light, Pigment, Polyhedron, Scene, Sphere, SurfaceFinish};
use scene_kernel::Point3d;

fn camera(position: (f64, f64, f64), target: (f64, f64, f64), fov: f64) -> Camera {
    Camera::looking_at(Point3d::from(position), Point3d::from(target), fov)
}

fn light(position: (f64, f64, f64), color: (f64, f64, f64)) -> Light {
    Light::at(Point3d::from(position)).with_color(color)
}

/// A huge sphere whose top stands in for a ground plane at y = 0.
fn ground(pigment: usize, finish: usize) -> Sphere {
    Sphere::new((0.0, -1000.0, 0.0), 1000.0).with_material(pigment, finish)
}

/// Every primitive kind: a row of prisms and a row of pyramids with three
/// to six sides, a sphere and a cube on a checkered floor.
pub fn gallery() -> Scene {
    let mut scene = Scene::with_camera(camera((0.0, 50.0, -120.0), (0.0, 15.0, 0.0), 45.0));

    scene.add_light(light((100.0, 100.0, -50.0), (1.0, 1.0, 1.0)));
    scene.add_light(light((-100.0, 100.0, -50.0), (0.8, 0.8, 1.0)));

    let red = scene.add_pigment(Pigment::solid((1.0, 0.2, 0.2)));
    let blue = scene.add_pigment(Pigment::solid((0.2, 0.2, 1.0)));
    let green = scene.add_pigment(Pigment::solid((0.2, 1.0, 0.2)));
    let yellow = scene.add_pigment(Pigment::solid((1.0, 1.0, 0.2)));
    let cyan = scene.add_pigment(Pigment::solid((0.2, 1.0, 1.0)));
    let magenta = scene.add_pigment(Pigment::solid((1.0, 0.2, 1.0)));
    let checker = scene.add_pigment(Pigment::checker((0.1, 0.1, 0.1), (0.9, 0.9, 0.9), 20.0));

    let matte = scene.add_finish(SurfaceFinish::default().with_reflectivity(0.3));
    let shiny = scene.add_finish(SurfaceFinish::phong(0.11, 0.11, 0.3, 1000.0).with_reflectivity(0.7));

    scene.add_object(ground(checker, matte));
    scene.add_object(Sphere::new((0.0, 15.0, 50.0), 15.0).with_material(red, shiny));

    for (x, sides, pigment) in [(-45.0, 3, blue), (-15.0, 4, green), (15.0, 5, yellow), (45.0, 6, cyan)] {
        scene.add_object(Polyhedron::prism((x, 15.0, 20.0), 12.0, 25.0, sides).with_material(pigment, matte));
    }
    for (x, sides, pigment) in [(-45.0, 3, magenta), (-15.0, 4, red), (15.0, 5, blue), (45.0, 6, green)] {
        scene.add_object(Polyhedron::pyramid((x, 0.0, 0.0), 15.0, 30.0, sides).with_material(pigment, shiny));
    }

    scene.add_object(Polyhedron::cube((0.0, 15.0, 30.0), 20.0).with_material(yellow, matte));
    scene
}

/// A sun light source inside a glowing sphere with six planets, all inside
/// a dark enclosing sphere.
pub fn solar_system() -> Scene {
    let mut scene = Scene::with_camera(camera((0.0, 100.0, -300.0), (0.0, 0.0, 0.0), 50.0));

    scene.add_light(light((0.0, 0.0, 0.0), (1.0, 1.0, 0.9)).with_attenuation([1.0, 0.0, 0.0001]));

    let sun = scene.add_pigment(Pigment::solid((1.0, 0.9, 0.2)));
    let mercury = scene.add_pigment(Pigment::solid((0.7, 0.7, 0.7)));
    let venus = scene.add_pigment(Pigment::solid((0.9, 0.8, 0.5)));
    let earth = scene.add_pigment(Pigment::solid((0.2, 0.4, 0.8)));
    let mars = scene.add_pigment(Pigment::solid((0.8, 0.3, 0.2)));
    let jupiter = scene.add_pigment(Pigment::solid((0.8, 0.6, 0.4)));
    let saturn = scene.add_pigment(Pigment::solid((0.9, 0.8, 0.6)));
    let space = scene.add_pigment(Pigment::solid((0.05, 0.05, 0.1)));

    let glowing = scene.add_finish(SurfaceFinish::phong(0.9, 0.1, 0.0, 1.0));
    let matte = scene.add_finish(SurfaceFinish::phong(0.3, 0.7, 0.0, 1.0));
    let shiny = scene.add_finish(SurfaceFinish::phong(0.2, 0.5, 0.3, 50.0).with_reflectivity(0.2));

    scene.add_object(Sphere::new((0.0, 0.0, 0.0), 2000.0).with_material(space, matte));
    scene.add_object(Sphere::new((0.0, 0.0, 0.0), 30.0).with_material(sun, glowing));

    let planets = [
        ((60.0, 0.0, 0.0), 5.0, mercury, matte),
        ((90.0, 0.0, 20.0), 8.0, venus, matte),
        ((120.0, 0.0, -30.0), 8.0, earth, shiny),
        ((150.0, 0.0, 10.0), 6.0, mars, matte),
        ((200.0, 0.0, -20.0), 18.0, jupiter, shiny),
        ((250.0, 0.0, 15.0), 16.0, saturn, shiny),
    ];
    for (center, radius, pigment, finish) in planets {
        scene.add_object(Sphere::new(center, radius).with_material(pigment, finish));
    }
    scene
}

/// A board with two rows of octagonal pawns and square rooks on each side.
pub fn chess() -> Scene {
    let mut scene = Scene::with_camera(camera((80.0, 60.0, -80.0), (0.0, 5.0, 0.0), 45.0));

    scene.add_light(light((50.0, 100.0, -50.0), (1.0, 1.0, 1.0)));
    scene.add_light(light((-50.0, 80.0, -50.0), (0.6, 0.6, 0.8)));

    let white = scene.add_pigment(Pigment::solid((0.9, 0.9, 0.9)));
    let black = scene.add_pigment(Pigment::solid((0.1, 0.1, 0.1)));
    let board = scene.add_pigment(Pigment::checker((0.2, 0.15, 0.1), (0.9, 0.85, 0.8), 10.0));

    let wood = scene.add_finish(SurfaceFinish::phong(0.3, 0.6, 0.1, 10.0));
    let glossy = scene.add_finish(SurfaceFinish::phong(0.2, 0.4, 0.4, 80.0).with_reflectivity(0.3));

    scene.add_object(
        Polyhedron::rectangular_box((0.0, -2.0, 0.0), 80.0, 2.0, 80.0).with_material(board, wood),
    );

    // White on -z, black on +z.
    for (pigment, side) in [(white, -1.0), (black, 1.0)] {
        for i in 0..8 {
            let x = -35.0 + 10.0 * i as f64;
            scene.add_object(
                Polyhedron::prism((x, 5.0, 20.0 * side), 3.0, 8.0, 8).with_material(pigment, glossy),
            );
        }
        for x in [-35.0, 35.0] {
            scene.add_object(
                Polyhedron::prism((x, 6.0, 30.0 * side), 4.0, 10.0, 4).with_material(pigment, glossy),
            );
        }
    }
    scene
}

/// A stone platform with six hexagonal columns under a square pyramid roof
/// topped by a golden sphere.
pub fn temple() -> Scene {
    let mut scene = Scene::with_camera(camera((0.0, 40.0, -120.0), (0.0, 20.0, 0.0), 50.0));

    scene.add_light(light((80.0, 100.0, -80.0), (1.0, 0.95, 0.8)));
    scene.add_light(light((-60.0, 80.0, -60.0), (0.5, 0.5, 0.6)));

    let stone = scene.add_pigment(Pigment::solid((0.6, 0.55, 0.5)));
    let gold = scene.add_pigment(Pigment::solid((0.9, 0.75, 0.2)));
    let floor = scene.add_pigment(Pigment::checker((0.4, 0.35, 0.3), (0.5, 0.45, 0.4), 15.0));

    let stone_finish = scene.add_finish(SurfaceFinish::phong(0.4, 0.6, 0.0, 1.0));
    let gold_finish = scene.add_finish(SurfaceFinish::phong(0.3, 0.4, 0.3, 50.0).with_reflectivity(0.4));

    scene.add_object(ground(floor, stone_finish));
    scene.add_object(
        Polyhedron::rectangular_box((0.0, 2.0, 0.0), 100.0, 4.0, 80.0).with_material(stone, stone_finish),
    );

    for z in [-20.0, 20.0] {
        for x in [-30.0, 0.0, 30.0] {
            scene.add_object(
                Polyhedron::prism((x, 15.0, z), 5.0, 30.0, 6).with_material(stone, stone_finish),
            );
        }
    }

    scene.add_object(
        Polyhedron::pyramid((0.0, 30.0, 0.0), 55.0, 25.0, 4).with_material(stone, stone_finish),
    );
    scene.add_object(Sphere::new((0.0, 57.0, 0.0), 8.0).with_material(gold, gold_finish));
    scene
}

/// Ten reflective pyramids of three to six sides scattered over dark ground.
pub fn crystal_garden() -> Scene {
    let mut scene = Scene::with_camera(camera((50.0, 35.0, -80.0), (0.0, 15.0, 0.0), 55.0));

    scene.add_light(light((60.0, 80.0, -60.0), (1.0, 1.0, 1.0)));
    scene.add_light(light((-40.0, 60.0, -40.0), (0.7, 0.8, 1.0)));
    scene.add_light(light((0.0, 50.0, 50.0), (1.0, 0.7, 0.9)));

    let red = scene.add_pigment(Pigment::solid((1.0, 0.3, 0.3)));
    let blue = scene.add_pigment(Pigment::solid((0.3, 0.5, 1.0)));
    let green = scene.add_pigment(Pigment::solid((0.3, 1.0, 0.5)));
    let purple = scene.add_pigment(Pigment::solid((0.8, 0.3, 1.0)));
    let cyan = scene.add_pigment(Pigment::solid((0.3, 1.0, 1.0)));
    let soil = scene.add_pigment(Pigment::solid((0.15, 0.12, 0.18)));

    let crystal = scene.add_finish(SurfaceFinish::phong(0.2, 0.3, 0.5, 100.0).with_reflectivity(0.6));
    let ground_finish = scene.add_finish(SurfaceFinish::phong(0.3, 0.7, 0.0, 1.0));

    scene.add_object(ground(soil, ground_finish));

    // (x, z, radius, height, sides, pigment)
    let crystals = [
        (0.0, 0.0, 8.0, 30.0, 3, red),
        (-25.0, 10.0, 10.0, 35.0, 4, blue),
        (20.0, -15.0, 7.0, 28.0, 5, green),
        (-15.0, -25.0, 9.0, 32.0, 6, purple),
        (30.0, 20.0, 6.0, 25.0, 3, cyan),
        (15.0, 25.0, 8.0, 30.0, 4, red),
        (-30.0, -10.0, 7.0, 27.0, 5, blue),
        (10.0, -30.0, 9.0, 33.0, 3, green),
        (-5.0, 20.0, 6.0, 24.0, 6, purple),
        (25.0, 5.0, 8.0, 29.0, 4, cyan),
    ];
    for (x, z, radius, height, sides, pigment) in crystals {
        scene.add_object(
            Polyhedron::pyramid((x, 0.0, z), radius, height, sides).with_material(pigment, crystal),
        );
    }
    scene
}

/// Nine box buildings standing on the ground plane.
pub fn cityscape() -> Scene {
    let mut scene = Scene::with_camera(camera((100.0, 50.0, -150.0), (0.0, 20.0, 0.0), 50.0));

    scene.add_light(light((200.0, 300.0, -200.0), (1.0, 0.95, 0.8)));
    scene.add_light(light((-100.0, 100.0, -100.0), (0.4, 0.4, 0.5)));

    let concrete = scene.add_pigment(Pigment::solid((0.5, 0.5, 0.5)));
    let glass_blue = scene.add_pigment(Pigment::solid((0.3, 0.4, 0.6)));
    let brick = scene.add_pigment(Pigment::solid((0.6, 0.3, 0.2)));
    let street = scene.add_pigment(Pigment::checker((0.2, 0.2, 0.2), (0.3, 0.3, 0.3), 20.0));

    let matte = scene.add_finish(SurfaceFinish::phong(0.3, 0.7, 0.0, 1.0));
    let glass = scene.add_finish(SurfaceFinish::phong(0.1, 0.2, 0.7, 200.0).with_reflectivity(0.5));

    scene.add_object(ground(street, matte));

    // (x, z, width, height, depth, pigment, finish)
    let buildings = [
        (-40.0, 0.0, 20.0, 60.0, 20.0, concrete, matte),
        (-10.0, 0.0, 15.0, 45.0, 15.0, glass_blue, glass),
        (15.0, 0.0, 25.0, 80.0, 25.0, concrete, matte),
        (50.0, 0.0, 18.0, 55.0, 18.0, brick, matte),
        (-30.0, 35.0, 12.0, 35.0, 12.0, glass_blue, glass),
        (30.0, 30.0, 15.0, 40.0, 15.0, concrete, matte),
        (-50.0, -30.0, 22.0, 50.0, 22.0, brick, matte),
        (0.0, -35.0, 20.0, 70.0, 20.0, glass_blue, glass),
        (40.0, -30.0, 16.0, 45.0, 16.0, concrete, matte),
    ];
    for (x, z, width, height, depth, pigment, finish) in buildings {
        scene.add_object(
            Polyhedron::rectangular_box((x, height / 2.0, z), width, height, depth)
                .with_material(pigment, finish),
        );
    }
    scene
}

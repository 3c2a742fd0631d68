use pixel3d::prelude::*;
use pixel3d::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Meshes from the command line, or a cube in front of the camera when no
/// OBJ paths are given.
fn load_meshes() -> Result<Vec<Mesh>, String> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        let transform = Transform::new(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        return Ok(vec![Mesh::cube(transform)]);
    }

    let mut meshes = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        // Line the models up left to right so they don't overlap.
        let transform = Transform::new(Vec3::new(i as f32 * 5.0, 0.0, 20.0), Vec3::ZERO);
        let mesh = Mesh::from_obj(path, transform).map_err(|e| e.to_string())?;
        meshes.push(mesh);
    }
    Ok(meshes)
}

fn main() -> Result<(), String> {
    let mut window = Window::new("pixel3d", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let camera = Camera::new(Transform::new(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO));
    let light = DirectionalLight::new(Vec3::new(
        45.0_f32.to_radians(),
        -45.0_f32.to_radians(),
        0.0,
    ));
    let mut scene = Scene::new(camera, light);
    scene.meshes = load_meshes()?;

    let mut limiter = FrameLimiter::new(&window);
    let mut snapshot_index = 0u32;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::Snapshot => {
                let path = format!("snapshot_{snapshot_index:03}.png");
                engine.save_snapshot(&path).map_err(|e| e.to_string())?;
                println!("saved {path}");
                snapshot_index += 1;
            }
            WindowEvent::None => {}
        }

        let dt = limiter.wait_and_get_delta(&window);
        let input = window.input_state();
        scene.update(&input, dt);

        engine.render_frame(&scene);
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

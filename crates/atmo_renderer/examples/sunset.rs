//! Renders a low-sun sky dome and a terrain view to PPM.

use atmo_renderer::{render_parallel, Atmosphere, AtmosphereConfig, RenderConfig, Scene, Vec3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sun = Vec3::new(0.0, 0.05, -1.0).normalize();
    let atmosphere = Atmosphere::new(AtmosphereConfig::default().with_sun_direction(sun))?;

    let views = [
        ("sunset_dome.ppm", Scene::default()),
        ("sunset_terrain.ppm", Scene::terrain()),
    ];
    for (name, scene) in views {
        let config = RenderConfig {
            gamma: Some(2.2),
            ..RenderConfig::default().with_resolution(320, 240).with_scene(scene)
        };

        let start = std::time::Instant::now();
        let image = render_parallel(&atmosphere, &config);
        println!("Rendered {} in {:?}", name, start.elapsed());

        image.save(name, config.gamma)?;
    }

    Ok(())
}

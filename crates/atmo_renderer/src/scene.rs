//! What the camera looks at, and the on-disk scene description.

use std::fs;
use std::path::Path;

use atmo_math::{Plane, Ray, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::atmosphere::Atmosphere;
use crate::camera::{sky_dome_direction, LookAtCamera};
use crate::config::{AtmosphereConfig, ConfigResult};
use crate::renderer::{Color, RenderConfig};

/// Ground hits farther than this are treated as sky.
pub const MAX_DISTANCE: f32 = 1e8;

/// Material tag of the terrain plane.
pub const GROUND: u32 = 0;

/// The two ways of looking at the atmosphere.
///
/// Positions are expressed in a local frame whose origin is the point on
/// the planet surface directly above the planet centre, so they do not
/// depend on the planet radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Scene {
    /// Whole-sky fisheye view from a point `altitude` metres above ground.
    SkyDome { altitude: f32 },

    /// Pinhole view over a flat, uniformly coloured ground plane.
    Terrain {
        eye: Vec3,
        look_at: Vec3,
        ground_albedo: Color,
    },
}

impl Default for Scene {
    fn default() -> Self {
        Self::SkyDome { altitude: 1.0 }
    }
}

impl Scene {
    /// Terrain view with the reference camera placement.
    pub fn terrain() -> Self {
        Self::Terrain {
            eye: Vec3::new(0.0, 1.0, 0.0),
            look_at: Vec3::new(0.0, 1.5, -1.0),
            ground_albedo: Color::splat(0.333),
        }
    }

    /// Colour seen through image plane point `p`.
    pub fn shade(&self, atmosphere: &Atmosphere, p: Vec2) -> Color {
        let surface = Vec3::new(0.0, atmosphere.config().planet_radius, 0.0);
        match self {
            Self::SkyDome { altitude } => {
                let origin = surface + Vec3::new(0.0, *altitude, 0.0);
                atmosphere.incident_light(&Ray::new(origin, sky_dome_direction(p)))
            }
            Self::Terrain {
                eye,
                look_at,
                ground_albedo,
            } => {
                let camera = LookAtCamera::new(surface + *eye, surface + *look_at);
                let ray = camera.get_ray(p);
                let ground = Plane::horizontal(surface.y, GROUND);
                match ground.intersect(&ray) {
                    Some(t) if t <= MAX_DISTANCE => *ground_albedo,
                    _ => atmosphere.incident_light(&ray),
                }
            }
        }
    }
}

/// A complete render description: atmosphere constants plus image setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    pub atmosphere: AtmosphereConfig,
    pub render: RenderConfig,
}

impl SceneFile {
    /// Parse and validate a scene description from JSON.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.atmosphere.validate()?;
        scene.render.validate()?;
        Ok(scene)
    }

    /// Load a scene description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;
        log::info!("Loaded scene from {}", path.display());
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> Atmosphere {
        Atmosphere::new(AtmosphereConfig::default()).unwrap()
    }

    #[test]
    fn test_sky_dome_center_matches_zenith() {
        let atmosphere = earth();
        let color = Scene::default().shade(&atmosphere, Vec2::ZERO);

        let origin = Vec3::new(0.0, 6360e3 + 1.0, 0.0);
        let expected = atmosphere.incident_light(&Ray::new(origin, Vec3::Y));
        assert!((color - expected).abs().max_element() <= 1e-6 * expected.max_element());
    }

    #[test]
    fn test_terrain_ground_below_horizon() {
        let atmosphere = earth();
        let color = Scene::terrain().shade(&atmosphere, Vec2::new(0.0, -0.9));
        assert_eq!(color, Color::splat(0.333));
    }

    #[test]
    fn test_terrain_sky_above_horizon() {
        let atmosphere = earth();
        let color = Scene::terrain().shade(&atmosphere, Vec2::new(0.0, 0.5));
        assert_ne!(color, Color::splat(0.333));
        assert!(color.max_element() > 0.0);
    }

    #[test]
    fn test_scene_json_tagged() {
        let scene: Scene =
            serde_json::from_str(r#"{ "type": "sky_dome", "altitude": 1000.0 }"#).unwrap();
        assert_eq!(scene, Scene::SkyDome { altitude: 1000.0 });

        let json = serde_json::to_string(&Scene::terrain()).unwrap();
        assert!(json.contains(r#""type":"terrain""#));
    }

    #[test]
    fn test_scene_file_defaults() {
        let scene = SceneFile::from_json_str("{}").unwrap();
        assert_eq!(scene, SceneFile::default());
    }

    #[test]
    fn test_scene_file_override() {
        let scene = SceneFile::from_json_str(
            r#"{
                "atmosphere": { "sun_direction": [0.0, 0.0, 1.0] },
                "render": {
                    "width": 64,
                    "height": 32,
                    "scene": { "type": "sky_dome", "altitude": 10.0 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(scene.atmosphere.sun_direction, Vec3::Z);
        assert_eq!(scene.render.width, 64);
        assert_eq!(scene.render.height, 32);
        assert_eq!(scene.render.scene, Scene::SkyDome { altitude: 10.0 });
    }

    #[test]
    fn test_load_bundled_scenes() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenes");
        let terrain =
            SceneFile::load(dir.join("sunset_terrain.json")).expect("failed to parse scene");
        assert!(matches!(terrain.render.scene, Scene::Terrain { .. }));
        assert_eq!(terrain.atmosphere.view_samples, 32);

        let dome = SceneFile::load(dir.join("noon_dome.json")).expect("failed to parse scene");
        assert_eq!(dome.render.scene, Scene::default());
    }

    #[test]
    fn test_scene_file_rejects_empty_image() {
        let result = SceneFile::from_json_str(r#"{ "render": { "width": 0 } }"#);
        assert!(result.is_err());
    }
}

//! Image-level driver for the atmosphere integrator.
//!
//! Evaluates one ray per pixel (no anti-aliasing) and stores linear
//! colours in an `ImageBuffer`.

use std::time::Instant;

use atmo_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::atmosphere::Atmosphere;
use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::camera::camera_point;
use crate::config::{ConfigError, ConfigResult};
use crate::scene::Scene;

/// Linear RGB radiance.
pub type Color = Vec3;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Camera setup
    pub scene: Scene,
    /// Display gamma applied when converting to 8-bit; `None` keeps linear values
    pub gamma: Option<f32>,
    /// Tile edge length for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scene: Scene::default(),
            gamma: None,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        if let Some(gamma) = self.gamma {
            if !(gamma > 0.0) {
                return Err(ConfigError::InvalidGamma(gamma));
            }
        }
        Ok(())
    }
}

/// Apply display gamma.
#[inline]
pub fn linear_to_gamma(linear: f32, gamma: f32) -> f32 {
    if linear > 0.0 {
        linear.powf(1.0 / gamma)
    } else {
        0.0
    }
}

/// Convert a color to 8-bit RGBA, optionally gamma-correcting first.
pub fn color_to_rgba(color: Color, gamma: Option<f32>) -> [u8; 4] {
    let encode = |c: f32| {
        let c = match gamma {
            Some(gamma) => linear_to_gamma(c, gamma),
            None => c,
        };
        (255.0 * c.clamp(0.0, 1.0)) as u8
    };
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Render a single pixel.
pub fn render_pixel(atmosphere: &Atmosphere, config: &RenderConfig, x: u32, y: u32) -> Color {
    let p = camera_point(x, y, config.width, config.height);
    config.scene.shade(atmosphere, p)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self, gamma: Option<f32>) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color, gamma));
        }
        bytes
    }
}

/// Render the entire image on the calling thread.
pub fn render(atmosphere: &Atmosphere, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    log::info!("Rendering {}x{} {:?}", config.width, config.height, config.scene);

    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, render_pixel(atmosphere, config, x, y));
        }
    }

    log::info!("Rendered {} pixels in {:?}", image.pixels.len(), start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AtmosphereConfig;

    fn small_config() -> RenderConfig {
        RenderConfig::default().with_resolution(9, 7)
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0, 2.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0, 2.2), 0.0);
        assert!((linear_to_gamma(1.0, 2.2) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25, 2.0) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::new(0.0, 1.0, 5.0), None), [0, 255, 255, 255]);
        assert_eq!(color_to_rgba(Color::splat(0.25), Some(2.0)), [127, 127, 127, 255]);
        assert_eq!(color_to_rgba(Color::splat(-3.0), None), [0, 0, 0, 255]);
    }

    #[test]
    fn test_render_config_validation() {
        assert!(RenderConfig::default().validate().is_ok());
        assert!(matches!(
            RenderConfig::default().with_resolution(0, 10).validate(),
            Err(ConfigError::EmptyImage { .. })
        ));

        let config = RenderConfig {
            bucket_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroBucketSize)));

        let config = RenderConfig {
            gamma: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGamma(_))));
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(3, 2, Color::ONE);

        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.to_rgba(None).len(), 4 * 3 * 4);
    }

    #[test]
    fn test_large_image_index() {
        // 70000^2 pixels overflows u32
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 70_000 * 70_000 - 1);
        assert_eq!(image.index(5, 1), 70_005);
    }

    #[test]
    fn test_render_sky_dome() {
        let atmosphere = Atmosphere::new(AtmosphereConfig::default()).unwrap();
        let config = small_config();
        let image = render(&atmosphere, &config);

        assert_eq!(image.pixels.len(), 9 * 7);
        assert!(image.pixels.iter().all(|c| c.is_finite() && c.min_element() >= 0.0));

        // Centre pixel looks at the zenith, which is lit by the overhead sun
        assert!(image.get(4, 3).max_element() > 0.0);
        assert_eq!(image.get(4, 3), render_pixel(&atmosphere, &config, 4, 3));
    }
}

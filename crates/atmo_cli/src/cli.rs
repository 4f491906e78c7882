//! Command-line argument parsing.

use std::path::PathBuf;

use atmo_renderer::{MieOutput, Scene, SceneFile, Vec3};
use clap::{Parser, ValueEnum};

/// Render a single-scattering sky to an image file.
///
/// CLI values override settings loaded from `--config`.
#[derive(Parser, Debug)]
#[command(name = "atmo", about = "Rayleigh/Mie sky renderer")]
pub struct CliArgs {
    /// Scene description (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Image width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Output file (.png or .ppm).
    #[arg(long, short, default_value = "sky.png")]
    pub output: PathBuf,

    /// Display gamma applied when writing the image.
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Look over flat terrain instead of rendering the whole sky dome.
    #[arg(long)]
    pub terrain: bool,

    /// Direction toward the sun as `x,y,z`; normalized before use.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub sun: Option<Vec3>,

    /// Coefficients used to weight the Mie term.
    #[arg(long, value_enum)]
    pub mie_output: Option<MieOutputArg>,

    /// Render on the calling thread only.
    #[arg(long)]
    pub sequential: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MieOutputArg {
    Rayleigh,
    Mie,
}

impl From<MieOutputArg> for MieOutput {
    fn from(arg: MieOutputArg) -> Self {
        match arg {
            MieOutputArg::Rayleigh => MieOutput::Rayleigh,
            MieOutputArg::Mie => MieOutput::Mie,
        }
    }
}

/// Parse `x,y,z` into a normalized vector.
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected three comma-separated numbers, got {}", parts.len()));
    };

    Vec3::new(x, y, z)
        .try_normalize()
        .ok_or_else(|| format!("direction {s:?} has zero length"))
}

impl CliArgs {
    /// Apply CLI overrides to a loaded scene.
    pub fn apply_overrides(&self, scene: &mut SceneFile) {
        if let Some(w) = self.width {
            scene.render.width = w;
        }
        if let Some(h) = self.height {
            scene.render.height = h;
        }
        if self.gamma.is_some() {
            scene.render.gamma = self.gamma;
        }
        if self.terrain {
            scene.render.scene = Scene::terrain();
        }
        if let Some(sun) = self.sun {
            scene.atmosphere.sun_direction = sun;
        }
        if let Some(mie_output) = self.mie_output {
            scene.atmosphere.mie_output = mie_output.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("0,2,0"), Ok(Vec3::Y));
        assert_eq!(parse_vec3(" -1 , 0 , 0 "), Ok(-Vec3::X));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("a,b,c").is_err());
        assert!(parse_vec3("0,0,0").is_err());
    }

    #[test]
    fn test_cli_override() {
        let args = CliArgs::parse_from([
            "atmo",
            "--width",
            "320",
            "--terrain",
            "--sun",
            "1,1,0",
            "--mie-output",
            "mie",
        ]);
        let mut scene = SceneFile::default();
        args.apply_overrides(&mut scene);

        assert_eq!(scene.render.width, 320);
        assert_eq!(scene.render.scene, Scene::terrain());
        let sun = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((scene.atmosphere.sun_direction - sun).length() < 1e-6);
        assert_eq!(scene.atmosphere.mie_output, MieOutput::Mie);
        // Non-overridden fields retain defaults
        assert_eq!(scene.render.height, 512);
        assert_eq!(args.output, PathBuf::from("sky.png"));
    }

    #[test]
    fn test_cli_no_override() {
        let args = CliArgs::parse_from(["atmo"]);
        let mut scene = SceneFile::default();
        args.apply_overrides(&mut scene);
        assert_eq!(scene, SceneFile::default());
    }
}

//! Writing rendered images to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ColorType, ImageFormat};
use thiserror::Error;

use crate::renderer::{color_to_rgba, ImageBuffer};

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

impl ImageBuffer {
    /// Save the image, picking the format from the file extension.
    ///
    /// `.png` is written through the `image` crate, `.ppm` as ASCII P3.
    pub fn save(&self, path: impl AsRef<Path>, gamma: Option<f32>) -> OutputResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => image::save_buffer_with_format(
                path,
                &self.to_rgba(gamma),
                self.width,
                self.height,
                ColorType::Rgba8,
                ImageFormat::Png,
            )?,
            "ppm" => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.write_ppm(&mut writer, gamma)?;
                writer.flush()?;
            }
            _ => return Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Write the image as an ASCII PPM (P3).
    pub fn write_ppm<W: Write>(&self, writer: &mut W, gamma: Option<f32>) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for y in 0..self.height {
            for x in 0..self.width {
                let rgba = color_to_rgba(self.get(x, y), gamma);
                writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
            }
        }

        Ok(())
    }
}

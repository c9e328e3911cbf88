// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Fixed transform applied to every profile picture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSpec {
    /// Edge length of the square output, in pixels.
    pub size: u32,
    /// Exclusive lower bound on width / height.
    pub min_aspect: f64,
    /// Exclusive upper bound on width / height.
    pub max_aspect: f64,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            size: IMAGE_SIZE,
            min_aspect: MIN_ASPECT,
            max_aspect: MAX_ASPECT,
        }
    }
}

impl ImageSpec {
    pub fn accepts(&self, width: u32, height: u32) -> bool {
        if height == 0 {
            return false;
        }
        let ratio = width as f64 / height as f64;
        self.min_aspect < ratio && ratio < self.max_aspect
    }
}

/// Everything one batch run needs. Built from defaults and overridden by the CLI.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub csv_url: String,
    pub out_dir: PathBuf,
    pub placeholder_url: Option<String>,
    pub workers: usize,
    pub image: ImageSpec,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            csv_url: s!(CSV_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            placeholder_url: Some(s!(PLACEHOLDER_IMAGE_URL)),
            workers: WORKERS,
            image: ImageSpec::default(),
        }
    }
}

impl RunOptions {
    pub fn image_dir(&self) -> PathBuf {
        self.out_dir.join(IMAGE_SUBDIR)
    }

    pub fn output_json(&self) -> PathBuf {
        self.out_dir.join(OUTPUT_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_published_paths() {
        let opts = RunOptions::default();
        assert_eq!(opts.image_dir(), PathBuf::from("tmp").join("images"));
        assert_eq!(opts.output_json(), PathBuf::from("tmp").join("data.json"));
        assert_eq!(opts.workers, 1);
    }

    #[test]
    fn aspect_window_is_exclusive() {
        let spec = ImageSpec::default();
        assert!(spec.accepts(104, 100));
        assert!(spec.accepts(100, 104));
        assert!(!spec.accepts(106, 100));
        assert!(!spec.accepts(100, 106));
        assert!(!spec.accepts(10, 0));
    }
}

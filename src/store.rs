// src/store.rs
//
// Content-addressed image cache.
//
// A cached picture is named after a hash of its *source URL string*, so the
// same link always lands on the same file across runs. An existing file is
// trusted as-is; it only gets replaced when a fresh fetch succeeds.

use std::io::Write;
use std::path::PathBuf;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::config::consts::{IMAGE_EXT, PLACEHOLDER_STEM};
use crate::error::StoreError;
use crate::file::ensure_directory;

/// File name (no directory) for a picture fetched from `url`.
pub fn content_address(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    join!(&hex::encode(digest), ".", IMAGE_EXT)
}

#[derive(Clone, Debug)]
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    /// Open the cache at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        ensure_directory(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.path_for(file_name).is_file()
    }

    pub fn placeholder_name() -> String {
        join!(PLACEHOLDER_STEM, ".", IMAGE_EXT)
    }

    /// Encode `img` as JPEG and write it under `file_name`, replacing any
    /// previous copy. Each call writes its own temp file in the cache dir and
    /// renames it into place, so concurrent stores of the same name never
    /// see each other's partial bytes. The temp file is removed on failure.
    pub fn store(&self, file_name: &str, img: &RgbImage) -> Result<PathBuf, StoreError> {
        let path = self.path_for(file_name);

        let mut buf = Vec::new();
        JpegEncoder::new(&mut buf)
            .encode_image(img)
            .map_err(|source| StoreError::Encode { path: path.clone(), source })?;

        let mut part = NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        part.write_all(&buf).map_err(|e| StoreError::io(part.path(), e))?;
        part.persist(&path).map_err(|e| StoreError::io(&path, e.error))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;

    use image::Rgb;

    #[test]
    fn address_is_stable_and_url_sensitive() {
        let a = content_address("https://example.com/ada.png");
        assert_eq!(a, content_address("https://example.com/ada.png"));
        assert_ne!(a, content_address("https://example.com/Ada.png"));
        assert!(a.ends_with(".jpg"));
        // sha-256 hex + ".jpg"
        assert_eq!(a.len(), 64 + 4);
        assert!(a[..64].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn open_creates_directory_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out").join("images");
        ImageCache::open(&dir).unwrap();
        ImageCache::open(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn open_rejects_a_file_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("images");
        fs::write(&dir, b"not a dir").unwrap();
        assert!(matches!(ImageCache::open(&dir), Err(StoreError::NotADirectory(_))));
    }

    #[test]
    fn store_writes_decodable_jpeg() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ImageCache::open(tmp.path()).unwrap();
        let name = content_address("https://example.com/a.png");
        assert!(!cache.contains(&name));

        let img = RgbImage::from_pixel(256, 256, Rgb([10, 20, 30]));
        let path = cache.store(&name, &img).unwrap();
        assert!(cache.contains(&name));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);

        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (256, 256));
    }

    #[test]
    fn concurrent_stores_of_one_name_all_succeed() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ImageCache::open(tmp.path()).unwrap();
        let name = content_address("https://example.com/shared.png");
        let img = RgbImage::from_pixel(256, 256, Rgb([90, 90, 90]));

        for _ in 0..10 {
            thread::scope(|scope| {
                let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| cache.store(&name, &img))).collect();
                for h in handles {
                    assert!(h.join().unwrap().is_ok());
                }
            });
        }
        assert!(cache.contains(&name));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn empty_picture_fails_to_encode_and_leaves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ImageCache::open(tmp.path()).unwrap();
        let err = cache.store("empty.jpg", &RgbImage::new(0, 0)).unwrap_err();
        assert!(matches!(err, StoreError::Encode { .. }));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}

// src/config/consts.rs

// Source sheet
pub const CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQpWu2GwKfZF5VQLFGHWuWiPSk-riYszgiKYocCjAJG0vM1HNSZaJ5uAdUCjWoMcbVn1gWPAx2HNj7B/pub?gid=0&single=true&output=csv";

// Output layout
pub const DEFAULT_OUT_DIR: &str = "tmp";
pub const IMAGE_SUBDIR: &str = "images";
pub const OUTPUT_JSON: &str = "data.json";

// Image cache
pub const IMAGE_EXT: &str = "jpg";
pub const IMAGE_SIZE: u32 = 256;
pub const MIN_ASPECT: f64 = 0.95;
pub const MAX_ASPECT: f64 = 1.05;

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.assetsdelivery.com/compings_v2/apoev/apoev1901/apoev190100061.jpg";
pub const PLACEHOLDER_STEM: &str = "placeholder";

// Console
pub const PRINT_WIDTH: usize = 70;

// Concurrency
pub const WORKERS: usize = 1;

// Sheet layout: header line is row 1, first data row is row 2.
pub const FIRST_DATA_ROW: usize = 2;

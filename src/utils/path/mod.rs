//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `slash_path`)
//! - [`route`]: URL utilities (`is_external_link`, `split_path_fragment`, `normalize_route`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, slash_path};
pub use route::{is_external_link, normalize_route, split_path_fragment, strip_query};

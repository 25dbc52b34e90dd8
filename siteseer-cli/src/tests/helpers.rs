//! Test helpers for composing analyze CLI fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir")
}

/// A request whose reference area matches the first dataset record exactly.
pub(super) const PILOT_REQUEST: &str = r#"{
  "reference": {
    "id": 9,
    "name": "Pilot district",
    "address": "21 Main Rd",
    "population_density": 25000,
    "business_density": 40.0,
    "rent_price": 500000.0,
    "competitor_count": 5,
    "transportation_score": 80
  },
  "config": {"name": "default"},
  "max_results": 5
}"#;

/// Two candidates: a twin of the pilot reference and a poorly matching area.
pub(super) const TWIN_DATASET: &str = r#"[
  {
    "id": 1,
    "name": "Area 1",
    "address": "1 Main St",
    "region": "Mapo",
    "population_total": 25000,
    "population_density": 25000,
    "business_density": 40.0,
    "rent_price": 500000.0,
    "competitor_count": 5,
    "transportation_score": 80,
    "floating_population": 50000
  },
  {
    "id": 2,
    "name": "Area 2",
    "address": "2 Side St",
    "population_total": 25000,
    "population_density": 3000,
    "business_density": 5.0,
    "rent_price": 4500000.0,
    "competitor_count": 19,
    "transportation_score": 10
  }
]"#;

pub mod config;
pub mod contig_interval;
pub mod coverage;
pub mod error;
pub mod fetch;
pub mod interval;
pub mod source;
pub mod store;

pub use config::TrackConfig;
pub use contig_interval::{ContigInterval, coalesce};
pub use coverage::CoverageTracker;
pub use error::{Error, Result};
pub use fetch::{BedRow, FeatureBlock, RegionFetcher};
pub use interval::Interval;
pub use source::{GenomeRange, RegionSource};
pub use store::{BedRegion, RegionId, RegionStore, parse_bed_row};

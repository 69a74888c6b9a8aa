//! Remote-source abstraction for region tracks.
//!
//! This module provides a trait-based abstraction over the component that
//! actually retrieves feature data, allowing different transports (BigBed
//! over HTTP, local files, in-memory fixtures) to be used interchangeably.
//! Decoding the remote binary format into rows, retries and timeouts all
//! live behind this seam; the cache only sees blocks of already-split rows.

use crate::Result;
use crate::contig_interval::ContigInterval;
use async_trait::async_trait;

/// One raw feature row as decoded from the remote format.
///
/// The leading BED fields are typed; anything past the name column is
/// carried verbatim in `fields`.
#[derive(Debug, Clone)]
pub struct BedRow {
    pub contig: String,
    pub start: u64,
    pub stop: u64,
    pub fields: Vec<String>,
}

/// One unit of fetch response: the range the rows fully cover, plus the
/// rows themselves. A single fetch may resolve to several blocks.
#[derive(Debug, Clone)]
pub struct FeatureBlock {
    pub range: ContigInterval<String>,
    pub rows: Vec<BedRow>,
}

/// Remote fetch collaborator.
#[async_trait]
pub trait RegionFetcher: Send + Sync {
    /// Retrieve every feature block overlapping `range`.
    ///
    /// Each returned block's `range` must fully cover its rows; it may be
    /// wider than the requested range (block-aligned sources return whole
    /// blocks).
    async fn fetch_blocks_overlapping(
        &self,
        range: &ContigInterval<String>,
    ) -> Result<Vec<FeatureBlock>>;
}

//! Range-driven fetch orchestration over a remote region source.
//!
//! A [`RegionSource`] owns one coverage cache and one region store per
//! remote source binding. Viewport changes come in as [`GenomeRange`]
//! requests; ranges already covered are answered from the cache, uncovered
//! ranges trigger exactly one fetch, and every integrated block is announced
//! on a broadcast channel so listeners can re-query the store.
//!
//! All shared state sits behind a single async mutex that is never held
//! across the fetch await. Deduplication of concurrent overlapping requests
//! relies on marking the requested range as pending under that lock before
//! suspending: the second of two racing requests observes the mark and
//! issues no fetch of its own.

use crate::config::TrackConfig;
use crate::contig_interval::ContigInterval;
use crate::coverage::CoverageTracker;
use crate::fetch::RegionFetcher;
use crate::store::{BedRegion, RegionStore, parse_bed_row};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};

/// A viewport range-change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeRange {
    pub contig: String,
    pub start: u64,
    pub stop: u64,
}

struct CacheState {
    regions: RegionStore,
    /// Ranges whose data has fully arrived.
    covered: CoverageTracker<String>,
    /// Ranges with a fetch in flight. Removed on completion either way, so
    /// a failed fetch never leaves a stale covered mark behind.
    pending: Vec<ContigInterval<String>>,
    /// Coalesce of covered and pending, consulted by the dedup check.
    /// Rebuilt after every mutation of the other two.
    effective: CoverageTracker<String>,
}

impl CacheState {
    fn new() -> Self {
        Self {
            regions: RegionStore::new(),
            covered: CoverageTracker::new(),
            pending: Vec::new(),
            effective: CoverageTracker::new(),
        }
    }

    fn rebuild_effective(&mut self) {
        let mut all = self.covered.ranges().to_vec();
        all.extend(self.pending.iter().cloned());
        self.effective = CoverageTracker::from_ranges(all);
    }

    fn remove_pending(&mut self, range: &ContigInterval<String>) {
        if let Some(i) = self.pending.iter().position(|p| p == range) {
            self.pending.remove(i);
        }
    }
}

/// Caching front end for one remote region track.
pub struct RegionSource {
    fetcher: Arc<dyn RegionFetcher>,
    state: Mutex<CacheState>,
    new_data: broadcast::Sender<ContigInterval<String>>,
}

impl RegionSource {
    pub fn new(fetcher: Arc<dyn RegionFetcher>) -> Self {
        let (new_data, _) = broadcast::channel(64);
        Self {
            fetcher,
            state: Mutex::new(CacheState::new()),
            new_data,
        }
    }

    /// Build a source from a track configuration, validating the locator
    /// up front.
    pub fn from_track(config: &TrackConfig, fetcher: Arc<dyn RegionFetcher>) -> Result<Self> {
        let url = config.source_url()?;
        tracing::info!(url = %url, "creating region source");
        Ok(Self::new(fetcher))
    }

    /// Subscribe to new-data notifications. One event fires per integrated
    /// block, carrying the block's coverage range.
    pub fn subscribe(&self) -> broadcast::Receiver<ContigInterval<String>> {
        self.new_data.subscribe()
    }

    /// Every cached record intersecting `range`.
    ///
    /// Reflects only data that has fully arrived; during an in-flight fetch
    /// of an overlapping range this returns fewer (or no) records until the
    /// corresponding new-data event fires.
    pub async fn get_regions_in_range(&self, range: &ContigInterval<String>) -> Vec<BedRegion> {
        let state = self.state.lock().await;
        state
            .regions
            .query_range(range)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Handle a viewport range change, fetching the range's feature blocks
    /// unless it is already covered or a covering fetch is in flight.
    pub async fn range_changed(&self, range: &GenomeRange) -> Result<()> {
        if range.start > range.stop {
            return Err(Error::InvalidRange(format!(
                "{}:{}-{}",
                range.contig, range.start, range.stop
            )));
        }
        let query = ContigInterval::new(range.contig.clone(), range.start, range.stop);

        {
            let mut state = self.state.lock().await;
            if state.effective.is_covered(&query) {
                tracing::debug!(range = %query, "range already covered");
                return Ok(());
            }
            // Mark before suspending so concurrent requests for this range
            // observe it and do not fetch again.
            state.pending.push(query.clone());
            state.rebuild_effective();
        }

        tracing::debug!(range = %query, "fetching feature blocks");
        let blocks = match self.fetcher.fetch_blocks_overlapping(&query).await {
            Ok(blocks) => blocks,
            Err(e) => {
                // Forget the optimistic mark so a later request retries.
                let mut state = self.state.lock().await;
                state.remove_pending(&query);
                state.rebuild_effective();
                return Err(e);
            }
        };

        let mut state = self.state.lock().await;
        for block in blocks {
            for row in &block.rows {
                match parse_bed_row(row) {
                    Ok(region) => {
                        state.regions.add(region);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed BED row");
                    }
                }
            }
            state.covered.mark_covered(block.range.clone());
            // nobody subscribed yet is fine
            let _ = self.new_data.send(block.range);
        }
        state.remove_pending(&query);
        state.covered.mark_covered(query);
        state.rebuild_effective();

        Ok(())
    }
}

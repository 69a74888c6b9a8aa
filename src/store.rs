//! Deduplicated storage of parsed region records.

use crate::contig_interval::ContigInterval;
use crate::fetch::BedRow;
use crate::{Error, Result};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// Composite identity of a region record.
///
/// The legacy identity was the bare concatenation of contig, start and stop,
/// which collides across distinct triples ("chr1" + 210 + 300 and "chr12" +
/// 10 + 300 both yield "chr1210300"). Keying on the structured triple keeps
/// such records distinct; the concatenated form survives only as
/// [`BedRegion::id`] for callers that expect it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId {
    pub contig: String,
    pub start: u64,
    pub stop: u64,
}

/// A parsed feature record positioned on the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedRegion {
    pub position: ContigInterval<String>,
    pub name: Option<String>,
}

impl BedRegion {
    pub fn region_id(&self) -> RegionId {
        RegionId {
            contig: self.position.contig.clone(),
            start: self.position.start(),
            stop: self.position.stop(),
        }
    }

    /// Derived identity in the legacy concatenated form.
    pub fn id(&self) -> String {
        format!(
            "{}{}{}",
            self.position.contig,
            self.position.start(),
            self.position.stop()
        )
    }
}

/// Parse one raw row into a region record.
///
/// The fields are described at http://genome.ucsc.edu/FAQ/FAQformat#format1
pub fn parse_bed_row(row: &BedRow) -> Result<BedRegion> {
    if row.contig.is_empty() {
        return Err(Error::InvalidInput("BED row has an empty contig".into()));
    }
    if row.start > row.stop {
        return Err(Error::InvalidRange(format!(
            "BED row start {} exceeds stop {}",
            row.start, row.stop
        )));
    }

    Ok(BedRegion {
        position: ContigInterval::new(row.contig.clone(), row.start, row.stop),
        name: row.fields.first().cloned(),
    })
}

/// Collection of region records, deduplicated by identity.
///
/// Iteration follows insertion order, which keeps query results
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: IndexMap<RegionId, BedRegion>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless one with the same identity is already
    /// present. First-seen wins; duplicates are dropped, never overwritten.
    /// Returns whether the record was newly inserted.
    pub fn add(&mut self, region: BedRegion) -> bool {
        match self.regions.entry(region.region_id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(region);
                true
            }
        }
    }

    /// Every stored record whose position intersects `range`, in insertion
    /// order.
    pub fn query_range(&self, range: &ContigInterval<String>) -> Vec<&BedRegion> {
        self.regions
            .values()
            .filter(|r| range.intersects(&r.position))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

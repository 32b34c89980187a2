//! Sampler result normalization.
//!
//! Turns a raw Sampler results payload (a quasi-probability distribution
//! keyed by bitstring) into a flat list of measurement outcomes plus the
//! distribution itself.
//!
//! Two properties are inherited from the wire format and kept as-is:
//!
//! - The qubit count is the length of the first bitstring key. Keys of
//!   differing lengths are neither detected nor corrected.
//! - Each outcome is repeated `round(p * shots)` times, so the number of
//!   measurements may drift from `shots` by rounding.
//!
//! The expansion is capped at [`MEASUREMENT_LIMIT_FACTOR`] times `shots`;
//! payloads beyond it are rejected before anything is allocated.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{IbmError, IbmResult};

/// Qubit count reported when the distribution is empty.
pub const DEFAULT_QUBITS: usize = 8;

/// Upper bound on the expanded measurement count, as a multiple of `shots`.
pub const MEASUREMENT_LIMIT_FACTOR: u64 = 2;

/// Where a quasi-distribution may live in a results payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionLocation {
    /// `payload.quasi_dists[0]`
    TopLevel,
    /// `payload.results.quasi_dists[0]`
    Nested,
}

impl DistributionLocation {
    /// Lookup order; the first location holding an object wins.
    pub const SEARCH_ORDER: [DistributionLocation; 2] =
        [DistributionLocation::TopLevel, DistributionLocation::Nested];

    /// The distribution object at this location, if present.
    pub fn lookup(self, payload: &Value) -> Option<&Map<String, Value>> {
        let container = match self {
            DistributionLocation::TopLevel => payload,
            DistributionLocation::Nested => payload.get("results")?,
        };
        container.get("quasi_dists")?.get(0)?.as_object()
    }
}

/// Find the first quasi-distribution in `payload`, with the location it came
/// from.
pub fn locate_distribution(
    payload: &Value,
) -> Option<(DistributionLocation, &Map<String, Value>)> {
    DistributionLocation::SEARCH_ORDER
        .into_iter()
        .find_map(|loc| loc.lookup(payload).map(|dist| (loc, dist)))
}

/// Normalized measurement data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    /// Outcomes expanded by weight, in distribution order.
    pub measurements: Vec<String>,
    /// The extracted distribution, unchanged.
    pub probabilities: IndexMap<String, Value>,
    /// Bit length of the first outcome key.
    pub qubits: usize,
    /// Shot count used for expansion.
    pub shots: u32,
}

/// Normalize a raw Sampler results payload.
///
/// A missing distribution is treated as empty. Entries whose value is not a
/// number are copied into `probabilities` but produce no measurements.
///
/// Fails with [`IbmError::TooManyMeasurements`] when the expansion would
/// exceed `MEASUREMENT_LIMIT_FACTOR * shots` entries.
pub fn normalize(payload: &Value, shots: u32) -> IbmResult<NormalizedResult> {
    let probabilities: IndexMap<String, Value> = match locate_distribution(payload) {
        Some((location, dist)) => {
            tracing::trace!(?location, entries = dist.len(), "located quasi-distribution");
            dist.iter()
                .map(|(bitstring, p)| (bitstring.clone(), p.clone()))
                .collect()
        }
        None => IndexMap::new(),
    };

    let qubits = probabilities
        .keys()
        .next()
        .map_or(DEFAULT_QUBITS, String::len);

    let limit = u64::from(shots) * MEASUREMENT_LIMIT_FACTOR;
    let too_many = || IbmError::TooManyMeasurements { limit };

    let mut counts = Vec::with_capacity(probabilities.len());
    let mut total: u64 = 0;
    for (bitstring, p) in &probabilities {
        let Some(p) = p.as_f64() else { continue };
        let count = shot_count(p, shots);
        total = total
            .checked_add(count)
            .filter(|&t| t <= limit)
            .ok_or_else(too_many)?;
        counts.push((bitstring, usize::try_from(count).map_err(|_| too_many())?));
    }

    let mut measurements = Vec::with_capacity(usize::try_from(total).map_err(|_| too_many())?);
    for (bitstring, count) in counts {
        measurements.extend(std::iter::repeat_n(bitstring.clone(), count));
    }

    Ok(NormalizedResult {
        measurements,
        probabilities,
        qubits,
        shots,
    })
}

/// `round(p * shots)`, with non-positive and non-finite results mapped to 0.
///
/// Saturates at `u64::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shot_count(probability: f64, shots: u32) -> u64 {
    let count = (probability * f64::from(shots)).round();
    if count.is_finite() && count > 0.0 {
        count as u64
    } else {
        0
    }
}

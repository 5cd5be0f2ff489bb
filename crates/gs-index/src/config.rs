//! Pole placement for [`GeoSpoke`](crate::GeoSpoke).

use gs_core::GeoPoint;

use crate::{IndexError, IndexResult};

/// Where `GeoSpoke` puts its two reference poles.
///
/// Any two distinct valid points keep queries exact; placement only affects
/// how many false candidates survive pruning.  Poles 90° apart (the default:
/// equator/prime meridian and the north pole) prune along independent
/// directions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpokeConfig {
    pub poles: [GeoPoint; 2],
}

impl SpokeConfig {
    pub const EQUATOR_PRIME_MERIDIAN: GeoPoint = GeoPoint::new(0.0, 0.0);
    pub const NORTH_POLE: GeoPoint = GeoPoint::new(90.0, 0.0);

    pub fn with_poles(pole0: GeoPoint, pole1: GeoPoint) -> Self {
        Self { poles: [pole0, pole1] }
    }

    /// Both poles must be valid coordinates and must not coincide.
    pub fn validate(&self) -> IndexResult<()> {
        for (i, pole) in self.poles.iter().enumerate() {
            pole.validate()
                .map_err(|e| IndexError::InvalidInput(format!("pole {i} {pole}: {e}")))?;
        }
        let [p0, p1] = self.poles;
        if p0.distance_m(p1) == 0.0 {
            return Err(IndexError::InvalidInput(format!(
                "poles must not coincide: {p0} and {p1}"
            )));
        }
        Ok(())
    }
}

impl Default for SpokeConfig {
    fn default() -> Self {
        Self::with_poles(Self::EQUATOR_PRIME_MERIDIAN, Self::NORTH_POLE)
    }
}

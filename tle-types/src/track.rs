use crate::{geo::GroundPosition, time::UtcTimestamp};
use derive_more::Display;
use serde::{Serialize, Serializer};

/// Ground positions sampled forward in time, ending at an antemeridian
/// crossing or a time budget
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct OrbitTrack {
    pub points: Vec<GroundPosition>,
}

impl OrbitTrack {
    pub fn new(points: Vec<GroundPosition>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&GroundPosition> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GroundPosition> {
        self.points.last()
    }

    pub fn lat_lng_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GroundPosition::lat_lng).collect()
    }

    /// GeoJSON ordering
    pub fn lng_lat_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GroundPosition::lng_lat).collect()
    }
}

impl FromIterator<GroundPosition> for OrbitTrack {
    fn from_iter<T: IntoIterator<Item = GroundPosition>>(iter: T) -> Self {
        OrbitTrack::new(iter.into_iter().collect())
    }
}

/// The ground track around a query time.
///
/// Serializes as a list of tracks in chronological order, whichever the variant.
#[derive(Clone, PartialEq, Debug)]
pub enum GroundTrack {
    /// Three consecutive orbits, each bounded by antemeridian crossings
    Orbits {
        previous: OrbitTrack,
        current: OrbitTrack,
        next: OrbitTrack,
    },
    /// A single long-horizon track for orbits that never reach the antemeridian
    Continuous(OrbitTrack),
}

impl GroundTrack {
    /// Tracks in chronological order
    pub fn tracks(&self) -> Vec<&OrbitTrack> {
        match self {
            GroundTrack::Orbits {
                previous,
                current,
                next,
            } => vec![previous, current, next],
            GroundTrack::Continuous(t) => vec![t],
        }
    }

    pub fn lat_lng(&self) -> Vec<Vec<[f64; 2]>> {
        self.tracks().into_iter().map(OrbitTrack::lat_lng_pairs).collect()
    }

    pub fn lng_lat(&self) -> Vec<Vec<[f64; 2]>> {
        self.tracks().into_iter().map(OrbitTrack::lng_lat_pairs).collect()
    }
}

impl Serialize for GroundTrack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tracks())
    }
}

/// Outcome of an antemeridian crossing search
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum Crossing {
    #[display(fmt = "{}", _0)]
    Found(UtcTimestamp),
    /// The ground track never nears the antemeridian (or the search didn't converge)
    #[display(fmt = "not found")]
    NotFound,
}

impl Crossing {
    pub fn timestamp(self) -> Option<UtcTimestamp> {
        match self {
            Crossing::Found(t) => Some(t),
            Crossing::NotFound => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize)]
pub enum Compass {
    #[display(fmt = "NE")]
    NorthEast,
    #[display(fmt = "NW")]
    NorthWest,
    #[display(fmt = "SE")]
    SouthEast,
    #[display(fmt = "SW")]
    SouthWest,
}

impl Compass {
    pub fn from_heading(north: bool, east: bool) -> Self {
        match (north, east) {
            (true, true) => Compass::NorthEast,
            (true, false) => Compass::NorthWest,
            (false, true) => Compass::SouthEast,
            (false, false) => Compass::SouthWest,
        }
    }
}

/// Direction of travel over the ground
#[derive(Copy, Clone, PartialEq, Debug, Display, Serialize)]
#[display(fmt = "{:.2}° ({})", "degrees", "compass")]
pub struct Bearing {
    /// Initial great-circle bearing, -180..=180 [deg]
    pub degrees: f64,
    pub compass: Compass,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(points: &[(f64, f64)]) -> OrbitTrack {
        points
            .iter()
            .map(|(lat, lng)| GroundPosition::new(*lat, *lng))
            .collect()
    }

    #[test]
    fn ground_track_order() {
        let gt = GroundTrack::Orbits {
            previous: track(&[(1.0, 2.0)]),
            current: track(&[(3.0, 4.0)]),
            next: track(&[(5.0, 6.0)]),
        };
        assert_eq!(
            gt.lat_lng(),
            vec![vec![[1.0, 2.0]], vec![[3.0, 4.0]], vec![[5.0, 6.0]]]
        );
        assert_eq!(
            gt.lng_lat(),
            vec![vec![[2.0, 1.0]], vec![[4.0, 3.0]], vec![[6.0, 5.0]]]
        );

        let gt = GroundTrack::Continuous(track(&[(0.0, 1.0), (0.5, 1.5)]));
        assert_eq!(gt.tracks().len(), 1);
    }

    #[test]
    fn compass() {
        assert_eq!(Compass::from_heading(false, false).to_string(), "SW");
        assert_eq!(Compass::from_heading(true, true).to_string(), "NE");
        let b = Bearing {
            degrees: 135.123,
            compass: Compass::SouthEast,
        };
        assert_eq!(b.to_string(), "135.12° (SE)");
    }

    #[test]
    fn serializes_as_plain_arrays() {
        let t = track(&[(1.0, 2.0)]);
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"[{"lat":1.0,"lng":2.0}]"#
        );
        assert_eq!(
            serde_json::to_string(&Crossing::NotFound).unwrap(),
            r#""NotFound""#
        );
    }

    #[test]
    fn ground_tracks_serialize_as_a_list_of_tracks() {
        let gt = GroundTrack::Orbits {
            previous: track(&[(1.0, 2.0)]),
            current: track(&[(3.0, 4.0)]),
            next: track(&[]),
        };
        assert_eq!(
            serde_json::to_string(&gt).unwrap(),
            r#"[[{"lat":1.0,"lng":2.0}],[{"lat":3.0,"lng":4.0}],[]]"#
        );

        let gt = GroundTrack::Continuous(track(&[(5.0, 6.0)]));
        assert_eq!(
            serde_json::to_string(&gt).unwrap(),
            r#"[[{"lat":5.0,"lng":6.0}]]"#
        );
    }
}

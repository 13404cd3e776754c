use crate::{
    cache::{Cache, CacheSizes},
    config::EngineConfig,
    error::Error,
    propagator::{Propagator, Sgp4Propagator},
    units::{Time, Timestamp},
};
use std::{collections::hash_map::Entry, sync::Arc};
use tle_format::{TleError, TleInput};
use tle_types::{
    field::{FieldDescriptor, FieldValue},
    geo::{InertialState, Observer},
    time::UtcTimestamp,
    tle::TleRecord,
};
use tracing::{debug, trace};

/// Ground-track queries over element sets, with every result memoized.
///
/// The engine owns its cache, so queries take `&mut self`. Wrap it in a lock
/// to share it between threads.
pub struct Engine<P: Propagator = Sgp4Propagator> {
    pub(crate) config: EngineConfig,
    pub(crate) propagator: P,
    pub(crate) cache: Cache<P::Handle>,
}

impl Default for Engine<Sgp4Propagator> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine<Sgp4Propagator> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_propagator(config, Sgp4Propagator)
    }
}

impl<P: Propagator> Engine<P> {
    pub fn with_propagator(config: EngineConfig, propagator: P) -> Self {
        Self {
            config,
            propagator,
            cache: Cache::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    /// Parse, reusing the result of an earlier parse of the same text
    pub fn parse<'a, T: Into<TleInput<'a>>>(&mut self, input: T) -> Result<Arc<TleRecord>, Error> {
        let input = input.into();
        if let TleInput::Record(tle) = input {
            return Ok(Arc::new(tle.clone()));
        }

        match self.cache.records.entry(input.raw_text().into_owned()) {
            Entry::Occupied(e) => Ok(e.get().clone()),
            Entry::Vacant(e) => {
                let tle = Arc::new(tle_format::parse_tle(input)?);
                trace!(name = %tle.name, fingerprint = %tle.fingerprint(), "Parsed TLE");
                Ok(e.insert(tle).clone())
            }
        }
    }

    pub fn is_valid<'a, T: Into<TleInput<'a>>>(&mut self, input: T) -> bool {
        match self.parse(input) {
            Ok(tle) => tle_format::is_valid(tle.as_ref()),
            Err(_) => false,
        }
    }

    pub fn field<'a, T: Into<TleInput<'a>>>(
        &mut self,
        field: &FieldDescriptor,
        input: T,
    ) -> Result<FieldValue, Error> {
        let tle = self.parse(input)?;
        Ok(tle_format::record_field(field, &tle)?)
    }

    pub fn satellite_name<'a, T: Into<TleInput<'a>>>(&mut self, input: T) -> Result<String, Error> {
        Ok(self.parse(input)?.name.clone())
    }

    pub fn epoch_timestamp<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
    ) -> Result<UtcTimestamp, Error> {
        let tle = self.parse(input)?;
        Ok(tle_format::epoch(tle.as_ref())?)
    }

    pub fn cospar_id<'a, T: Into<TleInput<'a>>>(&mut self, input: T) -> Result<String, Error> {
        let tle = self.parse(input)?;
        Ok(tle_format::cospar_id(tle.as_ref())?)
    }

    /// `1440 / mean motion`
    pub fn average_orbit_period_minutes<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
    ) -> Result<f64, Error> {
        let tle = self.parse(input)?;
        Ok(self.orbital_period(&tle)?.as_minutes())
    }

    pub fn clear_cache(&mut self) {
        debug!(entries = self.cache.sizes().total(), "Clearing cache");
        self.cache.clear();
    }

    pub fn cache_sizes(&self) -> CacheSizes {
        self.cache.sizes()
    }

    /// Parse and require a valid checksum, as every position query does
    pub(crate) fn validated<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
    ) -> Result<Arc<TleRecord>, Error> {
        let tle = self.parse(input)?;
        if tle_format::is_valid(tle.as_ref()) {
            Ok(tle)
        } else {
            Err(Error::Validation(tle.name.clone()))
        }
    }

    pub(crate) fn orbital_period(&self, tle: &TleRecord) -> Result<Time, Error> {
        let mean_motion = tle_format::mean_motion(tle)?;
        if !(mean_motion.is_finite() && mean_motion > 0.0) {
            return Err(TleError::InvalidField {
                field: tle_format::schema::MEAN_MOTION.name,
                value: mean_motion.to_string(),
            }
            .into());
        }
        Ok(Time::from_minutes(1440.0 / mean_motion))
    }

    pub(crate) fn observer_or_default(&self, observer: Option<Observer>) -> Result<Observer, Error> {
        let observer = observer.unwrap_or(self.config.observer.0);
        let valid = (-90.0..=90.0).contains(&observer.latitude)
            && (-180.0..=180.0).contains(&observer.longitude)
            && observer.height_km.is_finite();
        if valid {
            Ok(observer)
        } else {
            Err(Error::InvalidObserver(observer))
        }
    }

    /// Propagate, initializing the propagator for this element set on first use
    pub(crate) fn inertial_state(
        &mut self,
        tle: &TleRecord,
        at: Timestamp,
    ) -> Result<InertialState, Error> {
        let handle = match self.cache.handles.entry(tle.fingerprint()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                debug!(name = %tle.name, "Initializing propagator");
                e.insert(self.propagator.initialize(&tle.line1, &tle.line2)?)
            }
        };
        Ok(self.propagator.propagate(handle, *at.as_utc())?)
    }
}

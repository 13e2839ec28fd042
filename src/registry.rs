use ahash::AHashMap;

use crate::{AggregateError, WeatherStation, aggregate};

/// Stations keyed by location, kept in registration order.
#[derive(Debug, Default)]
pub struct StationRegistry {
    stations: Vec<WeatherStation>,
    index: AHashMap<String, usize>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station for `location`, or hand back the one already registered.
    pub fn register(&mut self, location: &str) -> &mut WeatherStation {
        let idx = match self.index.get(location) {
            Some(&idx) => idx,
            None => {
                let idx = self.stations.len();
                self.stations.push(WeatherStation::new(location));
                self.index.insert(location.to_owned(), idx);
                tracing::debug!(location, "station registered");
                idx
            }
        };
        &mut self.stations[idx]
    }

    pub fn get(&self, location: &str) -> Option<&WeatherStation> {
        self.index.get(location).map(|&idx| &self.stations[idx])
    }

    pub fn get_mut(&mut self, location: &str) -> Option<&mut WeatherStation> {
        self.index.get(location).map(|&idx| &mut self.stations[idx])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeatherStation> {
        self.stations.iter()
    }

    /// Copies of every station; later updates to the registry do not reach them.
    pub fn snapshot(&self) -> Vec<WeatherStation> {
        self.stations.clone()
    }

    pub fn average_temperature(&self) -> Result<f64, AggregateError> {
        aggregate::average_temperature(&self.stations)
    }
}

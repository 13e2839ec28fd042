use std::{
    fmt::Display,
    ops::{Add, AddAssign},
};

use crate::{AggregateError, WeatherStation};

/// Arithmetic mean of the latest temperature of every station, in iteration order.
pub fn average_temperature(stations: &[WeatherStation]) -> Result<f64, AggregateError> {
    let summary = TemperatureSummary::from_stations(stations)?;
    let mean = summary.mean();
    tracing::debug!(stations = summary.count(), mean, "averaged temperatures");
    Ok(mean)
}

/// Min/mean/max over one temperature per station.
///
/// Only built from at least one temperature, so `count` is never zero and
/// `mean` is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSummary {
    min: f64,
    max: f64,
    sum: f64,
    count: u32,
}

impl TemperatureSummary {
    pub fn new(temperature: f64) -> Self {
        Self {
            min: temperature,
            max: temperature,
            sum: temperature,
            count: 1,
        }
    }

    pub fn push(&mut self, temperature: f64) {
        self.count = self.count.saturating_add(1);
        self.min = self.min.min(temperature);
        self.max = self.max.max(temperature);
        self.sum += temperature;
    }

    pub fn from_stations(stations: &[WeatherStation]) -> Result<Self, AggregateError> {
        let Some((first, rest)) = stations.split_first() else {
            tracing::warn!("aggregation requested over no stations");
            return Err(AggregateError::Empty);
        };

        let mut summary = Self::new(first.temperature());
        for station in rest {
            summary.push(station.temperature());
        }
        Ok(summary)
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Add for TemperatureSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
            sum: self.sum + rhs.sum,
            count: self.count.saturating_add(rhs.count),
        }
    }
}

impl AddAssign for TemperatureSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Display for TemperatureSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}/{:.1}/{:.1}", self.min, self.mean(), self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(location: &str, temperature: f64) -> WeatherStation {
        let mut station = WeatherStation::new(location);
        station.update(temperature, 50.0, 1010.0);
        station
    }

    #[test]
    fn two_station_average() {
        let stations = [station("New York", 25.5), station("London", 18.0)];
        assert_eq!(average_temperature(&stations), Ok(21.75));
    }

    #[test]
    fn single_station_is_exact() {
        let stations = [station("Reykjavik", -7.3)];
        assert_eq!(average_temperature(&stations), Ok(-7.3));
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(average_temperature(&[]), Err(AggregateError::Empty));
        assert_eq!(
            TemperatureSummary::from_stations(&[]),
            Err(AggregateError::Empty)
        );
    }

    #[test]
    fn unupdated_stations_count_as_zero() {
        let stations = [station("Cairo", 30.0), WeatherStation::new("Nowhere")];
        assert_eq!(average_temperature(&stations), Ok(15.0));
    }

    #[test]
    fn summary_min_mean_max() {
        let stations = [
            station("A", 25.5),
            station("B", 18.0),
            station("C", -3.0),
        ];
        let summary = TemperatureSummary::from_stations(&stations).unwrap();
        assert_eq!(summary.min(), -3.0);
        assert_eq!(summary.max(), 25.5);
        assert_eq!(summary.sum(), 40.5);
        assert_eq!(summary.count(), 3);
        assert_eq!(summary.mean(), 13.5);
        assert_eq!(summary.to_string(), "-3.0/13.5/25.5");
    }

    #[test]
    fn pushed_summary_has_a_mean() {
        let mut summary = TemperatureSummary::new(4.0);
        summary.push(-2.0);
        assert_eq!(summary.count(), 2);
        assert_eq!(summary.mean(), 1.0);
        assert!(!summary.mean().is_nan());
    }

    #[test]
    fn merged_summaries_match_concatenation() {
        let left = [station("A", 10.0), station("B", 2.5)];
        let right = [station("C", -4.0), station("D", 7.5), station("E", 1.0)];
        let all: Vec<_> = left.iter().chain(right.iter()).cloned().collect();

        let mut merged = TemperatureSummary::from_stations(&left).unwrap();
        merged += TemperatureSummary::from_stations(&right).unwrap();

        assert_eq!(merged, TemperatureSummary::from_stations(&all).unwrap());
    }
}

use std::fmt::Display;

pub mod aggregate;
pub mod error;
pub mod format;
pub mod registry;

pub use aggregate::{TemperatureSummary, average_temperature};
pub use error::AggregateError;
pub use format::Significant;
pub use registry::StationRegistry;

/// Latest values reported for a location.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Hectopascals
    pub pressure: f64,
}

impl Reading {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

/// One named location holding its latest [`Reading`].
///
/// Readings are taken as-is: there is no range checking and no history, an
/// update always overwrites all three values.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStation {
    location: String,
    reading: Reading,
    updated: bool,
}

impl WeatherStation {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            reading: Reading::default(),
            updated: false,
        }
    }

    /// Overwrite the reading and print a confirmation line to stdout.
    pub fn update(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.update_reading(Reading::new(temperature, humidity, pressure));
    }

    pub fn update_reading(&mut self, reading: Reading) {
        self.reading = reading;
        self.updated = true;
        tracing::debug!(
            location = %self.location,
            temperature = reading.temperature,
            humidity = reading.humidity,
            pressure = reading.pressure,
            "station updated"
        );
        println!("{}", self.update_notice());
    }

    /// Print the current reading block to stdout.
    pub fn display(&self) {
        print!("{self}");
    }

    /// The confirmation line printed by [`WeatherStation::update`].
    pub fn update_notice(&self) -> UpdateNotice<'_> {
        UpdateNotice(self)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn temperature(&self) -> f64 {
        self.reading.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.reading.humidity
    }

    pub fn pressure(&self) -> f64 {
        self.reading.pressure
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    /// Whether `update` has been called at least once. A station updated to
    /// all zeros reads the same as a fresh one, this tells them apart.
    pub fn has_reading(&self) -> bool {
        self.updated
    }
}

impl Display for WeatherStation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Current weather in {}:", self.location)?;
        writeln!(f, "Temperature: {}°C", Significant(self.reading.temperature))?;
        writeln!(f, "Humidity: {}%", Significant(self.reading.humidity))?;
        writeln!(f, "Pressure: {} hPa", Significant(self.reading.pressure))
    }
}

pub struct UpdateNotice<'a>(&'a WeatherStation);

impl Display for UpdateNotice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Reading {
            temperature,
            humidity,
            pressure,
        } = self.0.reading;
        write!(
            f,
            "Weather updated for {}: Temp={}°C, Humidity={}%, Pressure={}hPa",
            self.0.location,
            Significant(temperature),
            Significant(humidity),
            Significant(pressure)
        )
    }
}

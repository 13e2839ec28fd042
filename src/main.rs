use anyhow::Result;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use weather_station::{Reading, Significant, WeatherStation, average_temperature};

const NEW_YORK: &str = "New York";
const NEW_YORK_READING: Reading = Reading {
    temperature: 25.5,
    humidity: 60.0,
    pressure: 1013.2,
};

const LONDON: &str = "London";
const LONDON_READING: Reading = Reading {
    temperature: 18.0,
    humidity: 75.0,
    pressure: 1008.5,
};

fn main() -> Result<()> {
    // stdout carries the report, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut new_york = WeatherStation::new(NEW_YORK);
    let mut london = WeatherStation::new(LONDON);

    new_york.update_reading(NEW_YORK_READING);
    london.update_reading(LONDON_READING);

    new_york.display();
    london.display();

    let snapshot = [new_york.clone(), london.clone()];
    let average = average_temperature(&snapshot)?;
    println!(
        "Average temperature across locations: {}°C",
        Significant(average)
    );
    Ok(())
}

//! # Observer
//!
//! A [`WeatherStation`] pushes every new set of [`Measurements`] to its registered
//! displays, in registration order. Displays are registered by value and addressed
//! afterwards by the [`ObserverId`] the station hands back.

use crate::framework::{pattern_demo, Console, DemoError};
use tracing::debug;

/// One reading of the station's sensors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurements {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

/// Subscriber contract.
pub trait Observer {
    fn update(&mut self, measurements: Measurements, out: &mut dyn Console) -> Result<(), DemoError>;
}

/// Handle returned by [`WeatherStation::register_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// The subject.
#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    measurements: Option<Measurements>,
    next_id: u32,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_observer(
        &mut self,
        observer: impl Observer + 'static,
        out: &mut dyn Console,
    ) -> Result<ObserverId, DemoError> {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        writeln!(out, "Observer registered")?;
        debug!(?id, observers = self.observers.len(), "Observer registered");
        Ok(id)
    }

    /// Unsubscribes `id`. Returns `false` if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId, out: &mut dyn Console) -> Result<bool, DemoError> {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        writeln!(out, "Observer removed")?;
        Ok(self.observers.len() < before)
    }

    pub fn notify_observers(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        let Some(measurements) = self.measurements else {
            return Ok(());
        };
        for (_, observer) in self.observers.iter_mut() {
            observer.update(measurements, out)?;
        }
        Ok(())
    }

    pub fn set_measurements(
        &mut self,
        measurements: Measurements,
        out: &mut dyn Console,
    ) -> Result<(), DemoError> {
        self.measurements = Some(measurements);
        self.notify_observers(out)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurrentConditionsDisplay {
    temperature: f32,
    humidity: f32,
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, measurements: Measurements, out: &mut dyn Console) -> Result<(), DemoError> {
        self.temperature = measurements.temperature;
        self.humidity = measurements.humidity;
        writeln!(
            out,
            "Current conditions: {:?}°C and {:?}% humidity",
            self.temperature, self.humidity
        )?;
        Ok(())
    }
}

/// Running average, maximum and minimum temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsDisplay {
    max_temp: f32,
    min_temp: f32,
    temp_sum: f32,
    readings: u32,
}

impl Default for StatisticsDisplay {
    fn default() -> Self {
        Self {
            max_temp: 0.0,
            min_temp: 200.0,
            temp_sum: 0.0,
            readings: 0,
        }
    }
}

impl StatisticsDisplay {
    pub fn average(&self) -> f32 {
        if self.readings == 0 {
            0.0
        } else {
            self.temp_sum / self.readings as f32
        }
    }
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, measurements: Measurements, out: &mut dyn Console) -> Result<(), DemoError> {
        let temperature = measurements.temperature;
        self.temp_sum += temperature;
        self.readings += 1;
        self.max_temp = self.max_temp.max(temperature);
        self.min_temp = self.min_temp.min(temperature);
        writeln!(
            out,
            "Avg/Max/Min temperature: {:?}/{:?}/{:?}",
            self.average(),
            self.max_temp,
            self.min_temp
        )?;
        Ok(())
    }
}

/// Compares the latest pressure with the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDisplay {
    current_pressure: f32,
    last_pressure: f32,
}

impl Default for ForecastDisplay {
    fn default() -> Self {
        Self {
            current_pressure: 29.92,
            last_pressure: 0.0,
        }
    }
}

impl ForecastDisplay {
    pub fn forecast(&self) -> &'static str {
        if self.current_pressure > self.last_pressure {
            "Improving weather on the way!"
        } else if self.current_pressure == self.last_pressure {
            "More of the same"
        } else {
            "Watch out for cooler, rainy weather"
        }
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, measurements: Measurements, out: &mut dyn Console) -> Result<(), DemoError> {
        self.last_pressure = self.current_pressure;
        self.current_pressure = measurements.pressure;
        write!(out, "Forecast: ")?;
        writeln!(out, "{}", self.forecast())?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut station = WeatherStation::new();
    station.register_observer(CurrentConditionsDisplay::default(), out)?;
    station.register_observer(StatisticsDisplay::default(), out)?;
    station.register_observer(ForecastDisplay::default(), out)?;

    let rounds = [
        ("First", Measurements::new(25.5, 65.0, 30.4)),
        ("Second", Measurements::new(27.8, 70.0, 29.2)),
        ("Third", Measurements::new(23.3, 90.0, 29.5)),
    ];
    for (label, measurements) in rounds {
        writeln!(out)?;
        writeln!(out, "--- {} measurements ---", label)?;
        station.set_measurements(measurements, out)?;
    }
    Ok(())
}

pattern_demo!(
    observer,
    Behavioral,
    "Observer",
    "A weather station pushes measurements to current, statistics and forecast displays.",
    run
);

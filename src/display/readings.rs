use serde::Serialize;
use utoipa::ToSchema;

/// Physical quantity behind a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Temperature,
    FlowRate,
    WaterLevel,
}

impl Quantity {
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::FlowRate => "m³/s",
            Self::WaterLevel => "m",
        }
    }

    /// Decimal places shown on the dashboard
    #[must_use]
    pub fn precision(self) -> usize {
        match self {
            Self::Temperature | Self::FlowRate => 1,
            Self::WaterLevel => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::FlowRate => "flow",
            Self::WaterLevel => "level",
        }
    }
}

/// The most recent sample of one quantity.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LatestReading {
    pub quantity: Quantity,
    pub value: f64,
    pub unit: String,
    /// Timestamp of the sample, as sent upstream
    pub time: String,
}

impl LatestReading {
    #[must_use]
    pub fn new(quantity: Quantity, time: String, value: f64) -> Self {
        Self {
            quantity,
            value,
            unit: quantity.unit().to_string(),
            time,
        }
    }
}

/// Latest readings extracted from one plot. Missing entries render as `N/A`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Readings {
    pub temperature: Option<LatestReading>,
    pub flow: Option<LatestReading>,
    pub level: Option<LatestReading>,
}

impl Readings {
    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<&LatestReading> {
        match quantity {
            Quantity::Temperature => self.temperature.as_ref(),
            Quantity::FlowRate => self.flow.as_ref(),
            Quantity::WaterLevel => self.level.as_ref(),
        }
    }

    pub fn set(&mut self, reading: LatestReading) {
        match reading.quantity {
            Quantity::Temperature => self.temperature = Some(reading),
            Quantity::FlowRate => self.flow = Some(reading),
            Quantity::WaterLevel => self.level = Some(reading),
        }
    }
}

/// Classification of a discharge plot series.
///
/// Upstream offers no explicit tag, so the series name is matched by
/// substring. A renamed series is silently dropped rather than misfiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Flow,
    Level,
}

impl SeriesKind {
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        if name.contains("Abfluss") {
            Some(Self::Flow)
        } else if name.contains("Wasserstand") || name.contains("Pegel") {
            Some(Self::Level)
        } else {
            None
        }
    }

    #[must_use]
    pub fn quantity(self) -> Quantity {
        match self {
            Self::Flow => Quantity::FlowRate,
            Self::Level => Quantity::WaterLevel,
        }
    }
}

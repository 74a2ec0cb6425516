use serde::Serialize;
use utoipa::ToSchema;

/// A fixed river gauge on hydrodaten.admin.ch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub name: &'static str,
    /// Opaque upstream identifier, passed through unvalidated
    pub id: &'static str,
}

pub const AARE: Station = Station {
    name: "Aare",
    id: "2135",
};

pub const REUSS: Station = Station {
    name: "Reuss",
    id: "2152",
};

/// Stations shown on the dashboard, in display order.
pub const STATIONS: [Station; 2] = [AARE, REUSS];

/// Find a station by upstream id or (case-insensitive) name.
#[must_use]
pub fn find_station(id_or_name: &str) -> Option<Station> {
    STATIONS
        .into_iter()
        .find(|s| s.id == id_or_name || s.name.eq_ignore_ascii_case(id_or_name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Water temperature over the last 7 days
    Temperature,
    /// Discharge and water level over the last 7 days
    Flow,
}

impl Metric {
    pub const ALL: [Self; 2] = [Self::Temperature, Self::Flow];

    /// Upstream plot family, used both as directory and file-name infix.
    #[must_use]
    pub fn plot_family(self) -> &'static str {
        match self {
            Self::Temperature => "temperature_7days",
            Self::Flow => "p_q_7days",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Flow => "flow",
        }
    }

    fn title_suffix(self) -> &'static str {
        match self {
            Self::Temperature => "Water Temperature",
            Self::Flow => "Discharge & Water Level",
        }
    }
}

/// One upstream plot to fetch during a refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationMetricRequest {
    pub station_id: String,
    pub station_name: String,
    pub metric: Metric,
    pub title: String,
}

impl StationMetricRequest {
    #[must_use]
    pub fn new(station: Station, metric: Metric) -> Self {
        Self {
            station_id: station.id.to_string(),
            station_name: station.name.to_string(),
            metric,
            title: format!("{} - {}", station.name, metric.title_suffix()),
        }
    }

    /// Stable slot identifier, e.g. `aare-temperature`.
    #[must_use]
    pub fn slot_id(&self) -> String {
        format!("{}-{}", self.station_name.to_lowercase(), self.metric.as_str())
    }
}

/// The four requests of one refresh cycle: each station × each metric.
#[must_use]
pub fn refresh_requests() -> Vec<StationMetricRequest> {
    STATIONS
        .into_iter()
        .flat_map(|station| {
            Metric::ALL
                .into_iter()
                .map(move |metric| StationMetricRequest::new(station, metric))
        })
        .collect()
}

//! Station — metadata for one observation site.

use serde::{Deserialize, Serialize};

/// One observation site, as stored in the `station` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    /// Site code, also stored on every `measurement` row of this station.
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

impl Station {
    /// Create a builder for constructing a [`Station`].
    #[must_use]
    pub fn builder() -> StationBuilder {
        StationBuilder::default()
    }
}

/// Step-by-step builder for [`Station`].
#[derive(Debug, Default)]
pub struct StationBuilder {
    id: i64,
    station: String,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl StationBuilder {
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self.elevation = Some(elevation);
        self
    }

    /// Consume the builder and return a [`Station`].
    #[must_use]
    pub fn build(self) -> Station {
        Station {
            id: self.id,
            station: self.station,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            elevation: self.elevation,
        }
    }
}

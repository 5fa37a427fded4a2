use std::fmt;

use serde::Deserialize;

/// Opaque identifier of a batch job accepted by the async endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Receipt(String);

impl Receipt {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single status update in an item's history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Event {
    #[serde(rename = "dtHrCriado", alias = "dataHora", default)]
    pub timestamp: String,
    #[serde(rename = "codigo", default)]
    pub code: String,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

/// Tracked item with its events, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TrackingResult {
    #[serde(rename = "codObjeto", alias = "codigoObjeto", default)]
    pub code: String,
    #[serde(rename = "eventos", default)]
    pub events: Vec<Event>,
}

impl TrackingResult {
    /// Most recent event, if the API returned any.
    pub fn latest_event(&self) -> Option<&Event> {
        self.events.first()
    }
}

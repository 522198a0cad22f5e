use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Runtime settings for the dashboard.
///
/// Every field has a default, so the host page only needs to provide the
/// values it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoint: String,
    pub login_path: String,
    pub star_count: usize,
    pub back_buildings: usize,
    pub front_buildings: usize,
    pub night_threshold: f64,
    pub fade_threshold: f64,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: "/get_messages".to_string(),
            login_path: "/login".to_string(),
            star_count: 120,
            back_buildings: 15,
            front_buildings: 10,
            night_threshold: 0.4,
            fade_threshold: 0.1,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    /// Reads overrides from the host page, falling back to defaults.
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(text) = crate::dom::text_of(document, CONFIG_ELEMENT_ID) else {
            return Self::default();
        };

        if text.trim().is_empty() {
            return Self::default();
        }

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("Ignoring malformed #{CONFIG_ELEMENT_ID}: {error}");
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }

    fn normalized(mut self) -> Self {
        self.night_threshold = clamp_unit(self.night_threshold, 0.4);
        self.fade_threshold = clamp_unit(self.fade_threshold, 0.1);
        self
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

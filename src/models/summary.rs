use crate::models::StationActivity;

/// Overview of the dataset shown by the `info` command.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub most_active: Option<StationActivity>,
}

impl DatasetSummary {
    pub fn detailed_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Dataset Summary\n");
        summary.push_str("===============\n");
        summary.push_str(&format!("Stations: {}\n", self.station_count));
        summary.push_str(&format!("Measurements: {}\n", self.measurement_count));

        match (&self.first_date, &self.last_date) {
            (Some(first), Some(last)) => {
                summary.push_str(&format!("Date range: {} to {}\n", first, last));
            }
            _ => summary.push_str("Date range: (no measurements)\n"),
        }

        if let Some(active) = &self.most_active {
            summary.push_str(&format!(
                "Most active station: {} ({} measurements)\n",
                active.station, active.count
            ));
        }

        summary
    }
}

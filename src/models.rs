use serde::{Deserialize, Serialize};

/// One customer's subscription. Values are kept exactly as typed; `price`
/// and the two dates are parsed at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubscriptionRecord {
    pub name: String,
    pub phone: String,
    pub plan: String,
    pub price: String,
    pub start: String,
    pub end: String,
}

impl SubscriptionRecord {
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty()
            || self.phone.is_empty()
            || self.plan.is_empty()
            || self.price.is_empty()
            || self.start.is_empty()
            || self.end.is_empty()
    }

    /// Unparsable input counts as 0.
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldRequest {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct IndexRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub plan: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Progress {
    pub percent: u8,
    pub remaining_days: u32,
}

#[derive(Debug, Serialize)]
pub struct RecordRow {
    pub index: usize,
    #[serde(flatten)]
    pub record: SubscriptionRecord,
    pub progress: Progress,
}

#[derive(Debug, Serialize)]
pub struct PlanCount {
    pub plan: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One render's worth of the page, derived fresh per request.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub records: Vec<RecordRow>,
    pub plans: Vec<PlanCount>,
    pub filter: Option<String>,
    pub chart: ChartData,
    pub draft: SubscriptionRecord,
    pub edit_index: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: SubscriptionRecord,
    pub edit_index: Option<usize>,
}

use crate::models::{PlanCount, SubscriptionRecord};

/// Plan catalogue offered by the form and listed in the sidebar. Stored
/// records are not re-validated against it on load.
pub const PLANS: [&str; 15] = [
    "Chatgpt Plus Shared",
    "Eleven Lab",
    "Educational website",
    "My zoom Renew",
    "Zoom",
    "Zoom Pro",
    "Ai tool",
    "Google meet",
    "Quilbot Shared",
    "VPN",
    "Microsof",
    "Spotify",
    "Blinkist",
    "Duolingo Plus",
    "canva",
];

/// Counts over the whole store, regardless of any active filter.
pub fn plan_counts(records: &[SubscriptionRecord]) -> Vec<PlanCount> {
    PLANS
        .iter()
        .map(|plan| PlanCount {
            plan: plan.to_string(),
            count: records.iter().filter(|record| record.plan == *plan).count(),
        })
        .collect()
}

/// Visible records paired with their store indices, so edit/delete keep
/// addressing canonical positions. Order is the store's.
pub fn visible_records<'a>(
    records: &'a [SubscriptionRecord],
    filter: Option<&str>,
) -> Vec<(usize, &'a SubscriptionRecord)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.is_none_or(|plan| record.plan == plan))
        .collect()
}

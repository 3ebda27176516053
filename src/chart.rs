use crate::models::{ChartData, Dataset, SubscriptionRecord};

pub const INCOME_LABEL: &str = "Monthly Income (৳)";

/// One label and one price per visible record, index-aligned; unparsable
/// prices chart as 0. Built fresh on every render.
pub fn chart_data<'a>(records: impl Iterator<Item = &'a SubscriptionRecord>) -> ChartData {
    let (labels, data): (Vec<_>, Vec<_>) = records
        .map(|record| (record.name.clone(), record.price_value()))
        .unzip();

    ChartData {
        labels,
        datasets: vec![Dataset {
            label: INCOME_LABEL.to_string(),
            data,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: &str) -> SubscriptionRecord {
        SubscriptionRecord {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            plan: "VPN".to_string(),
            price: price.to_string(),
            start: "2024-01-01".to_string(),
            end: "2024-02-01".to_string(),
        }
    }

    #[test]
    fn labels_and_values_stay_index_aligned() {
        let records = vec![record("Alice", "10"), record("Bob", "25.5")];
        let chart = chart_data(records.iter());
        assert_eq!(chart.labels, vec!["Alice", "Bob"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, INCOME_LABEL);
        assert_eq!(chart.datasets[0].data, vec![10.0, 25.5]);
    }

    #[test]
    fn unparsable_price_charts_as_zero() {
        let records = vec![record("Alice", "ten bucks")];
        let chart = chart_data(records.iter());
        assert_eq!(chart.datasets[0].data, vec![0.0]);
    }

    #[test]
    fn empty_set_projects_empty_series() {
        let chart = chart_data(std::iter::empty());
        assert!(chart.labels.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }
}

//! Business records and the data shown for each of them.
//!
//! Records are loaded once (see [`Catalog`](crate::Catalog)) and never mutated
//! afterwards. Field names serialize in camelCase so a catalog seed can be
//! shared with the dashboard front end unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single business known to the dashboard.
///
/// # Examples
///
/// ```
/// use business_access::Catalog;
///
/// let catalog = Catalog::seed().unwrap();
/// let first = catalog.first().expect("seed is non-empty");
/// assert_eq!(first.id, "business-1");
/// assert_eq!(first.recent_activity.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email of the principal entitled to view this record
    pub owner_email: String,
    /// Aggregate figures for the metric cards
    pub metrics: Metrics,
    /// Latest transactions, in display order
    #[serde(default)]
    pub recent_activity: Vec<Transaction>,
    /// Chronological chart series
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
}

impl BusinessRecord {
    /// Returns true if `email` is this record's owner.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email == email
    }

    /// Returns the highest chart point, the first one on ties.
    pub fn chart_peak(&self) -> Option<&ChartPoint> {
        self.chart_data.iter().fold(None, |best, point| match best {
            Some(b) if b.value >= point.value => Some(b),
            _ => Some(point),
        })
    }
}

/// Aggregate metrics for a business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Total revenue in dollars
    pub total_revenue: f64,
    /// Revenue change since last month, in percent
    pub revenue_change: f64,
    /// Active user count
    pub active_users: u64,
    /// User change since last month, in percent
    pub users_change: f64,
    /// Number of sales
    pub sales: u64,
    /// Sales change since last month, in percent
    pub sales_change: f64,
    /// Users active right now
    pub active_now: u64,
    /// Change in active users since the last hour (absolute)
    pub active_now_change: i64,
}

/// One row of the recent-activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Row id, unique within its business
    pub id: String,
    /// Display name of the paying user
    pub user: String,
    /// Email of the paying user
    pub email: String,
    /// Pre-formatted amount, e.g. `+$1,999.00`
    pub amount: String,
    /// Settlement status
    pub status: TransactionStatus,
}

/// Settlement status of a [`Transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Payment settled
    Success,
    /// Payment in flight
    Pending,
    /// Payment rejected
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Success => write!(f, "success"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A `(period, value)` pair of the overview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Period label, e.g. a month abbreviation
    pub month: String,
    /// Value for the period
    pub value: f64,
}

impl ChartPoint {
    /// Creates a chart point.
    pub fn new(month: impl Into<String>, value: f64) -> Self {
        Self {
            month: month.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_chart(values: &[(&str, f64)]) -> BusinessRecord {
        BusinessRecord {
            id: "b1".to_string(),
            name: "Test".to_string(),
            owner_email: "owner@x.com".to_string(),
            metrics: Metrics {
                total_revenue: 0.0,
                revenue_change: 0.0,
                active_users: 0,
                users_change: 0.0,
                sales: 0,
                sales_change: 0.0,
                active_now: 0,
                active_now_change: 0,
            },
            recent_activity: Vec::new(),
            chart_data: values.iter().map(|(m, v)| ChartPoint::new(*m, *v)).collect(),
        }
    }

    #[test]
    fn ownership_is_case_sensitive() {
        let record = record_with_chart(&[]);
        assert!(record.is_owned_by("owner@x.com"));
        assert!(!record.is_owned_by("Owner@x.com"));
    }

    #[test]
    fn chart_peak_prefers_first_on_ties() {
        let record = record_with_chart(&[("Jan", 5.0), ("Feb", 9.0), ("Mar", 9.0)]);
        assert_eq!(record.chart_peak().unwrap().month, "Feb");
    }

    #[test]
    fn chart_peak_of_empty_series_is_none() {
        assert!(record_with_chart(&[]).chart_peak().is_none());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        assert_eq!(TransactionStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn record_fields_are_camel_case() {
        let json = serde_json::to_value(record_with_chart(&[("Jan", 1.0)])).unwrap();
        assert!(json.get("ownerEmail").is_some());
        assert!(json.get("recentActivity").is_some());
        assert!(json.get("chartData").is_some());
        assert!(json["metrics"].get("activeNowChange").is_some());
    }
}

//! Metric-card values for the selected business.
//!
//! Formatting only; layout and rendering belong to the front end.

use crate::business::{BusinessRecord, Metrics};

/// One metric card: a title, a headline value and a change line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    /// Card title
    pub title: &'static str,
    /// Headline value, e.g. `$45,231.89`
    pub value: String,
    /// Change line, e.g. `+20.1% from last month`
    pub change: String,
}

impl Metrics {
    /// The four dashboard cards, in display order.
    ///
    /// ```
    /// use business_access::Catalog;
    ///
    /// let catalog = Catalog::seed().unwrap();
    /// let cards = catalog.first().unwrap().metrics.cards();
    /// assert_eq!(cards[0].value, "$45,231.89");
    /// assert_eq!(cards[3].change, "+201 since last hour");
    /// ```
    pub fn cards(&self) -> [MetricCard; 4] {
        [
            MetricCard {
                title: "Total Revenue",
                value: format!("${}", group_thousands(&format!("{:.2}", self.total_revenue))),
                change: format!("{}% from last month", signed(self.revenue_change)),
            },
            MetricCard {
                title: "Active Users",
                value: format!("+{}", group_thousands(&self.active_users.to_string())),
                change: format!("{}% from last month", signed(self.users_change)),
            },
            MetricCard {
                title: "Sales",
                value: format!("+{}", group_thousands(&self.sales.to_string())),
                change: format!("{}% from last month", signed(self.sales_change)),
            },
            MetricCard {
                title: "Active Now",
                value: format!("+{}", self.active_now),
                change: format!("{} since last hour", signed(self.active_now_change)),
            },
        ]
    }
}

impl BusinessRecord {
    /// Shorthand for `self.metrics.cards()`.
    pub fn metric_cards(&self) -> [MetricCard; 4] {
        self.metrics.cards()
    }
}

// Prefixes non-negative values with '+'; negatives keep their own sign.
// Negative zero compares equal to zero and is written as "+0".
fn signed<T: std::fmt::Display + PartialOrd + Default>(value: T) -> String {
    if value == T::default() {
        "+0".to_string()
    } else if value > T::default() {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

// Inserts ',' every three digits of the integer part of a plain decimal string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn seed_cards_match_dashboard_figures() {
        let catalog = Catalog::seed().unwrap();
        let cards = catalog.get("business-1").unwrap().metric_cards();

        assert_eq!(cards[0].title, "Total Revenue");
        assert_eq!(cards[0].value, "$45,231.89");
        assert_eq!(cards[0].change, "+20.1% from last month");
        assert_eq!(cards[1].value, "+2,350");
        assert_eq!(cards[1].change, "+180.1% from last month");
        assert_eq!(cards[2].value, "+12,234");
        assert_eq!(cards[2].change, "+19% from last month");
        assert_eq!(cards[3].value, "+573");
    }

    #[test]
    fn revenue_keeps_two_decimals() {
        let catalog = Catalog::seed().unwrap();
        let cards = catalog.get("business-3").unwrap().metric_cards();
        assert_eq!(cards[0].value, "$32,150.50");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.25"), "1,234,567.25");
        assert_eq!(group_thousands("-45231.89"), "-45,231.89");
    }

    #[test]
    fn negative_changes_keep_their_sign() {
        assert_eq!(signed(-4.5), "-4.5");
        assert_eq!(signed(0_i64), "+0");
        assert_eq!(signed(-12_i64), "-12");
        assert_eq!(signed(0.0_f64), "+0");
        assert_eq!(signed(-0.0_f64), "+0");
    }

    #[test]
    fn negative_zero_change_reads_as_plus_zero() {
        let mut metrics = Catalog::seed().unwrap().get("business-1").unwrap().metrics;
        metrics.revenue_change = -0.0;
        metrics.sales_change = -0.0;

        let cards = metrics.cards();
        assert_eq!(cards[0].change, "+0% from last month");
        assert_eq!(cards[2].change, "+0% from last month");
    }
}

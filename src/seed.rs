//! Built-in demo businesses.

use crate::business::{BusinessRecord, ChartPoint, Metrics, Transaction, TransactionStatus};

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn tx(id: &str, user: &str, email: &str, amount: &str, status: TransactionStatus) -> Transaction {
    Transaction {
        id: id.to_string(),
        user: user.to_string(),
        email: email.to_string(),
        amount: amount.to_string(),
        status,
    }
}

fn chart(values: [f64; 6]) -> Vec<ChartPoint> {
    MONTHS
        .iter()
        .zip(values)
        .map(|(month, value)| ChartPoint::new(*month, value))
        .collect()
}

pub(crate) fn businesses() -> Vec<BusinessRecord> {
    use TransactionStatus::{Failed, Pending, Success};

    vec![
        BusinessRecord {
            id: "business-1".to_string(),
            name: "Tech Solutions Inc.".to_string(),
            owner_email: "owner@techsolutions.com".to_string(),
            metrics: Metrics {
                total_revenue: 45231.89,
                revenue_change: 20.1,
                active_users: 2350,
                users_change: 180.1,
                sales: 12234,
                sales_change: 19.0,
                active_now: 573,
                active_now_change: 201,
            },
            recent_activity: vec![
                tx("1", "Olivia Martin", "olivia.martin@email.com", "+$1,999.00", Success),
                tx("2", "Jackson Lee", "jackson.lee@email.com", "+$39.00", Success),
                tx("3", "Isabella Nguyen", "isabella.nguyen@email.com", "+$299.00", Pending),
                tx("4", "William Kim", "will@email.com", "+$99.00", Success),
                tx("5", "Sofia Davis", "sofia.davis@email.com", "+$39.00", Failed),
            ],
            chart_data: chart([12500.0, 18200.0, 15800.0, 22100.0, 19500.0, 25300.0]),
        },
        BusinessRecord {
            id: "business-2".to_string(),
            name: "E-Commerce Pro".to_string(),
            owner_email: "owner@ecommercepro.com".to_string(),
            metrics: Metrics {
                total_revenue: 78450.25,
                revenue_change: 35.5,
                active_users: 4820,
                users_change: 245.3,
                sales: 23456,
                sales_change: 28.7,
                active_now: 892,
                active_now_change: 156,
            },
            recent_activity: vec![
                tx("1", "Emma Wilson", "emma.w@shop.com", "+$2,499.00", Success),
                tx("2", "Liam Brown", "liam.b@shop.com", "+$899.00", Success),
                tx("3", "Ava Johnson", "ava.j@shop.com", "+$1,299.00", Success),
                tx("4", "Noah Davis", "noah.d@shop.com", "+$599.00", Pending),
                tx("5", "Mia Garcia", "mia.g@shop.com", "+$199.00", Success),
            ],
            chart_data: chart([28500.0, 32200.0, 29800.0, 38100.0, 35900.0, 42600.0]),
        },
        BusinessRecord {
            id: "business-3".to_string(),
            name: "Marketing Agency".to_string(),
            owner_email: "owner@marketingagency.com".to_string(),
            metrics: Metrics {
                total_revenue: 32150.50,
                revenue_change: 12.8,
                active_users: 1250,
                users_change: 95.2,
                sales: 8934,
                sales_change: 15.3,
                active_now: 324,
                active_now_change: 78,
            },
            recent_activity: vec![
                tx("1", "James Miller", "james@agency.com", "+$3,500.00", Success),
                tx("2", "Charlotte Taylor", "charlotte@agency.com", "+$1,200.00", Success),
                tx("3", "Benjamin Moore", "ben@agency.com", "+$2,800.00", Pending),
                tx("4", "Amelia Anderson", "amelia@agency.com", "+$950.00", Success),
                tx("5", "Lucas Thomas", "lucas@agency.com", "+$1,500.00", Success),
            ],
            chart_data: chart([8200.0, 11600.0, 9100.0, 14200.0, 12900.0, 16500.0]),
        },
    ]
}

//! The fixed, ordered collection of business records.

use std::collections::HashSet;
use std::slice;

use crate::business::BusinessRecord;
use crate::error::CatalogError;

/// Immutable, ordered collection of [`BusinessRecord`]s.
///
/// Order is meaningful: the first record is the default selection for
/// unauthenticated principals, the admin, and anyone who owns nothing.
/// Ids are unique; owner emails need not be.
///
/// A catalog is built once at startup and shared read-only (wrap it in an
/// `Arc` to hand it to several [`BusinessSelection`](crate::BusinessSelection)s).
///
/// # Examples
///
/// ```
/// use business_access::Catalog;
///
/// let json = r#"[{
///     "id": "b1",
///     "name": "Corner Shop",
///     "ownerEmail": "a@x.com",
///     "metrics": {
///         "totalRevenue": 10.5, "revenueChange": 1.0,
///         "activeUsers": 3, "usersChange": 0.0,
///         "sales": 2, "salesChange": 0.0,
///         "activeNow": 1, "activeNowChange": 0
///     }
/// }]"#;
///
/// let catalog = Catalog::from_json(json).expect("valid catalog");
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.find_by_owner("a@x.com").map(|b| b.id.as_str()), Some("b1"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    records: Vec<BusinessRecord>,
}

impl Catalog {
    /// Builds a catalog from records, keeping their order.
    ///
    /// An empty catalog is allowed; resolution then selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] for the first id seen twice and
    /// [`CatalogError::NonFinite`] for a NaN or infinite metric or chart value.
    pub fn new(records: Vec<BusinessRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if let Some(field) = non_finite_field(record) {
                return Err(CatalogError::NonFinite {
                    id: record.id.clone(),
                    field,
                });
            }
        }
        tracing::debug!(records = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// Decodes a JSON array of records and builds a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, otherwise the
    /// errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<BusinessRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Same checks as [`Catalog::new`]; the built-in records pass them.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::new(crate::seed::businesses())
    }

    /// Serializes the catalog back to a JSON array.
    ///
    /// Every number in a catalog is finite, so the output always loads
    /// back through [`Catalog::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the encoder fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// The default record, if any.
    pub fn first(&self) -> Option<&BusinessRecord> {
        self.records.first()
    }

    /// Looks a record up by id.
    pub fn get(&self, id: &str) -> Option<&BusinessRecord> {
        self.records.iter().find(|b| b.id == id)
    }

    /// Returns true if a record with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// First record, in catalog order, owned by `email`.
    pub fn find_by_owner(&self, email: &str) -> Option<&BusinessRecord> {
        self.records.iter().find(|b| b.is_owned_by(email))
    }

    /// Position of the record with this id.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|b| b.id == id)
    }

    /// All records in catalog order.
    pub fn as_slice(&self) -> &[BusinessRecord] {
        &self.records
    }

    /// Iterates over records in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, BusinessRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// First metric or chart value that JSON cannot represent.
fn non_finite_field(record: &BusinessRecord) -> Option<String> {
    let m = &record.metrics;
    let metrics = [
        ("totalRevenue", m.total_revenue),
        ("revenueChange", m.revenue_change),
        ("usersChange", m.users_change),
        ("salesChange", m.sales_change),
    ];
    if let Some((name, _)) = metrics.iter().find(|(_, v)| !v.is_finite()) {
        return Some(format!("metrics.{}", name));
    }
    record
        .chart_data
        .iter()
        .position(|p| !p.value.is_finite())
        .map(|i| format!("chartData[{}].value", i))
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BusinessRecord;
    type IntoIter = slice::Iter<'a, BusinessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! # List Filtering
//!
//! Search-box filtering over a list that is already loaded on screen.
//!
//! Matching is a case-insensitive substring test over the columns a user
//! would recognise a record by. A blank query keeps everything, and results
//! keep the order of the input list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Customer, Material};

/// Filter state of the materials screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialFilter {
    pub query: String,
    /// Only show materials at or below their minimum stock level.
    pub low_stock_only: bool,
}

/// Lowercased, trimmed needle; `None` when the query is blank.
fn needle(query: &str) -> Option<String> {
    let q = query.trim();
    (!q.is_empty()).then(|| q.to_lowercase())
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True when `customer` matches the search box text.
///
/// Searched: company name, email, phone, GST, PAN, part numbers.
pub fn customer_matches(customer: &Customer, query: &str) -> bool {
    let Some(q) = needle(query) else {
        return true;
    };

    [
        &customer.company_name,
        &customer.email,
        &customer.phone,
        &customer.gst,
        &customer.pan,
    ]
    .into_iter()
    .any(|field| contains(field, &q))
        || customer.part_numbers.iter().any(|p| contains(p, &q))
}

/// Filters a customer list by search text.
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    customers
        .iter()
        .filter(|c| customer_matches(c, query))
        .collect()
}

/// True when `material` passes the screen's filter.
///
/// Searched: material ID, name, supplier, description.
pub fn material_matches(material: &Material, filter: &MaterialFilter) -> bool {
    if filter.low_stock_only && !material.is_low_stock() {
        return false;
    }

    let Some(q) = needle(&filter.query) else {
        return true;
    };

    contains(&material.material_id, &q)
        || contains(&material.name, &q)
        || material.supplier.as_deref().is_some_and(|s| contains(s, &q))
        || material.description.as_deref().is_some_and(|d| contains(d, &q))
}

/// Filters a material list.
pub fn filter_materials<'a>(materials: &'a [Material], filter: &MaterialFilter) -> Vec<&'a Material> {
    materials
        .iter()
        .filter(|m| material_matches(m, filter))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerDraft, MaterialDraft, NumberInput};
    use chrono::Utc;

    fn customer(name: &str, gst: &str, parts: &[&str]) -> Customer {
        let draft = CustomerDraft {
            company_name: name.to_string(),
            email: format!("accounts@{}.in", name.to_lowercase().replace(' ', "")),
            phone: "9876543210".to_string(),
            gst: gst.to_string(),
            part_numbers: parts.iter().map(|p| p.to_string()).collect(),
            ..CustomerDraft::default()
        };
        Customer::from_draft(name, &draft, Utc::now())
    }

    fn material(id: &str, name: &str, stock: i64, min: Option<i64>, supplier: &str) -> Material {
        let draft = MaterialDraft {
            material_id: id.to_string(),
            name: name.to_string(),
            current_stock: Some(NumberInput::from(stock)),
            min_stock_level: min.map(NumberInput::from),
            supplier: supplier.to_string(),
            ..MaterialDraft::default()
        };
        Material::from_draft(id, &draft, Utc::now())
    }

    #[test]
    fn test_blank_query_keeps_all_customers() {
        let list = vec![
            customer("Acme", "22AAAAA0000A1Z5", &[]),
            customer("Bolt Works", "27ABCDE1234FAZB", &[]),
        ];
        assert_eq!(filter_customers(&list, "").len(), 2);
        assert_eq!(filter_customers(&list, "   ").len(), 2);
    }

    #[test]
    fn test_customer_search_is_case_insensitive() {
        let list = vec![
            customer("Acme", "22AAAAA0000A1Z5", &[]),
            customer("Bolt Works", "27ABCDE1234FAZB", &[]),
        ];

        let hits = filter_customers(&list, "bolt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_name, "Bolt Works");

        let hits = filter_customers(&list, "27abcde");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_name, "Bolt Works");
    }

    #[test]
    fn test_customer_search_covers_part_numbers() {
        let list = vec![
            customer("Acme", "22AAAAA0000A1Z5", &["PN-7781"]),
            customer("Bolt Works", "27ABCDE1234FAZB", &["PN-1000"]),
        ];
        let hits = filter_customers(&list, "7781");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_name, "Acme");
    }

    #[test]
    fn test_material_search_preserves_order() {
        let list = vec![
            material("RM-STEEL01", "Mild steel", 10, None, "Tata Steel"),
            material("RM-CU100", "Copper wire", 3, Some(5), "Hindalco"),
            material("RM-STEEL02", "Stainless steel", 0, Some(2), "Jindal"),
        ];

        let filter = MaterialFilter {
            query: "steel".to_string(),
            ..MaterialFilter::default()
        };
        let ids: Vec<_> = filter_materials(&list, &filter)
            .into_iter()
            .map(|m| m.material_id.as_str())
            .collect();
        assert_eq!(ids, vec!["RM-STEEL01", "RM-STEEL02"]);
    }

    #[test]
    fn test_material_search_by_supplier() {
        let list = vec![
            material("RM-STEEL01", "Mild steel", 10, None, "Tata Steel"),
            material("RM-CU100", "Copper wire", 3, Some(5), "Hindalco"),
        ];
        let filter = MaterialFilter {
            query: "hindalco".to_string(),
            ..MaterialFilter::default()
        };
        let hits = filter_materials(&list, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].material_id, "RM-CU100");
    }

    #[test]
    fn test_low_stock_only() {
        let list = vec![
            material("RM-STEEL01", "Mild steel", 10, None, ""),
            material("RM-CU100", "Copper wire", 3, Some(5), ""),
            material("RM-STEEL02", "Stainless steel", 0, Some(2), ""),
        ];

        let filter = MaterialFilter {
            low_stock_only: true,
            ..MaterialFilter::default()
        };
        assert_eq!(filter_materials(&list, &filter).len(), 2);

        let filter = MaterialFilter {
            query: "steel".to_string(),
            low_stock_only: true,
        };
        let hits = filter_materials(&list, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].material_id, "RM-STEEL02");
    }
}

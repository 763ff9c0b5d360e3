use chrono::Datelike;

use crate::models::Transaction;

/// Composable AND-filter over the normalized set. Unset conditions match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub category: Option<String>,
    pub payment_type: Option<String>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    /// Case-insensitive substring over item and additional info.
    pub search: Option<String>,
}

pub fn by_year(records: &[Transaction], year: i32) -> Vec<Transaction> {
    records
        .iter()
        .filter(|t| t.date.year() == year)
        .cloned()
        .collect()
}

/// `month0` is 0-indexed (0 = January).
pub fn by_year_and_month(records: &[Transaction], year: i32, month0: u32) -> Vec<Transaction> {
    records
        .iter()
        .filter(|t| t.date.year() == year && t.date.month0() == month0)
        .cloned()
        .collect()
}

pub fn by_filter(records: &[Transaction], filter: &Filter) -> Vec<Transaction> {
    let needle = filter
        .search
        .as_deref()
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty());

    records
        .iter()
        .filter(|t| {
            if let Some(cat) = &filter.category {
                if &t.category != cat {
                    return false;
                }
            }
            if let Some(pt) = &filter.payment_type {
                if t.payment_type.as_deref() != Some(pt.as_str()) {
                    return false;
                }
            }
            if let Some(min) = filter.amount_min {
                if t.amount < min {
                    return false;
                }
            }
            if let Some(max) = filter.amount_max {
                if t.amount > max {
                    return false;
                }
            }
            if let Some(needle) = &needle {
                let in_item = t.item.to_lowercase().contains(needle);
                let in_info = t
                    .additional_info
                    .as_deref()
                    .is_some_and(|info| info.to_lowercase().contains(needle));
                if !in_item && !in_info {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Distinct years present in the set, most recent first.
pub fn available_years(records: &[Transaction]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|t| t.date.year()).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(date: (i32, u32, u32), category: &str, amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: category.to_string(),
            item: String::new(),
            amount,
            payment_type: None,
            additional_info: None,
            extra: Vec::new(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn((2024, 1, 1), "Food", 10.0),
            txn((2024, 1, 15), "Food", 20.0),
            txn((2024, 2, 1), "Travel fare", 5.0),
            txn((2023, 12, 31), "Food", 7.5),
        ]
    }

    #[test]
    fn test_by_year() {
        let records = sample();
        assert_eq!(by_year(&records, 2024).len(), 3);
        assert_eq!(by_year(&records, 2023).len(), 1);
        assert!(by_year(&records, 1900).is_empty());
    }

    #[test]
    fn test_by_year_and_month() {
        let records = sample();
        assert_eq!(by_year_and_month(&records, 2024, 0).len(), 2);
        assert_eq!(by_year_and_month(&records, 2024, 1).len(), 1);
        assert!(by_year_and_month(&records, 2024, 11).is_empty());
    }

    #[test]
    fn test_available_years_descending() {
        assert_eq!(available_years(&sample()), vec![2024, 2023]);
        assert!(available_years(&[]).is_empty());
    }

    #[test]
    fn test_filter_category_and_amount_range() {
        let records = sample();
        let filter = Filter {
            category: Some("Food".to_string()),
            amount_min: Some(10.0),
            amount_max: Some(20.0),
            ..Default::default()
        };
        let hits = by_filter(&records, &filter);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|t| t.category == "Food"));
    }

    #[test]
    fn test_filter_payment_type_never_matches_absent_field() {
        let mut records = sample();
        records[0].payment_type = Some("Card".to_string());
        let filter = Filter {
            payment_type: Some("Card".to_string()),
            ..Default::default()
        };
        assert_eq!(by_filter(&records, &filter).len(), 1);
    }

    #[test]
    fn test_filter_search_is_case_insensitive_over_both_fields() {
        let mut records = sample();
        records[0].item = "Weekly Groceries".to_string();
        records[2].additional_info = Some("GROCERY run".to_string());
        let filter = Filter {
            search: Some("grocer".to_string()),
            ..Default::default()
        };
        assert_eq!(by_filter(&records, &filter).len(), 2);
    }

    #[test]
    fn test_filter_empty_search_matches_all() {
        let records = sample();
        let filter = Filter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(by_filter(&records, &filter).len(), records.len());
    }

    #[test]
    fn test_filter_absent_info_never_matches_nonempty_term() {
        let records = sample();
        let filter = Filter {
            search: Some("anything".to_string()),
            ..Default::default()
        };
        assert!(by_filter(&records, &filter).is_empty());
    }
}

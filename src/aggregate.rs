use chrono::Datelike;

use crate::models::{CategoryTotal, Transaction};

/// Placeholder returned by `top_category` on empty input.
pub const NO_TOP_CATEGORY: &str = "None";

pub fn total(records: &[Transaction]) -> f64 {
    records.iter().map(|t| t.amount).sum()
}

/// Per-category sums in first-encountered order. Categories absent from the
/// input never appear; the order is stable for a given input.
pub fn category_totals(records: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for t in records {
        let idx = match totals.iter().position(|c| c.category == t.category) {
            Some(i) => i,
            None => {
                totals.push(CategoryTotal {
                    category: t.category.clone(),
                    total: 0.0,
                });
                totals.len() - 1
            }
        };
        totals[idx].total += t.amount;
    }
    totals
}

/// The category with the largest total. Ties go to the category encountered
/// first; empty input yields the ("None", 0) sentinel.
pub fn top_category(records: &[Transaction]) -> CategoryTotal {
    let mut best: Option<CategoryTotal> = None;
    for entry in category_totals(records) {
        match &best {
            Some(b) if entry.total <= b.total => {}
            _ => best = Some(entry),
        }
    }
    best.unwrap_or(CategoryTotal {
        category: NO_TOP_CATEGORY.to_string(),
        total: 0.0,
    })
}

/// 12-slot sums indexed by 0-based month. The caller pre-filters to a single
/// year; this does not look at the year at all.
pub fn monthly_totals(records: &[Transaction]) -> [f64; 12] {
    let mut buckets = [0.0; 12];
    for t in records {
        buckets[t.date.month0() as usize] += t.amount;
    }
    buckets
}

/// One 12-slot array per category observed, first-encountered order.
pub fn monthly_totals_by_category(records: &[Transaction]) -> Vec<(String, [f64; 12])> {
    let mut buckets: Vec<(String, [f64; 12])> = Vec::new();
    for t in records {
        let idx = match buckets.iter().position(|(c, _)| c == &t.category) {
            Some(i) => i,
            None => {
                buckets.push((t.category.clone(), [0.0; 12]));
                buckets.len() - 1
            }
        };
        buckets[idx].1[t.date.month0() as usize] += t.amount;
    }
    buckets
}

/// Average spend per elapsed month. The months-elapsed policy (12 for past
/// years, current month index + 1 for the running year) belongs to the
/// caller; `months_elapsed` must be at least 1.
pub fn monthly_average(year_total: f64, months_elapsed: u32) -> f64 {
    debug_assert!(months_elapsed > 0);
    year_total / months_elapsed as f64
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

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_category_totals_first_encounter_order() {
        let records = vec![
            txn((2024, 1, 1), "Food", 10.0),
            txn((2024, 1, 2), "Travel", 5.0),
            txn((2024, 2, 1), "Food", 20.0),
        ];
        let totals = category_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, 30.0);
        assert_eq!(totals[1].category, "Travel");
        assert_eq!(totals[1].total, 5.0);
    }

    #[test]
    fn test_category_partition_invariant() {
        let records = vec![
            txn((2024, 1, 1), "Food", 12.5),
            txn((2024, 3, 2), "Travel", 5.0),
            txn((2024, 5, 1), "Snacks", 2.25),
            txn((2024, 5, 9), "Food", 7.75),
        ];
        let sum: f64 = category_totals(&records).iter().map(|c| c.total).sum();
        assert_eq!(sum, total(&records));
    }

    #[test]
    fn test_top_category_tie_goes_to_first_encountered() {
        let records = vec![
            txn((2024, 1, 1), "Food", 10.0),
            txn((2024, 1, 2), "Travel", 10.0),
        ];
        let top = top_category(&records);
        assert_eq!(top.category, "Food");
        assert_eq!(top.total, 10.0);
    }

    #[test]
    fn test_top_category_empty_sentinel() {
        let top = top_category(&[]);
        assert_eq!(top.category, "None");
        assert_eq!(top.total, 0.0);
    }

    #[test]
    fn test_monthly_totals() {
        let records = vec![
            txn((2024, 1, 1), "Food", 10.0),
            txn((2024, 1, 15), "Food", 20.0),
            txn((2024, 2, 1), "Travel", 5.0),
        ];
        let months = monthly_totals(&records);
        assert_eq!(months[0], 30.0);
        assert_eq!(months[1], 5.0);
        assert!(months[2..].iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_sum_invariant_total_equals_monthly_sum() {
        let records = vec![
            txn((2024, 1, 3), "Food", 11.0),
            txn((2024, 6, 9), "Travel", 44.0),
            txn((2024, 12, 25), "Food", 3.5),
        ];
        let monthly_sum: f64 = monthly_totals(&records).iter().sum();
        assert_eq!(monthly_sum, total(&records));
    }

    #[test]
    fn test_monthly_totals_by_category() {
        let records = vec![
            txn((2024, 1, 1), "Food", 10.0),
            txn((2024, 2, 1), "Travel", 5.0),
            txn((2024, 2, 10), "Food", 20.0),
        ];
        let by_cat = monthly_totals_by_category(&records);
        assert_eq!(by_cat.len(), 2);
        assert_eq!(by_cat[0].0, "Food");
        assert_eq!(by_cat[0].1[0], 10.0);
        assert_eq!(by_cat[0].1[1], 20.0);
        assert_eq!(by_cat[1].0, "Travel");
        assert_eq!(by_cat[1].1[1], 5.0);
    }

    #[test]
    fn test_monthly_average() {
        assert_eq!(monthly_average(120.0, 12), 10.0);
        assert_eq!(monthly_average(30.0, 3), 10.0);
    }
}

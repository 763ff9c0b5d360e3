use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{ParseWarning, Transaction};

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Parse an amount field after stripping thousands separators.
/// Returns None for anything that is not a finite number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.replace(',', "");
    let s = s.trim();
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a purchase date. Exactly three `/`-separated components are read as
/// day/month/year ("05/03/2024" = 5 March 2024); anything else goes through
/// the generic fallbacks (ISO `YYYY-MM-DD`, then `DD-MM-YYYY`).
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() == 3 {
        let d: u32 = parts[0].trim().parse().ok()?;
        let m: u32 = parts[1].trim().parse().ok()?;
        let y: i32 = parts[2].trim().parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%d-%m-%Y").ok())
}

// ---------------------------------------------------------------------------
// parse_csv
// ---------------------------------------------------------------------------

pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    pub warnings: Vec<ParseWarning>,
}

const KNOWN_COLUMNS: &[&str] = &[
    "Purchase Date",
    "Category",
    "Item",
    "Amount",
    "Payment Type",
    "Additional Information",
];

/// Parse raw CSV text (header row + data rows) into normalized transactions.
///
/// Best-effort per row: bad amounts become 0, bad dates become `today`, each
/// with a recorded warning. Rows whose fields are all blank are skipped.
/// Only a malformed file as a whole (CSV structure) fails the parse.
pub fn parse_csv(text: &str, today: NaiveDate) -> Result<ParseOutcome> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = rdr.headers()?.clone();

    let col = |name: &str| headers.iter().position(|h| h.trim() == name);
    let idx_date = col("Purchase Date");
    let idx_category = col("Category");
    let idx_item = col("Item");
    let idx_amount = col("Amount");
    let idx_payment = col("Payment Type");
    let idx_info = col("Additional Information");

    let mut transactions = Vec::new();
    let mut warnings = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based CSV line, accounting for the header row
        let line = i + 2;

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let field =
            |ix: Option<usize>| ix.and_then(|ix| record.get(ix)).unwrap_or("").trim();
        let optional = |ix: Option<usize>| {
            let v = field(ix);
            (!v.is_empty()).then(|| v.to_string())
        };

        let raw_amount = field(idx_amount);
        let amount = if raw_amount.is_empty() {
            // Empty amount cells are treated as zero without complaint;
            // only non-empty garbage warns.
            0.0
        } else {
            match parse_amount(raw_amount) {
                Some(v) => v,
                None => {
                    warnings.push(ParseWarning::BadAmount {
                        line,
                        raw: raw_amount.to_string(),
                    });
                    0.0
                }
            }
        };

        let raw_date = field(idx_date);
        let date = match parse_purchase_date(raw_date) {
            Some(d) => d,
            None => {
                warnings.push(ParseWarning::BadDate {
                    line,
                    raw: raw_date.to_string(),
                });
                today
            }
        };

        let extra: Vec<(String, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !KNOWN_COLUMNS.contains(&h.trim()))
            .filter_map(|(ix, h)| {
                let v = record.get(ix).unwrap_or("").trim();
                (!v.is_empty()).then(|| (h.trim().to_string(), v.to_string()))
            })
            .collect();

        transactions.push(Transaction {
            date,
            category: field(idx_category).to_string(),
            item: field(idx_item).to_string(),
            amount,
            payment_type: optional(idx_payment),
            additional_info: optional(idx_info),
            extra,
        });
    }

    Ok(ParseOutcome {
        transactions,
        warnings,
    })
}

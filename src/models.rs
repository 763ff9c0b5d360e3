use chrono::NaiveDate;

/// One normalized purchase, built once at ingestion and never mutated.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub payment_type: Option<String>,
    pub additional_info: Option<String>,
    /// Columns beyond the known header set, preserved verbatim.
    pub extra: Vec<(String, String)>,
}

/// Non-fatal per-row problem noticed during ingestion. The row is kept with
/// a substituted value; the warning carries the raw input and CSV line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    BadAmount { line: usize, raw: String },
    BadDate { line: usize, raw: String },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::BadAmount { line, raw } => {
                write!(f, "line {line}: invalid amount {raw:?}, using 0")
            }
            ParseWarning::BadDate { line, raw } => {
                write!(f, "line {line}: invalid date {raw:?}, using today")
            }
        }
    }
}

/// A category label with its summed amount. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

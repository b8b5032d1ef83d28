//! Filter pipeline for the records view
//!
//! Pure narrowing passes over the record snapshot: type filter, text
//! filter, amount filter, date filter, composed in that order. Each
//! pass preserves the original relative order and has no side effects;
//! the pipeline is re-run on every state change since the dataset is
//! small.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise_api::RecordType;

use super::models::Record;

/// Amount comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountOperator {
    /// Strictly greater than the threshold
    Greater,
    /// Strictly less than the threshold
    Less,
    /// Greater than or equal to the threshold
    GreaterOrEqual,
    /// Less than or equal to the threshold
    LessOrEqual,
}

impl Default for AmountOperator {
    fn default() -> Self {
        AmountOperator::Greater
    }
}

impl std::str::FromStr for AmountOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(AmountOperator::Greater),
            "<" => Ok(AmountOperator::Less),
            ">=" => Ok(AmountOperator::GreaterOrEqual),
            "<=" => Ok(AmountOperator::LessOrEqual),
            _ => Err(format!("Unknown amount operator: {}", s)),
        }
    }
}

impl std::fmt::Display for AmountOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountOperator::Greater => write!(f, ">"),
            AmountOperator::Less => write!(f, "<"),
            AmountOperator::GreaterOrEqual => write!(f, ">="),
            AmountOperator::LessOrEqual => write!(f, "<="),
        }
    }
}

impl AmountOperator {
    /// Apply the comparison between a record amount and the threshold
    pub fn compare(&self, amount: Decimal, threshold: Decimal) -> bool {
        match self {
            AmountOperator::Greater => amount > threshold,
            AmountOperator::Less => amount < threshold,
            AmountOperator::GreaterOrEqual => amount >= threshold,
            AmountOperator::LessOrEqual => amount <= threshold,
        }
    }
}

/// Filter state for one record section
///
/// Each record type owns an independent instance; created with
/// defaults, mutated per interaction, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring query over name or category
    pub search: String,
    /// Amount comparison operator
    pub operator: AmountOperator,
    /// Amount threshold; `None` disables the amount filter
    pub amount: Option<Decimal>,
    /// Inclusive start of the date range
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the date range
    pub end_date: Option<NaiveDate>,
}

impl FilterState {
    /// Check whether every filter is at its default (pass-all) value
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.amount.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Keep only records of the given type
pub fn filter_by_type(records: &[Record], record_type: RecordType) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.record_type == record_type)
        .cloned()
        .collect()
}

/// Keep records whose name or category contains the query,
/// case-insensitively; an empty query keeps everything
pub fn filter_by_text(records: Vec<Record>, query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.matches_query(query))
        .collect()
}

/// Keep records whose amount satisfies the comparison; no threshold
/// keeps everything
pub fn filter_by_amount(
    records: Vec<Record>,
    operator: AmountOperator,
    threshold: Option<Decimal>,
) -> Vec<Record> {
    let threshold = match threshold {
        Some(value) => value,
        None => return records,
    };
    records
        .into_iter()
        .filter(|r| operator.compare(r.amount, threshold))
        .collect()
}

/// Keep records inside the inclusive date range, at day granularity.
/// With both bounds absent everything passes; once a bound is set,
/// records whose timestamp fails to parse are excluded.
pub fn filter_by_date(
    records: Vec<Record>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Record> {
    if start.is_none() && end.is_none() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| {
            let date = match r.date_naive() {
                Some(d) => d,
                None => return false,
            };
            if let Some(start) = start {
                if date < start {
                    return false;
                }
            }
            if let Some(end) = end {
                if date > end {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Full pipeline: type filter, then text, amount, and date filters
pub fn filter_records(
    records: &[Record],
    record_type: RecordType,
    filter: &FilterState,
) -> Vec<Record> {
    let by_type = filter_by_type(records, record_type);
    let by_text = filter_by_text(by_type, &filter.search);
    let by_amount = filter_by_amount(by_text, filter.operator, filter.amount);
    filter_by_date(by_amount, filter.start_date, filter.end_date)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, record_type: RecordType, name: &str, amount: &str, date: &str) -> Record {
        Record {
            id,
            record_type,
            name: name.to_string(),
            category: "Інше".to_string(),
            amount: amount.parse().unwrap(),
            description: String::new(),
            date_time: date.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, RecordType::Income, "Зарплата", "1500.00", "2024-05-01 09:00:00"),
            record(2, RecordType::Expense, "Обід", "50.00", "2024-05-02 13:30:00"),
            record(3, RecordType::Income, "Фріланс", "800.00", "2024-05-10 18:00:00"),
            record(4, RecordType::Expense, "Квиток", "150.00", "2024-05-15 08:15:00"),
        ]
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = sample();
        let filter = FilterState::default();
        let incomes = filter_records(&records, RecordType::Income, &filter);
        assert_eq!(ids(&incomes), vec![1, 3]);
        let expenses = filter_records(&records, RecordType::Expense, &filter);
        assert_eq!(ids(&expenses), vec![2, 4]);
    }

    #[test]
    fn test_text_filter_clears_back_to_original() {
        let records = sample();
        let mut filter = FilterState {
            search: "фріланс".to_string(),
            ..Default::default()
        };
        let narrowed = filter_records(&records, RecordType::Income, &filter);
        assert_eq!(ids(&narrowed), vec![3]);

        filter.search.clear();
        let restored = filter_records(&records, RecordType::Income, &filter);
        assert_eq!(ids(&restored), vec![1, 3]);
    }

    #[test]
    fn test_amount_filter_scenario() {
        // L = [{amount: 50}, {amount: 150}], "> 100" keeps only 150
        let records = sample();
        let filter = FilterState {
            operator: AmountOperator::Greater,
            amount: Some("100".parse().unwrap()),
            ..Default::default()
        };
        let result = filter_records(&records, RecordType::Expense, &filter);
        assert_eq!(ids(&result), vec![4]);
        assert_eq!(result[0].amount, "150.00".parse().unwrap());
    }

    #[test]
    fn test_amount_filter_monotonic() {
        // Raising the > threshold never grows the result set
        let records = sample();
        let mut previous = usize::MAX;
        for threshold in ["0", "100", "500", "1000", "2000"] {
            let filter = FilterState {
                operator: AmountOperator::Greater,
                amount: Some(threshold.parse().unwrap()),
                ..Default::default()
            };
            let size = filter_records(&records, RecordType::Income, &filter).len();
            assert!(size <= previous);
            previous = size;
        }
    }

    #[test]
    fn test_amount_operators() {
        let hundred: Decimal = "100".parse().unwrap();
        let fifty: Decimal = "50".parse().unwrap();
        assert!(AmountOperator::Greater.compare(hundred, fifty));
        assert!(!AmountOperator::Greater.compare(hundred, hundred));
        assert!(AmountOperator::GreaterOrEqual.compare(hundred, hundred));
        assert!(AmountOperator::Less.compare(fifty, hundred));
        assert!(AmountOperator::LessOrEqual.compare(hundred, hundred));
    }

    #[test]
    fn test_amount_operator_parse() {
        assert_eq!(">".parse::<AmountOperator>().unwrap(), AmountOperator::Greater);
        assert_eq!("<=".parse::<AmountOperator>().unwrap(), AmountOperator::LessOrEqual);
        assert!("=".parse::<AmountOperator>().is_err());
    }

    #[test]
    fn test_date_filter_inclusive_bounds() {
        let records = sample();
        let filter = FilterState {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 2),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 15),
            ..Default::default()
        };
        let result = filter_records(&records, RecordType::Expense, &filter);
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_date_filter_start_after_end_is_empty() {
        let records = sample();
        let filter = FilterState {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Default::default()
        };
        assert!(filter_records(&records, RecordType::Income, &filter).is_empty());
        assert!(filter_records(&records, RecordType::Expense, &filter).is_empty());
    }

    #[test]
    fn test_date_filter_start_only() {
        let records = sample();
        let filter = FilterState {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 5),
            ..Default::default()
        };
        let result = filter_records(&records, RecordType::Income, &filter);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_date_filter_excludes_unparseable_when_bound_set() {
        let mut records = sample();
        records.push(record(5, RecordType::Income, "Бонус", "10.00", "невідомо"));

        let no_bounds = filter_records(&records, RecordType::Income, &FilterState::default());
        assert_eq!(ids(&no_bounds), vec![1, 3, 5]);

        let filter = FilterState {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        let bounded = filter_records(&records, RecordType::Income, &filter);
        assert_eq!(ids(&bounded), vec![1, 3]);
    }

    #[test]
    fn test_pipeline_preserves_relative_order() {
        let records = sample();
        let filter = FilterState {
            operator: AmountOperator::GreaterOrEqual,
            amount: Some("50".parse().unwrap()),
            ..Default::default()
        };
        let result = filter_records(&records, RecordType::Expense, &filter);
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_combined_filters() {
        let records = sample();
        let filter = FilterState {
            search: "зар".to_string(),
            operator: AmountOperator::GreaterOrEqual,
            amount: Some("1000".parse().unwrap()),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 31),
        };
        let result = filter_records(&records, RecordType::Income, &filter);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_state_is_empty() {
        assert!(FilterState::default().is_empty());
        let filter = FilterState {
            amount: Some("1".parse().unwrap()),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}

// ============================================================================
// Reports
// Broker and foreign-issuer dividend reports (generate-then-fetch)
// ============================================================================

use crate::numeric::{MoneyValue, Quotation};
use crate::proto::{self, wire_model};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a report generation request.
///
/// The server answers with either a task id to poll with the matching `get_*`
/// call, or, when the report is already built, its first page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratedReport<R> {
    /// Empty when the server returned the report directly
    pub task_id: String,
    pub report: Option<R>,
}

impl<R> GeneratedReport<R> {
    pub fn pending(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            report: None,
        }
    }

    pub fn ready(report: R) -> Self {
        Self {
            task_id: String::new(),
            report: Some(report),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.report.is_some()
    }
}

// ============================================================================
// Broker Report
// ============================================================================

/// One trade line of a broker report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokerReportItem {
    pub trade_id: String,
    pub order_id: String,
    pub figi: String,
    pub execute_sign: String,
    pub trade_datetime: DateTime<Utc>,
    pub exchange: String,
    pub class_code: String,
    pub direction: String,
    pub name: String,
    pub ticker: String,
    pub price: MoneyValue,
    pub quantity: i64,
    pub order_amount: MoneyValue,
    /// Accrued coupon income
    pub aci_value: Quotation,
    pub total_order_amount: MoneyValue,
    pub broker_commission: MoneyValue,
    pub exchange_commission: MoneyValue,
    pub exchange_clearing_commission: MoneyValue,
    pub repo_rate: Quotation,
    pub party: String,
    pub clear_value_date: DateTime<Utc>,
    pub sec_value_date: DateTime<Utc>,
    pub broker_status: String,
    pub delivery_type: String,
}

wire_model!(proto::BrokerReport => BrokerReportItem {
    trade_id,
    order_id,
    figi,
    execute_sign,
    trade_datetime: timestamp,
    exchange,
    class_code,
    direction,
    name,
    ticker,
    price: or_default,
    quantity,
    order_amount: or_default,
    aci_value: or_default,
    total_order_amount: or_default,
    broker_commission: or_default,
    exchange_commission: or_default,
    exchange_clearing_commission: or_default,
    repo_rate: or_default,
    party,
    clear_value_date: timestamp,
    sec_value_date: timestamp,
    broker_status,
    delivery_type,
});

/// One page of a generated broker report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokerReport {
    pub items: Vec<BrokerReportItem>,
    pub items_count: i32,
    pub pages_count: i32,
    /// Zero-based page number
    pub page: i32,
}

wire_model!(proto::GetBrokerReportResponse => BrokerReport {
    items = broker_report: each,
    items_count,
    pages_count,
    page,
});

impl BrokerReport {
    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.pages_count
    }
}

// ============================================================================
// Dividends of Foreign Issuers
// ============================================================================

/// One payout line of the foreign issuer dividends report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DividendsForeignIssuerItem {
    pub record_date: DateTime<Utc>,
    pub payment_date: DateTime<Utc>,
    pub security_name: String,
    pub isin: String,
    pub issuer_country: String,
    pub quantity: i64,
    /// Per share
    pub dividend: Quotation,
    pub external_commission: Quotation,
    pub dividend_gross: Quotation,
    pub tax: Quotation,
    pub dividend_amount: Quotation,
    pub currency: String,
}

wire_model!(proto::DividendsForeignIssuerReport => DividendsForeignIssuerItem {
    record_date: timestamp,
    payment_date: timestamp,
    security_name,
    isin,
    issuer_country,
    quantity,
    dividend: or_default,
    external_commission: or_default,
    dividend_gross: or_default,
    tax: or_default,
    dividend_amount: or_default,
    currency,
});

/// One page of a generated foreign issuer dividends report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DividendsForeignIssuerReport {
    pub items: Vec<DividendsForeignIssuerItem>,
    pub items_count: i32,
    pub pages_count: i32,
    pub page: i32,
}

wire_model!(proto::GetDividendsForeignIssuerReportResponse => DividendsForeignIssuerReport {
    items = dividends_foreign_issuer_report: each,
    items_count,
    pages_count,
    page,
});

impl DividendsForeignIssuerReport {
    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.pages_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broker_report_from_wire() {
        let report = BrokerReport::from(proto::GetBrokerReportResponse {
            broker_report: vec![proto::BrokerReport {
                trade_id: "T-1".to_string(),
                ticker: "SBER".to_string(),
                price: Some(proto::MoneyValue {
                    currency: "rub".to_string(),
                    units: 270,
                    nano: 150_000_000,
                }),
                quantity: 10,
                ..Default::default()
            }],
            items_count: 1,
            pages_count: 3,
            page: 0,
        });

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].ticker, "SBER");
        assert_eq!(report.items[0].price.amount, Quotation::new(270, 150_000_000));
        assert!(report.items[0].repo_rate.is_zero());
        assert_eq!(report.items[0].trade_datetime, DateTime::<Utc>::UNIX_EPOCH);
        assert!(report.has_next_page());
    }

    #[test]
    fn test_last_page() {
        let report = DividendsForeignIssuerReport {
            pages_count: 2,
            page: 1,
            ..Default::default()
        };
        assert!(!report.has_next_page());

        let empty = BrokerReport::default();
        assert!(!empty.has_next_page());
    }

    #[test]
    fn test_generated_report_states() {
        let pending: GeneratedReport<BrokerReport> = GeneratedReport::pending("task-9");
        assert!(!pending.is_ready());
        assert_eq!(pending.task_id, "task-9");

        let ready = GeneratedReport::ready(BrokerReport::default());
        assert!(ready.is_ready());
        assert!(ready.task_id.is_empty());
    }
}

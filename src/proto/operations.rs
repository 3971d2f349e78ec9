// ============================================================================
// OperationsService Messages
// ============================================================================

use super::{MoneyValue, Quotation};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Operations by cursor
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetOperationsByCursorRequest {
    pub account_id: String,
    pub instrument_id: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub cursor: String,
    pub limit: i32,
    pub operation_types: Vec<i32>,
    pub state: i32,
    pub without_commissions: bool,
    pub without_trades: bool,
    pub without_overnights: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetOperationsByCursorResponse {
    pub has_next: bool,
    pub next_cursor: String,
    pub items: Vec<OperationItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationItem {
    pub cursor: String,
    pub broker_account_id: String,
    pub id: String,
    pub parent_operation_id: String,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub r#type: i32,
    pub description: String,
    pub state: i32,
    pub instrument_uid: String,
    pub figi: String,
    pub instrument_type: String,
    pub payment: Option<MoneyValue>,
    pub price: Option<MoneyValue>,
    pub commission: Option<MoneyValue>,
    pub quantity: i64,
    pub quantity_rest: i64,
    pub quantity_done: i64,
    pub trades_info: Option<OperationItemTrades>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationItemTrades {
    pub trades: Vec<OperationItemTrade>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationItemTrade {
    pub num: String,
    pub date: Option<DateTime<Utc>>,
    pub quantity: i64,
    pub price: Option<MoneyValue>,
}

// ============================================================================
// Broker report (generate-then-fetch)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrokerReportPayload {
    GenerateBrokerReportRequest(GenerateBrokerReportRequest),
    GetBrokerReportRequest(GetBrokerReportRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokerReportRequest {
    pub payload: Option<BrokerReportPayload>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateBrokerReportRequest {
    pub account_id: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetBrokerReportRequest {
    pub task_id: String,
    pub page: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokerReportResponse {
    pub generate_broker_report_response: Option<GenerateBrokerReportResponse>,
    pub get_broker_report_response: Option<GetBrokerReportResponse>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateBrokerReportResponse {
    pub task_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetBrokerReportResponse {
    pub broker_report: Vec<BrokerReport>,
    pub items_count: i32,
    pub pages_count: i32,
    pub page: i32,
}

/// One row of a broker report.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokerReport {
    pub trade_id: String,
    pub order_id: String,
    pub figi: String,
    pub execute_sign: String,
    pub trade_datetime: Option<DateTime<Utc>>,
    pub exchange: String,
    pub class_code: String,
    pub direction: String,
    pub name: String,
    pub ticker: String,
    pub price: Option<MoneyValue>,
    pub quantity: i64,
    pub order_amount: Option<MoneyValue>,
    pub aci_value: Option<Quotation>,
    pub total_order_amount: Option<MoneyValue>,
    pub broker_commission: Option<MoneyValue>,
    pub exchange_commission: Option<MoneyValue>,
    pub exchange_clearing_commission: Option<MoneyValue>,
    pub repo_rate: Option<Quotation>,
    pub party: String,
    pub clear_value_date: Option<DateTime<Utc>>,
    pub sec_value_date: Option<DateTime<Utc>>,
    pub broker_status: String,
    pub delivery_type: String,
}

// ============================================================================
// Dividends of foreign issuers (generate-then-fetch)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DividendsForeignIssuerPayload {
    GenerateDivForeignIssuerReport(GenerateDividendsForeignIssuerReportRequest),
    GetDivForeignIssuerReport(GetDividendsForeignIssuerReportRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetDividendsForeignIssuerRequest {
    pub payload: Option<DividendsForeignIssuerPayload>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateDividendsForeignIssuerReportRequest {
    pub account_id: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetDividendsForeignIssuerReportRequest {
    pub task_id: String,
    pub page: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetDividendsForeignIssuerResponse {
    pub generate_div_foreign_issuer_report_response:
        Option<GenerateDividendsForeignIssuerReportResponse>,
    pub div_foreign_issuer_report: Option<GetDividendsForeignIssuerReportResponse>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateDividendsForeignIssuerReportResponse {
    pub task_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetDividendsForeignIssuerReportResponse {
    pub dividends_foreign_issuer_report: Vec<DividendsForeignIssuerReport>,
    pub items_count: i32,
    pub pages_count: i32,
    pub page: i32,
}

/// One row of the foreign issuer dividends report.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DividendsForeignIssuerReport {
    pub record_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub security_name: String,
    pub isin: String,
    pub issuer_country: String,
    pub quantity: i64,
    pub dividend: Option<Quotation>,
    pub external_commission: Option<Quotation>,
    pub dividend_gross: Option<Quotation>,
    pub tax: Option<Quotation>,
    pub dividend_amount: Option<Quotation>,
    pub currency: String,
}

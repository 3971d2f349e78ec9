// ============================================================================
// Operations
// Account operations returned by the cursor-paginated operations call
// ============================================================================

use crate::numeric::MoneyValue;
use crate::paging::Page;
use crate::proto::{self, wire_enum, wire_model};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Execution state of an operation
    pub enum OperationState {
        #[default]
        Unspecified = 0,
        Executed = 1,
        Canceled = 2,
        /// Still being processed
        Progress = 3,
    }
}

wire_enum! {
    /// Kind of account operation
    pub enum OperationType {
        #[default]
        Unspecified = 0,
        /// Cash deposit
        Input = 1,
        BondTax = 2,
        OutputSecurities = 3,
        Overnight = 4,
        Tax = 5,
        BondRepaymentFull = 6,
        SellCard = 7,
        DividendTax = 8,
        /// Cash withdrawal
        Output = 9,
        BondRepayment = 10,
        TaxCorrection = 11,
        ServiceFee = 12,
        BenefitTax = 13,
        MarginFee = 14,
        Buy = 15,
        BuyCard = 16,
        InputSecurities = 17,
        SellMargin = 18,
        BrokerFee = 19,
        BuyMargin = 20,
        Dividend = 21,
        Sell = 22,
        Coupon = 23,
        SuccessFee = 24,
    }
}

/// One trade executed as part of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationTrade {
    pub num: String,
    pub date: DateTime<Utc>,
    pub quantity: i64,
    pub price: MoneyValue,
}

wire_model!(proto::OperationItemTrade => OperationTrade {
    num,
    date: timestamp,
    quantity,
    price: or_default,
});

impl From<proto::OperationItemTrades> for Vec<OperationTrade> {
    fn from(wire: proto::OperationItemTrades) -> Self {
        wire.trades.into_iter().map(OperationTrade::from).collect()
    }
}

/// Account operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationItem {
    /// Position of this item in the result set; resume a walk from here
    pub cursor: String,
    pub broker_account_id: String,
    pub id: String,
    pub parent_operation_id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub operation_type: OperationType,
    pub description: String,
    pub state: OperationState,
    pub instrument_uid: String,
    pub figi: String,
    pub instrument_type: String,
    pub payment: MoneyValue,
    pub price: MoneyValue,
    pub commission: MoneyValue,
    pub quantity: i64,
    pub quantity_rest: i64,
    pub quantity_done: i64,
    /// Empty unless trades were requested
    pub trades: Vec<OperationTrade>,
}

wire_model!(proto::OperationItem => OperationItem {
    cursor,
    broker_account_id,
    id,
    parent_operation_id,
    name,
    date: timestamp,
    operation_type = r#type: into,
    description,
    state: into,
    instrument_uid,
    figi,
    instrument_type,
    payment: or_default,
    price: or_default,
    commission: or_default,
    quantity,
    quantity_rest,
    quantity_done,
    trades = trades_info: or_default,
});

/// One page of operations plus the cursor to continue from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationsByCursor {
    pub has_next: bool,
    pub next_cursor: String,
    pub items: Vec<OperationItem>,
}

wire_model!(proto::GetOperationsByCursorResponse => OperationsByCursor {
    has_next,
    next_cursor,
    items: each,
});

impl From<OperationsByCursor> for Page<OperationItem> {
    fn from(page: OperationsByCursor) -> Self {
        Page::with_cursor(page.items, page.next_cursor, page.has_next)
    }
}

/// Filter for an operations-by-cursor call.
///
/// Commissions, trades and overnight operations are included unless switched
/// off. An unset `limit` falls back to `PagingConfig::operations_limit`.
///
/// # Example
/// ```
/// use invest_api::domain::{OperationState, OperationType, OperationsCursorRequest};
///
/// let request = OperationsCursorRequest::new("2000123456")
///     .with_types([OperationType::Buy, OperationType::Sell])
///     .with_state(OperationState::Executed)
///     .with_trades(false)
///     .with_limit(500);
///
/// assert_eq!(request.limit, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationsCursorRequest {
    pub account_id: String,
    /// figi or instrument uid; None means all instruments
    pub instrument_id: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Cursor of a previous page; None starts from the beginning
    pub cursor: Option<String>,
    pub limit: Option<i32>,
    pub operation_types: Vec<OperationType>,
    pub state: OperationState,
    pub with_commissions: bool,
    pub with_trades: bool,
    pub with_overnights: bool,
}

impl OperationsCursorRequest {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            instrument_id: None,
            from: None,
            to: None,
            cursor: None,
            limit: None,
            operation_types: Vec::new(),
            state: OperationState::Unspecified,
            with_commissions: true,
            with_trades: true,
            with_overnights: true,
        }
    }

    pub fn with_instrument(mut self, instrument_id: impl Into<String>) -> Self {
        self.instrument_id = Some(instrument_id.into());
        self
    }

    pub fn with_period(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = OperationType>) -> Self {
        self.operation_types = types.into_iter().collect();
        self
    }

    pub fn with_state(mut self, state: OperationState) -> Self {
        self.state = state;
        self
    }

    pub fn with_commissions(mut self, include: bool) -> Self {
        self.with_commissions = include;
        self
    }

    pub fn with_trades(mut self, include: bool) -> Self {
        self.with_trades = include;
        self
    }

    pub fn with_overnights(mut self, include: bool) -> Self {
        self.with_overnights = include;
        self
    }

    /// Wire request with `limit` already resolved.
    pub(crate) fn into_wire(self, limit: i32) -> proto::GetOperationsByCursorRequest {
        proto::GetOperationsByCursorRequest {
            account_id: self.account_id,
            instrument_id: self.instrument_id.unwrap_or_default(),
            from: self.from,
            to: self.to,
            cursor: self.cursor.unwrap_or_default(),
            limit,
            operation_types: self.operation_types.into_iter().map(i32::from).collect(),
            state: self.state.into(),
            without_commissions: !self.with_commissions,
            without_trades: !self.with_trades,
            without_overnights: !self.with_overnights,
        }
    }
}

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cinema_core::ValueObject;

/// Ticket types on sale. The set is closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this type occupies a seat. Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any [`TicketType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket type: {0}")]
pub struct UnknownTicketType(pub String);

impl FromStr for TicketType {
    type Err = UnknownTicketType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTicketType(s.to_string()))
    }
}

/// The type a request asks for, as received.
///
/// Requests come from outside the process, so a request may name a type that
/// is not on sale. That is kept as data and rejected during validation rather
/// than at parse time, so every bad request in a batch gets reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestedType {
    Known(TicketType),
    Unrecognized(String),
}

impl RequestedType {
    pub fn known(&self) -> Option<TicketType> {
        match self {
            RequestedType::Known(t) => Some(*t),
            RequestedType::Unrecognized(_) => None,
        }
    }
}

impl From<TicketType> for RequestedType {
    fn from(value: TicketType) -> Self {
        RequestedType::Known(value)
    }
}

impl From<String> for RequestedType {
    fn from(value: String) -> Self {
        match value.parse::<TicketType>() {
            Ok(t) => RequestedType::Known(t),
            Err(_) => RequestedType::Unrecognized(value),
        }
    }
}

impl From<RequestedType> for String {
    fn from(value: RequestedType) -> Self {
        match value {
            RequestedType::Known(t) => t.as_str().to_string(),
            RequestedType::Unrecognized(name) => name,
        }
    }
}

/// A request for `count` tickets of one type. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type", default)]
    ticket_type: Option<RequestedType>,
    #[serde(default)]
    count: Option<i64>,
}

impl ValueObject for TicketTypeRequest {}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Self {
        Self {
            ticket_type: Some(RequestedType::Known(ticket_type)),
            count: Some(count),
        }
    }

    /// A request that names no type at all.
    pub fn untyped(count: i64) -> Self {
        Self {
            ticket_type: None,
            count: Some(count),
        }
    }

    /// A request naming a type that is not on sale.
    pub fn unrecognized(name: impl Into<String>, count: i64) -> Self {
        Self {
            ticket_type: Some(RequestedType::Unrecognized(name.into())),
            count: Some(count),
        }
    }

    /// A request that names a type but no number of tickets.
    pub fn uncounted(ticket_type: TicketType) -> Self {
        Self {
            ticket_type: Some(RequestedType::Known(ticket_type)),
            count: None,
        }
    }

    pub fn ticket_type(&self) -> Option<&RequestedType> {
        self.ticket_type.as_ref()
    }

    pub fn count(&self) -> Option<i64> {
        self.count
    }
}

/// One purchase attempt, in the shape it arrives from callers.
///
/// Every part of the order may be absent: the account id, the request list, or
/// individual elements of that list. Validation turns this into a
/// [`ValidatedPurchase`](crate::ValidatedPurchase) or a
/// [`PurchaseError`](crate::PurchaseError).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub requests: Option<Vec<Option<TicketTypeRequest>>>,
}

impl PurchaseOrder {
    /// An order with every part present.
    pub fn new(account_id: i64, requests: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            requests: Some(requests.into_iter().map(Some).collect()),
        }
    }
}

//! Ticket price list.

use serde::{Deserialize, Serialize};

use crate::counts::TicketCounts;
use crate::ticket::TicketType;

pub const ADULT_PRICE: u64 = 20;
pub const CHILD_PRICE: u64 = 10;
pub const INFANT_PRICE: u64 = 0;

/// Price per ticket type in whole currency units.
///
/// Immutable once built; the service is handed one at construction time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: ADULT_PRICE,
            child: CHILD_PRICE,
            infant: INFANT_PRICE,
        }
    }
}

impl PriceTable {
    pub fn price(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Amount due for a set of tickets. Saturates instead of overflowing.
    pub fn amount_for(&self, counts: &TicketCounts) -> u64 {
        counts
            .iter()
            .map(|(ticket_type, count)| self.price(ticket_type).saturating_mul(count))
            .fold(0u64, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prices() {
        let prices = PriceTable::default();
        assert_eq!(prices.price(TicketType::Adult), 20);
        assert_eq!(prices.price(TicketType::Child), 10);
        assert_eq!(prices.price(TicketType::Infant), 0);
    }

    #[test]
    fn infants_are_free_regardless_of_count() {
        let counts = TicketCounts {
            adult: 11,
            child: 1,
            infant: 1,
        };
        assert_eq!(PriceTable::default().amount_for(&counts), 230);

        let counts = TicketCounts {
            adult: 10,
            child: 0,
            infant: 10,
        };
        assert_eq!(PriceTable::default().amount_for(&counts), 200);
    }

    #[test]
    fn partial_json_keeps_default_prices() {
        let prices: PriceTable = serde_json::from_str(r#"{"child": 12}"#).unwrap();
        assert_eq!(
            prices,
            PriceTable {
                adult: 20,
                child: 12,
                infant: 0
            }
        );
    }
}

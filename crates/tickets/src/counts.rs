use serde::{Deserialize, Serialize};

use cinema_core::ValueObject;

use crate::ticket::TicketType;

/// Requested tickets summed per type.
///
/// Only built from requests that already passed per-item validation, so all
/// counters are non-negative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl ValueObject for TicketCounts {}

impl TicketCounts {
    pub fn get(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Add `count` tickets of one type. Saturates instead of overflowing.
    pub fn add(&mut self, ticket_type: TicketType, count: u64) {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        };
        *slot = slot.saturating_add(count);
    }

    pub fn total(&self) -> u64 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.infant)
    }

    /// Seats taken by this purchase: adults and children, never infants.
    pub fn seats_to_reserve(&self) -> u64 {
        TicketType::ALL
            .into_iter()
            .filter(TicketType::occupies_seat)
            .map(|t| self.get(t))
            .fold(0u64, u64::saturating_add)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketType, u64)> + '_ {
        TicketType::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

impl FromIterator<(TicketType, u64)> for TicketCounts {
    fn from_iter<I: IntoIterator<Item = (TicketType, u64)>>(iter: I) -> Self {
        let mut counts = TicketCounts::default();
        for (ticket_type, count) in iter {
            counts.add(ticket_type, count);
        }
        counts
    }
}

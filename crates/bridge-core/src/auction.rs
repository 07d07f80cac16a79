use crate::call::Call;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    pub dealer: Seat,
    pub calls: Vec<Call>,
}

impl Auction {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
    }

    pub fn current_seat(&self) -> Seat {
        let mut seat = self.dealer;
        for _ in 0..self.calls.len() {
            seat = seat.next();
        }
        seat
    }

    pub fn is_finished(&self) -> bool {
        if self.calls.len() < 4 {
            return false;
        }
        let last_three = &self.calls[self.calls.len() - 3..];
        last_three.iter().all(|c| matches!(c, Call::Pass))
    }
}

use crate::rank::Rank;
use crate::seat::Seat;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};

/// One seat's thirteen cards, grouped by suit. Holdings keep the textual
/// order of the source notation — never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub spades: Vec<Rank>,
    pub hearts: Vec<Rank>,
    pub diamonds: Vec<Rank>,
    pub clubs: Vec<Rank>,
}

impl Hand {
    pub fn holding(&self, suit: Suit) -> &[Rank] {
        match suit {
            Suit::Spades => &self.spades,
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
        }
    }

    pub fn push(&mut self, suit: Suit, rank: Rank) {
        match suit {
            Suit::Spades => self.spades.push(rank),
            Suit::Hearts => self.hearts.push(rank),
            Suit::Diamonds => self.diamonds.push(rank),
            Suit::Clubs => self.clubs.push(rank),
        }
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.holding(suit).len() as u8
    }

    pub fn hcp(&self) -> u8 {
        Suit::ALL
            .iter()
            .flat_map(|&suit| self.holding(suit))
            .map(|rank| match rank {
                Rank::Ace => 4,
                Rank::King => 3,
                Rank::Queen => 2,
                Rank::Jack => 1,
                _ => 0,
            })
            .sum()
    }
}

/// A full deal: one hand per seat. The four-seat invariant is structural —
/// the array is indexed by [`Seat::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub dealer: Seat,
    hands: [Hand; 4],
}

impl Deal {
    pub fn new(dealer: Seat, hands: [Hand; 4]) -> Self {
        Self { dealer, hands }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pbn::parse_deal;

    #[test]
    fn test_hcp_calculation() {
        let deal = parse_deal("N:AKQJ97..A42.J532 T5.J98643.K95.76 432.KQ5.863.T984 86.AT72.QJT7.AKQ")
            .unwrap();
        assert_eq!(deal.hand(Seat::North).hcp(), 15);
    }

    #[test]
    fn test_holding_order_preserved() {
        let mut hand = Hand::default();
        hand.push(Suit::Hearts, Rank::Five);
        hand.push(Suit::Hearts, Rank::Ace);
        assert_eq!(hand.holding(Suit::Hearts), &[Rank::Five, Rank::Ace][..]);
        assert_eq!(hand.length(Suit::Hearts), 2);
        assert_eq!(hand.length(Suit::Clubs), 0);
    }
}

use crate::deal::{Deal, Hand};
use crate::error::FormatError;
use crate::rank::Rank;
use crate::seat::Seat;
use crate::suit::Suit;

/// Parses compact deal notation: `"<DEALER>:<HAND> <HAND> <HAND> <HAND>"`.
///
/// The first hand token belongs to the dealer; the rest follow clockwise in
/// N,E,S,W order, wrapping around. Each token is four `.`-separated suit
/// holdings in S,H,D,C order.
pub fn parse_deal(notation: &str) -> Result<Deal, FormatError> {
    let (dealer_str, hand_block) = notation
        .split_once(':')
        .ok_or_else(|| FormatError::MissingDealer(notation.to_string()))?;

    let mut dealer_chars = dealer_str.chars();
    let dealer = match (dealer_chars.next(), dealer_chars.next()) {
        (Some(c), None) => Seat::from_char(c),
        _ => None,
    }
    .ok_or_else(|| FormatError::UnknownDealer(dealer_str.to_string()))?;

    let tokens: Vec<&str> = hand_block.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(FormatError::HandCount(tokens.len()));
    }

    let start = dealer.index();
    let mut hands: [Hand; 4] = Default::default();
    for (i, token) in tokens.iter().enumerate() {
        let seat = Seat::ALL[(start + i) % 4];
        hands[seat.index()] = parse_hand(seat, token)?;
    }

    Ok(Deal::new(dealer, hands))
}

fn parse_hand(seat: Seat, token: &str) -> Result<Hand, FormatError> {
    let holdings: Vec<&str> = token.split('.').collect();
    if holdings.len() != 4 {
        return Err(FormatError::SuitCount {
            seat,
            found: holdings.len(),
        });
    }

    let mut hand = Hand::default();
    for (&suit, holding) in Suit::ALL.iter().zip(&holdings) {
        for c in holding.chars() {
            let rank = Rank::from_char(c).ok_or(FormatError::UnknownRank { seat, rank: c })?;
            hand.push(suit, rank);
        }
    }
    Ok(hand)
}

/// Inverse of [`parse_deal`]: hands are emitted in rotation starting at the
/// dealer, so `export_deal(&parse_deal(s)?) == s` for canonical input.
pub fn export_deal(deal: &Deal) -> String {
    let mut s = format!("{}:", deal.dealer);
    let mut seat = deal.dealer;
    for i in 0..4 {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&export_hand(deal.hand(seat)));
        seat = seat.next();
    }
    s
}

pub fn export_hand(hand: &Hand) -> String {
    let mut s = String::new();
    for (i, &suit) in Suit::ALL.iter().enumerate() {
        if i > 0 {
            s.push('.');
        }
        for rank in hand.holding(suit) {
            s.push(rank.to_char());
        }
    }
    s
}

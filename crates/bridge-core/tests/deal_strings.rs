use bridge_core::io::pbn;
use bridge_core::Seat;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Deserialize)]
struct TestVector {
    name: String,
    notation: String,
    dealer: String,
    hands: HashMap<String, String>,
}

#[test]
fn test_deal_string_roundtrip() {
    let yaml_content = fs::read_to_string("../../tests/deals/deal_strings.yaml")
        .expect("Failed to read test vectors");
    let vectors: Vec<TestVector> =
        serde_yaml::from_str(&yaml_content).expect("Failed to parse test vectors");

    for vector in vectors {
        let deal = pbn::parse_deal(&vector.notation)
            .unwrap_or_else(|e| panic!("{}: failed to parse deal: {}", vector.name, e));

        assert_eq!(
            deal.dealer.to_string(),
            vector.dealer,
            "Dealer mismatch for {}",
            vector.name
        );

        for (seat_str, expected) in &vector.hands {
            let seat = seat_str
                .chars()
                .next()
                .and_then(Seat::from_char)
                .unwrap_or_else(|| panic!("{}: bad seat key {:?}", vector.name, seat_str));
            assert_eq!(
                &pbn::export_hand(deal.hand(seat)),
                expected,
                "Hand mismatch at {} for {}",
                seat_str,
                vector.name
            );
        }

        // Re-export and compare
        assert_eq!(
            pbn::export_deal(&deal),
            vector.notation,
            "Roundtrip failed for {}",
            vector.name
        );
    }
}

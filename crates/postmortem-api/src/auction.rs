use bridge_core::io::pbn::parse_deal;
use bridge_core::{Auction, Call, FormatError, Strain};

/// Placeholder auction generation: parses the deal, then emits a fixed
/// heart game. Bidding logic is not implemented yet.
pub fn generate_auction(notation: &str) -> Result<(Vec<String>, String), FormatError> {
    let deal = parse_deal(notation)?;

    let mut auction = Auction::new(deal.dealer);
    auction.add_call(Call::Bid {
        level: 1,
        strain: Strain::Hearts,
    });
    auction.add_call(Call::Pass);
    auction.add_call(Call::Bid {
        level: 4,
        strain: Strain::Hearts,
    });
    auction.add_call(Call::Pass);
    auction.add_call(Call::Pass);
    auction.add_call(Call::Pass);
    debug_assert!(auction.is_finished());

    let calls = auction.calls.iter().map(|call| call.render()).collect();
    let explanation = format!(
        "Example auction based on the deal; {} dealt and holds {} HCP",
        deal.dealer,
        deal.hand(deal.dealer).hcp()
    );
    Ok((calls, explanation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_auction_valid() {
        let deal = "N:T5.J98643.K95.76 432.KQ5.863.T984 86.AT72.QJT7.AKQ AKQJ97..A42.J532";
        let (auction, explanation) = generate_auction(deal).unwrap();
        assert_eq!(auction, vec!["1H", "Pass", "4H", "Pass", "Pass", "Pass"]);
        assert!(explanation.contains('N'));
    }

    #[test]
    fn test_generate_auction_invalid() {
        assert!(matches!(
            generate_auction("invalid deal"),
            Err(FormatError::MissingDealer(_))
        ));
    }
}

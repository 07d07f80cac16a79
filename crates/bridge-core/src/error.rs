use crate::seat::Seat;
use thiserror::Error;

/// Malformed deal notation. Every variant carries the offending detail so
/// the caller can report it verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("deal notation has no dealer prefix: {0:?}")]
    MissingDealer(String),

    #[error("unknown dealer {0:?} in deal notation")]
    UnknownDealer(String),

    #[error("expected 4 hands in deal notation, found {0}")]
    HandCount(usize),

    #[error("expected 4 suits in the {seat} hand, found {found}")]
    SuitCount { seat: Seat, found: usize },

    #[error("unknown rank character {rank:?} in the {seat} hand")]
    UnknownRank { seat: Seat, rank: char },
}

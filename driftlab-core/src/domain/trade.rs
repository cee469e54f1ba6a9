//! Trade records and the capacity-bounded trade log.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of trade records retained per engine. Further trades are
/// silently dropped; no eviction.
pub const MAX_TRADES: usize = 100;

/// What a trade record marks: the open, or one of the two close outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeKind {
    /// Position opened; pnl is 0.
    Entry,
    /// Closed at the take-profit target.
    Win,
    /// Closed at the stop-loss.
    Stop,
}

impl TradeKind {
    pub fn is_exit(self) -> bool {
        matches!(self, TradeKind::Win | TradeKind::Stop)
    }
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeKind::Entry => "ENTRY",
            TradeKind::Win => "WIN",
            TradeKind::Stop => "STOP",
        };
        f.write_str(s)
    }
}

/// One immutable trade event. Copy, so appending never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: Symbol,
    pub kind: TradeKind,
    /// Realized pnl for exits; 0 for entries.
    pub pnl: f64,
}

/// Append-only trade log, preallocated to [`MAX_TRADES`].
#[derive(Debug, Clone)]
pub struct TradeLog {
    records: Vec<TradeRecord>,
}

impl Default for TradeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TradeLog {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(MAX_TRADES),
        }
    }

    /// Appends a record; silently dropped once the log is full.
    pub fn push(&mut self, record: TradeRecord) {
        if self.records.len() < MAX_TRADES {
            self.records.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Number of positions closed at target.
    pub fn wins(&self) -> usize {
        self.records
            .iter()
            .filter(|t| t.kind == TradeKind::Win)
            .count()
    }

    /// Number of positions closed at the stop.
    pub fn losses(&self) -> usize {
        self.records
            .iter()
            .filter(|t| t.kind == TradeKind::Stop)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: TradeKind, pnl: f64) -> TradeRecord {
        TradeRecord {
            symbol: Symbol::new("AAPL"),
            kind,
            pnl,
        }
    }

    #[test]
    fn log_drops_past_capacity() {
        let mut log = TradeLog::new();
        for _ in 0..MAX_TRADES + 10 {
            log.push(record(TradeKind::Entry, 0.0));
        }
        assert_eq!(log.len(), MAX_TRADES);
    }

    #[test]
    fn win_loss_counting() {
        let mut log = TradeLog::new();
        log.push(record(TradeKind::Entry, 0.0));
        log.push(record(TradeKind::Win, 0.04));
        log.push(record(TradeKind::Entry, 0.0));
        log.push(record(TradeKind::Stop, -0.01));
        assert_eq!(log.wins(), 1);
        assert_eq!(log.losses(), 1);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn kind_display_matches_wire_names() {
        assert_eq!(TradeKind::Entry.to_string(), "ENTRY");
        assert_eq!(TradeKind::Win.to_string(), "WIN");
        assert_eq!(TradeKind::Stop.to_string(), "STOP");
    }

    #[test]
    fn record_serialization_roundtrip() {
        let rec = record(TradeKind::Win, 0.0375);
        let json = serde_json::to_string(&rec).unwrap();
        let back: TradeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert!(json.contains("\"WIN\""));
    }
}

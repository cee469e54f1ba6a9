//! Position lifecycle — the FLAT/OPEN state machine.
//!
//! Holds at most one position. Opens with balance-tiered sizing and a fixed
//! stop/target bracket, trails the stop once the trade is in profit, and
//! closes into the trade log with the realized pnl. Every degenerate call
//! (open while open, update/close while flat, dust-sized open) is a silent
//! no-op.

use crate::domain::{Asset, AssetId, Position, Symbol, TradeKind, TradeLog, TradeRecord};

/// Balance never drops below this floor, even on a large losing close. The
/// engine also stops entering trades once the balance is at the floor.
pub const BALANCE_FLOOR: f64 = 0.5;

/// Positions smaller than this are not worth opening.
const MIN_POSITION_SIZE: f64 = 0.001;
/// Stop-loss at 1.5% below entry.
const STOP_LOSS_RATIO: f64 = 0.985;
/// Take-profit at 4.5% above entry (3:1 reward-to-risk).
const TAKE_PROFIT_RATIO: f64 = 1.045;
/// Unrealized gain that arms the trailing stop.
const TRAIL_TRIGGER_RETURN: f64 = 0.02;
/// Trailing stop follows at 3% below the current price.
const TRAIL_STOP_RATIO: f64 = 0.97;

/// Open-time sizing fraction, tiered by balance.
///
/// A finer-grained schedule than the selector's affordability table; the
/// two tables are independent (see DESIGN.md).
fn sizing_fraction(balance: f64) -> f64 {
    if balance < 2.0 {
        0.70
    } else if balance < 5.0 {
        0.50
    } else if balance < 10.0 {
        0.30
    } else {
        0.15
    }
}

/// Owns the single open position and the cooldown marker.
#[derive(Debug, Clone, Default)]
pub struct PositionManager {
    position: Option<Position>,
    last_traded: Option<AssetId>,
}

impl PositionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn is_flat(&self) -> bool {
        self.position.is_none()
    }

    /// Most recently traded asset; persists across closes for the selector's
    /// cooldown rule.
    pub fn last_traded(&self) -> Option<AssetId> {
        self.last_traded
    }

    /// FLAT → OPEN. No-op while a position is held or when the computed size
    /// would be dust (then nothing changes, not even the cooldown marker).
    pub fn open(&mut self, id: AssetId, asset: &Asset, balance: f64, trades: &mut TradeLog) {
        if self.position.is_some() {
            return;
        }

        let size = balance * sizing_fraction(balance);
        if size < MIN_POSITION_SIZE {
            return;
        }

        let entry = asset.current_price;
        self.position = Some(Position {
            asset: id,
            entry_price: entry,
            size,
            stop_loss: entry * STOP_LOSS_RATIO,
            take_profit: entry * TAKE_PROFIT_RATIO,
        });
        self.last_traded = Some(id);

        trades.push(TradeRecord {
            symbol: asset.symbol,
            kind: TradeKind::Entry,
            pnl: 0.0,
        });
    }

    /// OPEN → OPEN or OPEN → FLAT. Stop check first, then target, then the
    /// trailing ratchet. No-op while FLAT.
    pub fn update(
        &mut self,
        current_price: f64,
        symbol: Symbol,
        balance: &mut f64,
        trades: &mut TradeLog,
    ) {
        let (stop, target) = match &self.position {
            Some(pos) => (pos.stop_loss, pos.take_profit),
            None => return,
        };

        if current_price <= stop {
            self.close(current_price, TradeKind::Stop, symbol, balance, trades);
        } else if current_price >= target {
            self.close(current_price, TradeKind::Win, symbol, balance, trades);
        } else if let Some(pos) = self.position.as_mut() {
            if pos.unrealized_return(current_price) > TRAIL_TRIGGER_RETURN {
                let new_stop = current_price * TRAIL_STOP_RATIO;
                // Ratchet: the stop only ever tightens.
                if new_stop > pos.stop_loss {
                    pos.stop_loss = new_stop;
                }
            }
        }
    }

    /// OPEN → FLAT. Realizes pnl into the balance (floored), records the
    /// exit. No-op while FLAT.
    pub fn close(
        &mut self,
        exit_price: f64,
        kind: TradeKind,
        symbol: Symbol,
        balance: &mut f64,
        trades: &mut TradeLog,
    ) {
        let Some(pos) = self.position.take() else {
            return;
        };

        let pnl = (exit_price - pos.entry_price) * pos.size;
        *balance = (*balance + pnl).max(BALANCE_FLOOR);

        trades.push(TradeRecord { symbol, kind, pnl });
    }
}

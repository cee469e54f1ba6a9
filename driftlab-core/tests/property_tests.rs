//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Price band — every asset price stays inside `[0.7, 1.5] × base`
//! 2. Balance floor — the balance never drops below 0.5
//! 3. Ratchet monotonicity — the stop may only tighten while a position lives
//! 4. Ring arithmetic — averages clamp to the stored count
//! 5. Signal warm-up — fewer than 10 points always reads as neutral

use proptest::prelude::*;

use driftlab_core::domain::{Asset, AssetId, Symbol, TradeLog};
use driftlab_core::signal::momentum_strength;
use driftlab_core::{Engine, PositionManager, BALANCE_FLOOR};

fn arb_base_price() -> impl Strategy<Value = f64> {
    // Spans meme-coin dust to index levels.
    (0.01..30_000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

// ── 1. Price band ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prices_stay_in_band(seed in any::<u64>(), base in arb_base_price()) {
        let mut engine = Engine::with_seed(1.0, seed);
        engine.add_asset("PROP", base);

        for _ in 0..2_000 {
            engine.tick();
            let asset = &engine.assets()[0];
            prop_assert!(asset.current_price >= asset.min_price());
            prop_assert!(asset.current_price <= asset.max_price());
        }
    }

    // ── 2. Balance floor ─────────────────────────────────────────────

    #[test]
    fn balance_never_below_floor(seed in any::<u64>(), initial in 0.6..50.0_f64) {
        let mut engine = Engine::with_seed(initial, seed);
        engine.add_asset("DOGE", 0.31);
        engine.add_asset("SHIB", 0.05);

        for _ in 0..5_000 {
            engine.tick();
            prop_assert!(engine.balance() >= BALANCE_FLOOR);
        }
    }
}

// ── 3. Ratchet monotonicity ──────────────────────────────────────────

proptest! {
    /// Feed an arbitrary price path into an open position; while the
    /// position survives, the stop level may only rise.
    #[test]
    fn stop_only_tightens(
        path in prop::collection::vec(98.6..104.4_f64, 1..200),
    ) {
        let mut pm = PositionManager::new();
        let mut trades = TradeLog::new();
        let mut balance = 1.0;
        let asset = Asset::new("PROP", 100.0);
        pm.open(AssetId(0), &asset, balance, &mut trades);

        let mut last_stop = pm.position().unwrap().stop_loss;
        for price in path {
            pm.update(price, Symbol::new("PROP"), &mut balance, &mut trades);
            match pm.position() {
                Some(pos) => {
                    prop_assert!(
                        pos.stop_loss >= last_stop,
                        "ratchet violated: {} < {last_stop}",
                        pos.stop_loss
                    );
                    last_stop = pos.stop_loss;
                }
                None => break,
            }
        }
    }
}

// ── 4. Ring arithmetic ───────────────────────────────────────────────

proptest! {
    #[test]
    fn oversized_average_equals_full_average(
        prices in prop::collection::vec(0.1..1_000.0_f64, 1..25),
        extra in 0usize..100,
    ) {
        use driftlab_core::domain::PriceBuffer;

        let mut buf = PriceBuffer::new();
        for &p in &prices {
            buf.push(p);
        }

        let expected: f64 = prices.iter().sum::<f64>() / prices.len() as f64;
        let got = buf.average(prices.len() + extra);
        prop_assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn count_caps_at_capacity(
        prices in prop::collection::vec(0.1..1_000.0_f64, 31..120),
    ) {
        use driftlab_core::domain::{PriceBuffer, PRICE_HISTORY};

        let mut buf = PriceBuffer::new();
        for &p in &prices {
            buf.push(p);
        }
        prop_assert_eq!(buf.len(), PRICE_HISTORY);

        // The full-window average covers exactly the trailing capacity-worth.
        let tail: f64 = prices[prices.len() - PRICE_HISTORY..].iter().sum::<f64>()
            / PRICE_HISTORY as f64;
        prop_assert!((buf.average(PRICE_HISTORY) - tail).abs() < 1e-9);
    }
}

// ── 5. Signal warm-up ────────────────────────────────────────────────

proptest! {
    #[test]
    fn short_history_is_always_neutral(
        prices in prop::collection::vec(0.1..1_000.0_f64, 1..9),
    ) {
        let mut asset = Asset::new("PROP", prices[0]);
        for &p in &prices[1..] {
            asset.current_price = p;
            asset.history.push(p);
        }
        // Registration plus at most 8 pushes: under the 10-point lookback.
        prop_assert!(asset.history.len() < 10);
        prop_assert_eq!(momentum_strength(&asset), 0.0);
    }
}

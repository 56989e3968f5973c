//! Clock-dial tick layout for hour and minute selection.
//!
//! ## Usage
//!
//! Provides the static tick tables the picker renders as circular dials.
//! Positions are derived trigonometrically from a tick's slot index and
//! ring radius instead of hand-authored coordinates.
use std::f64::consts::TAU;

use tessera_ui::Dp;

/// Edge length of the square dial container.
pub const DIAL_SIZE: Dp = Dp(200.0);

/// Edge length of one tick element.
pub const TICK_SIZE: Dp = Dp(26.0);

/// Number of angular slots per ring (30° steps, clock-face layout).
const RING_SLOTS: u8 = 12;

const OUTER_RADIUS: f64 = 80.0;
const INNER_RADIUS: f64 = 54.0;

/// The ring a tick sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialRing {
    /// The outer ring (hours 13-23 and `00`, and all minutes).
    Outer,
    /// The inner ring (hours 1-12).
    Inner,
}

impl DialRing {
    fn radius(self) -> f64 {
        match self {
            DialRing::Outer => OUTER_RADIUS,
            DialRing::Inner => INNER_RADIUS,
        }
    }
}

/// One selectable mark on a dial.
///
/// Display-only data: the picker session never stores ticks, it derives
/// the selected hour or minute from the tick's `value` on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialTick {
    /// Text shown on the tick.
    pub label: String,
    /// Hour (0-23) or minute (0-55) this tick selects.
    pub value: u8,
    /// Ring the tick is laid out on.
    pub ring: DialRing,
    /// Angular slot on the ring, 0 at 12 o'clock, clockwise.
    pub slot: u8,
    /// Whether the tick is rendered with emphasis.
    pub prominent: bool,
}

impl DialTick {
    /// Returns the tick's top-left offset inside the dial container.
    pub fn offset(&self) -> (Dp, Dp) {
        let angle = TAU * f64::from(self.slot) / f64::from(RING_SLOTS);
        let center = DIAL_SIZE.0 / 2.0;
        let radius = self.ring.radius();
        let x = center + radius * angle.sin() - TICK_SIZE.0 / 2.0;
        let y = center - radius * angle.cos() - TICK_SIZE.0 / 2.0;
        (Dp(x), Dp(y))
    }
}

/// Returns the 24 ticks of the hour dial.
///
/// Hours 1-12 form the prominent inner ring of a clock face; `00` and
/// hours 13-23 share the outer ring, with `00` at 12 o'clock.
///
/// ## Examples
///
/// ```
/// use chronopick::dial::{hour_ticks, DialRing};
///
/// let ticks = hour_ticks();
/// assert_eq!(ticks.len(), 24);
/// assert_eq!(ticks.iter().filter(|t| t.ring == DialRing::Inner).count(), 12);
/// ```
pub fn hour_ticks() -> Vec<DialTick> {
    (0..24)
        .map(|hour| {
            let (ring, slot, prominent) = match hour {
                0 => (DialRing::Outer, 0, false),
                1..=12 => (DialRing::Inner, hour % RING_SLOTS, true),
                _ => (DialRing::Outer, hour - 12, false),
            };
            DialTick {
                label: hour_label(hour),
                value: hour,
                ring,
                slot,
                prominent,
            }
        })
        .collect()
}

/// Returns the 12 ticks of the minute dial, at 5-minute granularity.
///
/// Finer minute values are not selectable.
pub fn minute_ticks() -> Vec<DialTick> {
    (0..RING_SLOTS)
        .map(|slot| DialTick {
            label: format!("{:02}", slot * 5),
            value: slot * 5,
            ring: DialRing::Outer,
            slot,
            prominent: true,
        })
        .collect()
}

fn hour_label(hour: u8) -> String {
    if hour == 0 {
        "00".to_string()
    } else {
        hour.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_distance(tick: &DialTick) -> f64 {
        let (x, y) = tick.offset();
        let center = DIAL_SIZE.0 / 2.0;
        let cx = x.0 + TICK_SIZE.0 / 2.0 - center;
        let cy = y.0 + TICK_SIZE.0 / 2.0 - center;
        (cx * cx + cy * cy).sqrt()
    }

    #[test]
    fn hour_dial_has_24_ticks_split_across_rings() {
        let ticks = hour_ticks();
        assert_eq!(ticks.len(), 24);

        let inner: Vec<_> = ticks.iter().filter(|t| t.ring == DialRing::Inner).collect();
        let outer: Vec<_> = ticks.iter().filter(|t| t.ring == DialRing::Outer).collect();
        assert_eq!(inner.len(), 12);
        assert_eq!(outer.len(), 12);

        assert!(inner.iter().all(|t| (1..=12).contains(&t.value)));
        assert!(inner.iter().all(|t| t.prominent));
        assert!(outer.iter().all(|t| t.value == 0 || t.value >= 13));
        assert!(outer.iter().all(|t| !t.prominent));
    }

    #[test]
    fn hour_labels_match_the_clock_face() {
        let ticks = hour_ticks();
        assert_eq!(ticks[0].label, "00");
        assert_eq!(ticks[1].label, "1");
        assert_eq!(ticks[12].label, "12");
        assert_eq!(ticks[23].label, "23");
    }

    #[test]
    fn minute_dial_is_five_minute_granular() {
        let ticks = minute_ticks();
        assert_eq!(ticks.len(), 12);
        let values: Vec<_> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, (0..12).map(|i| i * 5).collect::<Vec<_>>());
        assert_eq!(ticks[0].label, "00");
        assert_eq!(ticks[1].label, "05");
        assert_eq!(ticks[11].label, "55");
        assert!(ticks.iter().all(|t| t.prominent));
    }

    #[test]
    fn ticks_lie_on_their_ring() {
        for tick in hour_ticks().iter().chain(minute_ticks().iter()) {
            let expected = tick.ring.radius();
            assert!(
                (center_distance(tick) - expected).abs() < 1e-9,
                "tick {} off its ring",
                tick.label
            );
        }
    }

    #[test]
    fn slot_zero_sits_at_twelve_o_clock() {
        for ticks in [hour_ticks(), minute_ticks()] {
            let top = ticks.iter().find(|t| t.slot == 0).unwrap();
            let (x, y) = top.offset();
            let center = DIAL_SIZE.0 / 2.0;
            assert!((x.0 + TICK_SIZE.0 / 2.0 - center).abs() < 1e-9);
            assert!(y.0 < center - TICK_SIZE.0);
        }
    }

    #[test]
    fn twelve_and_midnight_share_the_top_of_their_rings() {
        let ticks = hour_ticks();
        let midnight = ticks.iter().find(|t| t.value == 0).unwrap();
        let noonish = ticks.iter().find(|t| t.value == 12).unwrap();
        assert_eq!(midnight.slot, 0);
        assert_eq!(noonish.slot, 0);
        assert_eq!(midnight.ring, DialRing::Outer);
        assert_eq!(noonish.ring, DialRing::Inner);
    }
}

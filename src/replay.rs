//! Timed playback of a press script.
//!
//! Presses are spaced by a fixed interval on the tokio clock. Highlight
//! timers that come due between presses fire in deadline order, so the
//! highlight race between overlapping presses plays out as it would in a
//! live widget.

use crate::calculator::Calculator;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Something observable that happened during playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayEvent {
    /// A button was pressed.
    Pressed { label: &'static str, elapsed: Duration },
    /// One or more highlight timers fired.
    HighlightCleared { elapsed: Duration },
}

/// Play `labels` against `calc`, one press every `interval`, then wait for
/// the remaining highlight timers.
///
/// `on_event` sees every event together with the calculator right after it.
pub async fn replay<F>(
    calc: &mut Calculator,
    labels: &[&'static str],
    interval: Duration,
    mut on_event: F,
) where
    F: FnMut(&ReplayEvent, &Calculator),
{
    let start = Instant::now();

    for (i, &label) in labels.iter().enumerate() {
        if i > 0 {
            let until = Instant::now() + interval;
            fire_timers(calc, Some(until), start, &mut on_event).await;
            sleep_until(until).await;
        }

        let now = Instant::now();
        calc.press_label_at(label, now.into_std());
        on_event(
            &ReplayEvent::Pressed {
                label,
                elapsed: now - start,
            },
            calc,
        );
    }

    fire_timers(calc, None, start, &mut on_event).await;
}

/// Fire timers due before `until`, or all of them when `until` is `None`.
async fn fire_timers<F>(
    calc: &mut Calculator,
    until: Option<Instant>,
    start: Instant,
    on_event: &mut F,
) where
    F: FnMut(&ReplayEvent, &Calculator),
{
    while let Some(deadline) = calc.timers().next_deadline() {
        let deadline = Instant::from_std(deadline);
        if until.is_some_and(|until| deadline > until) {
            break;
        }

        sleep_until(deadline).await;
        if calc.tick(deadline.into_std()) > 0 {
            on_event(
                &ReplayEvent::HighlightCleared {
                    elapsed: deadline - start,
                },
                calc,
            );
        }
    }
}

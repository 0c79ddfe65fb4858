use crate::model::{CanvasSpec, Connection, Constellation, ContributionWindow, Star};
use crate::rng::Lcg;

pub const MIN_STARS: usize = 8;
pub const MAX_STARS: usize = 12;

/// Attempts at a long-range connection after the chain is built. Failed draws are skipped.
const CROSS_CONNECTION_DRAWS: usize = 2;
/// Draw threshold above which star `i` also links to `i + 2`.
const SKIP_LINK_THRESHOLD: f64 = 0.6;
const X_JITTER: f64 = 40.0;
const Y_JITTER: f64 = 100.0;
/// Contribution boost ceiling added to a star's radius.
const CONTRIBUTION_SIZE_CAP: f64 = 4.0;

/// Places stars and connections by consuming `stream` in a fixed order.
///
/// Every call to [`Lcg::next_f64`] below is part of the output contract: reordering, adding or
/// removing a draw changes the image produced for a given seed.
pub fn generate(
    stream: &mut Lcg,
    window: Option<&ContributionWindow>,
    canvas: &CanvasSpec,
) -> Constellation {
    let star_count = (stream.next_f64() * 5.0).floor() as usize + MIN_STARS;

    let span = canvas.width - 2.0 * canvas.padding;
    let mut stars = Vec::with_capacity(star_count);
    for i in 0..star_count {
        let base_x = canvas.padding + (i as f64 / (star_count - 1) as f64) * span;
        let x = base_x + (stream.next_f64() - 0.5) * X_JITTER;
        let y = canvas.height / 2.0 + (stream.next_f64() - 0.5) * Y_JITTER;

        // The unweighted size is always drawn, even when contributions override it.
        let mut size = 2.0 + stream.next_f64() * 3.0;
        if let Some(count) = window.and_then(|w| w.count_for(i)) {
            let boost = (f64::from(count) / 3.0).min(CONTRIBUTION_SIZE_CAP);
            size = 2.0 + boost + stream.next_f64() * 2.0;
        }

        let opacity = 0.5 + stream.next_f64() * 0.4;
        stars.push(Star {
            x,
            y,
            size,
            opacity,
        });
    }

    let mut connections = Vec::with_capacity(star_count * 2);
    for i in 0..star_count - 1 {
        connections.push(Connection { from: i, to: i + 1 });
        if i + 2 < star_count && stream.next_f64() > SKIP_LINK_THRESHOLD {
            connections.push(Connection { from: i, to: i + 2 });
        }
    }

    for _ in 0..CROSS_CONNECTION_DRAWS {
        let from = (stream.next_f64() * (star_count - 3) as f64).floor() as usize;
        let to = from + 2 + (stream.next_f64() * 2.0).floor() as usize;
        if to < star_count {
            connections.push(Connection { from, to });
        } else {
            tracing::trace!(from, to, star_count, "cross connection out of range, skipped");
        }
    }

    tracing::debug!(
        stars = stars.len(),
        connections = connections.len(),
        weighted = window.is_some_and(|w| !w.is_empty()),
        "generated constellation"
    );

    Constellation { stars, connections }
}

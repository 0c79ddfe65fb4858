use crate::svg::{close_document, escape_attr, fmt_dim, fmt_len, fmt_unit, open_document};
use crate::{ConstellationRenderer, SvgRenderOptions};
use constellation_core::{Constellation, Lcg, Star};
use std::fmt::Write as _;

/// Opacity multiplier at the dim point of every pulse.
const PULSE_LOW: f64 = 0.4;
/// Layered halo around each star: (radius scale, opacity), outermost first.
const GLOW_LAYERS: [(f64, f64); 2] = [(5.0, 0.05), (2.5, 0.15)];
const DRIFT_VALUES: &str = "0 0;3 -2;-2 1;0 0";
const DRIFT_SECONDS: f64 = 60.0;

/// Duration and start offset of one looping animation, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Timing {
    dur: f64,
    begin: f64,
}

impl Timing {
    fn draw(stream: &mut Lcg, min_dur: f64, dur_spread: f64, max_begin: f64) -> Self {
        let dur = min_dur + stream.next_f64() * dur_spread;
        let begin = stream.next_f64() * max_begin;
        Self { dur, begin }
    }

    fn star(stream: &mut Lcg) -> Self {
        Self::draw(stream, 3.0, 4.0, 3.0)
    }

    fn line(stream: &mut Lcg) -> Self {
        Self::draw(stream, 4.0, 4.0, 4.0)
    }
}

/// Twinkling variant: every star pulses inside a layered glow, lines shimmer, and the whole
/// sky drifts slowly.
///
/// Timings are drawn from the layout stream, all stars first and then all connections, before
/// any markup is written.
#[derive(Debug, Clone, Default)]
pub struct AnimatedRenderer {
    options: SvgRenderOptions,
}

impl AnimatedRenderer {
    pub fn new(options: SvgRenderOptions) -> Self {
        Self { options }
    }
}

impl ConstellationRenderer for AnimatedRenderer {
    fn render(&self, constellation: &Constellation, stream: &mut Lcg) -> String {
        let opts = &self.options;
        let accent = escape_attr(&opts.accent);

        let star_timings: Vec<Timing> = constellation
            .stars
            .iter()
            .map(|_| Timing::star(stream))
            .collect();
        let line_timings: Vec<Timing> = constellation
            .connections
            .iter()
            .map(|_| Timing::line(stream))
            .collect();

        let mut out = String::new();
        open_document(&mut out, &opts.canvas);

        out.push_str("  <g class=\"sky\">\n");
        let _ = writeln!(
            &mut out,
            r#"    <animateTransform attributeName="transform" type="translate" values="{DRIFT_VALUES}" dur="{}s" repeatCount="indefinite"/>"#,
            fmt_dim(DRIFT_SECONDS)
        );

        out.push_str("\n    <!-- Constellation lines -->\n");
        let _ = writeln!(
            &mut out,
            r#"    <g class="lines" stroke="{accent}" stroke-width="{w}" opacity="{o}">"#,
            w = fmt_len(opts.line_width),
            o = fmt_unit(opts.line_opacity),
        );
        for (connection, timing) in constellation.connections.iter().zip(&line_timings) {
            let Some((a, b)) = constellation.endpoints(connection) else {
                continue;
            };
            let _ = writeln!(
                &mut out,
                r#"      <line x1="{}" y1="{}" x2="{}" y2="{}">"#,
                fmt_len(a.x),
                fmt_len(a.y),
                fmt_len(b.x),
                fmt_len(b.y)
            );
            write_pulse(&mut out, "stroke-opacity", 1.0, *timing, 8);
            out.push_str("      </line>\n");
        }
        out.push_str("    </g>\n");

        out.push_str("\n    <!-- Glows -->\n");
        let _ = writeln!(&mut out, r#"    <g class="glows" fill="{accent}">"#);
        for (star, timing) in constellation.stars.iter().zip(&star_timings) {
            for (scale, opacity) in GLOW_LAYERS {
                write_circle_open(&mut out, star, star.size * scale, opacity);
                write_pulse(&mut out, "opacity", opacity, *timing, 8);
                out.push_str("      </circle>\n");
            }
        }
        out.push_str("    </g>\n");

        out.push_str("\n    <!-- Constellation points -->\n");
        let _ = writeln!(&mut out, r#"    <g class="stars" fill="{accent}">"#);
        for (star, timing) in constellation.stars.iter().zip(&star_timings) {
            write_circle_open(&mut out, star, star.size, star.opacity);
            write_pulse(&mut out, "opacity", star.opacity, *timing, 8);
            out.push_str("      </circle>\n");
        }
        out.push_str("    </g>\n");
        out.push_str("  </g>\n");

        close_document(&mut out);
        out
    }
}

fn write_circle_open(out: &mut String, star: &Star, radius: f64, opacity: f64) {
    let _ = writeln!(
        out,
        r#"      <circle cx="{}" cy="{}" r="{}" opacity="{}">"#,
        fmt_len(star.x),
        fmt_len(star.y),
        fmt_len(radius),
        fmt_unit(opacity)
    );
}

/// `<animate>` that dims `attribute` from `peak` to `peak * PULSE_LOW` and back.
fn write_pulse(out: &mut String, attribute: &str, peak: f64, timing: Timing, indent: usize) {
    let peak_s = fmt_unit(peak);
    let low_s = fmt_unit(peak * PULSE_LOW);
    let _ = writeln!(
        out,
        r#"{:indent$}<animate attributeName="{attribute}" values="{peak_s};{low_s};{peak_s}" dur="{}s" begin="{}s" repeatCount="indefinite"/>"#,
        "",
        fmt_unit(timing.dur),
        fmt_unit(timing.begin),
    );
}

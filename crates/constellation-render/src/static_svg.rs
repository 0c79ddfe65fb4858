use crate::svg::{close_document, escape_attr, fmt_len, fmt_unit, open_document};
use crate::{ConstellationRenderer, SvgRenderOptions};
use constellation_core::{Constellation, Lcg};
use std::fmt::Write as _;

/// Stars larger than this radius get a halo.
const GLOW_MIN_SIZE: f64 = 3.5;
const GLOW_RADIUS_SCALE: f64 = 4.0;
const GLOW_LAYER_OPACITY: f64 = 0.08;

/// Still image: lines, stars, and a faint halo behind the brightest stars.
#[derive(Debug, Clone, Default)]
pub struct StaticRenderer {
    options: SvgRenderOptions,
}

impl StaticRenderer {
    pub fn new(options: SvgRenderOptions) -> Self {
        Self { options }
    }
}

impl ConstellationRenderer for StaticRenderer {
    fn render(&self, constellation: &Constellation, _stream: &mut Lcg) -> String {
        let opts = &self.options;
        let accent = escape_attr(&opts.accent);

        let mut out = String::new();
        open_document(&mut out, &opts.canvas);

        out.push_str("\n  <!-- Constellation lines -->\n");
        let _ = writeln!(
            &mut out,
            r#"  <g class="lines" stroke="{accent}" stroke-width="{w}" opacity="{o}">"#,
            w = fmt_len(opts.line_width),
            o = fmt_unit(opts.line_opacity),
        );
        for connection in &constellation.connections {
            let Some((a, b)) = constellation.endpoints(connection) else {
                continue;
            };
            let _ = writeln!(
                &mut out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                fmt_len(a.x),
                fmt_len(a.y),
                fmt_len(b.x),
                fmt_len(b.y)
            );
        }
        out.push_str("  </g>\n");

        out.push_str("\n  <!-- Constellation points -->\n");
        let _ = writeln!(&mut out, r#"  <g class="stars" fill="{accent}">"#);
        for star in &constellation.stars {
            let _ = writeln!(
                &mut out,
                r#"    <circle cx="{}" cy="{}" r="{}" opacity="{}"/>"#,
                fmt_len(star.x),
                fmt_len(star.y),
                fmt_len(star.size),
                fmt_unit(star.opacity)
            );
        }
        out.push_str("  </g>\n");

        out.push_str("\n  <!-- Subtle glows -->\n");
        let _ = writeln!(
            &mut out,
            r#"  <g class="glows" fill="{accent}" opacity="{}">"#,
            fmt_unit(GLOW_LAYER_OPACITY)
        );
        for star in constellation.stars.iter().filter(|s| s.size > GLOW_MIN_SIZE) {
            let _ = writeln!(
                &mut out,
                r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                fmt_len(star.x),
                fmt_len(star.y),
                fmt_len(star.size * GLOW_RADIUS_SCALE)
            );
        }
        out.push_str("  </g>\n");

        close_document(&mut out);
        out
    }
}

#![forbid(unsafe_code)]

//! SVG renderers for [`constellation_core::Constellation`].
//!
//! Two strategies share one trait: [`StaticRenderer`] draws a still image and never touches the
//! PRNG stream, [`AnimatedRenderer`] keeps drawing from the stream the layout left behind to
//! stagger its animation timings. Both produce byte-identical output for identical inputs.

pub mod animated_svg;
pub mod static_svg;
pub mod svg;

pub use animated_svg::AnimatedRenderer;
pub use static_svg::StaticRenderer;
pub use svg::fmt_fixed;

use constellation_core::{CanvasSpec, Constellation, Lcg};

pub trait ConstellationRenderer {
    /// Serializes `constellation` into a complete SVG document.
    ///
    /// `stream` must be the generator's PRNG, positioned right after layout.
    fn render(&self, constellation: &Constellation, stream: &mut Lcg) -> String;
}

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    pub canvas: CanvasSpec,
    /// Fill and stroke color for every element.
    pub accent: String,
    /// Opacity of the whole connection layer.
    pub line_opacity: f64,
    pub line_width: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            accent: "#58a6ff".to_string(),
            line_opacity: 0.3,
            line_width: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    Static,
    #[default]
    Animated,
}

pub fn build_renderer(
    style: RenderStyle,
    options: SvgRenderOptions,
) -> Box<dyn ConstellationRenderer + Send + Sync> {
    match style {
        RenderStyle::Static => Box::new(StaticRenderer::new(options)),
        RenderStyle::Animated => Box::new(AnimatedRenderer::new(options)),
    }
}

/// Renders with the given style and default options.
pub fn render_svg(style: RenderStyle, constellation: &Constellation, stream: &mut Lcg) -> String {
    build_renderer(style, SvgRenderOptions::default()).render(constellation, stream)
}

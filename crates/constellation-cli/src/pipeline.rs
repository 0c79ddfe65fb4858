use crate::CliError;
use crate::fetch::{ContributionFetch, ContributionSource};
use chrono::NaiveDate;
use constellation_core::{Seed, generate_for_date};
use constellation_render::{RenderStyle, render_svg};
use std::path::{Path, PathBuf};

/// Markup for one day plus what went into it.
#[derive(Debug, Clone)]
pub struct RenderedConstellation {
    pub seed: Seed,
    pub stars: usize,
    pub connections: usize,
    pub svg: String,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seed: Seed,
    pub stars: usize,
    pub connections: usize,
    pub output: PathBuf,
}

/// Pure part of a run: seed, layout and markup. Never fails.
pub fn render_constellation(
    date: NaiveDate,
    fetched: &ContributionFetch,
    style: RenderStyle,
) -> RenderedConstellation {
    let mut generated = generate_for_date(date, fetched.window());
    let svg = render_svg(style, &generated.constellation, &mut generated.stream);
    RenderedConstellation {
        seed: generated.seed,
        stars: generated.constellation.stars.len(),
        connections: generated.constellation.connections.len(),
        svg,
    }
}

/// Fetches contributions, renders, and overwrites `output`.
///
/// Only the write can fail; a missing or broken contribution feed degrades to the date seed.
pub async fn run<S: ContributionSource>(
    source: &S,
    date: NaiveDate,
    style: RenderStyle,
    output: &Path,
) -> Result<RunSummary, CliError> {
    tracing::info!("Fetching GitHub contributions...");
    let fetched = source.fetch().await;
    match fetched.window() {
        Some(window) => tracing::info!("Got {} days of contribution data", window.len()),
        None => tracing::info!("Using date-based seed (no contribution data)"),
    }

    tracing::info!("Generating constellation...");
    let rendered = render_constellation(date, &fetched, style);
    tracing::info!(
        seed = %rendered.seed,
        "Created {} points with {} connections",
        rendered.stars,
        rendered.connections
    );

    std::fs::write(output, &rendered.svg).map_err(|err| CliError::Write {
        path: output.to_path_buf(),
        source: err,
    })?;
    tracing::info!("Saved to {}", output.display());

    Ok(RunSummary {
        seed: rendered.seed,
        stars: rendered.stars,
        connections: rendered.connections,
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_core::{ContributionDay, ContributionWindow};
    use futures::executor::block_on;

    struct Canned(ContributionFetch);

    impl ContributionSource for Canned {
        async fn fetch(&self) -> ContributionFetch {
            self.0.clone()
        }
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn window(counts: &[u32]) -> ContributionWindow {
        let start = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        ContributionWindow::from_days(counts.iter().enumerate().map(|(i, &count)| {
            ContributionDay {
                count,
                date: start + chrono::Days::new(i as u64),
            }
        }))
    }

    #[test]
    fn no_data_run_writes_date_seeded_document() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("constellation.svg");

        let summary = block_on(run(
            &Canned(ContributionFetch::NoData),
            march_15(),
            RenderStyle::Animated,
            &out,
        ))
        .unwrap();
        assert_eq!(summary.seed, Seed::new(20_240_315));
        assert_eq!(summary.stars, 12);
        assert_eq!(summary.output, out);

        let svg = std::fs::read_to_string(&out).unwrap();
        let doc = roxmltree::Document::parse(&svg).unwrap();
        assert_eq!(doc.root_element().attribute("viewBox"), Some("0 0 800 200"));
        let lines = doc.descendants().filter(|n| n.has_tag_name("line")).count();
        assert_eq!(lines, summary.connections);
        assert!(lines >= summary.stars - 1);
    }

    #[test]
    fn reruns_overwrite_with_identical_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("constellation.svg");
        std::fs::write(&out, "stale").unwrap();

        let source = Canned(ContributionFetch::Data(window(&[2, 0, 9, 4])));
        block_on(run(&source, march_15(), RenderStyle::Animated, &out)).unwrap();
        let first = std::fs::read(&out).unwrap();
        block_on(run(&source, march_15(), RenderStyle::Animated, &out)).unwrap();
        let second = std::fs::read(&out).unwrap();

        assert_ne!(first, b"stale");
        assert_eq!(first, second);
    }

    #[test]
    fn contributions_change_the_image() {
        let none = render_constellation(march_15(), &ContributionFetch::NoData, RenderStyle::Static);
        let some = render_constellation(
            march_15(),
            &ContributionFetch::Data(window(&[1])),
            RenderStyle::Static,
        );
        assert_eq!(some.seed, Seed::new(20_240_316));
        assert_ne!(none.svg, some.svg);
    }

    #[test]
    fn write_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("missing-dir").join("constellation.svg");

        let err = block_on(run(
            &Canned(ContributionFetch::NoData),
            march_15(),
            RenderStyle::Animated,
            &out,
        ))
        .unwrap_err();
        assert!(matches!(err, CliError::Write { ref path, .. } if path == &out));
        assert!(err.to_string().contains("missing-dir"));
    }
}

#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use std::collections::HashSet;

use linprobe::{LinearProbingMap, ProbeStats, utils};
use plotters::prelude::*;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Capacity every measurement is pinned to
const TABLE_SIZE: usize = 100_003;
// Load factors from 0.1 to 0.95
const NUM_LOAD_FACTORS: usize = 10;
// Lookups of absent keys per measurement
const MISS_SAMPLES: usize = 10_000;

const SERIES: [&str; 3] = ["Hit", "Miss", "Miss after removing half"];

struct Measurement {
    keys: usize,
    stats: [ProbeStats; 3],
}

// Fills a map with `n_keys` random keys, then pins its capacity to TABLE_SIZE.
// `resize_backing_table` ignores the load factor limit, which is what lets the
// sweep go past 0.67.
fn filled_map(
    rng: &mut impl Rng,
    n_keys: usize,
) -> linprobe::Result<(LinearProbingMap<u64, u64>, Vec<u64>)> {
    let mut map = LinearProbingMap::with_capacity(TABLE_SIZE);
    let mut keys = Vec::with_capacity(n_keys);
    while keys.len() < n_keys {
        let key = rng.random::<u64>();
        if map.put(key, key).is_none() {
            keys.push(key);
        }
    }
    map.resize_backing_table(TABLE_SIZE)?;
    Ok((map, keys))
}

fn absent_keys(rng: &mut impl Rng, present: &[u64]) -> Vec<u64> {
    let present: HashSet<u64> = present.iter().copied().collect();
    (0..MISS_SAMPLES).map(|_| rng.random::<u64>()).filter(|key| !present.contains(key)).collect()
}

// Removes every other key. No puts follow, so the table keeps its tombstones
// instead of being rebuilt by a grow.
fn remove_half(map: &mut LinearProbingMap<u64, u64>, keys: &[u64]) -> linprobe::Result<()> {
    for key in keys.iter().step_by(2) {
        map.remove(key)?;
    }
    Ok(())
}

fn measure(rng: &mut impl Rng, n_keys: usize) -> linprobe::Result<Measurement> {
    let (mut map, keys) = filled_map(rng, n_keys)?;
    let misses = absent_keys(rng, &keys);

    let hit = utils::probe_stats(&map);
    let miss = utils::probe_stats_for(&map, &misses);

    remove_half(&mut map, &keys)?;
    let with_tombstones = utils::probe_stats_for(&map, &misses);
    info!(
        keys = n_keys,
        capacity = map.capacity(),
        tombstones = map.tombstones(),
        "measured probe lengths"
    );

    Ok(Measurement { keys: n_keys, stats: [hit, miss, with_tombstones] })
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    measurements: &[Measurement],
    value: impl Fn(&ProbeStats) -> f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = &value;
    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220), RGBColor(50, 180, 50)];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = measurements
        .iter()
        .flat_map(|m| m.stats.iter().map(value))
        .fold(0.0, f64::max)
        * 1.1;
    let x_labels: Vec<String> = measurements.iter().map(|m| m.keys.to_string()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..measurements.len(), 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_labels(measurements.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys in a 100003-slot Table")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (series_idx, &series) in SERIES.iter().enumerate() {
        let color = &colors[series_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                measurements.iter().enumerate().map(|(i, m)| (i, value(&m.stats[series_idx]))),
                line_style,
            ))?
            .label(series)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            measurements
                .iter()
                .enumerate()
                .map(|(i, m)| Circle::new((i, value(&m.stats[series_idx])), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    info!(?load_factors, ?num_keys, "starting probe length sweep");

    let mut rng = rand::rng();
    let measurements = num_keys
        .iter()
        .map(|&n_keys| measure(&mut rng, n_keys))
        .collect::<linprobe::Result<Vec<Measurement>>>()?;

    for m in &measurements {
        for (series, stats) in SERIES.iter().zip(&m.stats) {
            info!(
                keys = m.keys,
                series = *series,
                mean = stats.mean,
                worst = stats.max,
                "probe lengths"
            );
        }
    }

    draw_chart(
        "average_probe_length.png",
        "Average Probe Length of Linear Probing",
        "Average Slots Examined",
        &measurements,
        |stats| stats.mean,
    )?;
    draw_chart(
        "worst_case_probe_length.png",
        "Worst-Case Probe Length of Linear Probing",
        "Worst-Case Slots Examined",
        &measurements,
        |stats| stats.max as f64,
    )?;

    info!("generated average_probe_length.png and worst_case_probe_length.png");
    Ok(())
}

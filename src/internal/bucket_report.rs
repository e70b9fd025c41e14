#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::print_stdout)]
#![allow(clippy::pedantic)]

use bucketry::{
    ChainingMap, HashFunction, OpenAddressingMap, find_mode, hash_function_1, hash_function_2,
};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

// Starting capacity for every map under test
const INITIAL_CAPACITY: usize = 53;
// Key counts sampled, from KEY_STEP up to KEY_STEP * NUM_STEPS
const KEY_STEP: usize = 250;
const NUM_STEPS: usize = 12;
const KEY_LENGTH: usize = 8;
const OUTPUT_PATH: &str = "empty_buckets.png";

const HASH_FUNCTIONS: [(&str, HashFunction); 2] =
    [("hash_function_1", hash_function_1), ("hash_function_2", hash_function_2)];

// Series plotted, one per (map, hash function) pair
const SERIES: [&str; 4] = [
    "Open addressing / hash_function_1",
    "Open addressing / hash_function_2",
    "Chaining / hash_function_1",
    "Chaining / hash_function_2",
];

/// What a map looked like after a batch of inserts
#[derive(Debug, Clone, Copy)]
struct Sample {
    empty_buckets: usize,
    table_load: f64,
    size: usize,
    capacity: usize,
}

impl Sample {
    fn empty_ratio(&self) -> f64 {
        self.empty_buckets as f64 / self.capacity as f64
    }
}

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(KEY_LENGTH).map(char::from).collect())
        .collect()
}

fn sample_open_addressing(keys: &[String], hash_function: HashFunction) -> Vec<Sample> {
    let mut map = OpenAddressingMap::new(INITIAL_CAPACITY, hash_function);
    keys.chunks(KEY_STEP)
        .map(|chunk| {
            for key in chunk {
                map.put(key.clone(), key.len());
            }
            Sample {
                empty_buckets: map.empty_buckets(),
                table_load: map.table_load(),
                size: map.len(),
                capacity: map.capacity(),
            }
        })
        .collect()
}

// Chaining never grows on its own, so double the table whenever it passes a load of 1
fn sample_chaining(keys: &[String], hash_function: HashFunction) -> Vec<Sample> {
    let mut map = ChainingMap::new(INITIAL_CAPACITY, hash_function);
    keys.chunks(KEY_STEP)
        .map(|chunk| {
            for key in chunk {
                map.put(key.clone(), key.len());
                if map.table_load() > 1.0 {
                    map.resize_table(map.capacity() * 2);
                }
            }
            Sample {
                empty_buckets: map.empty_buckets(),
                table_load: map.table_load(),
                size: map.len(),
                capacity: map.capacity(),
            }
        })
        .collect()
}

fn print_modes() {
    let cases: [&[&str]; 4] = [
        &["apple", "apple", "grape", "melon", "melon", "peach"],
        &[
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
            "Ubuntu",
        ],
        &["one", "two", "three", "four", "five"],
        &["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"],
    ];

    for case in cases {
        let (mode, frequency) = find_mode(case);
        println!("Input: {case:?}\nMode : {mode:?}, Frequency: {frequency}\n");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let keys = random_keys(KEY_STEP * NUM_STEPS);
    let key_counts: Vec<usize> = (1..=NUM_STEPS).map(|step| step * KEY_STEP).collect();
    println!("Number of keys: {key_counts:?}");

    let mut samples: Vec<Vec<Sample>> = Vec::with_capacity(SERIES.len());
    for (name, hash_function) in HASH_FUNCTIONS {
        println!("Sampling open addressing with {name}");
        samples.push(sample_open_addressing(&keys, hash_function));
    }
    for (name, hash_function) in HASH_FUNCTIONS {
        println!("Sampling chaining with {name}");
        samples.push(sample_chaining(&keys, hash_function));
    }

    for (series_idx, &series) in SERIES.iter().enumerate() {
        println!("{series}");
        for (step, sample) in samples[series_idx].iter().enumerate() {
            println!(
                "  {} keys: empty = {}, load = {:.2}, size = {}, capacity = {}",
                key_counts[step],
                sample.empty_buckets,
                sample.table_load,
                sample.size,
                sample.capacity
            );
        }
    }

    print_modes();

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];
    let line_width = 2;
    let marker_size = 4;

    let root = BitMapBackend::new(OUTPUT_PATH, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Share of Empty Buckets by Collision Strategy", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..(key_counts.len() - 1), 0.0..1.0)?;

    let x_labels: Vec<String> = key_counts.iter().map(ToString::to_string).collect();

    chart
        .configure_mesh()
        .x_labels(key_counts.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Inserted")
        .y_desc("Empty Buckets / Capacity")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (series_idx, &series) in SERIES.iter().enumerate() {
        let color = &colors[series_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);
        let points: Vec<(usize, f64)> = samples[series_idx]
            .iter()
            .enumerate()
            .map(|(step, sample)| (step, sample.empty_ratio()))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), line_style))?
            .label(series)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            points.into_iter().map(|point| Circle::new(point, marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    println!("Generated plot image: {OUTPUT_PATH}");

    Ok(())
}

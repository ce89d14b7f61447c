//! Cluster a CSV of 2-D records and print a per-iteration, per-cluster
//! report.
//!
//! Each input line is one record: comma-separated fields with the x and y
//! coordinates in configurable columns (defaults: label in column 0, x in
//! column 1, y in column 2). A non-numeric first line is treated as a
//! header and skipped.
//!
//! Usage: `cluster2d data.csv --clusters 4 --iterations 6`

use anyhow::{bail, Context, Result};
use clap::Parser;
use kmeans2d::{
    nearest_centroid_index, run_clustering, ClusteringConfig, EmptyClusterPolicy, Point,
};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cluster2d", about = "K-means clustering over a CSV of 2-D records")]
struct Args {
    /// CSV file with one record per line
    input: PathBuf,

    /// Number of clusters
    #[arg(short = 'k', long)]
    clusters: usize,

    /// Number of refinement iterations
    #[arg(short, long)]
    iterations: usize,

    /// Random seed for the initial centroid draw
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Redraw the centroid of a cluster that empties instead of aborting
    #[arg(long)]
    reseed_empty: bool,

    /// Zero-based column index of the x field
    #[arg(long, default_value_t = 1)]
    x_col: usize,

    /// Zero-based column index of the y field
    #[arg(long, default_value_t = 2)]
    y_col: usize,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// One parsed input line: the point plus the label used in the report.
struct Record {
    label: String,
    point: Point,
}

fn load_records(path: &Path, x_col: usize, y_col: usize) -> Result<Vec<Record>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut records = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let last_needed = x_col.max(y_col);
        if fields.len() <= last_needed {
            bail!(
                "line {}: expected at least {} fields, found {}",
                lineno + 1,
                last_needed + 1,
                fields.len()
            );
        }

        let coords = fields[x_col]
            .parse::<f64>()
            .and_then(|x| fields[y_col].parse::<f64>().map(|y| (x, y)));
        let (x, y) = match coords {
            Ok(coords) => coords,
            Err(_) if lineno == 0 => {
                debug!("skipping header line: {}", line);
                continue;
            }
            Err(_) => bail!(
                "line {}: columns {} and {} must be numeric, got {:?} and {:?}",
                lineno + 1,
                x_col,
                y_col,
                fields[x_col],
                fields[y_col]
            ),
        };

        // Column 0 doubles as the label unless it holds the x coordinate.
        let label = if x_col == 0 {
            format!("row {}", lineno + 1)
        } else {
            fields[0].to_string()
        };

        records.push(Record {
            label,
            point: Point::new(x, y),
        });
    }

    Ok(records)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    let records = load_records(&args.input, args.x_col, args.y_col)?;
    info!(
        "loaded {} records from {}",
        records.len(),
        args.input.display()
    );

    let policy = if args.reseed_empty {
        EmptyClusterPolicy::Reseed
    } else {
        EmptyClusterPolicy::Fail
    };
    let config = ClusteringConfig::new(args.clusters)
        .with_iterations(args.iterations)
        .with_seed(args.seed)
        .with_empty_cluster_policy(policy);

    let points: Vec<Point> = records.iter().map(|r| r.point).collect();
    let outcome = run_clustering(&points, &config).context("clustering failed")?;

    for (i, score) in outcome.scores.iter().enumerate() {
        println!("Sum of distances for iteration {} is {}.", i + 1, score);
    }

    let Some(state) = outcome.final_state else {
        info!("no iterations requested, nothing to report");
        return Ok(());
    };

    // Regroup the records by nearest final centroid; this reproduces the
    // final partition exactly and keeps the labels attached.
    let centroids = state.centroids();
    let mut labels: Vec<Vec<&str>> = vec![Vec::new(); centroids.len()];
    for record in &records {
        let index = nearest_centroid_index(&centroids, record.point)?;
        labels[index].push(record.label.as_str());
    }

    for (index, cluster) in state.clusters.iter().enumerate() {
        println!();
        println!("Cluster {} contains {} points.", index + 1, cluster.len());
        println!(
            "Cluster {} centroid = ({:.4}, {:.4})",
            index + 1,
            cluster.centroid.x,
            cluster.centroid.y
        );
        if !labels[index].is_empty() {
            println!("Cluster {} members: {}", index + 1, labels[index].join(", "));
        }
    }

    Ok(())
}

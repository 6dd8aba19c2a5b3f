use std::{fs, path::PathBuf};

use anyhow::Result;
use log::info;
use rand::Rng;

/// Write a random symmetric instance with a zero diagonal.
pub fn generate(cities: usize, output: PathBuf, max_distance: u64) -> Result<()> {
    anyhow::ensure!(cities >= 2, "an instance needs at least two cities");
    anyhow::ensure!(max_distance >= 1, "max distance must be positive");

    let mut rows = vec![vec![0u64; cities]; cities];
    for i in 0..cities {
        for j in (i + 1)..cities {
            let distance = rand::thread_rng().gen_range(1..=max_distance);
            rows[i][j] = distance;
            rows[j][i] = distance;
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();

    fs::write(&output, format!("{cities}\n{}\n", lines.join("\n")))?;
    info!("Wrote {cities}-city instance to: {output:?}");

    Ok(())
}

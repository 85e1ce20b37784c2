//! Logging setup and result-table writers

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use saw::config::OutputConfig;
use saw::stats::{ChainStatistics, Statistic};
use saw::Walk;
use tracing::info;

/// Route the log to a file or stdout.
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => {
            if let Ok(log) = File::create(path) {
                tracing_subscriber::fmt()
                    .with_writer(Arc::new(log))
                    .with_ansi(false)
                    .with_target(false)
                    .init();
            } else {
                eprintln!("Could not create log file: {}", path);
            }
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(io::stdout)
                .with_target(false)
                .init();
            info!("Output will be printed to stdout");
        }
    }
}

/// Write one observable table: a header line, then one tab-separated row per
/// chain length with value and error to 4 decimal places.
pub fn write_observable_table<W: Write>(
    writer: &mut W,
    rows: impl IntoIterator<Item = (usize, Statistic)>,
) -> io::Result<()> {
    writeln!(writer, "N\tValue\tError")?;
    for (n, stat) in rows {
        writeln!(writer, "{}\t{:.4}\t{:.4}", n, stat.mean, stat.std_err)?;
    }
    Ok(())
}

/// Write the R_g and R_ee tables to their configured files.
pub fn save_observable_tables(output: &OutputConfig, stats: &[ChainStatistics]) -> io::Result<()> {
    let mut rg = File::create(&output.rg_file)?;
    write_observable_table(&mut rg, stats.iter().map(|s| (s.chain_length, s.rg)))?;

    let mut ree = File::create(&output.ree_file)?;
    write_observable_table(&mut ree, stats.iter().map(|s| (s.chain_length, s.ree)))?;
    Ok(())
}

/// Dump the walk coordinates for a 3D line plot, marking the first and last
/// site so the renderer can highlight them.
pub fn write_walk<W: Write>(writer: &mut W, walk: &Walk) -> io::Result<()> {
    writeln!(writer, "x\ty\tz\tmark")?;
    let last = walk.num_sites() - 1;
    for (i, site) in walk.sites().iter().enumerate() {
        let mark = if i == 0 {
            "start"
        } else if i == last {
            "end"
        } else {
            ""
        };
        writeln!(writer, "{:.6}\t{:.6}\t{:.6}\t{}", site.x, site.y, site.z, mark)?;
    }
    Ok(())
}

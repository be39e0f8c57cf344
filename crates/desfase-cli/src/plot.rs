//! Waveform trace rendering to PGM grayscale images.
//!
//! PGM is a plain-text raster any image tool can open, which keeps the
//! plotting collaborator free of a graphics stack. Each panel draws one or
//! more sample series as min/max column spans over a white background;
//! multiple panels stack vertically with a divider line.

use std::io::{BufWriter, Write};
use std::path::Path;

const PANEL_WIDTH: usize = 1024;
const PANEL_HEIGHT: usize = 256;

/// Gray levels assigned to the series of a panel, in order.
const SERIES_SHADES: [u8; 3] = [0, 96, 160];

/// One stacked chart: every inner slice is a sample series drawn into the
/// same panel.
pub type Panel<'a> = Vec<&'a [f32]>;

/// Render stacked panels of waveform traces into a PGM file.
pub fn render<P: AsRef<Path>>(path: P, panels: &[Panel<'_>]) -> std::io::Result<()> {
    let height = panels.len() * PANEL_HEIGHT + panels.len().saturating_sub(1);
    let mut raster = vec![255u8; PANEL_WIDTH * height];

    let mut y_offset = 0;
    for (i, panel) in panels.iter().enumerate() {
        if i > 0 {
            // Divider row between panels
            for x in 0..PANEL_WIDTH {
                raster[y_offset * PANEL_WIDTH + x] = 200;
            }
            y_offset += 1;
        }
        draw_panel(&mut raster, y_offset, panel);
        y_offset += PANEL_HEIGHT;
    }

    let mut file = BufWriter::new(std::fs::File::create(path)?);
    writeln!(file, "P2")?;
    writeln!(file, "# waveform trace, {} panel(s)", panels.len())?;
    writeln!(file, "{PANEL_WIDTH} {height}")?;
    writeln!(file, "255")?;
    for row in raster.chunks(PANEL_WIDTH) {
        for (x, &pixel) in row.iter().enumerate() {
            if x > 0 {
                write!(file, " ")?;
            }
            write!(file, "{pixel}")?;
        }
        writeln!(file)?;
    }
    file.flush()
}

fn draw_panel(raster: &mut [u8], y_offset: usize, series: &[&[f32]]) {
    // Shared vertical scale across the panel's series
    let mut max_abs = 0.0f32;
    for s in series {
        for &v in *s {
            if v.is_finite() {
                max_abs = max_abs.max(v.abs());
            }
        }
    }
    if max_abs == 0.0 {
        max_abs = 1.0;
    }

    // Midline
    let mid = y_offset + PANEL_HEIGHT / 2;
    for x in 0..PANEL_WIDTH {
        raster[mid * PANEL_WIDTH + x] = 230;
    }

    for (index, samples) in series.iter().enumerate() {
        if samples.is_empty() {
            continue;
        }
        let shade = SERIES_SHADES[index % SERIES_SHADES.len()];
        for x in 0..PANEL_WIDTH {
            // Sample range covered by this pixel column
            let start = x * samples.len() / PANEL_WIDTH;
            let end = (((x + 1) * samples.len()) / PANEL_WIDTH).max(start + 1);
            let end = end.min(samples.len());
            if start >= samples.len() {
                break;
            }

            let mut lo = f32::INFINITY;
            let mut hi = f32::NEG_INFINITY;
            for &v in &samples[start..end] {
                if v.is_finite() {
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
            if lo > hi {
                continue;
            }

            let to_row = |v: f32| -> usize {
                let normalized = (v / max_abs).clamp(-1.0, 1.0);
                let half = (PANEL_HEIGHT / 2 - 1) as f32;
                let row = (PANEL_HEIGHT / 2) as f32 - normalized * half;
                y_offset + (row as usize).min(PANEL_HEIGHT - 1)
            };

            let top = to_row(hi);
            let bottom = to_row(lo);
            for y in top..=bottom {
                raster[y * PANEL_WIDTH + x] = shade;
            }
        }
    }
}

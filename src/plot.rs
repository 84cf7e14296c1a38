//! Static charts of a solution, drawn with plotters.
use std::fmt::Display;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Result, WaveError};
use crate::output::{AxisLimits, PlotRequest, Renderer};

pub const DEFAULT_SIZE: (u32, u32) = (800, 400);

/// Writes the final state as a PNG: seabed as blue dots, displacement as a red line.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl ChartRenderer {
    pub fn new<P: AsRef<Path>>(path: P) -> ChartRenderer {
        ChartRenderer {
            path: path.as_ref().to_path_buf(),
            size: DEFAULT_SIZE,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> ChartRenderer {
        self.size = (width, height);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for ChartRenderer {
    fn render(&mut self, request: &PlotRequest) -> Result<()> {
        ensure_parent(&self.path)?;
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        draw_chart(&root,
                   &request.x,
                   &request.seabed,
                   &request.displacement,
                   request.final_time,
                   request.axis_limits())?;
        root.present().map_err(render_error)?;
        info!(path = %self.path.display(), "chart written");
        Ok(())
    }
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(std::fs::create_dir_all(dir)?),
        _ => Ok(()),
    }
}

pub(crate) fn render_error<E: Display>(e: E) -> WaveError {
    WaveError::Render(e.to_string())
}

/// Draws one chart onto `root`. Used for single images and animation frames.
pub(crate) fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                             x: &Array1<f64>,
                                             seabed: &Array1<f64>,
                                             displacement: &Array1<f64>,
                                             final_time: f64,
                                             limits: AxisLimits)
                                             -> Result<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(limits.x.0..limits.x.1, limits.y.0..limits.y.1)
        .map_err(render_error)?;

    chart.configure_mesh().x_desc("x").draw().map_err(render_error)?;

    chart.draw_series(x.iter()
                          .zip(seabed.iter())
                          .map(|(&x, &y)| Circle::new((x, y), 2, BLUE.filled())))
        .map_err(render_error)?
        .label("seabed")
        .legend(|(x, y)| Circle::new((x, y), 2, BLUE.filled()));

    chart.draw_series(LineSeries::new(x.iter().cloned().zip(displacement.iter().cloned()),
                                      RED.stroke_width(2)))
        .map_err(render_error)?
        .label(format!("u(x, {})", final_time))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.filled())
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;
    Ok(())
}

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::bounds::Scale;
use crate::error::{Error, Result};

/// The drawing surface both helpers mutate. It is owned by the caller and only
/// borrowed for the duration of a call.
pub trait Axis {
    fn set_vertical_bounds(&mut self, low: f64, high: f64);

    /// Fill the region between `lower` and `upper` at the positions in `x`.
    ///
    /// Implementations report sequences of unequal length as
    /// [`Error::LengthMismatch`].
    fn fill_between(
        &mut self,
        x: &[f64],
        lower: &[f64],
        upper: &[f64],
        color: RGBColor,
        alpha: f64,
    ) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilledRegion {
    pub x: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub color: RGBColor,
    pub alpha: f64,
}

/// An axis that records what is applied to it and renders it later onto a
/// caller supplied plotters drawing area.
#[derive(Clone, Debug)]
pub struct PlotAxis {
    scale: Scale,
    bounds: Option<(f64, f64)>,
    regions: Vec<FilledRegion>,
}

impl Default for PlotAxis {
    fn default() -> Self {
        Self::new(Scale::Linear)
    }
}

impl PlotAxis {
    pub fn new(scale: Scale) -> Self {
        Self {
            scale,
            bounds: None,
            regions: Vec::new(),
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    pub fn regions(&self) -> &[FilledRegion] {
        &self.regions
    }

    /// Horizontal extent covered by the recorded regions.
    fn x_range(&self) -> (f64, f64) {
        span(self.regions.iter().flat_map(|region| region.x.iter().copied())).unwrap_or((0., 1.))
    }

    /// Vertical extent: the applied bounds if any, otherwise whatever the
    /// regions cover.
    fn y_range(&self) -> (f64, f64) {
        self.bounds.unwrap_or_else(|| {
            span(
                self.regions
                    .iter()
                    .flat_map(|region| region.lower.iter().chain(region.upper.iter()).copied()),
            )
            .unwrap_or((0., 1.))
        })
    }

    /// Draw the recorded regions onto `area`, using the whole area as plotting
    /// surface. Nothing but the filled regions is drawn.
    pub fn draw_on<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        self.render(ChartBuilder::on(area), false)
    }

    /// Same as [`PlotAxis::draw_on`] but with a caption, label areas and a mesh.
    pub fn draw_with_mesh<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        caption: &str,
    ) -> Result<()> {
        let mut builder = ChartBuilder::on(area);
        builder
            .caption(caption, ("sans-serif", 20))
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(50);
        self.render(builder, true)
    }

    fn render<DB: DrawingBackend>(
        &self,
        mut builder: ChartBuilder<'_, '_, DB>,
        mesh: bool,
    ) -> Result<()> {
        let (x_lo, x_hi) = self.x_range();
        let (y_lo, y_hi) = self.y_range();
        match self.scale {
            Scale::Linear => {
                let mut chart = builder
                    .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
                    .map_err(drawing_error)?;
                if mesh {
                    chart.configure_mesh().draw().map_err(drawing_error)?;
                }
                fill_regions(&mut chart, &self.regions)
            },
            Scale::Logarithmic => {
                check_log_range(y_lo, y_hi)?;
                let mut chart = builder
                    .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())
                    .map_err(drawing_error)?;
                if mesh {
                    chart.configure_mesh().draw().map_err(drawing_error)?;
                }
                fill_regions(&mut chart, &self.regions)
            },
        }
    }
}

impl Axis for PlotAxis {
    fn set_vertical_bounds(&mut self, low: f64, high: f64) {
        self.bounds = Some((low, high));
    }

    fn fill_between(
        &mut self,
        x: &[f64],
        lower: &[f64],
        upper: &[f64],
        color: RGBColor,
        alpha: f64,
    ) -> Result<()> {
        for curve in [lower, upper] {
            if curve.len() != x.len() {
                return Err(Error::LengthMismatch {
                    expected: x.len(),
                    found: curve.len(),
                });
            }
        }
        self.regions.push(FilledRegion {
            x: x.to_vec(),
            lower: lower.to_vec(),
            upper: upper.to_vec(),
            color,
            alpha,
        });
        Ok(())
    }
}

fn fill_regions<DB, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, Y>>,
    regions: &[FilledRegion],
) -> Result<()>
where
    DB: DrawingBackend,
    Y: Ranged<ValueType = f64>,
{
    for region in regions {
        // upper curve left to right, then lower curve back
        let outline: Vec<(f64, f64)> = region
            .x
            .iter()
            .copied()
            .zip(region.upper.iter().copied())
            .chain(
                region
                    .x
                    .iter()
                    .copied()
                    .zip(region.lower.iter().copied())
                    .rev(),
            )
            .collect();
        chart
            .draw_series(std::iter::once(Polygon::new(
                outline,
                region.color.mix(region.alpha).filled(),
            )))
            .map_err(drawing_error)?;
    }
    debug!(regions = regions.len(), "filled regions drawn");
    Ok(())
}

fn check_log_range(low: f64, high: f64) -> Result<()> {
    if low <= 0. || high <= 0. {
        return Err(Error::NumericDomain(format!(
            "logarithmic axis needs positive bounds, got ({low}, {high})"
        )));
    }
    Ok(())
}

/// Finite extent of `values`; a single value is widened so the range is never empty.
fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .map(|(lo, hi)| if lo < hi { (lo, hi) } else { (lo - 0.5, hi + 0.5) })
}

fn drawing_error(err: impl std::fmt::Display) -> Error {
    Error::Drawing(err.to_string())
}

use ndarray::ArrayView1;
use plotters::style::colors::BLACK;
use plotters::style::RGBColor;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::axis::Axis;
use crate::error::{Error, Result};

/// How many nested standard deviation bands to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum Degree {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
}

impl Degree {
    /// The sigma multiples drawn at this degree, innermost first.
    pub fn multiples(self) -> impl Iterator<Item = u8> {
        1..=self as u8
    }
}

fn invalid_degree(degree: impl std::fmt::Display) -> Error {
    warn!(%degree, "rejected band degree");
    Error::InvalidArgument(format!(
        "degree {degree} is not valid, it has to be one of 1, 2 or 3"
    ))
}

impl TryFrom<u8> for Degree {
    type Error = Error;

    fn try_from(degree: u8) -> Result<Self> {
        match degree {
            1 => Ok(Degree::One),
            2 => Ok(Degree::Two),
            3 => Ok(Degree::Three),
            _ => Err(invalid_degree(degree)),
        }
    }
}

impl TryFrom<i32> for Degree {
    type Error = Error;

    fn try_from(degree: i32) -> Result<Self> {
        u8::try_from(degree)
            .map_err(|_| invalid_degree(degree))
            .and_then(Degree::try_from)
    }
}

impl TryFrom<usize> for Degree {
    type Error = Error;

    fn try_from(degree: usize) -> Result<Self> {
        u8::try_from(degree)
            .map_err(|_| invalid_degree(degree))
            .and_then(Degree::try_from)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandStyle {
    pub color: RGBColor,
    pub alpha: f64,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            alpha: 0.1,
        }
    }
}

impl BandStyle {
    pub fn new(color: RGBColor, alpha: f64) -> Result<Self> {
        let style = Self { color, alpha };
        style.validate()?;
        Ok(style)
    }

    fn validate(&self) -> Result<()> {
        if !(0. ..=1.).contains(&self.alpha) {
            warn!(alpha = self.alpha, "rejected band alpha");
            return Err(Error::InvalidArgument(format!(
                "alpha must lie in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Lower and upper curve of the band `mean ∓ multiple * std_dev`.
pub fn band(mean: &[f64], std_dev: &[f64], multiple: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if mean.len() != std_dev.len() {
        return Err(Error::LengthMismatch {
            expected: mean.len(),
            found: std_dev.len(),
        });
    }
    let mean = ArrayView1::from(mean);
    let spread = &ArrayView1::from(std_dev) * multiple;
    Ok(((&mean - &spread).to_vec(), (&mean + &spread).to_vec()))
}

/// Shade the one to three sigma bands around `mean` onto `axis`.
///
/// Every band uses the same color and alpha, so the overlap of the nested
/// bands darkens towards the mean. `degree` may be a [`Degree`] or an integer;
/// an invalid degree or alpha is rejected before anything is drawn.
pub fn draw_stddev_bands<A, D>(
    axis: &mut A,
    ticks: &[f64],
    mean: &[f64],
    std_dev: &[f64],
    style: &BandStyle,
    degree: D,
) -> Result<()>
where
    A: Axis + ?Sized,
    D: TryInto<Degree>,
    Error: From<D::Error>,
{
    let degree = degree.try_into()?;
    style.validate()?;
    for multiple in degree.multiples() {
        let (lower, upper) = band(mean, std_dev, f64::from(multiple))?;
        axis.fill_between(ticks, &lower, &upper, style.color, style.alpha)?;
    }
    debug!(?degree, points = ticks.len(), "standard deviation bands drawn");
    Ok(())
}

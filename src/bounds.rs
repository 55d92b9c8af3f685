//! Vertical axis bounds enclosing a set of data series.
//!
//! Zero and non-finite entries are placeholders in benchmark summaries (zero
//! padded spectra, missing tallies) and never take part in the bounds.

use std::str::FromStr;

use ndarray::{Array1, Array2};
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::axis::Axis;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    #[serde(alias = "lin")]
    Linear,
    #[serde(alias = "log")]
    Logarithmic,
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" | "lin" => Ok(Scale::Linear),
            "logarithmic" | "log" => Ok(Scale::Logarithmic),
            _ => {
                warn!(scale = s, "rejected scale");
                Err(Error::InvalidArgument(
                    "scale must be 'linear' or 'logarithmic'".to_string(),
                ))
            },
        }
    }
}

impl TryFrom<&str> for Scale {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Anything that can be flattened into one run of values: a single series,
/// a (possibly ragged) collection of series, or a 2-D array.
pub trait SeriesSet {
    fn flatten(&self) -> Array1<f64>;
}

impl SeriesSet for [f64] {
    fn flatten(&self) -> Array1<f64> {
        Array1::from(self.to_vec())
    }
}

impl<const N: usize> SeriesSet for [f64; N] {
    fn flatten(&self) -> Array1<f64> {
        self.as_slice().flatten()
    }
}

impl SeriesSet for Vec<f64> {
    fn flatten(&self) -> Array1<f64> {
        self.as_slice().flatten()
    }
}

impl SeriesSet for Array1<f64> {
    fn flatten(&self) -> Array1<f64> {
        self.clone()
    }
}

impl SeriesSet for Array2<f64> {
    fn flatten(&self) -> Array1<f64> {
        self.iter().copied().collect()
    }
}

macro_rules! impl_series_collection {
    ($($series:ty),*) => {
        $(
            impl SeriesSet for [$series] {
                fn flatten(&self) -> Array1<f64> {
                    self.iter().flat_map(|series| series.iter().copied()).collect()
                }
            }

            impl SeriesSet for Vec<$series> {
                fn flatten(&self) -> Array1<f64> {
                    self.as_slice().flatten()
                }
            }
        )*
    };
}

impl_series_collection!(Vec<f64>, Array1<f64>, &[f64]);

impl<const N: usize> SeriesSet for [[f64; N]] {
    fn flatten(&self) -> Array1<f64> {
        self.iter().flat_map(|series| series.iter().copied()).collect()
    }
}

impl<const N: usize, const M: usize> SeriesSet for [[f64; N]; M] {
    fn flatten(&self) -> Array1<f64> {
        self.as_slice().flatten()
    }
}

impl<const N: usize> SeriesSet for Vec<[f64; N]> {
    fn flatten(&self) -> Array1<f64> {
        self.as_slice().flatten()
    }
}

fn is_plottable(value: f64) -> bool {
    value.is_finite() && value != 0.
}

/// The entries of `values` that take part in bounds: finite and non-zero.
pub fn masked_values<V: SeriesSet + ?Sized>(values: &V) -> Array1<f64> {
    let flat = values.flatten();
    let kept: Array1<f64> = flat.iter().copied().filter(|v| is_plottable(*v)).collect();
    trace!(
        total = flat.len(),
        masked = flat.len() - kept.len(),
        "masked zero and non-finite entries"
    );
    kept
}

/// Global minimum and maximum over the finite, non-zero entries.
pub fn data_range<V: SeriesSet + ?Sized>(values: &V) -> Result<(f64, f64)> {
    masked_values(values)
        .iter()
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
        .ok_or_else(|| Error::NumericDomain("no finite, non-zero values to bound".to_string()))
}

/// `floor(log10(value))`, i.e. `e` with `10^e <= value < 10^(e+1)`.
pub fn order_of_magnitude(value: f64) -> Result<i32> {
    if value <= 0. || !value.is_finite() {
        return Err(Error::NumericDomain(format!(
            "order of magnitude undefined for {value}"
        )));
    }
    // log10 rounds up to the next integer for values just below a power of ten
    let mut order = value.log10().floor() as i32;
    if power_of_ten(order) > value {
        order -= 1;
    } else if power_of_ten(order + 1) <= value {
        order += 1;
    }
    Ok(order)
}

fn power_of_ten(exponent: impl Into<f64>) -> f64 {
    10f64.powf(exponent.into())
}

fn finite_bounds(low: f64, high: f64) -> Result<(f64, f64)> {
    if !low.is_finite() || !high.is_finite() {
        return Err(Error::NumericDomain(format!(
            "bounds ({low}, {high}) are not representable"
        )));
    }
    Ok((low, high))
}

/// Bounds enclosing `values` on the given scale.
///
/// On a linear scale this is `(min - gap, max + gap)`. On a logarithmic scale
/// the floor is rounded down to the order of magnitude of the minimum and the
/// ceiling up to the order above the maximum, `gap` widening both by whole
/// orders: `(10^(floor(log10 min) - gap), 10^(floor(log10 max) + 1 + gap))`.
///
/// A negative or non-finite `gap` is rejected with [`Error::InvalidArgument`].
/// Bounds that overflow, or a logarithmic floor that underflows to zero, are
/// [`Error::NumericDomain`].
pub fn floor_ceiling<V: SeriesSet + ?Sized>(
    values: &V,
    scale: Scale,
    gap: f64,
) -> Result<(f64, f64)> {
    if !gap.is_finite() || gap < 0. {
        warn!(gap, "rejected gap");
        return Err(Error::InvalidArgument(format!(
            "gap must be finite and non-negative, got {gap}"
        )));
    }
    let (min_value, max_value) = data_range(values)?;
    match scale {
        Scale::Linear => finite_bounds(min_value - gap, max_value + gap),
        Scale::Logarithmic => {
            if min_value <= 0. {
                return Err(Error::NumericDomain(format!(
                    "logarithmic scale needs positive values, found {min_value}"
                )));
            }
            let min_order = f64::from(order_of_magnitude(min_value)?);
            let max_order = f64::from(order_of_magnitude(max_value)?);
            let (low, high) = finite_bounds(
                power_of_ten(min_order - gap),
                power_of_ten(max_order + 1. + gap),
            )?;
            if low <= 0. {
                return Err(Error::NumericDomain(format!(
                    "logarithmic floor underflows for minimum {min_value}"
                )));
            }
            Ok((low, high))
        },
    }
}

/// Compute the bounds enclosing `values` and apply them to `axis`.
///
/// `scale` may be a [`Scale`] or its name; `gap` must be finite and
/// non-negative. The axis is left untouched when an error is returned. The applied bounds are returned.
pub fn compute_and_apply_bounds<A, V, S>(
    axis: &mut A,
    values: &V,
    scale: S,
    gap: f64,
) -> Result<(f64, f64)>
where
    A: Axis + ?Sized,
    V: SeriesSet + ?Sized,
    S: TryInto<Scale>,
    Error: From<S::Error>,
{
    let scale = scale.try_into()?;
    let (low, high) = floor_ceiling(values, scale, gap)?;
    debug!(?scale, gap, low, high, "applying vertical bounds");
    axis.set_vertical_bounds(low, high);
    Ok((low, high))
}

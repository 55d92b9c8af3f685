//! Axis scaling and uncertainty bands for benchmark comparison plots.
//!
//! [`compute_and_apply_bounds`] frames an axis around a set of data series,
//! [`draw_stddev_bands`] shades the 1, 2 and 3 sigma bands around a mean
//! curve. Both work on any [`Axis`]; [`PlotAxis`] records what is applied to
//! it and renders it with plotters.

pub mod axis;
pub mod bands;
pub mod bounds;
pub mod config;
pub mod error;

pub use axis::{Axis, FilledRegion, PlotAxis};
pub use bands::{band, draw_stddev_bands, BandStyle, Degree};
pub use bounds::{
    compute_and_apply_bounds, data_range, floor_ceiling, masked_values, order_of_magnitude,
    Scale, SeriesSet,
};
pub use config::{parse_color, PlotConfig};
pub use error::{Error, Result};

//! The shared area capability and its dispatcher.

use crate::error::{require, Result};

use super::{Circle, Parallelogram, Polygon, Trapezoid, Triangle};

/// Anything that can report its own area.
pub trait Figure {
    fn area(&self) -> Result<f64>;

    /// Short lowercase name of the variant.
    fn name(&self) -> &'static str;
}

/// Forward to [`Figure::area`]; fails only for an absent figure or whatever
/// the figure itself reports.
pub fn area_of(figure: Option<&dyn Figure>) -> Result<f64> {
    let figure = require(figure, "Figure must not be null")?;
    tracing::trace!(figure = figure.name(), "area query");
    figure.area()
}

macro_rules! impl_figure {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Figure for $ty {
                #[inline]
                fn area(&self) -> Result<f64> {
                    <$ty>::area(self)
                }
                #[inline]
                fn name(&self) -> &'static str {
                    $name
                }
            }
        )*
    };
}

impl_figure! {
    Polygon => "polygon",
    Circle => "circle",
    Triangle => "triangle",
    Trapezoid => "trapezoid",
    Parallelogram => "parallelogram",
}

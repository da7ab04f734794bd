//! Quadrilaterals: trapezoids and parallelograms.
//!
//! Both accept either scalar dimensions or four vertices. The vertex forms
//! always report the shoelace area of those vertices.

use crate::error::{GeomError, Result};

use super::all_positive;
use super::point::Point;
use super::polygon::Polygon;

fn quad_polygon(vertices: Vec<Point>) -> Result<Polygon> {
    let polygon = Polygon::new(vertices)?;
    if polygon.len() != 4 {
        return Err(GeomError::invalid("A quadrilateral needs exactly 4 vertices"));
    }
    Ok(polygon)
}

#[derive(Clone, Debug, PartialEq)]
enum TrapezoidForm {
    Vertices(Polygon),
    Bases { base1: f64, base2: f64, height: f64 },
}

/// Trapezoid with two parallel bases.
#[derive(Clone, Debug, PartialEq)]
pub struct Trapezoid {
    form: TrapezoidForm,
}

impl Trapezoid {
    pub fn from_bases(base1: f64, base2: f64, height: f64) -> Result<Self> {
        if !all_positive(&[base1, base2, height]) {
            return Err(GeomError::invalid("Sides and height should be positive"));
        }
        Ok(Self {
            form: TrapezoidForm::Bases {
                base1,
                base2,
                height,
            },
        })
    }

    /// Four distinct vertices. Parallelism of the bases is not verified.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        Ok(Self {
            form: TrapezoidForm::Vertices(quad_polygon(vertices)?),
        })
    }

    pub fn area(&self) -> Result<f64> {
        match &self.form {
            TrapezoidForm::Vertices(polygon) => polygon.area(),
            TrapezoidForm::Bases {
                base1,
                base2,
                height,
            } => Ok(0.5 * (base1 + base2) * height),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ParallelogramForm {
    Vertices(Polygon),
    BaseHeight { base: f64, height: f64 },
}

/// Parallelogram (squares and rectangles included).
#[derive(Clone, Debug, PartialEq)]
pub struct Parallelogram {
    form: ParallelogramForm,
}

impl Parallelogram {
    pub fn from_base_height(base: f64, height: f64) -> Result<Self> {
        if !all_positive(&[base, height]) {
            return Err(GeomError::invalid("Base and height should be positive"));
        }
        Ok(Self {
            form: ParallelogramForm::BaseHeight { base, height },
        })
    }

    /// Four distinct vertices. Parallelism of opposite sides is not verified.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        Ok(Self {
            form: ParallelogramForm::Vertices(quad_polygon(vertices)?),
        })
    }

    pub fn area(&self) -> Result<f64> {
        match &self.form {
            ParallelogramForm::Vertices(polygon) => polygon.area(),
            ParallelogramForm::BaseHeight { base, height } => Ok(base * height),
        }
    }
}

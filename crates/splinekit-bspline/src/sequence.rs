//! Owning container for the results of splitting and decomposition.

use serde::{Deserialize, Serialize};

use crate::curve::BSplineCurve;

/// An ordered, owning list of curves.
///
/// Produced by [`BSplineCurve::split`] (one or two pieces) and
/// [`BSplineCurve::to_beziers`] (one piece per segment). The sequence
/// exclusively owns its curves; dropping it drops them all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSequence {
    curves: Vec<BSplineCurve>,
}

impl CurveSequence {
    /// An empty, valid sequence.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&BSplineCurve> {
        self.curves.get(i)
    }

    pub fn first(&self) -> Option<&BSplineCurve> {
        self.curves.first()
    }

    pub fn last(&self) -> Option<&BSplineCurve> {
        self.curves.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BSplineCurve> {
        self.curves.iter()
    }

    pub fn as_slice(&self) -> &[BSplineCurve] {
        &self.curves
    }

    /// Give up ownership of the contained curves.
    pub fn into_vec(self) -> Vec<BSplineCurve> {
        self.curves
    }
}

impl From<Vec<BSplineCurve>> for CurveSequence {
    fn from(curves: Vec<BSplineCurve>) -> Self {
        Self { curves }
    }
}

impl std::ops::Index<usize> for CurveSequence {
    type Output = BSplineCurve;

    fn index(&self, i: usize) -> &BSplineCurve {
        &self.curves[i]
    }
}

impl IntoIterator for CurveSequence {
    type Item = BSplineCurve;
    type IntoIter = std::vec::IntoIter<BSplineCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.into_iter()
    }
}

impl<'a> IntoIterator for &'a CurveSequence {
    type Item = &'a BSplineCurve;
    type IntoIter = std::slice::Iter<'a, BSplineCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

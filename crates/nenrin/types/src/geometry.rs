//! Plane points, ridges and sampled ring polylines.

use serde::{Deserialize, Serialize};

use crate::input::DomainId;

/// A point in polar coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarPoint {
    pub theta_rad: f64,
    pub r: f64,
}

impl PolarPoint {
    pub fn new(theta_rad: f64, r: f64) -> Self {
        Self { theta_rad, r }
    }
}

/// A point in Cartesian coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

impl XyPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One domain's committed growth sample within a ridge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarAnchor {
    pub domain_id: DomainId,
    pub theta_rad: f64,
    pub r: f64,
}

impl PolarAnchor {
    pub fn point(&self) -> PolarPoint {
        PolarPoint::new(self.theta_rad, self.r)
    }
}

/// The complete ring snapshot at one step: one anchor per domain,
/// ordered by angle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ridge {
    pub step_index: u64,
    pub anchors: Vec<PolarAnchor>,
}

impl Ridge {
    pub fn anchor(&self, domain_id: &DomainId) -> Option<&PolarAnchor> {
        self.anchors.iter().find(|a| &a.domain_id == domain_id)
    }
}

/// Closed polyline in polar space. The last point is adjacent to the first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidgePolylinePolar {
    pub step_index: u64,
    pub points: Vec<PolarPoint>,
}

/// Closed polyline in the plane. The last point is adjacent to the first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidgePolylineXy {
    pub step_index: u64,
    pub points: Vec<XyPoint>,
}

/// A position in whichever output format was requested.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Polar(PolarPoint),
    Xy(XyPoint),
}

impl Position {
    pub fn as_polar(&self) -> Option<&PolarPoint> {
        match self {
            Self::Polar(p) => Some(p),
            Self::Xy(_) => None,
        }
    }

    pub fn as_xy(&self) -> Option<&XyPoint> {
        match self {
            Self::Xy(p) => Some(p),
            Self::Polar(_) => None,
        }
    }
}

/// Ring polylines for every step, in the requested format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output", content = "ridges", rename_all = "lowercase")]
pub enum RidgesOutput {
    Polar(Vec<RidgePolylinePolar>),
    Xy(Vec<RidgePolylineXy>),
}

impl RidgesOutput {
    pub fn len(&self) -> usize {
        match self {
            Self::Polar(r) => r.len(),
            Self::Xy(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn step_indices(&self) -> Vec<u64> {
        match self {
            Self::Polar(r) => r.iter().map(|p| p.step_index).collect(),
            Self::Xy(r) => r.iter().map(|p| p.step_index).collect(),
        }
    }

    pub fn as_polar(&self) -> Option<&[RidgePolylinePolar]> {
        match self {
            Self::Polar(r) => Some(r),
            Self::Xy(_) => None,
        }
    }

    pub fn as_xy(&self) -> Option<&[RidgePolylineXy]> {
        match self {
            Self::Xy(r) => Some(r),
            Self::Polar(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ridge_anchor_lookup() {
        let ridge = Ridge {
            step_index: 0,
            anchors: vec![
                PolarAnchor {
                    domain_id: DomainId::from("a"),
                    theta_rad: 0.0,
                    r: 12.0,
                },
                PolarAnchor {
                    domain_id: DomainId::from("b"),
                    theta_rad: 1.0,
                    r: 10.0,
                },
            ],
        };
        assert_eq!(ridge.anchor(&DomainId::from("b")).map(|a| a.r), Some(10.0));
        assert!(ridge.anchor(&DomainId::from("c")).is_none());
    }

    #[test]
    fn position_is_untagged() {
        let p = Position::Xy(XyPoint::new(1.0, 2.0));
        assert_eq!(serde_json::to_value(p).unwrap(), serde_json::json!({"x": 1.0, "y": 2.0}));

        let q: Position = serde_json::from_str(r#"{"thetaRad": 0.5, "r": 3.0}"#).unwrap();
        assert_eq!(q.as_polar(), Some(&PolarPoint::new(0.5, 3.0)));
    }

    #[test]
    fn ridges_output_wire_shape() {
        let out = RidgesOutput::Xy(vec![RidgePolylineXy {
            step_index: 1,
            points: vec![XyPoint::new(0.0, 1.0)],
        }]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["output"], "xy");
        assert_eq!(json["ridges"][0]["stepIndex"], 1);
        assert_eq!(out.step_indices(), vec![1]);
        assert!(out.as_polar().is_none());
    }
}

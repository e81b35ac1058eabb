//! Defines the interpolation method variants
//!
//! Provides the [`Method`] enum, which enumerates the seven supported
//! equal-interval formulas, and resolves each to its [`Formula`] strategy.

use strum_macros::{EnumIter, EnumString};

use crate::differences::table::TableKind;
use crate::interpolation::central::{Bessel, Everett, GaussBackward, GaussForward, Stirling};
use crate::interpolation::newton_backward::NewtonBackward;
use crate::interpolation::newton_forward::NewtonForward;
use crate::interpolation::traits::Formula;


/// Interpolation method variants.
/// - [`Method::NewtonForward`]  edge formula anchored at the first point
/// - [`Method::NewtonBackward`] edge formula anchored at the last point
/// - the remaining five are central formulas anchored at a mid index
///
/// Parses from its snake-case name, case-insensitively
/// (`"gauss_forward".parse::<Method>()`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Method {
    NewtonForward,
    NewtonBackward,
    Stirling,
    Bessel,
    Everett,
    GaussForward,
    GaussBackward,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::NewtonForward,
        Method::NewtonBackward,
        Method::Stirling,
        Method::Bessel,
        Method::Everett,
        Method::GaussForward,
        Method::GaussBackward,
    ];

    pub const fn method_name(self) -> &'static str {
        match self {
            Method::NewtonForward  => "newton_forward",
            Method::NewtonBackward => "newton_backward",
            Method::Stirling       => "stirling",
            Method::Bessel         => "bessel",
            Method::Everett        => "everett",
            Method::GaussForward   => "gauss_forward",
            Method::GaussBackward  => "gauss_backward",
        }
    }

    /// Human-readable title used in step traces.
    pub const fn title(self) -> &'static str {
        match self {
            Method::NewtonForward  => "Newton Forward Difference",
            Method::NewtonBackward => "Newton Backward Difference",
            Method::Stirling       => "Stirling Central Difference",
            Method::Bessel         => "Bessel Central Difference",
            Method::Everett        => "Everett Central Difference",
            Method::GaussForward   => "Gauss Forward",
            Method::GaussBackward  => "Gauss Backward",
        }
    }

    /// Layout of the difference table the method reads.
    pub const fn table_kind(self) -> TableKind {
        match self {
            Method::NewtonForward  => TableKind::Forward,
            Method::NewtonBackward => TableKind::Backward,
            _                      => TableKind::Central,
        }
    }

    /// Strategy implementing the method.
    pub fn formula(self) -> &'static dyn Formula {
        match self {
            Method::NewtonForward  => &NewtonForward,
            Method::NewtonBackward => &NewtonBackward,
            Method::Stirling       => &Stirling,
            Method::Bessel         => &Bessel,
            Method::Everett        => &Everett,
            Method::GaussForward   => &GaussForward,
            Method::GaussBackward  => &GaussBackward,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

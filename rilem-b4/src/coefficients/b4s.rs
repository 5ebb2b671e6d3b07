//! Model B4s coefficients.
//!
//! The simplified model replaces mix proportions with the strength ratio
//! `fcm / 40 MPa`, so every exponent here applies to that ratio.

use crate::CementType;

/// Drying shrinkage parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryingShrinkage {
    /// Halftime base `τ_s,cem`, in days/mm².
    pub tau_cem: f64,
    pub s_tau_f: f64,
    /// Final shrinkage base `ε_s,cem`.
    pub eps_cem: f64,
    pub s_eps_f: f64,
}

/// Autogenous shrinkage parameters, shared by all cement types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autogenous {
    /// Halftime base `τ_au,cem`, in days.
    pub tau_cem: f64,
    pub r_tau_f: f64,
    pub eps_cem: f64,
    pub r_eps_f: f64,
    pub alpha: f64,
    pub r_t: f64,
}

pub const AUTOGENOUS: Autogenous = Autogenous {
    tau_cem: 2.26,
    r_tau_f: 0.27,
    eps_cem: 78.2e-6,
    r_eps_f: 1.03,
    alpha: 1.73,
    r_t: -1.73,
};

/// Creep parameters.
///
/// `s2`, `s4` and `s5` are in 1/GPa, `s3` and `p1` are dimensionless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Creep {
    pub p1: f64,
    pub s2: f64,
    pub s3: f64,
    pub s4: f64,
    pub s5: f64,
    pub s2_f: f64,
    pub s3_f: f64,
    pub s4_f: f64,
    pub s5_f: f64,
    pub p5_h: f64,
}

/// Exponent on the drying intensity `|k_h·ε_sh∞|` in the drying creep term.
pub const P5_EPS: f64 = -0.85;

#[must_use]
pub fn drying_shrinkage(cement: CementType) -> DryingShrinkage {
    match cement {
        CementType::Regular => DryingShrinkage {
            tau_cem: 0.027,
            s_tau_f: 0.21,
            eps_cem: 590e-6,
            s_eps_f: -0.51,
        },
        CementType::RapidHardening => DryingShrinkage {
            tau_cem: 0.027,
            s_tau_f: 1.55,
            eps_cem: 830e-6,
            s_eps_f: -0.84,
        },
        CementType::SlowHardening => DryingShrinkage {
            tau_cem: 0.032,
            s_tau_f: -1.84,
            eps_cem: 640e-6,
            s_eps_f: -0.69,
        },
    }
}

#[must_use]
pub fn creep(cement: CementType) -> Creep {
    let (p1, s2, s5, p5_h) = match cement {
        CementType::Regular => (0.70, 14.2e-3, 1.54e-3, 8.0),
        CementType::RapidHardening => (0.60, 29.9e-3, 41.8e-6, 1.0),
        CementType::SlowHardening => (0.80, 11.2e-3, 150e-6, 8.0),
    };

    Creep {
        p1,
        s2,
        s3: 0.976,
        s4: 4e-3,
        s5,
        s2_f: -1.58,
        s3_f: -1.61,
        s4_f: -1.16,
        s5_f: -0.45,
        p5_h,
    }
}

//! Plant catalog: predefined physical systems plus a free-form plant.
//!
//! Each variant carries its own parameter struct; the transfer function
//! shape is selected by the kind tag. Validation is lazy: constraints run
//! when a transfer function is requested, and the first violation wins.

use crate::checks::{must_be_negative, must_be_nonnegative, must_be_positive};
use crate::error::{ModelError, ModelResult};
use crate::latex;
use crate::params::{LatexOverrides, ParamMap, ParamValue};
use crate::ratio::PolyRatio;
use crate::traits::BlockModel;
use ll_core::{Real, TransferFunction};
use std::collections::BTreeMap;

pub const BALL_AND_BEAM: &str = "Ball and Beam";
pub const MOTOR_SPEED: &str = "DC Motor Speed Control";
pub const MOTOR_POSITION: &str = "DC Motor Position Control";
pub const PERSONALIZED: &str = "Personalized Plant";

/// Catalog lookup by display name.
pub fn get_plant(name: &str) -> ModelResult<Plant> {
    let kind = match name {
        BALL_AND_BEAM => PlantKind::BallAndBeam(BallAndBeamParams::default()),
        MOTOR_SPEED => PlantKind::MotorSpeed(MotorParams::default()),
        MOTOR_POSITION => PlantKind::MotorPosition(MotorParams::default()),
        PERSONALIZED => PlantKind::Personalized(PolyRatio::default()),
        _ => {
            return Err(ModelError::UnknownPlantType {
                name: name.to_string(),
            });
        }
    };
    Ok(Plant { kind })
}

/// All catalog display names, in menu order.
pub fn plant_names() -> [&'static str; 4] {
    [BALL_AND_BEAM, MOTOR_SPEED, MOTOR_POSITION, PERSONALIZED]
}

/// Ball on a tilting beam, actuated at the pivot.
///
/// `P(s) = -m·g·d / (L·(J/R² + m)·s²)`
#[derive(Debug, Clone, PartialEq)]
pub struct BallAndBeamParams {
    /// Mass of the ball (kg).
    pub m: Real,
    /// Radius of the ball (m).
    pub r: Real,
    /// Lever arm offset (m).
    pub d: Real,
    /// Gravitational acceleration, negative downward (m/s^2).
    pub g: Real,
    /// Length of the beam (m).
    pub l: Real,
    /// Moment of inertia of the ball (kg*m^2).
    pub j: Real,
}

impl Default for BallAndBeamParams {
    fn default() -> Self {
        BallAndBeamParams {
            m: 1.0,
            r: 0.05,
            d: 0.5,
            g: -9.81,
            l: 1.0,
            j: 0.02,
        }
    }
}

/// Armature-controlled DC motor, shared by the speed and position plants.
///
/// Speed: `P(s) = K / ((J·s + b)(L·s + R) + K²)`; position adds a free
/// integrator in the denominator.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorParams {
    /// Moment of inertia of the rotor (kg*m^2).
    pub j: Real,
    /// Motor viscous friction constant (N*m*s).
    pub b: Real,
    /// Electromotive force constant (V/rad/s).
    pub k: Real,
    /// Electric resistance (Ohm).
    pub r: Real,
    /// Electric inductance (H).
    pub l: Real,
}

impl Default for MotorParams {
    fn default() -> Self {
        MotorParams {
            j: 0.01,
            b: 0.1,
            k: 0.01,
            r: 1.0,
            l: 0.5,
        }
    }
}

/// The plant variant tag. Motor position shares the motor parameter struct
/// instead of inheriting from the speed plant.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantKind {
    BallAndBeam(BallAndBeamParams),
    MotorSpeed(MotorParams),
    MotorPosition(MotorParams),
    Personalized(PolyRatio),
}

/// A configured plant from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    kind: PlantKind,
}

impl Plant {
    pub fn new(kind: PlantKind) -> Self {
        Plant { kind }
    }

    pub fn kind(&self) -> &PlantKind {
        &self.kind
    }
}

impl BallAndBeamParams {
    fn validate(&self) -> ModelResult<()> {
        must_be_positive("Mass m", self.m)?;
        must_be_positive("Radius R", self.r)?;
        must_be_positive("Length L", self.l)?;
        must_be_negative("Gravity g", self.g)?;
        must_be_positive("Distance d", self.d)?;
        must_be_nonnegative("Moment of inertia J", self.j)?;
        Ok(())
    }

    fn transfer_function(&self) -> ModelResult<TransferFunction> {
        self.validate()?;
        let num = [-self.m * self.g * self.d];
        let den = [self.l * (self.j / (self.r * self.r) + self.m), 0.0, 0.0];
        Ok(TransferFunction::new(&num, &den)?)
    }

    fn latex_equation(&self, ov: &LatexOverrides) -> String {
        let m = disp(ov, "m", self.m);
        let r = disp(ov, "R", self.r);
        let d = disp(ov, "d", self.d);
        let g = disp(ov, "g", self.g);
        let l = disp(ov, "L", self.l);
        let j = disp(ov, "J", self.j);
        format!(
            r"$\frac{{-{m} \cdot {g} \cdot {d}}}{{{l} \cdot \left(\frac{{{j}}}{{{r}^2}} + {m}\right) \cdot s^2}}$"
        )
    }
}

impl MotorParams {
    fn validate(&self) -> ModelResult<()> {
        must_be_positive("Moment of inertia J", self.j)?;
        must_be_nonnegative("Motor viscous friction constant b", self.b)?;
        must_be_nonnegative("Electromotive force constant K", self.k)?;
        must_be_nonnegative("Electric resistance R", self.r)?;
        must_be_nonnegative("Electric inductance L", self.l)?;
        Ok(())
    }

    /// `(J·s + b)(L·s + R) + K²`, expanded in descending powers.
    fn electromechanical_den(&self) -> [Real; 3] {
        [
            self.j * self.l,
            self.j * self.r + self.b * self.l,
            self.b * self.r + self.k * self.k,
        ]
    }

    fn speed_transfer_function(&self) -> ModelResult<TransferFunction> {
        self.validate()?;
        Ok(TransferFunction::new(&[self.k], &self.electromechanical_den())?)
    }

    fn position_transfer_function(&self) -> ModelResult<TransferFunction> {
        self.validate()?;
        let [a, b, c] = self.electromechanical_den();
        // Extra s factor: shaft angle is the integral of speed.
        Ok(TransferFunction::new(&[self.k], &[a, b, c, 0.0])?)
    }

    fn speed_latex(&self, ov: &LatexOverrides) -> String {
        let (j, b, k, r, l) = self.display_values(ov);
        format!(
            r"$\frac{{{k}}}{{\left({j}s + {b}\right) \cdot \left({l}s + {r}\right) + {k}^2}}$"
        )
    }

    fn position_latex(&self, ov: &LatexOverrides) -> String {
        let (j, b, k, r, l) = self.display_values(ov);
        format!(
            r"$\frac{{{k}}}{{s( \left({j}s + {b}\right) \left({l}s + {r}\right) + {k}^2)}}$"
        )
    }

    fn display_values(&self, ov: &LatexOverrides) -> (String, String, String, String, String) {
        (
            disp(ov, "J", self.j),
            disp(ov, "b", self.b),
            disp(ov, "K", self.k),
            disp(ov, "R", self.r),
            disp(ov, "L", self.l),
        )
    }
}

fn disp(overrides: &LatexOverrides, key: &str, value: Real) -> String {
    match overrides.get(key) {
        Some(text) => text.clone(),
        None => latex::fmt_value(value),
    }
}

fn scalar_map(pairs: &[(&str, Real)]) -> ParamMap {
    pairs
        .iter()
        .map(|(name, v)| (name.to_string(), ParamValue::Scalar(*v)))
        .collect()
}

fn merge_scalars(current: &mut [(&str, &mut Real)], updates: &ParamMap) -> ModelResult<()> {
    for key in updates.keys() {
        if !current.iter().any(|(name, _)| *name == key.as_str()) {
            return Err(ModelError::UnknownParameter { name: key.clone() });
        }
    }
    for (name, slot) in current.iter_mut() {
        if let Some(v) = updates.get(*name) {
            **slot = v.as_scalar(*name)?;
        }
    }
    Ok(())
}

fn descriptions(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect()
}

impl BlockModel for Plant {
    fn name(&self) -> &str {
        match &self.kind {
            PlantKind::BallAndBeam(_) => BALL_AND_BEAM,
            PlantKind::MotorSpeed(_) => MOTOR_SPEED,
            PlantKind::MotorPosition(_) => MOTOR_POSITION,
            PlantKind::Personalized(_) => PERSONALIZED,
        }
    }

    fn transfer_function(&self) -> ModelResult<TransferFunction> {
        match &self.kind {
            PlantKind::BallAndBeam(p) => p.transfer_function(),
            PlantKind::MotorSpeed(p) => p.speed_transfer_function(),
            PlantKind::MotorPosition(p) => p.position_transfer_function(),
            PlantKind::Personalized(p) => p.transfer_function(),
        }
    }

    fn latex_equation(&self, overrides: &LatexOverrides) -> String {
        match &self.kind {
            PlantKind::BallAndBeam(p) => p.latex_equation(overrides),
            PlantKind::MotorSpeed(p) => p.speed_latex(overrides),
            PlantKind::MotorPosition(p) => p.position_latex(overrides),
            PlantKind::Personalized(p) => p.latex_equation(overrides),
        }
    }

    fn parameters(&self) -> ParamMap {
        match &self.kind {
            PlantKind::BallAndBeam(p) => scalar_map(&[
                ("m", p.m),
                ("R", p.r),
                ("d", p.d),
                ("g", p.g),
                ("L", p.l),
                ("J", p.j),
            ]),
            PlantKind::MotorSpeed(p) | PlantKind::MotorPosition(p) => scalar_map(&[
                ("J", p.j),
                ("b", p.b),
                ("K", p.k),
                ("R", p.r),
                ("L", p.l),
            ]),
            PlantKind::Personalized(p) => p.parameters(),
        }
    }

    fn set_parameters(&mut self, updates: &ParamMap) -> ModelResult<()> {
        match &mut self.kind {
            PlantKind::BallAndBeam(p) => merge_scalars(
                &mut [
                    ("m", &mut p.m),
                    ("R", &mut p.r),
                    ("d", &mut p.d),
                    ("g", &mut p.g),
                    ("L", &mut p.l),
                    ("J", &mut p.j),
                ],
                updates,
            ),
            PlantKind::MotorSpeed(p) | PlantKind::MotorPosition(p) => merge_scalars(
                &mut [
                    ("J", &mut p.j),
                    ("b", &mut p.b),
                    ("K", &mut p.k),
                    ("R", &mut p.r),
                    ("L", &mut p.l),
                ],
                updates,
            ),
            PlantKind::Personalized(p) => p.set_parameters(updates),
        }
    }

    fn parameter_descriptions(&self) -> BTreeMap<String, String> {
        match &self.kind {
            PlantKind::BallAndBeam(_) => descriptions(&[
                ("m", "Mass m:\nMass of the ball (kg)."),
                ("R", "Radius R:\nRadius of the ball (m)."),
                ("d", "Distance d:\nLever arm offset from the pivot to the ball (m)."),
                ("g", "Gravity g:\nGravitational acceleration, negative downward (m/s^2)."),
                ("L", "Length L:\nLength of the beam (m)."),
                ("J", "Moment of inertia J:\nMoment of inertia of the ball (kg*m^2)."),
            ]),
            PlantKind::MotorSpeed(_) | PlantKind::MotorPosition(_) => descriptions(&[
                ("J", "Moment of inertia J:\nMoment of inertia of the rotor (kg*m^2)."),
                ("b", "Friction constant b:\nMotor viscous friction constant (N*m*s)."),
                ("K", "Electromotive force constant K:\nBack-EMF and torque constant (V/rad/s)."),
                ("R", "Electric resistance R:\nArmature resistance (Ohm)."),
                ("L", "Electric inductance L:\nArmature inductance (H)."),
            ]),
            PlantKind::Personalized(_) => descriptions(&[
                ("Numerator", "Numerator:\nPlant numerator coefficients, highest power first."),
                ("Denominator", "Denominator:\nPlant denominator coefficients, highest power first."),
            ]),
        }
    }

    fn component_description(&self) -> String {
        match &self.kind {
            PlantKind::BallAndBeam(_) => "Ball and Beam:\n\
                A ball rolls along a beam tilted by a motor at the pivot.\n\
                The plant maps beam angle to ball position; it is a double\n\
                integrator and is open-loop unstable."
                .to_string(),
            PlantKind::MotorSpeed(_) => "DC Motor Speed Control:\n\
                An armature-controlled DC motor. The plant maps armature\n\
                voltage to rotational speed."
                .to_string(),
            PlantKind::MotorPosition(_) => "DC Motor Position Control:\n\
                An armature-controlled DC motor with the shaft angle as the\n\
                output, adding a free integrator to the speed model."
                .to_string(),
            PlantKind::Personalized(_) => "Personalized Plant:\n\
                A free-form transfer function given directly by numerator\n\
                and denominator coefficient lists."
                .to_string(),
        }
    }
}

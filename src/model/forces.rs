use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::FlightModelConfig;
use crate::model::curve::AeroCurve;
use crate::model::kinematics::BodyFrameKinematics;

/// Below this squared body speed the lift stage is skipped entirely.
pub const MIN_LIFT_SPEED_SQ: f64 = 1.0;

/// Velocities shorter than this are treated as zero when a direction is needed.
pub const DIRECTION_EPSILON: f64 = 1e-6;

/// Parasitic drag coefficients per signed body axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Applied to motion along +X.
    pub forward: f64,
    /// Applied to motion along -X.
    pub backward: f64,
    /// Applied to motion along +Y.
    pub up: f64,
    /// Applied to motion along -Y.
    pub down: f64,
    /// Applied to motion along +Z.
    pub right: f64,
    /// Applied to motion along -Z.
    pub left: f64,
}

impl Default for DragCoefficients {
    fn default() -> Self {
        Self {
            forward: 0.5,
            backward: 1.0,
            up: 6.0,
            down: 6.0,
            right: 3.0,
            left: 3.0,
        }
    }
}

impl DragCoefficients {
    pub fn uniform(coefficient: f64) -> Self {
        Self {
            forward: coefficient,
            backward: coefficient,
            up: coefficient,
            down: coefficient,
            right: coefficient,
            left: coefficient,
        }
    }

    /// Scales each component of `direction` by the coefficient of the axis it points along.
    pub fn coefficient_vector(&self, direction: &Vector3<f64>) -> Vector3<f64> {
        let pick = |component: f64, positive: f64, negative: f64| {
            component * if component >= 0.0 { positive } else { negative }
        };

        Vector3::new(
            pick(direction.x, self.forward, self.backward),
            pick(direction.y, self.up, self.down),
            pick(direction.z, self.right, self.left),
        )
    }

    pub fn values(&self) -> [f64; 6] {
        [
            self.forward,
            self.backward,
            self.up,
            self.down,
            self.right,
            self.left,
        ]
    }
}

/// How the drag that comes with lift is sized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InducedDragModel {
    /// `Cl² · scale · |v|²`
    LiftSquared { scale: f64 },
    /// `0.5 · Cdi(aoa) · rho · |v|² · area` with `Cdi` read from its own curve.
    Curve { curve: AeroCurve },
}

impl Default for InducedDragModel {
    fn default() -> Self {
        InducedDragModel::LiftSquared { scale: 10.0 }
    }
}

/// Induced drag sizing plus whether it reaches the rigid body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InducedDragConfig {
    pub model: InducedDragModel,
    /// When false the drag is computed for telemetry only.
    pub apply: bool,
}

/// Lifting surfaces of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AeroSurface {
    /// Spans the Z axis and reacts to the pitch-plane angle of attack.
    MainWing,
    /// Vertical fin spanning Y, reacting to the yaw-plane angle of attack.
    Stabilizer,
}

impl AeroSurface {
    /// Axis the surface spans; lift acts perpendicular to it and to the airflow.
    pub fn control_axis(&self) -> Vector3<f64> {
        match self {
            AeroSurface::MainWing => -Vector3::z(),
            AeroSurface::Stabilizer => Vector3::y(),
        }
    }

    /// The angle of attack this surface responds to (radians).
    pub fn angle_of_attack(&self, kinematics: &BodyFrameKinematics) -> f64 {
        match self {
            AeroSurface::MainWing => kinematics.angle_of_attack,
            AeroSurface::Stabilizer => kinematics.angle_of_attack_yaw,
        }
    }
}

/// Output of one lifting surface, body frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceForces {
    pub lift: Vector3<f64>,
    pub induced_drag: Vector3<f64>,
    pub lift_coefficient: f64,
}

/// Persistent throttle setting in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThrottleState {
    value: f64,
}

impl ThrottleState {
    pub fn new(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Integrates the throttle axis over one tick and returns the new setting.
    pub fn advance(&mut self, axis: f64, rate: f64, dt: f64) -> f64 {
        let next = self.value + axis * rate * dt;
        // NaN would survive clamp, hold the last good setting instead
        if !next.is_nan() {
            self.value = next.clamp(0.0, 1.0);
        }
        self.value
    }
}

/// Thrust along the body's forward axis.
pub fn thrust_force(throttle: f64, max_thrust: f64) -> Vector3<f64> {
    Vector3::x() * (throttle * max_thrust)
}

/// Quadratic, direction-dependent parasitic drag opposing `velocity_body`.
pub fn parasitic_drag(velocity_body: &Vector3<f64>, coefficients: &DragCoefficients) -> Vector3<f64> {
    let speed = velocity_body.norm();
    if speed < DIRECTION_EPSILON {
        return Vector3::zeros();
    }

    let direction = velocity_body / speed;
    let coefficient = coefficients.coefficient_vector(&direction).norm();
    -direction * coefficient * speed * speed
}

/// Lift and induced drag of one surface.
///
/// # Arguments
/// * `surface` - Which surface is evaluated; fixes the control axis.
/// * `velocity_body` - Body-frame linear velocity (m/s).
/// * `angle_of_attack` - Angle driving the lift curve (radians).
/// * `density` - Air density (kg/m³).
/// * `area` - Reference area of the surface (m²).
/// * `lift_curve` - Lift coefficient against angle of attack in degrees.
/// * `induced` - Sizing of the induced drag.
pub fn surface_forces(
    surface: AeroSurface,
    velocity_body: &Vector3<f64>,
    angle_of_attack: f64,
    density: f64,
    area: f64,
    lift_curve: &AeroCurve,
    induced: &InducedDragModel,
) -> SurfaceForces {
    let axis = surface.control_axis();
    let projected = velocity_body - axis * velocity_body.dot(&axis);
    let speed_sq = projected.norm_squared();
    let angle_deg = angle_of_attack.to_degrees();

    let lift_coefficient = lift_curve.sample(angle_deg);
    let lift_magnitude = 0.5 * lift_coefficient * density * speed_sq * area;
    let lift_direction = projected
        .cross(&axis)
        .try_normalize(DIRECTION_EPSILON)
        .unwrap_or_else(Vector3::zeros);

    let drag_magnitude = match induced {
        InducedDragModel::LiftSquared { scale } => lift_coefficient * lift_coefficient * scale * speed_sq,
        InducedDragModel::Curve { curve } => 0.5 * curve.sample(angle_deg) * density * speed_sq * area,
    };
    let drag_direction = -projected
        .try_normalize(DIRECTION_EPSILON)
        .unwrap_or_else(Vector3::zeros);

    SurfaceForces {
        lift: lift_direction * lift_magnitude,
        induced_drag: drag_direction * drag_magnitude,
        lift_coefficient,
    }
}

/// Every force term of one tick, body frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyForces {
    pub thrust: Vector3<f64>,
    pub parasitic_drag: Vector3<f64>,
    pub wing: SurfaceForces,
    pub stabilizer: SurfaceForces,
}

impl BodyForces {
    pub fn lift(&self) -> Vector3<f64> {
        self.wing.lift + self.stabilizer.lift
    }

    pub fn induced_drag(&self) -> Vector3<f64> {
        self.wing.induced_drag + self.stabilizer.induced_drag
    }

    /// Sum of the applied terms; induced drag only when `apply_induced_drag`.
    pub fn net(&self, apply_induced_drag: bool) -> Vector3<f64> {
        let net = self.thrust + self.parasitic_drag + self.lift();
        if apply_induced_drag {
            net + self.induced_drag()
        } else {
            net
        }
    }
}

/// Thrust, parasitic drag and lift for one body. Owns the throttle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceModel {
    throttle: ThrottleState,
}

impl ForceModel {
    pub fn new(initial_throttle: f64) -> Self {
        Self {
            throttle: ThrottleState::new(initial_throttle),
        }
    }

    pub fn throttle(&self) -> f64 {
        self.throttle.value()
    }

    /// Advances the throttle and evaluates every force term for this tick.
    pub fn compute(
        &mut self,
        config: &FlightModelConfig,
        kinematics: &BodyFrameKinematics,
        density: f64,
        throttle_axis: f64,
        dt: f64,
    ) -> BodyForces {
        let throttle = self.throttle.advance(throttle_axis, config.throttle_rate, dt);
        let velocity = &kinematics.linear_velocity;

        let mut forces = BodyForces {
            thrust: thrust_force(throttle, config.max_thrust),
            parasitic_drag: parasitic_drag(velocity, &config.drag),
            ..BodyForces::default()
        };

        if velocity.norm_squared() < MIN_LIFT_SPEED_SQ {
            return forces;
        }

        let surface = |surface: AeroSurface, area: f64| {
            surface_forces(
                surface,
                velocity,
                surface.angle_of_attack(kinematics),
                density,
                area,
                &config.lift_curve,
                &config.induced_drag.model,
            )
        };

        forces.wing = surface(AeroSurface::MainWing, config.wing_area);
        forces.stabilizer = surface(AeroSurface::Stabilizer, config.stabilizer_area());
        forces
    }
}

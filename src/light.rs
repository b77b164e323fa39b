use crate::algebra::Vec3;

/// Single directional light. `direction` is the unit vector the light
/// travels along, so a surface is lit when its normal faces against it.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color    : Vec3,
    pub intensity: f32,
}

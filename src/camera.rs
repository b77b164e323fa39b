use crate::algebra::Vec3;
use crate::ray::Ray;

/// Pinhole camera casting rays through a physical image plane.
///
/// Ray requests are expressed in plane coordinates rather than pixels:
/// (0, 0) is the middle of the plane, (-0.5, -0.5) the bottom-left corner
/// and (0.5, 0.5) the top-right corner. The camera therefore never learns
/// the output resolution; mapping pixels onto this square is the render
/// loop's job.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub center        : Vec3,
    pub forward       : Vec3,
    pub up            : Vec3,
    pub plane_width   : f32,
    pub plane_height  : f32,
    pub focal_distance: f32,
}

/// Plane-to-pinhole distance for a horizontal field of view.
///
/// Only meaningful for `fov_deg` in (0, 180); wider angles have no
/// positive tangent and are the caller's mistake.
pub fn focal_distance_from_fov(plane_width: f32, fov_deg: f32) -> f32 {
    let fov_rad = fov_deg.to_radians();
    (plane_width / 2.0) / (fov_rad / 2.0).tan()
}

impl Camera {
    /// Panics if `forward` and `up` are parallel, since the image-plane
    /// basis degenerates. Both vectors are normalized here.
    pub fn new(
        center: Vec3,
        forward: Vec3,
        up: Vec3,
        plane_width: f32,
        plane_height: f32,
        focal_distance: f32,
    ) -> Self {
        let forward = forward.normalize();
        let up = up.normalize();
        assert!(
            forward.cross(up).norm() > 0.0,
            "camera forward and up vectors must not be parallel"
        );
        Self { center, forward, up, plane_width, plane_height, focal_distance }
    }

    /// Cast a ray through the image-plane point (`cam_x`, `cam_y`).
    ///
    /// The ray starts on the plane and aims away from the pinhole sitting
    /// `focal_distance` behind it along `-forward`; its direction comes
    /// out normalized.
    pub fn cast_ray(&self, cam_x: f32, cam_y: f32) -> Ray {
        let right = self.forward.cross(self.up);
        let offset = right
            .scale(cam_x * self.plane_width)
            .add(self.up.scale(cam_y * self.plane_height));
        let origin = self.center.add(offset);

        let vantage = self.center.sub(self.forward.scale(self.focal_distance));
        Ray::new(origin, origin.sub(vantage).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn reference_camera() -> Camera {
        Camera::new(
            Vec3(0.0, 0.0, 0.0),
            Vec3(0.0, 1.0, 0.0),
            Vec3(0.0, 0.0, 1.0),
            10.0,
            10.0,
            focal_distance_from_fov(10.0, 90.0),
        )
    }

    #[test]
    fn focal_distance_matches_fov() {
        // tan(45 deg) = 1, so a 90 degree fov puts the pinhole half a
        // plane-width behind the plane.
        assert!((focal_distance_from_fov(10.0, 90.0) - 5.0).abs() < EPS);
    }

    #[test]
    fn center_ray_follows_the_forward_axis() {
        let ray = reference_camera().cast_ray(0.0, 0.0);
        assert_eq!(ray.origin, Vec3(0.0, 0.0, 0.0));
        assert!((ray.direction.0).abs() < EPS);
        assert!((ray.direction.1 - 1.0).abs() < EPS);
        assert!((ray.direction.2).abs() < EPS);
    }

    #[test]
    fn corner_ray_starts_on_the_plane_edge() {
        // right = forward x up = (1, 0, 0); half a plane-width along it.
        let ray = reference_camera().cast_ray(0.5, 0.0);
        assert_eq!(ray.origin, Vec3(5.0, 0.0, 0.0));
        // Direction diverges from the forward axis, away from the pinhole.
        assert!(ray.direction.0 > 0.0);
        assert!(ray.direction.1 > 0.0);
        assert!((ray.direction.norm() - 1.0).abs() < EPS);
    }

    #[test]
    fn rays_are_normalized_everywhere_on_the_plane() {
        let camera = reference_camera();
        for &(x, y) in &[(-0.5, -0.5), (0.25, -0.1), (0.5, 0.5)] {
            assert!((camera.cast_ray(x, y).direction.norm() - 1.0).abs() < EPS);
        }
    }

    #[test]
    #[should_panic]
    fn parallel_forward_and_up_are_rejected() {
        Camera::new(
            Vec3(0.0, 0.0, 0.0),
            Vec3(0.0, 1.0, 0.0),
            Vec3(0.0, 2.0, 0.0),
            10.0,
            10.0,
            5.0,
        );
    }
}

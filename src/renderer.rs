use crate::{
    algebra::Vec3,
    light::DirectionalLight,
    material::Material,
    ray::Ray,
    scene::Scene,
    sphere::{Intersection, Sphere},
    tonemap,
};
use image::{Rgb, RgbImage};
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Map a raster coordinate onto the camera's normalized plane square.
///
/// Raster row 0 lands on cam_y = -0.5. With the reference camera's up
/// vector that is the bottom edge of the image plane, so the raster's top
/// row shows the bottom of the view; camera orientation and this mapping
/// must change together.
pub fn pixel_to_plane_coords(x: u32, y: u32, width: u32, height: u32) -> (f32, f32) {
    (
        x as f32 / width as f32 - 0.5,
        y as f32 / height as f32 - 0.5,
    )
}

/// Nearest hit over the whole scene. Strictly-smaller distance wins, so
/// an exact tie keeps the earliest sphere in scene order.
pub fn closest_hit(ray: &Ray, spheres: &[Sphere]) -> Option<Intersection> {
    let mut best: Option<Intersection> = None;
    for sphere in spheres {
        if let Some(hit) = sphere.hit(ray) {
            if best.as_ref().map_or(true, |b| hit.t < b.t) {
                best = Some(hit);
            }
        }
    }
    best
}

/// Ambient + Lambert diffuse + Phong specular, in unbounded light space.
///
/// `view_dir` points from the camera toward the surface; it, `normal` and
/// the light direction must be unit length. Channels can exceed 1.0 and
/// are only clipped at display conversion.
pub fn shade(
    normal: Vec3,
    view_dir: Vec3,
    light: &DirectionalLight,
    ambient: f32,
    material: &Material,
) -> Vec3 {
    let ambient_term = material.color.scale(ambient);

    // Cosine law: light arrives against its travel direction.
    let incoming = light.color.scale(light.intensity);
    let cosine = (-normal.dot(light.direction)).max(0.0);
    let diffuse = incoming
        .mul(material.color)
        .scale(cosine * material.diffuse);

    // How directly the bounced light points back at the camera.
    let reflected = light.direction.reflect(normal);
    let alignment = (-reflected.dot(view_dir)).max(0.0);
    let specular = if alignment > 0.0 {
        light
            .color
            .scale(alignment.powf(material.shininess) * material.specular)
    } else {
        Vec3(0.0, 0.0, 0.0)
    };

    ambient_term.add(diffuse).add(specular)
}

/// Render the scene into a fresh pixel buffer.
///
/// The buffer starts out filled with the background color; rows are then
/// rendered in parallel and stitched back in raster order, each pixel
/// written at most once. No-hit pixels skip shading and keep the
/// pre-cleared background, and the output is bit-identical across runs
/// and worker counts.
pub fn render(scene: &Scene, progress: Option<&ProgressBar>) -> RgbImage {
    let (width, height) = (scene.width, scene.height);

    let rows: Vec<Vec<Option<[u8; 3]>>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);
            for x in 0..width {
                let (cam_x, cam_y) = pixel_to_plane_coords(x, y, width, height);
                let ray = scene.camera.cast_ray(cam_x, cam_y);

                let pixel = closest_hit(&ray, &scene.spheres).map(|hit| {
                    let color = shade(
                        hit.normal,
                        ray.direction,
                        &scene.light,
                        scene.ambient,
                        &scene.material,
                    );
                    tonemap::to_rgb8(color)
                });
                row.push(pixel);
            }
            if let Some(bar) = progress {
                bar.inc(1);
            }
            row
        })
        .collect();

    let mut img = RgbImage::from_pixel(width, height, Rgb(tonemap::to_rgb8(scene.background)));
    for (y, row) in rows.into_iter().enumerate() {
        for (x, pixel) in row.into_iter().enumerate() {
            if let Some(rgb) = pixel {
                img.put_pixel(x as u32, y as u32, Rgb(rgb));
            }
        }
    }
    img
}

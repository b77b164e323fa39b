use crate::{
    algebra::{option_vec3_from_array, vec3_from_array, Vec3},
    camera::{focal_distance_from_fov, Camera},
    light::DirectionalLight,
    material::Material,
    sphere::Sphere,
};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Deserialize)]
struct CameraDesc {
    #[serde(deserialize_with = "vec3_from_array")]
    pos: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    forward: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    up: Vec3,
    plane_width: f32,
    fov: f32,
}

#[derive(Deserialize)]
struct RenderDesc {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct SphereDesc {
    #[serde(deserialize_with = "vec3_from_array")]
    center: Vec3,
    radius: f32,
}

#[derive(Deserialize)]
struct LightDesc {
    #[serde(deserialize_with = "vec3_from_array")]
    direction: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    color: Vec3,
    intensity: f32,
}

#[derive(Deserialize)]
struct MaterialDesc {
    rgb: [f32; 3],
    diffuse: f32,
    specular: f32,
    shininess: f32,
}

#[derive(Deserialize)]
struct SceneFile {
    camera: CameraDesc,
    render: RenderDesc,
    spheres: Vec<SphereDesc>,
    light: LightDesc,
    ambient: f32,
    material: MaterialDesc,
    #[serde(default, deserialize_with = "option_vec3_from_array")]
    background: Option<Vec3>,
}

#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "cannot read scene file: {e}"),
            SceneError::Parse(e) => write!(f, "malformed scene document: {e}"),
            SceneError::Invalid(msg) => write!(f, "invalid scene: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::Parse(e)
    }
}

/// Everything one render needs, read-only once built.
pub struct Scene {
    pub width     : u32,
    pub height    : u32,
    pub camera    : Camera,
    pub spheres   : Vec<Sphere>,
    pub light     : DirectionalLight,
    pub ambient   : f32,
    pub material  : Material,
    pub background: Vec3,
}

impl Scene {
    /// Built-in single-sphere scene rendered when no scene file is given.
    pub fn reference() -> Scene {
        let (width, height) = (1920, 1080);
        let plane_width = 10.0;
        let plane_height = plane_width * height as f32 / width as f32;

        Scene {
            width,
            height,
            camera: Camera::new(
                Vec3(0.0, 0.0, 0.0),
                Vec3(0.0, 1.0, 0.0),
                Vec3(0.0, 0.0, 1.0),
                plane_width,
                plane_height,
                focal_distance_from_fov(plane_width, 80.0),
            ),
            spheres: vec![Sphere::new(Vec3(0.0, 10.0, 0.0), 4.0)],
            light: DirectionalLight {
                direction: Vec3(-1.0, 1.0, 1.0).normalize(),
                color: Vec3(1.0, 1.0, 0.0),
                intensity: 5.0,
            },
            ambient: 0.1,
            material: Material {
                color: Vec3(0.75, 0.125, 0.125),
                diffuse: 0.2,
                specular: 0.2,
                shininess: 10.0,
            },
            background: Vec3(0.0, 0.0, 0.0),
        }
    }

    /// Load and validate a JSON scene document.
    pub fn load(path: &Path) -> Result<Scene, SceneError> {
        let data = std::fs::read_to_string(path)?;
        Scene::from_json(&data)
    }

    fn from_json(data: &str) -> Result<Scene, SceneError> {
        let file: SceneFile = serde_json::from_str(data)?;
        Scene::build(file)
    }

    /// Map raw description structs into validated runtime values. All unit
    /// vectors are normalized here, so the render pipeline can rely on
    /// them downstream.
    fn build(file: SceneFile) -> Result<Scene, SceneError> {
        let render = file.render;
        if render.width == 0 || render.height == 0 {
            return Err(SceneError::Invalid(format!(
                "output resolution must be non-zero, got {}x{}",
                render.width, render.height
            )));
        }

        let cam = file.camera;
        if cam.plane_width <= 0.0 {
            return Err(SceneError::Invalid(format!(
                "camera plane width must be positive, got {}",
                cam.plane_width
            )));
        }
        if cam.fov <= 0.0 || cam.fov >= 180.0 {
            return Err(SceneError::Invalid(format!(
                "camera fov must lie in (0, 180) degrees, got {}",
                cam.fov
            )));
        }
        if cam.forward.norm() == 0.0 || cam.up.norm() == 0.0 {
            return Err(SceneError::Invalid(
                "camera forward and up vectors must be non-zero".into(),
            ));
        }
        if cam.forward.normalize().cross(cam.up.normalize()).norm() == 0.0 {
            return Err(SceneError::Invalid(
                "camera forward and up vectors must not be parallel".into(),
            ));
        }

        // Plane height follows the output aspect ratio so pixels stay
        // square.
        let plane_height = cam.plane_width * render.height as f32 / render.width as f32;
        let camera = Camera::new(
            cam.pos,
            cam.forward,
            cam.up,
            cam.plane_width,
            plane_height,
            focal_distance_from_fov(cam.plane_width, cam.fov),
        );

        let mut spheres = Vec::with_capacity(file.spheres.len());
        for (i, s) in file.spheres.iter().enumerate() {
            if s.radius <= 0.0 {
                return Err(SceneError::Invalid(format!(
                    "sphere #{i} radius must be positive, got {}",
                    s.radius
                )));
            }
            spheres.push(Sphere::new(s.center, s.radius));
        }

        if file.light.direction.norm() == 0.0 {
            return Err(SceneError::Invalid(
                "light direction must be non-zero".into(),
            ));
        }
        let light = DirectionalLight {
            direction: file.light.direction.normalize(),
            color: file.light.color,
            intensity: file.light.intensity,
        };

        let m = file.material;
        let material = Material {
            color: Vec3(m.rgb[0], m.rgb[1], m.rgb[2]),
            diffuse: m.diffuse,
            specular: m.specular,
            shininess: m.shininess,
        };

        Ok(Scene {
            width: render.width,
            height: render.height,
            camera,
            spheres,
            light,
            ambient: file.ambient,
            material,
            background: file.background.unwrap_or(Vec3(0.0, 0.0, 0.0)),
        })
    }
}

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3(pub f32, pub f32, pub f32);

impl Vec3 {
    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    /// Channel-wise product, used for wavelength-dependent reflectance.
    pub fn mul(self, v: Self) -> Self { Self(self.0*v.0, self.1*v.1, self.2*v.2) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn cross(self, v: Self) -> Self {
        Self(self.1*v.2-self.2*v.1, self.2*v.0-self.0*v.2, self.0*v.1-self.1*v.0)
    }
    pub fn norm(self) -> f32 { self.dot(self).sqrt() }

    /// Scale to unit length. The input must not be the zero vector.
    pub fn normalize(self) -> Self {
        let len = self.norm();
        debug_assert!(len > 0.0, "normalize called on a zero-length vector");
        self.scale(1.0 / len)
    }

    /// Mirror `self` about the unit normal `n`.
    pub fn reflect(self, n: Self) -> Self {
        self.sub(n.scale(2.0 * self.dot(n)))
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

/* Custom helpers so Serde turns a JSON array into Vec3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

pub fn option_vec3_from_array<'de, D>(d: D) -> Result<Option<Vec3>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <Option<[f32; 3]>>::deserialize(d)?;
    Ok(arr.map(Into::into))
}

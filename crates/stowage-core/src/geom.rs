#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point3 = euclid::Point3D<f64, Unit>;
pub type Vector3 = euclid::Vector3D<f64, Unit>;

pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    euclid::point3(x, y, z)
}

pub fn vector3(x: f64, y: f64, z: f64) -> Vector3 {
    euclid::vec3(x, y, z)
}

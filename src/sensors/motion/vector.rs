use std::fmt;
use std::ops::Index;

use nalgebra::Vector3;
use serde::Serialize;

/// Vecteur 3 axes (échantillon du capteur ou résultat intermédiaire)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Accès par index (0 => X, 1 => Y, 2 => Z)
    pub fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy + Into<f64>> Vector<T> {
    /// Conversion vers nalgebra pour les calculs de rotation
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x.into(), self.y.into(), self.z.into())
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3<f64>> for Vector<f64> {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index {} hors limites pour un vecteur 3 axes", index),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

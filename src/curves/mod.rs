//! Spline helpers used to smooth discrete point sequences.

mod catmull_rom;

pub use catmull_rom::CatmullRom2;

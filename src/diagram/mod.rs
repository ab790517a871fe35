pub mod area;
pub mod bar;
pub mod params;

pub mod ease;
pub mod track;
pub mod tween;

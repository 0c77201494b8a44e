use thiserror::Error;

/// Rejection of a detector hand that does not satisfy the 21-point contract.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObservationError {
    #[error("hand has {found} landmarks, expected 21")]
    WrongLandmarkCount { found: usize },
    #[error("landmark {index} is not a finite coordinate")]
    NonFinite { index: usize },
}

/// Invalid session configuration, reported once by `Session::start`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("surface size {width}x{height} is empty or not finite")]
    EmptySurface { width: f32, height: f32 },
    #[error("basket does not fit inside the surface")]
    BasketOutsideSurface,
    #[error("ball spawn point ({x}, {y}) lies outside the surface")]
    SpawnOutsideSurface { x: f32, y: f32 },
    #[error("ball parameter `{name}` out of range: {value}")]
    BallParam { name: &'static str, value: f32 },
}

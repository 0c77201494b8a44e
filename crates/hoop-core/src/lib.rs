pub mod ball;
pub mod basket;
pub mod channel;
pub mod confetti;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod fingertips;
pub mod gesture;
pub mod hand;
pub mod music;
pub mod physics;
pub mod session;
pub mod smoothing;
pub mod timestep;

pub use ball::*;
pub use basket::*;
pub use channel::*;
pub use confetti::*;
pub use config::*;
pub use constants::*;
pub use draw::{Asset, Color, DrawCommand, Paint, TextAlign};
pub use error::*;
pub use fingertips::*;
pub use gesture::*;
pub use hand::*;
pub use music::*;
pub use physics::*;
pub use session::*;
pub use smoothing::*;
pub use timestep::*;

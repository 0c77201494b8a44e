// Shared gameplay/audio tuning constants used by both web and native frontends.
// Physics quantities are expressed in surface pixels per fixed tick.

// Surface
pub const SURFACE_WIDTH: f32 = 1280.0;
pub const SURFACE_HEIGHT: f32 = 720.0;

// Gesture extraction
pub const EXTENSION_MARGIN: f32 = 0.05; // normalized y margin absorbing tracking noise
pub const FINGERS_PER_HAND: usize = 5;
pub const MAX_HANDS: usize = 2;
pub const CHANNEL_COUNT: usize = FINGERS_PER_HAND * MAX_HANDS;

// Parameter smoothing (seconds)
pub const GAIN_TAU_SEC: f32 = 0.05;
pub const FREQUENCY_TAU_SEC: f32 = 0.1;
pub const ACTIVE_GAIN: f32 = 0.1;
pub const PITCH_DEPTH_FACTOR: f32 = 2.0; // frequency = base * (1 + factor * depth)

// C major, C4..E5: right hand thumb->pinky, then left hand thumb->pinky
pub const CHANNEL_MIDI_NOTES: [i32; CHANNEL_COUNT] = [60, 62, 64, 65, 67, 69, 71, 72, 74, 76];

// Ball
pub const BALL_RADIUS: f32 = 30.0;
pub const BALL_GRAVITY: f32 = 0.5;
pub const BALL_AIR_FRICTION: f32 = 0.99;
pub const BALL_BOUNCE_EFFICIENCY: f32 = 0.7;
pub const BALL_MAX_SPEED: f32 = 25.0;

// Rim strike response
pub const RIM_BOUNCE_FACTOR: f32 = 0.7;
pub const RIM_DEFLECT_SPEED: f32 = 2.0;

// Basket geometry (rim top-left anchored)
pub const BASKET_X: f32 = 1000.0;
pub const BASKET_Y: f32 = 250.0;
pub const RIM_WIDTH: f32 = 110.0;
pub const RIM_THICKNESS: f32 = 6.0;
pub const NET_HEIGHT: f32 = 70.0;
pub const NET_MESH: f32 = 11.0;
pub const BACKBOARD_WIDTH: f32 = 12.0;
pub const BACKBOARD_HEIGHT: f32 = 120.0;

// Scoring
pub const SCORE_COOLDOWN_SEC: f64 = 1.5;
pub const SCORE_FLASH_SEC: f64 = 1.0;

// Fingertip interaction
pub const FINGERTIP_REACH: f32 = 10.0; // added to the ball radius
pub const FINGERTIP_MIN_DISPLACEMENT: f32 = 3.0;
pub const FINGERTIP_IMPULSE_SCALE: f32 = 0.8;
pub const FINGERTIP_JITTER: f32 = 1.0;

// Confetti
pub const CONFETTI_BURST: usize = 100;
pub const CONFETTI_GRAVITY: f32 = 0.1;
pub const CONFETTI_SIZE: (f32, f32) = (5.0, 10.0);
pub const CONFETTI_VX: (f32, f32) = (-4.0, 4.0);
pub const CONFETTI_VY: (f32, f32) = (-15.0, -5.0);
pub const CONFETTI_SPIN_DEG: (f32, f32) = (-5.0, 5.0);

// Fixed timestep
pub const PHYSICS_HZ: f64 = 60.0;
pub const MAX_SUBSTEPS: u32 = 5;

// Feedback sounds
pub const BOUNCE_SOUND_MIN_SPEED: f32 = 2.0;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const MAX_FIELD_WIDTH: f32 = 1000.0;
    pub const ASPECT_RATIO: f32 = 1.5; // width / height

    // Geometry, as divisors of the field size
    pub const BALL_SIZE_DIVISOR: f32 = 60.0; // of width
    pub const PADDLE_WIDTH_DIVISOR: f32 = 30.0; // of width
    pub const PADDLE_HEIGHT_DIVISOR: f32 = 2.85; // of height
    pub const PADDLE_INSET_DIVISOR: f32 = 15.0; // of width, edge to paddle center

    // Pursuit paddle
    pub const HARDNESS: f32 = 1.0;
    pub const PURSUIT_SPEED_DIVISOR: f32 = 600.0; // of width, before hardness scaling
    pub const PURSUIT_SPEED_SCALE: f32 = 100.0;

    // Ball
    pub const SERVE_SPEED_DIVISOR: f32 = 2.4; // width / serve speed
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const HIT_DEFLECTION_RANGE: f32 = 300.0; // Random vy offset spans +/- half of this

    // Physics
    pub const MAX_DT: f32 = 1.0; // Clamp to prevent large jumps
}

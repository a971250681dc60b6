use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::AxisAlignedBox;
use crate::Phase;

/// One paddle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub bounds: AxisAlignedBox,
    pub score: u32,
}

/// Read-only drawable state, taken once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u32,
    pub phase: Phase,
    pub field: Vec2,
    pub ball: AxisAlignedBox,
    pub ball_vel: Vec2,
    pub paddles: [PaddleView; 2], // 0 = left, 1 = right
}

use crate::{Ball, Events, Paddle, Side};

/// Check if ball left the field and credit the side that scored.
/// Returns the scoring side; resetting the round is up to the caller.
pub fn check_scoring(
    ball: &Ball,
    paddles: &mut [Paddle; 2],
    field_width: f32,
    events: &mut Events,
) -> Option<Side> {
    let scorer = if ball.is_beyond_side(field_width, Side::Left) {
        Side::Right
    } else if ball.is_beyond_side(field_width, Side::Right) {
        Side::Left
    } else {
        return None;
    };

    paddles[scorer.index()].register_goal_against();
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    Some(scorer)
}

//! Movement leaves: seek, flee, face and the evasive strafe.
//!
//! Each leaf writes a complete [`SteeringOutput`] to
//! [`STEERING_OUTPUT`](keys::STEERING_OUTPUT); the last one written in a tick
//! is what the host receives.

use behavior_tree::Status;
use survivor_core::{AgentInfo, SteeringOutput, StrafeInfo, Vec2, angle_delta, bearing};
use tracing::debug;

use crate::context::AgentContext;
use crate::error::Result;
use crate::host::SurvivalHost;
use crate::keys;

/// Moves towards [`TARGET`](keys::TARGET) at full speed.
pub fn seek<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let target = ctx.get(keys::TARGET)?;
    let output = seek_output(ctx, target)?;
    ctx.set(keys::STEERING_OUTPUT, output)?;
    Ok(Status::Success)
}

/// Moves directly away from [`TARGET`](keys::TARGET).
pub fn flee<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let target = ctx.get(keys::TARGET)?;
    let mut output = seek_output(ctx, target)?;
    output.linear_velocity = -output.linear_velocity;
    ctx.set(keys::STEERING_OUTPUT, output)?;
    Ok(Status::Success)
}

/// Turns in place towards [`TARGET`](keys::TARGET).
pub fn face<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let target = ctx.get(keys::TARGET)?;
    let agent = ctx.agent()?;
    let output = face_output(&agent, target, ctx.config.face_gain);
    ctx.set(keys::STEERING_OUTPUT, output)?;
    Ok(Status::Success)
}

/// Keeps moving along the old heading while turning 180°.
///
/// The first call records the maneuver; later calls continue it until the
/// orientation matches the reversed heading, which ends the strafe.
pub fn strafe_and_turn<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let agent = ctx.agent()?;
    let mut strafe = ctx.get(keys::STRAFE_INFO)?;

    if !strafe.active {
        strafe = StrafeInfo::begin(&agent);
        ctx.set(keys::STRAFE_INFO, strafe)?;
        debug!(
            from = strafe.start_orientation,
            to = strafe.end_orientation,
            "strafe started"
        );
    } else if strafe.is_complete(agent.orientation, ctx.config.strafe_end_tolerance) {
        strafe.active = false;
        ctx.set(keys::STRAFE_INFO, strafe)?;
        debug!("strafe completed");
        return Ok(Status::Success);
    }

    let moving = seek_output(ctx, strafe.seek_point(agent.position))?;
    let turning = face_output(
        &agent,
        strafe.face_point(agent.position),
        ctx.config.face_gain,
    );
    ctx.set(
        keys::STEERING_OUTPUT,
        SteeringOutput {
            linear_velocity: moving.linear_velocity,
            ..turning
        },
    )?;
    Ok(Status::Success)
}

/// Full-speed velocity towards the walkable point nearest to `target`.
///
/// Within the stop margin the velocity is zero so the agent does not orbit
/// its target.
fn seek_output<H: SurvivalHost>(ctx: &AgentContext<H>, target: Vec2) -> Result<SteeringOutput> {
    let agent = ctx.agent()?;
    let running = ctx.get(keys::IS_RUNNING)?;
    let target = ctx.host.closest_path_point(target);

    let linear_velocity =
        if target.distance_squared(agent.position) < ctx.config.seek_stop_margin_sq {
            Vec2::ZERO
        } else {
            (target - agent.position).normalized() * agent.max_linear_speed
        };

    Ok(SteeringOutput {
        linear_velocity,
        angular_velocity: 0.0,
        run_mode: running,
        auto_orient: true,
    })
}

fn face_output(agent: &AgentInfo, target: Vec2, gain: f32) -> SteeringOutput {
    let delta = angle_delta(bearing(agent.position, target), agent.orientation);
    SteeringOutput {
        linear_velocity: Vec2::ZERO,
        angular_velocity: delta * gain,
        run_mode: false,
        auto_orient: false,
    }
}

//! Random-policy rollout with text rendering.
//!
//! Demonstrates: build config → CrossyEnv → sample actions → step →
//! render frames → reset on termination.
//!
//! Run with `RUST_LOG` unset to see only frames, or set
//! `RUST_LOG=debug` to also see reset and termination events.

use std::io;

use crossy_bench::{standard_profile, RandomPolicy};
use crossy_engine::{CrossyEnv, Renderer, TextRenderer};

const STEPS: usize = 250;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = standard_profile(0);
    let mut policy = RandomPolicy::new(config.action_space(), 0);
    let spec = config.encode_spec();
    let mut env = CrossyEnv::new(config)?;
    let mut renderer = TextRenderer::new(io::stdout(), spec);

    let mut episodes = 0;
    let mut total = 0.0f32;
    env.render(&mut renderer)?;
    for _ in 0..STEPS {
        let t = env.step(policy.act())?;
        total += t.reward;
        env.render(&mut renderer)?;
        if t.terminated {
            episodes += 1;
            tracing::info!(
                episode = env.stats().episode.0,
                score = env.stats().score,
                end = ?t.end,
                "episode finished"
            );
            env.reset(None);
        }
    }
    renderer.close()?;

    println!("{STEPS} steps, {episodes} episodes finished, total reward {total:.1}");
    Ok(())
}

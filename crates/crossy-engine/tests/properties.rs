//! Property tests over random seeds and action sequences.

use std::collections::BTreeMap;

use crossy_core::{Action, WorldView, LOG_LENGTH};
use crossy_engine::{CrossyEnv, EnvConfig};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = EnvConfig> {
    prop_oneof![Just(EnvConfig::standard()), Just(EnvConfig::compact())]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Up),
        1 => Just(Action::Down),
        2 => Just(Action::Left),
        2 => Just(Action::Right),
        1 => Just(Action::Stay),
    ]
}

fn vehicles_per_row(env: &CrossyEnv) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for v in env.world().vehicles() {
        *counts.entry(v.pos.y).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn rows_disjoint_and_outside_reserved_band(config in arb_config(), seed in any::<u64>()) {
        let band = config.band().unwrap();
        let env = CrossyEnv::new(config.with_seed(seed)).unwrap();
        let world = env.world();
        prop_assert!(world.water_rows().is_disjoint(world.vehicle_rows()));
        for &y in world.water_rows().iter().chain(world.vehicle_rows()) {
            prop_assert!(band.contains(y), "row {} inside the reserved band", y);
        }
    }

    #[test]
    fn episode_invariants_hold_every_step(
        config in arb_config(),
        seed in any::<u64>(),
        actions in proptest::collection::vec(arb_action(), 1..120),
    ) {
        let mut env = CrossyEnv::new(config.with_seed(seed)).unwrap();
        let (w, h) = (env.world().width(), env.world().height());
        let rows = vehicles_per_row(&env);
        let log_count = env.world().logs().len();
        let space = env.observation_space();

        for action in actions {
            if !env.action_space().contains(action) {
                continue;
            }
            let was_terminal = env.is_terminal();
            let before = env.world().agent();
            let t = env.step_action(action).unwrap();
            let world = env.world();

            let agent = world.agent();
            prop_assert!((0..w).contains(&agent.x) && (0..h).contains(&agent.y));
            prop_assert!(!t.truncated);
            prop_assert!(space.contains(&t.observation));

            for log in world.logs() {
                prop_assert_eq!(log.columns().len(), LOG_LENGTH as usize);
                prop_assert!(world.water_rows().contains(&log.pos.y));
            }
            prop_assert_eq!(world.logs().len(), log_count);
            prop_assert_eq!(&vehicles_per_row(&env), &rows);

            if was_terminal {
                prop_assert!(t.terminated);
                prop_assert_eq!(t.reward, 0.0);
                prop_assert_eq!(env.world().agent(), before);
            }
        }
    }

    #[test]
    fn rocks_never_on_obstacle_rows(seed in any::<u64>()) {
        let config = EnvConfig::standard().with_seed(seed);
        let clear_from = (config.height - config.rock_clearance) as i32;
        let env = CrossyEnv::new(config).unwrap();
        let world = env.world();
        prop_assert!(env.stats().rocks_placed <= env.stats().rocks_requested);
        for rock in world.rocks() {
            prop_assert!(!world.water_rows().contains(&rock.y));
            prop_assert!(!world.vehicle_rows().contains(&rock.y));
            prop_assert!(rock.y < clear_from);
        }
    }
}

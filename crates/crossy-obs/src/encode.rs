//! Projects a world view into an observation grid.

use crate::observation::Observation;
use crate::spec::EncodeSpec;
use crossy_core::{CellKind, WorldView};

/// Encode `world` into a freshly allocated observation.
pub fn encode(world: &dyn WorldView, spec: &EncodeSpec) -> Observation {
    let mut out = Observation::new(0, 0);
    encode_into(world, spec, &mut out);
    out
}

/// Encode `world` into `out`, reusing its allocation.
///
/// `out` is cleared and resized to the world's dimensions first. Layers are
/// painted in the order documented at the crate root; rocks go last, so a
/// rock would hide the agent if the two ever shared a cell (movement never
/// allows that).
pub fn encode_into(world: &dyn WorldView, spec: &EncodeSpec, out: &mut Observation) {
    let width = world.width();
    let height = world.height();
    out.clear(width.max(0) as usize, height.max(0) as usize);

    if spec.paint_roads {
        for &y in world.vehicle_rows() {
            for x in 0..width {
                out.set(x, y, CellKind::Road);
            }
        }
    }

    let agent = world.agent();
    out.set(agent.x, agent.y, CellKind::Agent);

    for vehicle in world.vehicles() {
        out.set(vehicle.pos.x, vehicle.pos.y, CellKind::Vehicle);
    }

    for log in world.logs() {
        for x in log.columns() {
            out.set(x, log.pos.y, CellKind::Log);
        }
    }

    for &y in world.water_rows() {
        for x in 0..width {
            if out.get(x, y) == Some(CellKind::Empty) {
                out.set(x, y, CellKind::Water);
            }
        }
    }

    if spec.paint_rocks {
        for rock in world.rocks() {
            out.set(rock.x, rock.y, CellKind::Obstacle);
        }
    }
}

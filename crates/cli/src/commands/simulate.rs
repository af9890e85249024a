//! Fire one trigger against an in-memory world and report what changed

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use shrine_content::{ContentFactory, builtin_archetypes};
use shrine_core::{
    ActionRng, ActorId, BlockPos, BlockState, InMemoryWorld, ItemStack, ResourceId, Trigger,
};
use shrine_runtime::{FireOutcome, ShrineRuntime, TriggerEvent};

use crate::config::CliConfig;

/// Half-width of the cube compared before and after firing.
const REPORT_RADIUS: i32 = 3;

/// Fire a trigger at a shrine in a scratch world
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Trigger to fire (on_break, on_insert, on_tick)
    #[arg(long, default_value = "on_break")]
    pub trigger: Trigger,

    /// Item held by the shrine, e.g. kamigami:charm_of_swamp_deity
    #[arg(long)]
    pub item: Option<ResourceId>,

    /// Shrine position as x,y,z
    #[arg(long, default_value = "0,64,0", value_parser = parse_pos)]
    pub at: BlockPos,

    /// Place a block before firing, relative to the shrine: x,y,z=block
    #[arg(long = "place", value_parser = parse_placement)]
    pub placements: Vec<Placement>,

    /// Fire as if the shrine was broken with silk touch
    #[arg(long)]
    pub protected: bool,

    /// Actor id reported with the trigger
    #[arg(long)]
    pub actor: Option<u32>,

    /// World seed (overrides SHRINE_WORLD_SEED)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub offset: BlockPos,
    pub state: BlockState,
}

impl Simulate {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.data_dir);
        let runtime = ShrineRuntime::load(&factory)?;
        let seed = self.seed.unwrap_or(config.world_seed);

        let mut world = InMemoryWorld::new(seed)
            .with_archetypes(builtin_archetypes())
            .with_block_tags(factory.load_block_tags()?);
        for placement in &self.placements {
            world.put_block(self.at + placement.offset, placement.state.clone());
        }
        let before = snapshot(&world, self.at);

        let mut event = TriggerEvent::new(self.trigger, self.at);
        if let Some(item) = self.item {
            event = event.with_item(ItemStack::single(item));
        }
        if let Some(actor) = self.actor {
            event = event.by(ActorId(actor));
        }
        if self.protected {
            event = event.protected();
        }

        let mut rng = ActionRng::for_position(seed, self.at);
        let result = runtime.fire(&event, &mut world, &mut rng);

        match &result {
            FireOutcome::NoRecipe => println!("no recipe matched"),
            FireOutcome::Suppressed { recipe } => println!("{recipe}: suppressed by protection"),
            FireOutcome::Executed { recipe, outcome } => {
                println!("{recipe}: applied={}", outcome.applied);
                for fault in &outcome.faults {
                    println!("  fault  {} at {}: {}", fault.action, fault.origin, fault.error);
                }
            }
        }
        println!("item consumed: {}", result.consumes_item());

        let after = snapshot(&world, self.at);
        for (pos, state) in &after {
            if before.get(pos) != Some(state) {
                println!("  block  {pos}: {state}");
            }
        }
        for entity in world.entities() {
            match entity.size() {
                Some(size) => println!("  entity {} at {} size {size}", entity.id(), entity.position),
                None => println!("  entity {} at {}", entity.id(), entity.position),
            }
        }
        for sound in world.sounds() {
            println!("  sound  {} at {}", sound.sound, sound.at);
        }
        for particle in world.particles() {
            println!("  particle {} x{} at {}", particle.particle, particle.count, particle.at);
        }
        for drop in world.drops() {
            println!("  drop   {} at {}", drop.stack, drop.at);
        }
        Ok(())
    }
}

fn snapshot(world: &InMemoryWorld, center: BlockPos) -> BTreeMap<BlockPos, BlockState> {
    let r = REPORT_RADIUS;
    let mut blocks = BTreeMap::new();
    for z in -r..=r {
        for y in -r..=r {
            for x in -r..=r {
                let pos = center + BlockPos::new(x, y, z);
                blocks.insert(pos, world.block(pos));
            }
        }
    }
    blocks
}

fn parse_pos(raw: &str) -> Result<BlockPos, String> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in {raw:?}: {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(BlockPos::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got {raw:?}")),
    }
}

fn parse_placement(raw: &str) -> Result<Placement, String> {
    let (pos, state) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected x,y,z=block, got {raw:?}"))?;
    Ok(Placement {
        offset: parse_pos(pos)?,
        state: BlockState::parse(state.trim()).map_err(|e| e.to_string())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions() {
        assert_eq!(parse_pos("1, -2,3"), Ok(BlockPos::new(1, -2, 3)));
        assert!(parse_pos("1,2").is_err());
        assert!(parse_pos("a,b,c").is_err());
    }

    #[test]
    fn parses_placements() {
        let placement = parse_placement("1,-1,0=minecraft:oak_log").unwrap();
        assert_eq!(placement.offset, BlockPos::new(1, -1, 0));
        assert_eq!(placement.state, BlockState::of(ResourceId::vanilla("oak_log")));
        assert!(parse_placement("1,-1,0").is_err());
    }
}

// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A headless demo of the entity movement and input-watcher stack.
//!
//! Drives a fixed tick loop with a scripted input track instead of a real
//! window: a ship entity moves under keyboard behaviors, a watcher counts
//! presses of the thrust key, and the simple physics world integrates
//! positions between ticks.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use vireo_core::input::{KeyCode, SharedKeyboard};
use vireo_core::physics::{BodyDesc, PhysicsWorld};
use vireo_core::GameTime;
use vireo_engine::behaviors::MovementByKeyboardBehavior;
use vireo_engine::entities::DynamicEntity;
use vireo_engine::watchers::KeyboardWatcher;
use vireo_infra::physics::SimplePhysicsWorld;
use vireo_infra::platform::{BufferedKeyboard, InputEvent};

const TICK_MS: u64 = 16;
const TICK_COUNT: u64 = 180;

/// The input track: (tick index, event). Holds W for a second, taps D twice.
fn scripted_events() -> Vec<(u64, InputEvent)> {
    vec![
        (5, InputEvent::KeyPressed { key: KeyCode::KeyW }),
        (65, InputEvent::KeyReleased { key: KeyCode::KeyW }),
        (70, InputEvent::KeyPressed { key: KeyCode::KeyD }),
        (80, InputEvent::KeyReleased { key: KeyCode::KeyD }),
        (90, InputEvent::KeyPressed { key: KeyCode::KeyD }),
        (100, InputEvent::KeyReleased { key: KeyCode::KeyD }),
    ]
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let keyboard = Rc::new(RefCell::new(BufferedKeyboard::new()));
    let shared: SharedKeyboard = keyboard.clone();

    let mut world = SimplePhysicsWorld::new();
    let body = world.create_body(BodyDesc::default());

    let mut ship = DynamicEntity::new(Box::new(body));
    ship.body_mut().set_max_linear_speed(Some(10.0));
    ship.initialize()?;
    ship.add_behavior(Box::new(MovementByKeyboardBehavior::new(
        shared.clone(),
        0.05,
    )));

    let mut thrust_watcher = KeyboardWatcher::new(KeyCode::KeyW, shared);
    thrust_watcher.set_hit_count_max(10);
    thrust_watcher
        .on_hit_count_reached()
        .subscribe(|count| log::info!("Thrust key pressed {count} times"));

    let mut events = scripted_events();
    events.reverse();

    let tick = GameTime::from_millis(TICK_MS);
    for frame in 0..TICK_COUNT {
        while let Some((at, event)) = events.last().copied() {
            if at != frame {
                break;
            }
            keyboard.borrow_mut().apply(&event);
            events.pop();
        }

        // The watcher samples before the movement behavior's polls roll the
        // shared keyboard snapshots and hide the press edge.
        thrust_watcher.update(tick);
        ship.update(tick);
        world.step(TICK_MS as f32 / 1000.0);

        if frame % 30 == 0 {
            log::info!(
                "frame {frame:3}: position {:?}, moving: {}, thrust hits: {}",
                ship.position(),
                ship.is_moving(),
                thrust_watcher.current_hit_count()
            );
        }
    }

    log::info!(
        "done: final position {:?}, {} watcher hits ({}%)",
        ship.position(),
        thrust_watcher.current_hit_count(),
        thrust_watcher.current_hit_count_percentage()
    );
    Ok(())
}

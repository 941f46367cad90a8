//! Frame loop tests: event draining, held movement order, lifecycle

use tui_sandbox::core::{Player, TileGrid, World};
use tui_sandbox::engine::FrameLoop;
use tui_sandbox::input::{EventQueue, EVENT_QUEUE_CAPACITY};
use tui_sandbox::types::{Direction, HeldKeys, InputEvent, LoopState, Material, PLAYER_SPEED};

const NO_EVENTS: [InputEvent; 0] = [];

fn held(dirs: &[Direction]) -> HeldKeys {
    dirs.iter().copied().collect()
}

fn loop_at(x: f32, y: f32, grid: TileGrid) -> FrameLoop {
    FrameLoop::new(World::from_parts(grid, Player::with_starter_inventory(x, y)))
}

#[test]
fn test_game_lifecycle() {
    let mut fl = FrameLoop::new(World::new(12345));
    assert!(fl.is_running());

    for _ in 0..10 {
        assert_eq!(fl.tick(NO_EVENTS, HeldKeys::default()), LoopState::Running);
    }
    assert_eq!(fl.ticks(), 10);

    assert_eq!(fl.tick([InputEvent::Quit], HeldKeys::default()), LoopState::Stopped);
    assert!(!fl.is_running());
}

#[test]
fn test_held_right_moves_each_tick() {
    let mut fl = loop_at(100.0, 100.0, TileGrid::new(25, 18));
    for _ in 0..4 {
        fl.tick(NO_EVENTS, held(&[Direction::Right]));
    }
    assert_eq!(fl.world().player.x, 100.0 + 4.0 * PLAYER_SPEED);
}

#[test]
fn test_opposing_keys_partially_succeed() {
    // Stone directly above: the up move fails, the down move still applies.
    let mut grid = TileGrid::new(25, 18);
    grid.set(4, 2, Material::Stone);
    let mut fl = loop_at(128.0, 96.0, grid);

    fl.tick(NO_EVENTS, held(&[Direction::Up, Direction::Down]));
    assert_eq!(fl.world().player.y, 96.0 + PLAYER_SPEED);
}

#[test]
fn test_moves_apply_in_fixed_order() {
    // Stone diagonally up-left of the player: whichever of up/left runs first
    // succeeds and the second one is blocked by the corner.
    let mut grid = TileGrid::new(25, 18);
    grid.set(1, 1, Material::Stone);
    let mut fl = loop_at(64.0, 64.0, grid);

    fl.tick(NO_EVENTS, held(&[Direction::Left, Direction::Up]));
    assert_eq!(
        (fl.world().player.x, fl.world().player.y),
        (64.0, 64.0 - PLAYER_SPEED)
    );
}

#[test]
fn test_events_processed_in_arrival_order() {
    let mut fl = loop_at(400.0, 300.0, TileGrid::new(25, 18));
    let mut queue = EventQueue::new();
    queue.push(InputEvent::SelectSlot(4));
    queue.push(InputEvent::PrimaryClick { x: 10.0, y: 10.0 });
    queue.push(InputEvent::SelectSlot(0));
    queue.push(InputEvent::PrimaryClick { x: 50.0, y: 10.0 });

    fl.tick(queue.drain(), HeldKeys::default());
    assert!(queue.is_empty());
    assert_eq!(fl.world().grid.get(0, 0), Material::Plant);
    assert_eq!(fl.world().grid.get(1, 0), Material::Dirt);
    assert_eq!(fl.world().player.selected_slot(), 0);
}

#[test]
fn test_quit_mid_queue_drops_later_events() {
    let mut fl = loop_at(400.0, 300.0, TileGrid::new(25, 18));
    fl.tick(
        [
            InputEvent::PrimaryClick { x: 10.0, y: 10.0 },
            InputEvent::Quit,
            InputEvent::SecondaryClick { x: 10.0, y: 10.0 },
        ],
        held(&[Direction::Left]),
    );
    assert_eq!(fl.state(), LoopState::Stopped);
    assert_eq!(fl.world().grid.get(0, 0), Material::Dirt);
    assert_eq!(fl.world().player.x, 400.0);
}

#[test]
fn test_quit_stops_loop_even_when_queue_overflowed() {
    let mut fl = loop_at(400.0, 300.0, TileGrid::new(25, 18));
    let mut queue = EventQueue::new();
    for _ in 0..EVENT_QUEUE_CAPACITY {
        queue.push(InputEvent::ToggleGrid);
    }
    queue.push(InputEvent::Quit);

    assert_eq!(fl.tick(queue.drain(), HeldKeys::default()), LoopState::Stopped);
}

//! Ledge entry point
//!
//! Headless runner: loads a scene (built-in, or a JSON record file given as
//! the first argument), drives the fixed-step loop with scripted input and
//! logs what happened.

#[cfg(not(target_arch = "wasm32"))]
const DEMO_SCENE: &str = r##"[
    {"type": "platform", "pos": {"x": 0, "y": 180}, "size": {"x": 360, "y": 20}, "color": "grey"},
    {"type": "platform", "pos": {"x": -80, "y": 120}, "size": {"x": 80, "y": 10},
     "vel": {"x": 40, "y": 0}, "travel": {"mode": "rebound", "distance": 60}, "color": "#888"},
    {"type": "tractor", "pos": {"x": 120, "y": 170}, "size": {"x": 60, "y": 4},
     "vel": {"x": -60, "y": 0}, "color": "cyan"},
    {"type": "hurtbox", "pos": {"x": -150, "y": 160}, "size": {"x": 30, "y": 20},
     "damage": {"constant": 0, "rate": 20, "tick_amount": 2}, "color": "purple"},
    {"type": "motion", "pos": {"x": 60, "y": 60}, "size": {"x": 16, "y": 16},
     "vel": {"x": 0, "y": 0}, "color": "orange"}
]"##;

#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ledge::consts::FRAME_DT;
    use ledge::sim::{SimState, TickInput, parse_records, tick};

    env_logger::init();
    log::info!("Ledge (native, headless) starting...");

    let scene = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to read scene {}: {}", path, e);
                return;
            }
        },
        None => DEMO_SCENE.to_string(),
    };

    let records = match parse_records(&scene) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to parse scene: {}", e);
            return;
        }
    };

    let mut state = SimState::default();
    state.load_records(&records);

    let mut prev_jump = false;
    let mut hits = 0usize;
    for frame in 0..DEMO_FRAMES {
        let jump = frame % 120 < 30;
        let input = TickInput::from_keys(frame % 240 < 100, frame % 240 >= 140, jump, prev_jump);
        prev_jump = jump;

        let report = tick(&mut state, &input, FRAME_DT);
        hits += report.affected.len();
        if report.cage.any() {
            log::debug!("Frame {}: cage clamp {:?}", frame, report.cage);
        }
        if !state.player.is_alive() {
            log::info!("Player died on frame {}", frame);
            break;
        }
    }

    let pos = state.player.position();
    log::info!(
        "Ran {} ticks ({:.2}s): player at ({:.1}, {:.1}), health {:.1}/{:.1}, pending {:.1}, {} effects",
        state.time_ticks,
        state.elapsed,
        pos.x,
        pos.y,
        state.player.health(),
        state.player.max_health(),
        state.player.tick_dmg(),
        hits,
    );
    log::info!("Extracted {} rects", ledge::render::extract(&state).len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page; nothing to run here
}

// What you SEE now:
// • A spiral of tiles cut from the window edges, fading in one after another.
// • R builds a new spiral (new color, new extents, maybe a new background).
// • S saves the canvas as a PNG. ESC quits.

use std::time::Instant;

use tile_spiral::color::Color;
use tile_spiral::config::DemoConfig;
use tile_spiral::draw::{draw_text_3x5, paint_tile, Drawer};
use tile_spiral::error::Error;
use tile_spiral::export::save_png;
use tile_spiral::geometry::Rect;
use tile_spiral::random::{RandomSource, RngSource};
use tile_spiral::reveal::{reveal_alpha, total_reveal_time};
use tile_spiral::spiral::{base_color_from, generate, SpiralConfig, Tile};
use tile_spiral::types::FrameBuffer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LIGHT_BACKGROUND: Color = Color::WHITE;
const DARK_BACKGROUND: Color = Color::from_rgb(0x1C, 0x1C, 0x1E);

/// Everything one spiral needs to be drawn.
struct Scene {
    tiles: Vec<Tile>,
    background: Color,
    started: Instant,
}

/// Pick a theme, a random base color, and cut the spiral for the whole canvas.
fn build_scene(canvas: Rect, config: &SpiralConfig, source: &mut impl RandomSource) -> Scene {
    let background = if source.next_bool() { LIGHT_BACKGROUND } else { DARK_BACKGROUND };
    let base = base_color_from(Color::random(&mut *source), config);
    let tiles = generate(canvas, base, config, source);
    info!(
        tiles = tiles.len(),
        budget = config.tile_count,
        base = %format!("{:#010X}", base.0),
        reveal_ms = total_reveal_time(&tiles, config.fade_duration).as_millis() as u64,
        "built spiral"
    );
    Scene { tiles, background, started: Instant::now() }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    /* --- Config + window setup ---
       Visual: window opens with an empty canvas. */
    let demo = DemoConfig::from_env()?;
    let spiral = SpiralConfig { tile_count: demo.tile_count, ..SpiralConfig::default() };
    let canvas = Rect::from_size(demo.width as i32, demo.height as i32)?;
    let mut drawer = Drawer::new("Tile Spiral", demo.width, demo.height)?;

    let mut source = match demo.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::filled(demo.width, demo.height, LIGHT_BACKGROUND);
    let mut scene = build_scene(canvas, &spiral, &mut source);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs */
        if drawer.r_pressed_once() {
            scene = build_scene(canvas, &spiral, &mut source);
        }

        /* 2) Paint every tile at its current fade level.
           Visual: earlier tiles are solid, the newest one is still fading in. */
        let elapsed = scene.started.elapsed();
        screen.clear(scene.background);
        let mut visible = 0;
        for tile in &scene.tiles {
            let alpha = reveal_alpha(tile.reveal_delay, spiral.fade_duration, elapsed);
            if alpha > 0.0 {
                paint_tile(&mut screen, tile, spiral.stroke_width, alpha);
                visible += 1;
            }
        }

        /* 3) Snapshot after painting so the file matches the window (HUD excluded). */
        if drawer.s_pressed_once() {
            match save_png(&screen, &demo.snapshot_path) {
                Ok(()) => info!(path = %demo.snapshot_path.display(), "saved snapshot"),
                Err(e) => warn!("{e}"),
            }
        }

        /* 4) HUD: tile progress and key hints. */
        let hud = format!("TILES {}/{}  R NEW  S SAVE", visible, scene.tiles.len());
        let ink = if scene.background == LIGHT_BACKGROUND { Color::BLACK } else { Color::WHITE };
        draw_text_3x5(&mut screen, 8, 8, 2, &hud, ink);

        /* 5) Present to the window. */
        drawer.present(&screen)?;
    }

    Ok(())
}

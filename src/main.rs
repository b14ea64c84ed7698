use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use blockfall::core::snapshot::GameSnapshot;
use blockfall::core::GameState;
use blockfall::input::{self, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer};
use blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term);
    // Restore the terminal before reporting anything, including errors.
    term.exit()?;
    let score = result?;
    println!("Final score: {score}");
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<u32> {
    let (width, height) = terminal::size()?;
    let mut fb = FrameBuffer::new(width, height);
    let view = GameView::new();
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();

    let mut game = GameState::new(rand::random::<u32>());
    game.start(Instant::now());

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_tick).as_millis() as u64;
        last_tick = now;

        // Drain every pending event without blocking, then let the sticky
        // repeat model decide what actually fires this tick.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if input::should_quit(&key) {
                        return Ok(game.score());
                    }
                    if let Some(action) = input::decode_key(&key) {
                        if action == GameAction::Restart {
                            input.reset();
                        }
                        if let Some(action) = input.handle_action(action, now) {
                            game.apply_action(action, now);
                        }
                    }
                }
                Event::Resize(w, h) => {
                    fb.resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        for action in input.update(now, elapsed_ms) {
            game.apply_action(action, now);
        }

        game.tick(now);

        game.snapshot_into(&mut snap);
        view.render(&snap, &mut fb);
        term.present(&mut fb)?;

        // Sleep out the rest of the tick, waking early when input arrives.
        let spent = now.elapsed();
        if spent < tick {
            let _ = event::poll(tick - spent)?;
        }
    }
}

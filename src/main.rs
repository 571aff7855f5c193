//! Flappy entry point
//!
//! In the browser: wires a canvas, the keyboard and the pointer to a session.
//! Natively: runs a headless session from the command line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy::Settings;
    use flappy::platform::{FrameClock, KeyAction, map_key, map_pointer};
    use flappy::renderer::{CanvasSurface, draw_frame};
    use flappy::sim::{GameEvent, GameState, InputEvent, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        clock: FrameClock,
        input: TickInput,
    }

    impl Game {
        /// Queue input for the next tick
        fn queue(&mut self, event: InputEvent) {
            self.input.push(event);
        }

        /// Run the ticks owed for this frame, then draw it
        fn frame(&mut self, time: f64) {
            let ticks = self.clock.advance(time);
            for _ in 0..ticks {
                for event in tick(&mut self.state, &self.input) {
                    log_event(event);
                }
                // Clear one-shot inputs after processing
                self.input.clear_events();
            }
            draw_frame(&self.state, &mut self.surface);
        }
    }

    fn log_event(event: GameEvent) {
        match event {
            GameEvent::Crashed { obstacle } => {
                log::info!("Crashed into obstacle {}", obstacle)
            }
            GameEvent::FellOff => log::info!("Fell off the screen"),
            GameEvent::Restarted => log::info!("Restarted"),
            GameEvent::Scored { score } => log::debug!("Score {}", score),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        canvas.set_width(settings.screen_width as u32);
        canvas.set_height(settings.screen_height as u32);

        let surface = CanvasSurface::new(&canvas).expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(settings, seed),
            surface,
            clock: FrameClock::default(),
            input: TickInput::default(),
        }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click - jump, or restart after game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let event = map_pointer(g.state.phase);
                g.queue(event);
            });
            let _ = canvas.add_event_listener_with_callback(
                "mousedown",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Touch start - same as a click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let event = map_pointer(g.state.phase);
                g.queue(event);
            });
            let _ = canvas.add_event_listener_with_callback(
                "touchstart",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match map_key(&event.key(), g.state.phase) {
                    Some(KeyAction::Game(input)) => {
                        // Keep Space from scrolling the page
                        event.prevent_default();
                        g.queue(input);
                    }
                    Some(KeyAction::ToggleAutopilot) => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab shown again - animation frames stopped while hidden, don't
        // count the time away
        {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("no document");
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Visible {
                    game.borrow_mut().clock.reset();
                    log::debug!("Frame clock reset (tab visible)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use flappy::Settings;
    use flappy::renderer::{CommandRecorder, draw_frame};
    use flappy::sim::{GameEvent, GameState, InputEvent, TickInput, tick};

    /// Run a Flappy session without a window
    #[derive(Parser, Debug)]
    #[command(name = "flappy", version, about)]
    pub struct Args {
        /// Seed for gap generation (defaults to the current time)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        pub ticks: u64,

        /// JSON settings file
        #[arg(long)]
        pub settings: Option<PathBuf>,

        /// Let the demo pilot jump
        #[arg(long)]
        pub autopilot: bool,

        /// Start a new run whenever one ends
        #[arg(long)]
        pub restart: bool,

        /// Print the final session state as JSON
        #[arg(long)]
        pub dump_state: bool,

        /// Write the settings used for this run to a JSON file
        #[arg(long, value_name = "PATH")]
        pub save_settings: Option<PathBuf>,
    }

    pub fn run(args: Args) {
        let settings = match &args.settings {
            Some(path) => Settings::load(path).unwrap_or_else(|e| {
                log::warn!("Using default settings: {}", e);
                Settings::default()
            }),
            None => Settings::default(),
        };
        if let Some(path) = &args.save_settings {
            if let Err(e) = settings.save(path) {
                log::error!("Could not save settings: {}", e);
            }
        }
        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let mut state = GameState::new(settings, seed);
        let mut input = TickInput {
            autopilot: args.autopilot,
            ..Default::default()
        };
        let mut surface = CommandRecorder::new();
        let mut runs = 1u32;
        let mut best = 0u32;
        let mut commands = 0usize;

        for _ in 0..args.ticks {
            let events = tick(&mut state, &input);
            input.clear_events();

            for event in events {
                match event {
                    GameEvent::Crashed { .. } | GameEvent::FellOff => {
                        best = best.max(state.score);
                        log::info!(
                            "Run {} ended at tick {}: {:?}",
                            runs,
                            state.time_ticks,
                            event
                        );
                        if args.restart {
                            input.push(InputEvent::Restart);
                        }
                    }
                    GameEvent::Restarted => runs += 1,
                    GameEvent::Scored { score } => log::debug!("Score {}", score),
                }
            }

            draw_frame(&state, &mut surface);
            commands += surface.take().len();
        }
        best = best.max(state.score);

        println!(
            "seed {}: {} ticks, {} run(s), best score {}, current score {}{}",
            seed,
            state.time_ticks,
            runs,
            best,
            state.score,
            if state.is_game_over() { " (game over)" } else { "" },
        );
        log::info!("Issued {} draw commands", commands);

        if args.dump_state {
            match serde_json::to_string_pretty(&state) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Could not serialize state: {}", e),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Flappy (headless) starting...");
    headless::run(headless::Args::parse());
}

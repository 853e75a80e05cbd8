//! Cat Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

    use cat_chase::presentation::Presenter;
    use cat_chase::sim::{Arena, FrameOutcome, GameState, Role, present, tick};
    use cat_chase::Settings;

    /// Positions sprite elements inside the game area
    struct DomPresenter {
        cat: HtmlElement,
        mouse: Option<HtmlElement>,
        game_over: Option<Element>,
    }

    impl DomPresenter {
        fn element(&self, role: Role) -> Option<&HtmlElement> {
            match role {
                Role::Pursuer => Some(&self.cat),
                Role::Target => self.mouse.as_ref(),
            }
        }
    }

    impl Presenter for DomPresenter {
        fn place(&mut self, role: Role, pos: Vec2) {
            if let Some(el) = self.element(role) {
                let style = el.style();
                let _ = style.set_property("left", &format!("{}px", pos.x));
                let _ = style.set_property("top", &format!("{}px", pos.y));
            }
        }

        fn game_over(&mut self) {
            match &self.game_over {
                Some(el) => {
                    let _ = el.set_attribute("class", "");
                }
                None => log::warn!("No #game-over element to show"),
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        presenter: DomPresenter,
        /// Pending requestAnimationFrame handle
        frame_handle: Option<i32>,
    }

    impl Game {
        /// End the loop: no new frame is requested, and any frame still
        /// pending is cancelled.
        fn stop(&mut self) {
            if let Some(handle) = self.frame_handle.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
            log::info!("Game loop stopped after {} frames", self.state.frames);
        }
    }

    fn image(document: &Document, id: &str) -> Option<HtmlImageElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn layout_size(img: &HtmlImageElement) -> Vec2 {
        Vec2::new(img.offset_width() as f32, img.offset_height() as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Cat Chase starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, cannot start");
            return;
        };
        let Some(area) = document.get_element_by_id("game-area") else {
            log::error!("Missing #game-area element");
            return;
        };
        let Some(cat) = image(&document, "cat") else {
            log::error!("Missing #cat image");
            return;
        };
        let mouse = image(&document, "mouse");

        let settings = Settings::load();
        let mode = settings.effective_mode(mouse.is_some());
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let arena = Arena::new(area.client_width() as f32, area.client_height() as f32);

        log::info!("Game initialized with seed: {} ({})", seed, mode.as_str());

        let mouse = match mouse {
            Some(img) if !mode.has_target() => {
                let _ = img.set_attribute("class", "hidden");
                None
            }
            mouse => mouse,
        };
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(mode, arena, &settings, seed),
            presenter: DomPresenter {
                cat: cat.clone().into(),
                mouse: mouse.clone().map(Into::into),
                game_over: document.get_element_by_id("game-over"),
            },
            frame_handle: None,
        }));

        watch_asset(game.clone(), Role::Pursuer, cat);
        if let Some(mouse) = mouse {
            watch_asset(game, Role::Target, mouse);
        }
    }

    /// Report the image's size now if already loaded, else once it loads
    fn watch_asset(game: Rc<RefCell<Game>>, role: Role, img: HtmlImageElement) {
        if img.complete() {
            asset_ready(game, role, layout_size(&img));
            return;
        }

        let target = img.clone();
        let closure = Closure::once(move |_event: web_sys::Event| {
            asset_ready(game, role, layout_size(&target));
        });
        img.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    fn asset_ready(game: Rc<RefCell<Game>>, role: Role, size: Vec2) {
        let started = {
            let mut g = game.borrow_mut();
            let Game { state, presenter, .. } = &mut *g;
            let started = state.asset_ready(role, size);
            if started {
                present(state, presenter);
            }
            started
        };

        if started {
            request_animation_frame(game);
            log::info!("Cat Chase running!");
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let next = game.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(next);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => game.borrow_mut().frame_handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = {
            let mut g = game.borrow_mut();
            let Game { state, presenter, .. } = &mut *g;
            tick(state, presenter)
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(game),
            FrameOutcome::Stop => game.borrow_mut().stop(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cat Chase (native) starting...");
    log::info!("Native mode runs a headless simulation - use `trunk serve` for the web version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = cat_chase::Settings::load_from(path.as_deref());
    headless::run(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use cat_chase::presentation::Presenter;
    use cat_chase::sim::{GameState, Role, present, run_frames};
    use cat_chase::Settings;

    /// Logs positions every `every` frames
    struct LogPresenter {
        every: u64,
        placed: u64,
    }

    impl Presenter for LogPresenter {
        fn place(&mut self, role: Role, pos: Vec2) {
            if role == Role::Pursuer {
                self.placed += 1;
            }
            if self.placed % self.every == 0 {
                log::debug!("frame {}: {} at ({:.1}, {:.1})", self.placed, role.as_str(), pos.x, pos.y);
            }
        }

        fn game_over(&mut self) {
            println!("Game over! The cat caught the mouse.");
        }
    }

    fn random_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    pub fn run(settings: &Settings) {
        let mode = settings.effective_mode(true);
        let seed = settings.seed.unwrap_or_else(random_seed);
        let size = Vec2::new(settings.sprite_width, settings.sprite_height);

        log::info!("Game initialized with seed: {} ({})", seed, mode.as_str());

        let mut state = GameState::new(mode, settings.headless_arena(), settings, seed);
        let mut presenter = LogPresenter { every: 120, placed: 0 };

        // Headless sprites are ready immediately
        state.asset_ready(Role::Pursuer, size);
        if mode.has_target() {
            state.asset_ready(Role::Target, size);
        }
        if !state.is_running() {
            log::error!("Sprites never became ready");
            return;
        }
        present(&state, &mut presenter);

        let frames = run_frames(&mut state, &mut presenter, settings.max_frames);
        if state.is_over() {
            log::info!("Chase ended after {} frames", frames);
        } else {
            log::info!("Stopped after {} frames (frame cap)", frames);
        }

        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Cannot serialize final state: {}", e),
        }
    }
}

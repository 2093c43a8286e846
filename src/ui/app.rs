use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::load::{LoadController, TransitionPolicy};
use crate::surface::{ContentSurface, PageSnapshot};
use crate::ui::presentation::{Presentation, Presenter};

/// Splash screen state, scoped to the screen's lifetime.
///
/// Owns the load controller. The presentation is re-derived by a controller
/// observer on every state change; drawing only reads it.
pub struct App {
    should_quit: bool,
    controller: LoadController,
    presentation: Rc<RefCell<Presentation>>,
    surface: ContentSurface,
    logo: String,
    tick: u64,
}

impl App {
    pub fn new(
        presenter: Presenter,
        policy: TransitionPolicy,
        surface: ContentSurface,
        logo: impl Into<String>,
    ) -> Self {
        let mut controller = LoadController::new(policy);
        let presentation = Rc::new(RefCell::new(presenter.present(controller.current_state())));

        let sink = Rc::clone(&presentation);
        controller.subscribe(move |state| {
            *sink.borrow_mut() = presenter.present(state);
        });

        Self {
            should_quit: false,
            controller,
            presentation,
            surface,
            logo: logo.into(),
            tick: 0,
        }
    }

    pub fn controller(&self) -> &LoadController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LoadController {
        &mut self.controller
    }

    pub fn presentation(&self) -> Ref<'_, Presentation> {
        self.presentation.borrow()
    }

    pub fn page(&self) -> PageSnapshot {
        self.surface.snapshot()
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.request_quit();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

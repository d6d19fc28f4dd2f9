use std::rc::Rc;

use yew::functional::Reducible;

use crate::reveal::Transition;

/// Flips to loaded once the startup delay has elapsed. Never flips back.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupGate {
    delay_ms: u32,
    loaded: bool,
}

impl StartupGate {
    pub fn new(delay_ms: u32) -> Self {
        StartupGate {
            delay_ms,
            loaded: false,
        }
    }

    pub fn advance(&mut self, elapsed_ms: u32) -> Transition {
        if self.loaded || elapsed_ms < self.delay_ms {
            return Transition::Unchanged;
        }
        self.loaded = true;
        Transition::Latched
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

pub enum StartupAction {
    Elapsed(u32),
}

impl Reducible for StartupGate {
    type Action = StartupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let StartupAction::Elapsed(ms) = action;
        let mut next = (*self).clone();
        match next.advance(ms) {
            Transition::Latched => Rc::new(next),
            Transition::Unchanged => self,
        }
    }
}

/// Which element the pointer is over, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    hovered: Option<String>,
}

impl HoverState {
    pub fn enter(&self, id: &str) -> HoverState {
        HoverState {
            hovered: Some(id.to_string()),
        }
    }

    /// Leaving an element only clears the hover if it is still the one hovered.
    pub fn leave(&self, id: &str) -> HoverState {
        match &self.hovered {
            Some(current) if current == id => HoverState { hovered: None },
            _ => self.clone(),
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered() == Some(id)
    }
}

pub enum HoverAction {
    Enter(String),
    Leave(String),
}

impl Reducible for HoverState {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            HoverAction::Enter(id) => self.enter(&id),
            HoverAction::Leave(id) => self.leave(&id),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

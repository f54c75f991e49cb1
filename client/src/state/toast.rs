//! Toast notification queue and its imperative handle.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain bounded queue so ordering and eviction are unit
//! testable. `Toasts` wraps it in a signal and is provided once at the app
//! root; any descendant grabs it with `use_toasts()` and calls `success`,
//! `error`, and friends without threading callbacks through props.
//!
//! Finite toasts dismiss themselves via a browser timeout in hydrate builds.
//! During SSR nothing is scheduled; the queue is empty at render time anyway.
//! Every update bumps the toast's `generation`, and a timer only expires the
//! generation it was scheduled for, so an updated toast never inherits the
//! lifetime of its earlier kind.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::VecDeque;

use leptos::prelude::*;

/// Oldest toasts are evicted past this many.
pub const MAX_VISIBLE_TOASTS: usize = 5;

pub const SUCCESS_DURATION_MS: u32 = 2_000;
pub const ERROR_DURATION_MS: u32 = 4_000;
pub const INFO_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    /// Stays until dismissed or updated to a final kind.
    Loading,
}

impl ToastKind {
    /// Default on-screen lifetime; `None` means no automatic dismissal.
    #[must_use]
    pub fn default_duration_ms(self) -> Option<u32> {
        match self {
            Self::Success => Some(SUCCESS_DURATION_MS),
            Self::Error => Some(ERROR_DURATION_MS),
            Self::Info => Some(INFO_DURATION_MS),
            Self::Loading => None,
        }
    }

    /// BEM modifier used by the toaster stylesheet.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Loading => "loading",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: Option<u32>,
    /// Bumped on every update; timers carry the value they were armed with.
    pub generation: u32,
}

/// Bounded FIFO of visible toasts. Ids start at 1 and never repeat.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    last_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id, evicting the oldest when full.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.last_id += 1;
        let id = self.last_id;
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
            duration_ms: kind.default_duration_ms(),
            generation: 0,
        });
        id
    }

    /// Replace the kind and message of a visible toast in place and start a
    /// new generation. Returns that generation, or `None` when the toast is
    /// gone.
    pub fn update(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) -> Option<u32> {
        let toast = self.toasts.iter_mut().find(|t| t.id == id)?;
        toast.kind = kind;
        toast.message = message.into();
        toast.duration_ms = kind.default_duration_ms();
        toast.generation = toast.generation.wrapping_add(1);
        Some(toast.generation)
    }

    /// Dismiss `id` only if it has not been updated since `generation`.
    pub fn expire(&mut self, id: u64, generation: u32) -> bool {
        if self.get(id).is_some_and(|t| t.generation == generation) {
            self.dismiss(id)
        } else {
            false
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Imperative "show toast" capability shared through context.
#[derive(Clone, Copy, Debug)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    /// Underlying queue signal, read by the `Toaster` host.
    #[must_use]
    pub fn state(&self) -> RwSignal<ToastState> {
        self.state
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.state.update(|s| id = s.push(kind, message));
        self.schedule_expiry(id, 0, kind.default_duration_ms());
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Info, message)
    }

    pub fn loading(&self, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Loading, message)
    }

    /// Turn an existing toast (typically `loading`) into `kind` and restart
    /// its lifetime.
    pub fn update(&self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let mut generation = None;
        self.state.update(|s| generation = s.update(id, kind, message));
        if let Some(generation) = generation {
            self.schedule_expiry(id, generation, kind.default_duration_ms());
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.state.try_update(|s| s.dismiss(id));
    }

    /// Timer target: dismiss `id` if it is still at `generation`.
    pub fn expire(&self, id: u64, generation: u32) {
        self.state.try_update(|s| s.expire(id, generation));
    }

    fn schedule_expiry(&self, id: u64, generation: u32, duration_ms: Option<u32>) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(ms) = duration_ms {
                let toasts = *self;
                gloo_timers::callback::Timeout::new(ms, move || toasts.expire(id, generation)).forget();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, generation, duration_ms);
        }
    }
}

/// Create the app-wide toast queue and provide it to all descendants.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

/// The toast handle provided at the app root.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

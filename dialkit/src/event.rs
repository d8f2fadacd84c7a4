//! Value notifications produced by slider interactions.

use std::fmt;

/// Notification produced by one step of an interaction session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueEvent {
    /// The pointer grabbed the widget.
    ChangeStart(f64),
    /// The value moved.
    Change(f64),
    /// The pointer let go or left the widget.
    ChangeEnd(f64),
}

impl ValueEvent {
    /// The value carried by the notification.
    pub fn value(&self) -> f64 {
        match *self {
            Self::ChangeStart(v) | Self::Change(v) | Self::ChangeEnd(v) => v,
        }
    }
}

type Callback = Box<dyn FnMut(f64)>;

/// Host callbacks for the three interaction notifications.
///
/// # Example
///
/// ```ignore
/// let callbacks = Callbacks::new()
///     .on_change(|value| println!("volume: {value}"))
///     .on_change_end(|value| save_volume(value));
/// ```
#[derive(Default)]
pub struct Callbacks {
    on_change_start: Option<Callback>,
    on_change: Option<Callback>,
    on_change_end: Option<Callback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change_start(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change_start = Some(Box::new(f));
        self
    }

    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_change_end(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change_end = Some(Box::new(f));
        self
    }

    /// Invoke the callback matching `event`, if one is registered.
    pub fn dispatch(&mut self, event: ValueEvent) {
        let callback = match event {
            ValueEvent::ChangeStart(_) => self.on_change_start.as_mut(),
            ValueEvent::Change(_) => self.on_change.as_mut(),
            ValueEvent::ChangeEnd(_) => self.on_change_end.as_mut(),
        };
        if let Some(callback) = callback {
            callback(event.value());
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change_start", &self.on_change_start.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_change_end", &self.on_change_end.is_some())
            .finish()
    }
}

use parking_lot::Mutex;

use super::keys::{key_name, KEY_COUNT};
use super::types::{KeyAction, KeyCode, KeyEvent, Modifiers};
use crate::error::{Error, Result};
use crate::logging::{Level, Logger};

/// Point-in-time copy of a keyboard's state.
///
/// The per-key table and the `previous`/`current` pair always come from the
/// same ingestion; a snapshot never mixes two of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    states: Box<[Option<KeyAction>]>,
    previous: Option<KeyCode>,
    current: Option<KeyCode>,
    modifiers: Modifiers,
}

impl KeyboardSnapshot {
    fn empty(max_key: KeyCode) -> Self {
        Self {
            states: vec![None; max_key as usize].into_boxed_slice(),
            previous: None,
            current: None,
            modifiers: Modifiers::default(),
        }
    }

    fn check(&self, code: KeyCode) -> Result<usize> {
        let max = self.states.len() as KeyCode;
        if code < max {
            Ok(code as usize)
        } else {
            Err(Error::InvalidKeyCode { code, max })
        }
    }

    fn record(&mut self, event: KeyEvent) -> Result<()> {
        let idx = self.check(event.code)?;
        self.states[idx] = Some(event.action);
        self.previous = self.current;
        self.current = Some(event.code);
        self.modifiers = event.modifiers;
        Ok(())
    }

    fn current_is(&self, code: KeyCode, action: KeyAction) -> Result<bool> {
        let idx = self.check(code)?;
        Ok(self.current == Some(code) && self.states[idx] == Some(action))
    }

    /// `code` is the latest key and its latest action was a press.
    pub fn is_down(&self, code: KeyCode) -> Result<bool> {
        self.current_is(code, KeyAction::Pressed)
    }

    /// `code` is the latest key and its latest action was a release.
    pub fn is_up(&self, code: KeyCode) -> Result<bool> {
        self.current_is(code, KeyAction::Released)
    }

    pub fn is_repeating(&self, code: KeyCode) -> Result<bool> {
        let idx = self.check(code)?;
        Ok(self.states[idx] == Some(KeyAction::Repeating))
    }

    /// The two latest events both named `code`, and the later one released it.
    pub fn was_typed(&self, code: KeyCode) -> Result<bool> {
        let idx = self.check(code)?;
        Ok(self.previous == Some(code)
            && self.current == Some(code)
            && self.states[idx] == Some(KeyAction::Released))
    }

    /// Latest action for `code`; `None` if the key has never been seen.
    pub fn state(&self, code: KeyCode) -> Result<Option<KeyAction>> {
        let idx = self.check(code)?;
        Ok(self.states[idx])
    }

    pub fn previous(&self) -> Option<KeyCode> {
        self.previous
    }

    pub fn current(&self) -> Option<KeyCode> {
        self.current
    }

    /// Modifiers carried by the latest event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn max_key(&self) -> KeyCode {
        self.states.len() as KeyCode
    }
}

/// Key-state store for one input source.
///
/// Ingestion comes from the windowing layer's event callback; queries may
/// come from any thread. One mutex guards the whole table together with the
/// `previous`/`current` pair, so readers observe either all of an update or
/// none of it.
#[derive(Debug)]
pub struct Keyboard {
    max_key: KeyCode,
    table: Mutex<KeyboardSnapshot>,
    logger: Option<Logger>,
}

impl Keyboard {
    /// Creates a store accepting codes in `0..max_key`.
    pub fn new(max_key: KeyCode) -> Self {
        Self {
            max_key,
            table: Mutex::new(KeyboardSnapshot::empty(max_key)),
            logger: None,
        }
    }

    /// Store sized for the native key numbering in [`keys`](super::keys).
    pub fn glfw() -> Self {
        Self::new(KEY_COUNT)
    }

    /// Reports every ingested event to `logger`.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn max_key(&self) -> KeyCode {
        self.max_key
    }

    /// Native callback entry point: one call per physical key transition.
    pub fn on_key_event(
        &self,
        code: KeyCode,
        scancode: u32,
        action: KeyAction,
        modifiers: Modifiers,
    ) -> Result<()> {
        self.apply(KeyEvent {
            code,
            scancode,
            action,
            modifiers,
        })
    }

    /// Records `event`, making it the current key.
    pub fn apply(&self, event: KeyEvent) -> Result<()> {
        let previous = {
            let mut table = self.table.lock();
            table.record(event)?;
            table.previous
        };

        if let Some(logger) = &self.logger {
            logger.log(Level::Info, describe(event, previous));
        }
        Ok(())
    }

    pub fn is_down(&self, code: KeyCode) -> Result<bool> {
        self.table.lock().is_down(code)
    }

    pub fn is_up(&self, code: KeyCode) -> Result<bool> {
        self.table.lock().is_up(code)
    }

    pub fn is_repeating(&self, code: KeyCode) -> Result<bool> {
        self.table.lock().is_repeating(code)
    }

    pub fn was_typed(&self, code: KeyCode) -> Result<bool> {
        self.table.lock().was_typed(code)
    }

    pub fn state(&self, code: KeyCode) -> Result<Option<KeyAction>> {
        self.table.lock().state(code)
    }

    pub fn previous(&self) -> Option<KeyCode> {
        self.table.lock().previous
    }

    pub fn current(&self) -> Option<KeyCode> {
        self.table.lock().current
    }

    pub fn modifiers(&self) -> Modifiers {
        self.table.lock().modifiers
    }

    /// Copies the whole state under the lock.
    pub fn snapshot(&self) -> KeyboardSnapshot {
        self.table.lock().clone()
    }
}

fn describe(event: KeyEvent, previous: Option<KeyCode>) -> String {
    let label = |code: KeyCode| match key_name(code) {
        Some(name) => format!("{name} ({code})"),
        None => code.to_string(),
    };
    match previous {
        Some(p) => format!("key {}: {} (previous {})", event.action, label(event.code), label(p)),
        None => format!("key {}: {}", event.action, label(event.code)),
    }
}

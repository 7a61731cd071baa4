/// Keyboard interrupt for the live loops
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use protopanel_core::Interrupt;
use std::time::{Duration, Instant};

/// True for Q, Esc, or Ctrl-C (raw mode swallows SIGINT, so Ctrl-C arrives as a key)
pub fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        },
        _ => false,
    }
}

/// Sleeps between frames while watching the keyboard
#[derive(Debug, Default)]
pub struct KeyboardInterrupt;

impl Interrupt for KeyboardInterrupt {
    fn wait(&mut self, dwell: Duration) -> bool {
        let deadline = Instant::now() + dwell;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match event::poll(remaining) {
                Ok(false) => return false,
                Ok(true) => match event::read() {
                    Ok(event) if is_quit(&event) => return true,
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("reading input failed, stopping: {}", e);
                        return true;
                    }
                },
                Err(e) => {
                    log::warn!("polling input failed, stopping: {}", e);
                    return true;
                }
            }
            if Instant::now() >= deadline {
                return false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))));
        assert!(is_quit(&Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))));
        assert!(is_quit(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))));
    }

    #[test]
    fn test_other_events_continue() {
        assert!(!is_quit(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE))));
        assert!(!is_quit(&Event::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE))));
        assert!(!is_quit(&Event::Resize(80, 24)));

        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!is_quit(&Event::Key(release)));
    }
}

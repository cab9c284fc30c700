use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    RollRequested,
    ToggleHelpRequested,
    RestartRequested,
    /// Ends the driver loop. Never reaches the turn engine.
    QuitRequested,
}

/// Events gathered between ticks, handed out at most one per tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        InputQueue { pending: VecDeque::new() }
    }

    /// Queues an event. A repeat of the most recent queued event is dropped.
    pub fn push(&mut self, event: InputEvent) {
        if self.pending.back() == Some(&event) {
            return;
        }
        self.pending.push_back(event);
    }

    /// Next event for this tick. Quit jumps ahead of everything else.
    pub fn next_tick(&mut self) -> Option<InputEvent> {
        if self.pending.contains(&InputEvent::QuitRequested) {
            self.pending.clear();
            return Some(InputEvent::QuitRequested);
        }
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::InputEvent::*;

    #[test]
    fn test_one_event_per_tick_in_source_order() {
        let mut queue = InputQueue::new();
        queue.push(ToggleHelpRequested);
        queue.push(RollRequested);
        assert_eq!(queue.next_tick(), Some(ToggleHelpRequested));
        assert_eq!(queue.next_tick(), Some(RollRequested));
        assert_eq!(queue.next_tick(), None);
    }

    #[test]
    fn test_repeated_events_collapse() {
        let mut queue = InputQueue::new();
        queue.push(RestartRequested);
        queue.push(RestartRequested);
        assert_eq!(queue.len(), 1);
        queue.push(RollRequested);
        queue.push(RestartRequested);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_quit_takes_priority() {
        let mut queue = InputQueue::new();
        queue.push(RollRequested);
        queue.push(QuitRequested);
        queue.push(ToggleHelpRequested);
        assert_eq!(queue.next_tick(), Some(QuitRequested));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = InputQueue::new();
        queue.push(RollRequested);
        queue.clear();
        assert_eq!(queue.next_tick(), None);
    }
}

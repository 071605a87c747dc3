use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Polls the terminal without blocking the runtime and emits a tick when idle
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(100))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            // Check for terminal events without blocking first
            if poll(Duration::from_millis(0))? {
                match crossterm::event::read()? {
                    // Windows reports releases too; only presses are gestures
                    Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(EventType::Key(key)),
                    Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                    _ => return Ok(EventType::Other),
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(EventType::Tick);
            }

            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

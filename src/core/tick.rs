//! Tick driver: turns host time into countdown ticks and movement steps.
//!
//! The driver never sleeps. The host calls [`TickDriver::update`] with the
//! real time elapsed since its last call (or [`TickDriver::on_tick`] when it
//! owns its own timer) and renders whatever changed. One movement tick is an
//! advance followed by a wait of the session's tick interval.

use crate::core::constants::COUNTDOWN_STEP_MS;
use crate::snake::logic::{advance, countdown_tick, restart};
use crate::snake::types::{GameSession, Phase, StepOutcome};
use rand::Rng;
use std::time::Duration;

/// What one driver call did to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The countdown went down by one second.
    pub countdown_ticked: bool,
    /// The snake was advanced, with the result.
    pub step: Option<StepOutcome>,
}

/// Timers for one session. Reset on restart.
#[derive(Debug, Clone)]
pub struct TickDriver {
    /// Time until the next movement step is due.
    until_step_ms: u64,
    /// Time until the next countdown second elapses.
    until_countdown_ms: u64,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TickDriver {
    pub fn new() -> Self {
        Self {
            until_step_ms: 0,
            until_countdown_ms: COUNTDOWN_STEP_MS,
        }
    }

    /// Feed elapsed host time. Performs at most one countdown tick or one
    /// movement step per call, so a stalled host never causes a burst.
    pub fn update<R: Rng>(
        &mut self,
        session: &mut GameSession,
        elapsed: Duration,
        rng: &mut R,
    ) -> TickReport {
        let dt = elapsed.as_millis() as u64;
        match session.phase {
            Phase::Countdown { .. } => {
                if dt < self.until_countdown_ms {
                    self.until_countdown_ms -= dt;
                    return TickReport::default();
                }
                self.countdown(session)
            }
            Phase::Running => {
                // A faster tier takes effect without waiting out the old interval.
                let interval = session.config.difficulty.tick_interval_ms();
                self.until_step_ms = self.until_step_ms.min(interval);
                if dt < self.until_step_ms {
                    self.until_step_ms -= dt;
                    return TickReport::default();
                }
                self.step(session, rng)
            }
            Phase::GameOver(_) => TickReport::default(),
        }
    }

    /// Run exactly one discrete tick regardless of elapsed time: a countdown
    /// second while counting down, a movement step while running.
    pub fn on_tick<R: Rng>(&mut self, session: &mut GameSession, rng: &mut R) -> TickReport {
        match session.phase {
            Phase::Countdown { .. } => self.countdown(session),
            Phase::Running => self.step(session, rng),
            Phase::GameOver(_) => TickReport::default(),
        }
    }

    /// Replace the session with a fresh one and reset the timers.
    pub fn restart<R: Rng>(&mut self, session: &mut GameSession, rng: &mut R) {
        *session = restart(session, rng);
        *self = Self::new();
    }

    fn countdown(&mut self, session: &mut GameSession) -> TickReport {
        if countdown_tick(session) {
            // First step is due as soon as the countdown ends.
            self.until_step_ms = 0;
        }
        self.until_countdown_ms = COUNTDOWN_STEP_MS;
        TickReport {
            countdown_ticked: true,
            step: None,
        }
    }

    fn step<R: Rng>(&mut self, session: &mut GameSession, rng: &mut R) -> TickReport {
        let outcome = advance(session, rng);
        self.until_step_ms = session.config.difficulty.tick_interval_ms();
        TickReport {
            step: Some(outcome),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Difficulty, GameConfig};
    use crate::snake::grid::Position;
    use crate::snake::logic::set_difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn running(rng: &mut ChaCha8Rng) -> GameSession {
        let config = GameConfig {
            countdown_secs: 0,
            ..Default::default()
        };
        let mut session = GameSession::new(config, rng);
        session.food = Some(Position::new(1, 1));
        session
    }

    #[test]
    fn test_first_step_is_immediate() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = running(&mut rng);
        let mut driver = TickDriver::new();

        let report = driver.update(&mut session, ms(0), &mut rng);
        assert!(report.step.unwrap().moved);
        assert_eq!(session.head(), Position::new(10, 9));
    }

    #[test]
    fn test_steps_wait_for_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut session = running(&mut rng);
        let mut driver = TickDriver::new();
        driver.update(&mut session, ms(0), &mut rng);

        // Normal is 1500ms.
        for _ in 0..29 {
            assert_eq!(driver.update(&mut session, ms(50), &mut rng).step, None);
        }
        assert!(driver.update(&mut session, ms(50), &mut rng).step.is_some());
        assert_eq!(session.tick_count, 2);
    }

    #[test]
    fn test_long_stall_steps_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = running(&mut rng);
        let mut driver = TickDriver::new();
        driver.update(&mut session, ms(0), &mut rng);

        driver.update(&mut session, Duration::from_secs(60), &mut rng);
        assert_eq!(session.tick_count, 2);
    }

    #[test]
    fn test_countdown_then_running() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut session = GameSession::new(GameConfig::default(), &mut rng);
        let mut driver = TickDriver::new();
        let start = session.snake.clone();

        for remaining in (1..5).rev() {
            assert_eq!(
                driver.update(&mut session, ms(999), &mut rng),
                TickReport::default()
            );
            let report = driver.update(&mut session, ms(1), &mut rng);
            assert!(report.countdown_ticked);
            assert!(!session.is_running());
            assert_eq!(session.countdown_remaining(), Some(remaining));
        }
        let report = driver.update(&mut session, ms(1000), &mut rng);
        assert!(report.countdown_ticked);
        assert!(session.is_running());
        assert_eq!(session.snake, start);

        session.food = Some(Position::new(1, 1));
        let report = driver.update(&mut session, ms(16), &mut rng);
        assert!(report.step.unwrap().moved);
    }

    #[test]
    fn test_faster_difficulty_shortens_wait() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut session = running(&mut rng);
        let mut driver = TickDriver::new();
        driver.update(&mut session, ms(0), &mut rng);

        set_difficulty(&mut session, Difficulty::Extreme);
        assert!(driver.update(&mut session, ms(300), &mut rng).step.is_some());
    }

    #[test]
    fn test_game_over_stops_ticks() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut session = running(&mut rng);
        let mut driver = TickDriver::new();

        let mut over = false;
        for _ in 0..20 {
            if let Some(step) = driver.on_tick(&mut session, &mut rng).step {
                over |= step.game_over;
            }
        }
        // Heading Left from column 10 hits the wall on the 11th tick.
        assert!(over);
        assert!(session.is_game_over());
        assert_eq!(driver.on_tick(&mut session, &mut rng), TickReport::default());
        assert_eq!(
            driver.update(&mut session, ms(5000), &mut rng),
            TickReport::default()
        );
    }

    #[test]
    fn test_restart_resets_session_and_timers() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut session = GameSession::new(GameConfig::default(), &mut rng);
        let mut driver = TickDriver::new();
        driver.update(&mut session, ms(700), &mut rng);
        session.score = 3;

        driver.restart(&mut session, &mut rng);

        assert_eq!(session.score, 0);
        assert_eq!(session.countdown_remaining(), Some(5));
        // Full second before the first countdown tick again.
        assert_eq!(
            driver.update(&mut session, ms(700), &mut rng),
            TickReport::default()
        );
    }
}

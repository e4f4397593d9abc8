//! Snake session logic: movement, answers, collisions, food, restart.
//!
//! Every function takes the session explicitly and never blocks; timing is
//! owned by [`crate::core::tick::TickDriver`].

use super::grid::{is_inside, step, Heading, Position};
use super::types::*;
use crate::core::config::Difficulty;
use crate::core::constants::FOOD_SPAWN_MAX_ATTEMPTS;
use crate::words::{check_answer, draw_challenge};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, trace};

/// Submit a transcription of the current word.
///
/// A match turns the snake (via the configured [`TurnPolicy`]) and draws a
/// new word. A miss keeps the word so the player can correct it. Empty
/// input and input outside the running phase change nothing but the
/// feedback.
///
/// [`TurnPolicy`]: super::turn_policy::TurnPolicy
pub fn submit_answer<R: Rng>(session: &mut GameSession, raw: &str, rng: &mut R) -> AnswerOutcome {
    if !session.is_running() {
        return AnswerOutcome::default();
    }
    if raw.is_empty() {
        session.feedback = AnswerFeedback::None;
        return AnswerOutcome::default();
    }
    if !check_answer(&session.challenge, raw) {
        session.feedback = AnswerFeedback::Incorrect;
        debug!(word = session.challenge.display_word, "incorrect answer");
        return AnswerOutcome::default();
    }

    // Turn relative to the queued heading, but never back onto the neck.
    let reverse = session.heading.opposite();
    let candidates: Vec<Heading> = session
        .next_heading
        .perpendicular()
        .into_iter()
        .filter(|&h| h != reverse)
        .collect();
    let new_heading = session.config.turn_policy.choose_from(
        &candidates,
        session.head(),
        session.board_size(),
        rng,
    );
    if let Some(heading) = new_heading {
        session.next_heading = heading;
    }

    debug!(
        word = session.challenge.display_word,
        heading = ?new_heading,
        "correct answer"
    );
    session.challenge = draw_challenge(rng);
    session.feedback = AnswerFeedback::Correct;

    AnswerOutcome {
        matched: true,
        new_heading,
    }
}

/// Propose a heading directly (arrow-key control). Reversals are refused.
/// Returns true if the heading was queued.
pub fn steer(session: &mut GameSession, heading: Heading) -> bool {
    if !session.is_running() || heading == session.heading.opposite() {
        return false;
    }
    session.next_heading = heading;
    true
}

/// Change speed tier mid-game. Takes effect from the next tick.
pub fn set_difficulty(session: &mut GameSession, difficulty: Difficulty) {
    if session.config.difficulty != difficulty {
        info!(difficulty = difficulty.name(), "difficulty changed");
        session.config.difficulty = difficulty;
    }
}

/// One second of countdown. Returns true when the session starts running.
pub fn countdown_tick(session: &mut GameSession) -> bool {
    match session.phase {
        Phase::Countdown { remaining } if remaining <= 1 => {
            session.phase = Phase::Running;
            debug!("countdown finished");
            true
        }
        Phase::Countdown { remaining } => {
            session.phase = Phase::Countdown {
                remaining: remaining - 1,
            };
            false
        }
        _ => false,
    }
}

/// Move the snake one cell. No-op unless running.
pub fn advance<R: Rng>(session: &mut GameSession, rng: &mut R) -> StepOutcome {
    if !session.is_running() {
        return StepOutcome::default();
    }

    session.heading = session.next_heading;
    let new_head = step(session.head(), session.heading);

    if !is_inside(new_head, session.board_size()) {
        end_game(session, GameOverCause::Wall);
        return StepOutcome {
            game_over: true,
            ..Default::default()
        };
    }

    // The tail has not moved yet, so stepping onto it is a collision too.
    if session.snake.contains(&new_head) {
        end_game(session, GameOverCause::SelfCollision);
        return StepOutcome {
            game_over: true,
            ..Default::default()
        };
    }

    session.tick_count += 1;
    session.snake.push_front(new_head);
    trace!(row = new_head.row, col = new_head.col, "step");

    let ate_food = session.food == Some(new_head);
    if !ate_food {
        session.snake.pop_back();
        return StepOutcome {
            moved: true,
            ..Default::default()
        };
    }

    session.score += 1;
    session.food = spawn_food(session, rng);
    if session.config.redraw_on_food {
        session.challenge = draw_challenge(rng);
    }
    debug!(score = session.score, food = ?session.food, "food eaten");

    if session.food.is_none() {
        end_game(session, GameOverCause::BoardFilled);
    }

    StepOutcome {
        moved: true,
        ate_food: true,
        game_over: session.is_game_over(),
    }
}

fn end_game(session: &mut GameSession, cause: GameOverCause) {
    session.phase = Phase::GameOver(cause);
    info!(
        ?cause,
        score = session.score,
        length = session.snake.len(),
        "game over"
    );
}

/// Fresh session with the same configuration (including any live
/// difficulty change).
pub fn restart<R: Rng>(session: &GameSession, rng: &mut R) -> GameSession {
    info!(previous_score = session.score, "restart");
    GameSession::new(session.config.clone(), rng)
}

/// Pick a random free cell inside the inset interior.
///
/// Rejection sampling is bounded; after that a scan of the free cells
/// guarantees termination. Returns `None` when the interior is full.
pub fn spawn_food<R: Rng>(session: &GameSession, rng: &mut R) -> Option<Position> {
    let n = session.board_size();
    let inset = session.config.food_inset;
    let range = inset..n - inset;

    for _ in 0..FOOD_SPAWN_MAX_ATTEMPTS {
        let pos = Position::new(rng.gen_range(range.clone()), rng.gen_range(range.clone()));
        if !session.snake.contains(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = range
        .clone()
        .flat_map(|row| range.clone().map(move |col| Position::new(row, col)))
        .filter(|pos| !session.snake.contains(pos))
        .collect();
    free.choose(rng).copied()
}

/// Row-major `n`×`n` grid of what each cell holds.
pub fn render(session: &GameSession) -> Vec<Vec<CellKind>> {
    let n = session.board_size() as usize;
    let mut cells = vec![vec![CellKind::Empty; n]; n];

    if let Some(food) = session.food {
        cells[food.row as usize][food.col as usize] = CellKind::Food;
    }
    for (i, seg) in session.snake.iter().enumerate() {
        cells[seg.row as usize][seg.col as usize] = if i == 0 {
            CellKind::SnakeHead
        } else {
            CellKind::SnakeBody
        };
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::snake::turn_policy::TurnPolicy;
    use crate::words::Challenge;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Running session on a 20x20 board with food parked in a corner.
    fn running_session(rng: &mut ChaCha8Rng) -> GameSession {
        let config = GameConfig {
            countdown_secs: 0,
            ..Default::default()
        };
        let mut session = GameSession::new(config, rng);
        session.food = Some(Position::new(1, 1));
        session.challenge = test_word();
        session
    }

    /// Not in the vocabulary, so any redraw replaces it.
    fn test_word() -> Challenge {
        Challenge {
            display_word: "テスト",
            expected: "tesuto",
        }
    }

    fn set_body(session: &mut GameSession, cells: &[(i16, i16)]) {
        session.snake = cells.iter().map(|&(r, c)| Position::new(r, c)).collect();
    }

    fn set_heading(session: &mut GameSession, heading: Heading) {
        session.heading = heading;
        session.next_heading = heading;
    }

    #[test]
    fn test_advance_left_from_start() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);

        let outcome = advance(&mut session, &mut rng);

        assert_eq!(
            outcome,
            StepOutcome {
                moved: true,
                ate_food: false,
                game_over: false
            }
        );
        assert_eq!(session.head(), Position::new(10, 9));
        assert_eq!(session.snake.len(), 3);
        assert_eq!(*session.snake.back().unwrap(), Position::new(10, 11));
        assert_eq!(session.tick_count, 1);
    }

    #[test]
    fn test_advance_up_from_top_row_is_wall() {
        let mut rng = rng();
        for col in 0..20 {
            let mut session = running_session(&mut rng);
            set_body(&mut session, &[(0, col), (1, col), (2, col)]);
            set_heading(&mut session, Heading::Up);
            let before = session.snake.clone();

            let outcome = advance(&mut session, &mut rng);

            assert!(outcome.game_over);
            assert!(!outcome.moved);
            assert_eq!(session.snake, before);
            assert_eq!(session.phase, Phase::GameOver(GameOverCause::Wall));
        }
    }

    #[test]
    fn test_wall_collision_each_side() {
        let mut rng = rng();
        let cases = [
            (Heading::Down, [(19, 5), (18, 5)]),
            (Heading::Left, [(5, 0), (5, 1)]),
            (Heading::Right, [(5, 19), (5, 18)]),
        ];
        for (heading, body) in cases {
            let mut session = running_session(&mut rng);
            set_body(&mut session, &body);
            set_heading(&mut session, heading);
            assert!(advance(&mut session, &mut rng).game_over, "{heading:?}");
        }
    }

    #[test]
    fn test_self_collision() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        // Head at (5,5) moving Right into (5,6).
        set_body(&mut session, &[(5, 5), (4, 5), (4, 6), (5, 6), (6, 6)]);
        set_heading(&mut session, Heading::Right);

        let outcome = advance(&mut session, &mut rng);

        assert!(outcome.game_over);
        assert_eq!(
            session.phase,
            Phase::GameOver(GameOverCause::SelfCollision)
        );
        assert_eq!(session.snake.len(), 5);
    }

    #[test]
    fn test_stepping_onto_tail_collides() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        // Square loop: moving Down puts the head where the tail still is.
        set_body(&mut session, &[(5, 5), (5, 6), (6, 6), (6, 5)]);
        set_heading(&mut session, Heading::Down);

        assert!(advance(&mut session, &mut rng).game_over);
    }

    #[test]
    fn test_eating_grows_and_scores_once() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.food = Some(Position::new(10, 9));

        let outcome = advance(&mut session, &mut rng);
        assert!(outcome.ate_food);
        assert_eq!(session.score, 1);
        assert_eq!(session.snake.len(), 4);
        let food = session.food.unwrap();
        assert!(!session.snake.contains(&food));

        session.food = Some(Position::new(1, 1));
        let outcome = advance(&mut session, &mut rng);
        assert!(!outcome.ate_food);
        assert_eq!(session.score, 1);
        assert_eq!(session.snake.len(), 4);
    }

    #[test]
    fn test_redraw_on_food() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.config.redraw_on_food = true;
        session.food = Some(Position::new(10, 9));

        advance(&mut session, &mut rng);
        assert_ne!(session.challenge, test_word());
    }

    #[test]
    fn test_food_eaten_keeps_word_by_default() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.food = Some(Position::new(10, 9));
        let word = session.challenge.clone();

        advance(&mut session, &mut rng);
        assert_eq!(session.challenge, word);
    }

    #[test]
    fn test_advance_ignored_outside_running() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.phase = Phase::Countdown { remaining: 3 };
        let before = session.snake.clone();
        assert_eq!(advance(&mut session, &mut rng), StepOutcome::default());
        assert_eq!(session.snake, before);

        session.phase = Phase::GameOver(GameOverCause::Wall);
        assert_eq!(advance(&mut session, &mut rng), StepOutcome::default());
        assert_eq!(session.snake, before);
    }

    #[test]
    fn test_countdown_ticks_to_running() {
        let mut rng = rng();
        let mut session = GameSession::new(GameConfig::default(), &mut rng);
        let start = session.snake.clone();
        for expected in (1..5).rev() {
            assert!(!countdown_tick(&mut session));
            assert_eq!(session.countdown_remaining(), Some(expected));
        }
        assert!(countdown_tick(&mut session));
        assert!(session.is_running());
        assert_eq!(session.snake, start);
        assert!(!countdown_tick(&mut session));
    }

    #[test]
    fn test_correct_answer_turns_and_redraws() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        let old = session.challenge.clone();

        let outcome = submit_answer(&mut session, "TeSuTo", &mut rng);

        assert!(outcome.matched);
        // Moving Left at row 10 of 20: Down has 9 cells, Up has 10.
        assert_eq!(outcome.new_heading, Some(Heading::Up));
        assert_eq!(session.next_heading, Heading::Up);
        assert_eq!(session.heading, Heading::Left);
        assert_ne!(session.challenge, old);
        assert_eq!(session.feedback, AnswerFeedback::Correct);
    }

    #[test]
    fn test_wrong_answer_keeps_word() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        let old = session.challenge.clone();

        let outcome = submit_answer(&mut session, "inu", &mut rng);

        assert_eq!(outcome, AnswerOutcome::default());
        assert_eq!(session.challenge, old);
        assert_eq!(session.next_heading, Heading::Left);
        assert_eq!(session.feedback, AnswerFeedback::Incorrect);
    }

    #[test]
    fn test_empty_answer_has_no_effect() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.feedback = AnswerFeedback::Incorrect;
        let old = session.challenge.clone();

        let outcome = submit_answer(&mut session, "", &mut rng);

        assert!(!outcome.matched);
        assert_eq!(outcome.new_heading, None);
        assert_eq!(session.challenge, old);
        assert_eq!(session.next_heading, Heading::Left);
        assert_eq!(session.feedback, AnswerFeedback::None);
    }

    #[test]
    fn test_answer_ignored_during_countdown_and_game_over() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.phase = Phase::Countdown { remaining: 2 };
        assert!(!submit_answer(&mut session, "tesuto", &mut rng).matched);
        assert_eq!(session.feedback, AnswerFeedback::None);

        session.phase = Phase::GameOver(GameOverCause::Wall);
        assert!(!submit_answer(&mut session, "tesuto", &mut rng).matched);
    }

    #[test]
    fn test_two_answers_in_one_tick_never_reverse() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.config.turn_policy = TurnPolicy::Uniform;

        for _ in 0..50 {
            set_heading(&mut session, Heading::Left);
            session.challenge = test_word();
            submit_answer(&mut session, "tesuto", &mut rng);
            let expected = session.challenge.expected;
            submit_answer(&mut session, expected, &mut rng);
            assert_ne!(session.next_heading, Heading::Right);
        }
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        assert!(!steer(&mut session, Heading::Right));
        assert_eq!(session.next_heading, Heading::Left);

        assert!(steer(&mut session, Heading::Up));
        assert_eq!(session.next_heading, Heading::Up);
        // Still moving Left until the next step, so Right stays forbidden.
        assert!(!steer(&mut session, Heading::Right));
    }

    #[test]
    fn test_steer_ignored_when_not_running() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        session.phase = Phase::GameOver(GameOverCause::Wall);
        assert!(!steer(&mut session, Heading::Up));
    }

    #[test]
    fn test_set_difficulty_changes_interval() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        set_difficulty(&mut session, Difficulty::Extreme);
        assert_eq!(session.tick_interval().as_millis(), 300);
        assert!(session.is_running());
    }

    #[test]
    fn test_restart_resets_state_and_keeps_config() {
        let mut rng = rng();
        let mut session = running_session(&mut rng);
        set_difficulty(&mut session, Difficulty::Hard);
        session.score = 7;
        set_body(&mut session, &[(0, 3), (1, 3), (2, 3), (3, 3)]);
        set_heading(&mut session, Heading::Up);
        advance(&mut session, &mut rng);
        assert!(session.is_game_over());

        let fresh = restart(&session, &mut rng);

        assert_eq!(fresh.score, 0);
        assert!(!fresh.is_game_over());
        assert_eq!(
            fresh.snake,
            VecDeque::from(vec![
                Position::new(10, 10),
                Position::new(10, 11),
                Position::new(10, 12),
            ])
        );
        assert_eq!(fresh.heading, Heading::Left);
        assert_eq!(fresh.difficulty(), Difficulty::Hard);
        assert!(!fresh.snake.contains(&fresh.food.unwrap()));
    }

    #[test]
    fn test_restart_reenters_countdown() {
        let mut rng = rng();
        let session = GameSession::new(GameConfig::default(), &mut rng);
        let fresh = restart(&session, &mut rng);
        assert_eq!(fresh.phase, Phase::Countdown { remaining: 5 });
    }

    #[test]
    fn test_spawn_food_fallback_finds_last_cell() {
        let mut rng = rng();
        let config = GameConfig {
            board_size: 3,
            initial_length: 1,
            food_inset: 0,
            countdown_secs: 0,
            ..Default::default()
        };
        let mut session = GameSession::new(config, &mut rng);
        // Fill all but (2, 2).
        session.snake = (0..3)
            .flat_map(|r| (0..3).map(move |c| Position::new(r, c)))
            .filter(|&p| p != Position::new(2, 2))
            .collect();

        assert_eq!(spawn_food(&session, &mut rng), Some(Position::new(2, 2)));

        session.snake.push_back(Position::new(2, 2));
        assert_eq!(spawn_food(&session, &mut rng), None);
    }

    #[test]
    fn test_filling_board_ends_game() {
        let mut rng = rng();
        let config = GameConfig {
            board_size: 3,
            initial_length: 1,
            food_inset: 0,
            countdown_secs: 0,
            ..Default::default()
        };
        let mut session = GameSession::new(config, &mut rng);
        // Interior shrinks to the single centre cell.
        session.config.food_inset = 1;
        set_body(&mut session, &[(1, 2), (0, 2)]);
        set_heading(&mut session, Heading::Left);
        session.food = Some(Position::new(1, 1));

        let outcome = advance(&mut session, &mut rng);

        assert!(outcome.ate_food);
        assert!(outcome.game_over);
        assert_eq!(session.food, None);
        assert_eq!(session.phase, Phase::GameOver(GameOverCause::BoardFilled));
    }

    #[test]
    fn test_render_cells() {
        let mut rng = rng();
        let session = running_session(&mut rng);
        let grid = render(&session);

        assert_eq!(grid.len(), 20);
        assert!(grid.iter().all(|row| row.len() == 20));
        assert_eq!(grid[10][10], CellKind::SnakeHead);
        assert_eq!(grid[10][11], CellKind::SnakeBody);
        assert_eq!(grid[10][12], CellKind::SnakeBody);
        assert_eq!(grid[1][1], CellKind::Food);

        let occupied = grid
            .iter()
            .flatten()
            .filter(|&&c| c != CellKind::Empty)
            .count();
        assert_eq!(occupied, 4);
    }
}

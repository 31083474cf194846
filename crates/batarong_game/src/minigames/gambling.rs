// crates/batarong_game/src/minigames/gambling.rs
//! The slot machine: type a bet, spin for two seconds, roll 1..=4.
//! 1 pays 2x, 2 pays 1.25x rounded to nearest, 3 and 4 lose.

pub const MIN_BET: u64 = 10;
pub const MIN_PIWO_TO_PLAY: u64 = 10;
pub const BET_INPUT_MAX: usize = 10;

pub const SPIN_TIME: f32 = 2.0;
pub const RESULT_DISPLAY_TIME: f32 = 2.0;
pub const ERROR_DISPLAY_TIME: f32 = 2.0;

/// A resolved spin, kept around while the result line is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinResult {
    WonDouble { bet: u64, winnings: u64 },
    WonQuarter { bet: u64, winnings: u64 },
    Lost { bet: u64 },
}

#[derive(Default)]
pub struct GamblingState {
    pub bet_input: String,
    pub current_bet: u64,
    pub spinning: bool,
    spin_timer: f32,
    pub result: Option<SpinResult>,
    result_timer: f32,
    /// Seconds since the "Not enough piwo!" error was raised, if showing.
    error_timer: Option<f32>,
}

/// Payout table, pure so the tests can pin every roll.
pub fn resolve_roll(roll: u32, bet: u64) -> SpinResult {
    match roll {
        1 => SpinResult::WonDouble { bet, winnings: bet * 2 },
        2 => {
            // 1.25x, rounded to the nearest whole piwo.
            let winnings = (bet as f64 * 1.25 + 0.5) as u64;
            SpinResult::WonQuarter { bet, winnings }
        }
        _ => SpinResult::Lost { bet },
    }
}

impl GamblingState {
    pub fn showing_error(&self) -> bool {
        self.error_timer.is_some()
    }

    /// Digits typed while idle grow the bet, up to ten characters.
    pub fn push_digit(&mut self, digit: u8) {
        if self.spinning || self.result.is_some() {
            return;
        }
        if self.bet_input.len() < BET_INPUT_MAX {
            self.bet_input.push((b'0' + digit.min(9)) as char);
        }
    }

    pub fn pop_digit(&mut self) {
        if self.spinning || self.result.is_some() {
            return;
        }
        self.bet_input.pop();
    }

    /// Start a spin if the bank and the typed bet allow it. The stake is
    /// taken immediately; the payout lands when the spin resolves.
    pub fn try_start_spin(&mut self, piwo: &mut u64) {
        if *piwo < MIN_PIWO_TO_PLAY || self.bet_input.is_empty() {
            return;
        }
        let Ok(bet) = self.bet_input.parse::<u64>() else {
            return;
        };
        if bet < MIN_BET {
            return;
        }
        if bet > *piwo {
            self.error_timer = Some(0.0);
            return;
        }

        *piwo -= bet;
        self.current_bet = bet;
        self.spinning = true;
        self.spin_timer = 0.0;
        self.result = None;
        self.bet_input.clear();
    }

    /// Advance spin/result/error timers. `roll` is only invoked at the moment
    /// the spin resolves, and the payout is credited exactly once.
    pub fn tick(&mut self, dt: f32, piwo: &mut u64, roll: impl FnOnce() -> u32) {
        if self.spinning {
            self.spin_timer += dt;
            if self.spin_timer >= SPIN_TIME {
                self.spinning = false;
                let result = resolve_roll(roll(), self.current_bet);
                match result {
                    SpinResult::WonDouble { winnings, .. }
                    | SpinResult::WonQuarter { winnings, .. } => *piwo += winnings,
                    SpinResult::Lost { .. } => {}
                }
                self.result = Some(result);
                self.result_timer = 0.0;
            }
        } else if self.result.is_some() {
            self.result_timer += dt;
            if self.result_timer >= RESULT_DISPLAY_TIME {
                self.result = None;
                self.current_bet = 0;
            }
        }

        if let Some(t) = &mut self.error_timer {
            *t += dt;
            if *t >= ERROR_DISPLAY_TIME {
                self.error_timer = None;
            }
        }
    }

    /// Leaving the machine keeps a half-typed bet for the next visit; only
    /// the error line is dismissed. Spins and pending results carry over too.
    pub fn close(&mut self) {
        self.error_timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: &mut GamblingState, bet: &str) {
        for c in bet.bytes() {
            state.push_digit(c - b'0');
        }
    }

    #[test]
    fn payout_table() {
        assert_eq!(resolve_roll(1, 10), SpinResult::WonDouble { bet: 10, winnings: 20 });
        assert_eq!(resolve_roll(2, 10), SpinResult::WonQuarter { bet: 10, winnings: 13 });
        assert_eq!(resolve_roll(2, 11), SpinResult::WonQuarter { bet: 11, winnings: 14 });
        assert_eq!(resolve_roll(3, 10), SpinResult::Lost { bet: 10 });
        assert_eq!(resolve_roll(4, 10), SpinResult::Lost { bet: 10 });
    }

    #[test]
    fn needs_ten_piwo_banked_to_play() {
        let mut state = GamblingState::default();
        let mut piwo = 9;
        typed(&mut state, "10");

        state.try_start_spin(&mut piwo);
        assert!(!state.spinning);
        assert_eq!(piwo, 9);
    }

    #[test]
    fn bet_below_minimum_is_ignored() {
        let mut state = GamblingState::default();
        let mut piwo = 100;
        typed(&mut state, "9");

        state.try_start_spin(&mut piwo);
        assert!(!state.spinning);
        assert!(!state.showing_error());
        assert_eq!(piwo, 100);
    }

    #[test]
    fn over_bet_shows_a_timed_error() {
        let mut state = GamblingState::default();
        let mut piwo = 50;
        typed(&mut state, "51");

        state.try_start_spin(&mut piwo);
        assert!(state.showing_error());
        assert_eq!(piwo, 50);

        state.tick(ERROR_DISPLAY_TIME, &mut piwo, || unreachable!());
        assert!(!state.showing_error());
    }

    #[test]
    fn stake_is_deducted_at_spin_start_and_paid_once() {
        let mut state = GamblingState::default();
        let mut piwo = 100;
        typed(&mut state, "40");

        state.try_start_spin(&mut piwo);
        assert!(state.spinning);
        assert_eq!(piwo, 60);
        assert!(state.bet_input.is_empty());

        // Resolve as a 2x win.
        state.tick(SPIN_TIME, &mut piwo, || 1);
        assert_eq!(piwo, 140);
        assert_eq!(state.result, Some(SpinResult::WonDouble { bet: 40, winnings: 80 }));

        // Further ticks while the result is displayed must not pay again.
        state.tick(RESULT_DISPLAY_TIME / 2.0, &mut piwo, || unreachable!());
        assert_eq!(piwo, 140);

        state.tick(RESULT_DISPLAY_TIME / 2.0, &mut piwo, || unreachable!());
        assert!(state.result.is_none());
        assert_eq!(state.current_bet, 0);
    }

    #[test]
    fn losing_roll_keeps_the_stake_gone() {
        let mut state = GamblingState::default();
        let mut piwo = 100;
        typed(&mut state, "10");

        state.try_start_spin(&mut piwo);
        state.tick(SPIN_TIME, &mut piwo, || 3);
        assert_eq!(piwo, 90);
        assert_eq!(state.result, Some(SpinResult::Lost { bet: 10 }));
    }

    #[test]
    fn typed_bet_survives_leaving_the_machine() {
        let mut state = GamblingState::default();
        typed(&mut state, "25");
        state.error_timer = Some(0.0);

        state.close();
        assert_eq!(state.bet_input, "25");
        assert!(!state.showing_error());
    }

    #[test]
    fn bet_input_caps_at_ten_digits() {
        let mut state = GamblingState::default();
        for _ in 0..20 {
            state.push_digit(9);
        }
        assert_eq!(state.bet_input.len(), BET_INPUT_MAX);

        state.pop_digit();
        assert_eq!(state.bet_input.len(), BET_INPUT_MAX - 1);
    }

    #[test]
    fn typing_is_locked_while_spinning() {
        let mut state = GamblingState::default();
        let mut piwo = 100;
        typed(&mut state, "10");
        state.try_start_spin(&mut piwo);

        state.push_digit(5);
        assert!(state.bet_input.is_empty());
    }
}

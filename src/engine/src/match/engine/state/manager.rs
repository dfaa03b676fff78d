#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchPeriod {
    Initial,
    FirstHalf,
    HalfTime,
    SecondHalf,
    End,
}

impl MatchPeriod {
    pub fn need_switch_sides(&self) -> bool {
        *self == MatchPeriod::HalfTime
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, MatchPeriod::FirstHalf | MatchPeriod::SecondHalf)
    }
}

pub struct StateManager {
    current_period: MatchPeriod,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            current_period: MatchPeriod::Initial,
        }
    }

    pub fn current(&self) -> MatchPeriod {
        self.current_period
    }

    pub fn next(&mut self) -> Option<MatchPeriod> {
        let next_period = Self::get_next_period(self.current_period);

        match next_period {
            MatchPeriod::End => None,
            _ => {
                self.current_period = next_period;
                Some(self.current_period)
            }
        }
    }

    fn get_next_period(current_period: MatchPeriod) -> MatchPeriod {
        match current_period {
            MatchPeriod::Initial => MatchPeriod::FirstHalf,
            MatchPeriod::FirstHalf => MatchPeriod::HalfTime,
            MatchPeriod::HalfTime => MatchPeriod::SecondHalf,
            MatchPeriod::SecondHalf => MatchPeriod::End,
            MatchPeriod::End => MatchPeriod::End,
        }
    }
}

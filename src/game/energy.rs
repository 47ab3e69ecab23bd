use log::info;

// ---------------------------------------------------------------------------
// Gate signals
// ---------------------------------------------------------------------------

/// Result of attempting to pay for a gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spend {
    Charged,
    /// Refusal. The meter is unchanged; the caller must not perform the
    /// action.
    InsufficientEnergy { need: u32, have: u32 },
}

/// Result of asking for the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAdvance {
    NewDay(u32),
    /// The deadline has been reached; the session must force a final
    /// accusation instead of continuing.
    DeadlineReached,
}

// ---------------------------------------------------------------------------
// Day cycle
// ---------------------------------------------------------------------------

/// The depleting/regenerating action budget and the day counter.
///
/// All transitions are synchronous reactions to a single player command;
/// energy never goes negative and the day never passes the deadline.
#[derive(Debug, Clone)]
pub struct DayCycle {
    energy: u32,
    day: u32,
    puzzle_done: bool,
    max_energy: u32,
    deadline_day: u32,
}

impl DayCycle {
    pub fn new(max_energy: u32, deadline_day: u32) -> Self {
        Self {
            energy: max_energy,
            day: 1,
            puzzle_done: false,
            max_energy,
            deadline_day,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn deadline_day(&self) -> u32 {
        self.deadline_day
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn is_final_day(&self) -> bool {
        self.day >= self.deadline_day
    }

    pub fn try_spend(&mut self, cost: u32) -> Spend {
        if self.energy < cost {
            return Spend::InsufficientEnergy {
                need: cost,
                have: self.energy,
            };
        }
        self.energy -= cost;
        Spend::Charged
    }

    /// Advance to the next day: refill energy, re-arm the puzzle gate.
    /// Past the deadline this refuses and the caller must end the
    /// investigation instead.
    pub fn advance_day(&mut self) -> DayAdvance {
        if self.is_final_day() {
            return DayAdvance::DeadlineReached;
        }
        self.day += 1;
        self.energy = self.max_energy;
        self.puzzle_done = false;
        info!("day advanced to {} of {}", self.day, self.deadline_day);
        DayAdvance::NewDay(self.day)
    }

    /// Whether the once-per-day puzzle may still be attempted today.
    pub fn puzzle_available(&self) -> bool {
        !self.puzzle_done
    }

    /// Mark the puzzle consumed for today, win or lose.
    pub fn consume_puzzle(&mut self) {
        self.puzzle_done = true;
    }

    pub fn grant_bonus(&mut self, bonus: u32) {
        self.energy += bonus;
        info!("energy bonus +{bonus}, now {}", self.energy);
    }
}

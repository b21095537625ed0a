use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// How many of each kind of tick came due.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Ticks {
    pub cycles: u32,
    pub timer_ticks: u32,
}

/// Counts whole periods of a fixed frequency in elapsed time, carrying the remainder.
#[derive(Debug, Clone)]
struct Divider {
    hz: u128,
    /// Elapsed nanoseconds scaled by `hz`, less the periods already counted
    remainder: u128,
}

impl Divider {
    fn new(hz: u32) -> Self {
        assert!(hz > 0, "a clock frequency must be above 0Hz");
        Divider {
            hz: u128::from(hz),
            remainder: 0,
        }
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        self.remainder += elapsed.as_nanos() * self.hz;
        let periods = self.remainder / NANOS_PER_SEC;
        self.remainder %= NANOS_PER_SEC;
        periods as u32
    }
}

/// # Clock
/// Turns elapsed time into CPU cycles and timer ticks.
///
/// The two rates are tracked separately, so how many timer ticks come due only depends on
/// how much time has passed and never on how many instructions ran in between.
#[derive(Debug, Clone)]
pub struct Clock {
    cpu: Divider,
    timers: Divider,
}

impl Clock {
    /// # Panics
    /// If either frequency is 0.
    pub fn new(cpu_hz: u32, timer_hz: u32) -> Self {
        Clock {
            cpu: Divider::new(cpu_hz),
            timers: Divider::new(timer_hz),
        }
    }

    pub fn advance(&mut self, elapsed: Duration) -> Ticks {
        Ticks {
            cycles: self.cpu.advance(elapsed),
            timer_ticks: self.timers.advance(elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CPU_FREQUENCY, TIMER_FREQUENCY};

    #[test]
    fn test_one_second_at_default_rates() {
        let mut clock = Clock::new(CPU_FREQUENCY, TIMER_FREQUENCY);
        let ticks = clock.advance(Duration::from_secs(1));
        assert_eq!(
            ticks,
            Ticks {
                cycles: 500,
                timer_ticks: 60,
            }
        );
    }

    #[test]
    fn test_carries_partial_periods() {
        let mut clock = Clock::new(CPU_FREQUENCY, TIMER_FREQUENCY);
        let mut total = Ticks::default();
        // 1000 slices of 1ms
        for _ in 0..1000 {
            let ticks = clock.advance(Duration::from_millis(1));
            total.cycles += ticks.cycles;
            total.timer_ticks += ticks.timer_ticks;
        }
        assert_eq!(total.cycles, 500);
        assert_eq!(total.timer_ticks, 60);
    }

    #[test]
    fn test_timer_ticks_dont_depend_on_cpu_rate() {
        let mut slow = Clock::new(1, TIMER_FREQUENCY);
        let mut fast = Clock::new(10_000, TIMER_FREQUENCY);
        let elapsed = Duration::from_millis(250);
        assert_eq!(slow.advance(elapsed).timer_ticks, 15);
        assert_eq!(fast.advance(elapsed).timer_ticks, 15);
    }

    #[test]
    fn test_nothing_due_before_a_full_period() {
        let mut clock = Clock::new(CPU_FREQUENCY, TIMER_FREQUENCY);
        assert_eq!(clock.advance(Duration::from_micros(1999)), Ticks::default());
        assert_eq!(clock.advance(Duration::from_micros(1)).cycles, 1);
    }
}

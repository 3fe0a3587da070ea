use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use castellum_types::errors::GameError;

const MS_PER_HOUR: u128 = 3_600_000;

/// Last persisted state of a single resource stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualReading {
    pub amount: u32,
    pub updated_at: DateTime<Utc>,
    pub hourly: u32,
    pub capacity: u32,
}

impl AccrualReading {
    /// Whole units accrued between `updated_at` and `now`.
    pub fn whole_ticks(&self, now: DateTime<Utc>) -> u64 {
        let elapsed_ms = (now - self.updated_at).num_milliseconds().max(0) as u128;
        let ticks = elapsed_ms * self.hourly as u128 / MS_PER_HOUR;
        ticks.min(u64::MAX as u128) as u64
    }

    /// Amount at `now`, capped by capacity. Pure.
    pub fn project(&self, now: DateTime<Utc>) -> u32 {
        let ticks = self.whole_ticks(now).min(u32::MAX as u64) as u32;
        self.amount.saturating_add(ticks).min(self.capacity)
    }

    /// Milliseconds between two units, `None` when nothing is produced.
    pub fn tick_interval_ms(&self) -> Option<u64> {
        if self.hourly == 0 {
            return None;
        }
        Some((MS_PER_HOUR / self.hourly as u128) as u64)
    }

    /// Instant at which the k-th unit since `updated_at` is accrued.
    pub fn boundary(&self, k: u64) -> Result<DateTime<Utc>, GameError> {
        if self.hourly == 0 {
            return Err(GameError::ClockOverflow);
        }

        let hourly = self.hourly as u128;
        let offset_ms = (k as u128 * MS_PER_HOUR).div_ceil(hourly);
        let offset_ms = i64::try_from(offset_ms).map_err(|_| GameError::ClockOverflow)?;
        let offset = TimeDelta::try_milliseconds(offset_ms).ok_or(GameError::ClockOverflow)?;

        self.updated_at
            .checked_add_signed(offset)
            .ok_or(GameError::ClockOverflow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    /// Not ticking: no production, or cancelled.
    Idle,
    /// Catch-up projection applied, waiting for the first live tick.
    CatchingUp,
    Ticking,
    /// At capacity. Only a reset can move it again.
    Saturated,
}

/// Live view over one resource stock. Holds a single pending deadline at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualClock {
    reading: AccrualReading,
    amount: u32,
    ticks_applied: u64,
    state: ClockState,
    next_deadline: Option<DateTime<Utc>>,
}

impl AccrualClock {
    pub fn new(reading: AccrualReading) -> Self {
        Self {
            reading,
            amount: reading.amount,
            ticks_applied: 0,
            state: ClockState::Idle,
            next_deadline: None,
        }
    }

    pub fn reading(&self) -> &AccrualReading {
        &self.reading
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.next_deadline
    }

    /// Pure projection from the anchored reading, ignoring live ticks.
    pub fn project(&self, now: DateTime<Utc>) -> u32 {
        self.reading.project(now)
    }

    /// Applies the catch-up projection for the time elapsed since the
    /// reading and arms the next deadline.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<ClockState, GameError> {
        let ticks = self.reading.whole_ticks(now);
        self.amount = self.reading.project(now);
        self.ticks_applied = ticks;

        if self.amount >= self.reading.capacity {
            self.state = ClockState::Saturated;
            self.next_deadline = None;
        } else if self.reading.hourly == 0 {
            self.state = ClockState::Idle;
            self.next_deadline = None;
        } else {
            self.next_deadline = Some(self.reading.boundary(ticks + 1)?);
            self.state = ClockState::CatchingUp;
        }

        Ok(self.state)
    }

    /// Applies exactly one unit if the deadline is due. Returns whether a
    /// unit was applied.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<bool, GameError> {
        if matches!(self.state, ClockState::Idle | ClockState::Saturated) {
            return Ok(false);
        }

        match self.next_deadline {
            Some(deadline) if deadline <= now => {}
            _ => return Ok(false),
        }

        self.amount = self.amount.saturating_add(1).min(self.reading.capacity);
        self.ticks_applied += 1;

        if self.amount >= self.reading.capacity {
            self.state = ClockState::Saturated;
            self.next_deadline = None;
            return Ok(true);
        }

        // The unit just applied stays applied even if no deadline follows.
        match self.reading.boundary(self.ticks_applied + 1) {
            Ok(deadline) => {
                self.state = ClockState::Ticking;
                self.next_deadline = Some(deadline);
                Ok(true)
            }
            Err(e) => {
                self.cancel();
                Err(e)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.state = ClockState::Idle;
        self.next_deadline = None;
    }

    /// Replaces the anchored reading (after a spend, a capacity change...)
    /// and starts again from it.
    pub fn reset(
        &mut self,
        reading: AccrualReading,
        now: DateTime<Utc>,
    ) -> Result<ClockState, GameError> {
        self.reading = reading;
        self.amount = reading.amount;
        self.ticks_applied = 0;
        self.start(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn reading(amount: u32, hourly: u32, capacity: u32) -> AccrualReading {
        AccrualReading {
            amount,
            updated_at: epoch(),
            hourly,
            capacity,
        }
    }

    #[test]
    fn test_projection_counts_whole_units() {
        let r = reading(100, 36, 800);
        // one unit every 100 seconds
        assert_eq!(r.project(epoch()), 100);
        assert_eq!(r.project(epoch() + Duration::seconds(99)), 100);
        assert_eq!(r.project(epoch() + Duration::seconds(100)), 101);
        assert_eq!(r.project(epoch() + Duration::hours(1)), 136);
    }

    #[test]
    fn test_projection_saturates_and_is_idempotent() {
        let r = reading(790, 3600, 800);
        let later = epoch() + Duration::hours(5);
        assert_eq!(r.project(later), 800);
        assert_eq!(r.project(later), r.project(later));
    }

    #[test]
    fn test_projection_ignores_time_before_reading() {
        let r = reading(50, 3600, 800);
        assert_eq!(r.project(epoch() - Duration::hours(1)), 50);
    }

    #[test]
    fn test_boundaries_are_anchored_at_reading() {
        let r = reading(0, 7, 800);
        // 3_600_000 / 7 = 514285.71.. ms
        assert_eq!(r.boundary(1).unwrap(), epoch() + Duration::milliseconds(514_286));
        assert_eq!(r.boundary(7).unwrap(), epoch() + Duration::hours(1));
        assert_eq!(r.tick_interval_ms(), Some(514_285));
        assert_eq!(reading(0, 0, 800).tick_interval_ms(), None);
    }

    #[test]
    fn test_start_catches_up_and_arms_next_boundary() {
        let mut clock = AccrualClock::new(reading(100, 36, 800));
        let now = epoch() + Duration::seconds(250);

        assert_eq!(clock.start(now).unwrap(), ClockState::CatchingUp);
        assert_eq!(clock.amount(), 102);
        assert_eq!(
            clock.next_deadline(),
            Some(epoch() + Duration::seconds(300))
        );
    }

    #[test]
    fn test_start_without_production_stays_idle() {
        let mut clock = AccrualClock::new(reading(100, 0, 800));
        assert_eq!(clock.start(epoch() + Duration::hours(3)).unwrap(), ClockState::Idle);
        assert_eq!(clock.amount(), 100);
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn test_start_at_capacity_is_saturated() {
        let mut clock = AccrualClock::new(reading(800, 36, 800));
        assert_eq!(clock.start(epoch()).unwrap(), ClockState::Saturated);
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn test_advance_applies_one_unit_per_due_deadline() {
        let mut clock = AccrualClock::new(reading(100, 36, 800));
        clock.start(epoch()).unwrap();

        // not yet due
        assert!(!clock.advance(epoch() + Duration::seconds(50)).unwrap());
        assert_eq!(clock.amount(), 100);
        assert_eq!(clock.state(), ClockState::CatchingUp);

        assert!(clock.advance(epoch() + Duration::seconds(100)).unwrap());
        assert_eq!(clock.amount(), 101);
        assert_eq!(clock.state(), ClockState::Ticking);
        assert_eq!(
            clock.next_deadline(),
            Some(epoch() + Duration::seconds(200))
        );

        // a late wakeup still applies a single unit
        assert!(clock.advance(epoch() + Duration::seconds(450)).unwrap());
        assert_eq!(clock.amount(), 102);
        assert_eq!(
            clock.next_deadline(),
            Some(epoch() + Duration::seconds(300))
        );
    }

    #[test]
    fn test_live_ticks_agree_with_projection() {
        let mut clock = AccrualClock::new(reading(10, 7, 800));
        clock.start(epoch()).unwrap();

        while let Some(deadline) = clock.next_deadline() {
            if deadline > epoch() + Duration::hours(3) {
                break;
            }
            assert!(clock.advance(deadline).unwrap());
            assert_eq!(clock.amount(), clock.project(deadline));
        }
        assert_eq!(clock.amount(), 10 + 21);
    }

    #[test]
    fn test_advance_saturates() {
        let mut clock = AccrualClock::new(reading(799, 3600, 800));
        clock.start(epoch()).unwrap();

        assert!(clock.advance(epoch() + Duration::seconds(1)).unwrap());
        assert_eq!(clock.amount(), 800);
        assert_eq!(clock.state(), ClockState::Saturated);
        assert_eq!(clock.next_deadline(), None);
        assert!(!clock.advance(epoch() + Duration::hours(1)).unwrap());
        assert_eq!(clock.amount(), 800);
    }

    #[test]
    fn test_overflowing_deadline_keeps_the_applied_unit() {
        let updated_at = DateTime::<Utc>::MAX_UTC - Duration::seconds(1);
        let mut clock = AccrualClock::new(AccrualReading {
            amount: 0,
            updated_at,
            hourly: 3600,
            capacity: 800,
        });
        assert_eq!(clock.start(updated_at).unwrap(), ClockState::CatchingUp);

        let due = DateTime::<Utc>::MAX_UTC;
        assert_eq!(clock.next_deadline(), Some(due));
        assert_eq!(clock.advance(due), Err(GameError::ClockOverflow));
        assert_eq!(clock.amount(), 1);
        assert_eq!(clock.state(), ClockState::Idle);
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn test_cancel_stops_mutation() {
        let mut clock = AccrualClock::new(reading(100, 36, 800));
        clock.start(epoch()).unwrap();
        clock.cancel();

        assert_eq!(clock.state(), ClockState::Idle);
        assert_eq!(clock.next_deadline(), None);
        assert!(!clock.advance(epoch() + Duration::hours(1)).unwrap());
        assert_eq!(clock.amount(), 100);
    }

    #[test]
    fn test_reset_reanchors_the_clock() {
        let mut clock = AccrualClock::new(reading(100, 36, 800));
        clock.start(epoch()).unwrap();

        let now = epoch() + Duration::seconds(1000);
        let spent = AccrualReading {
            amount: 20,
            updated_at: now,
            hourly: 36,
            capacity: 800,
        };
        assert_eq!(clock.reset(spent, now).unwrap(), ClockState::CatchingUp);
        assert_eq!(clock.amount(), 20);
        assert_eq!(clock.next_deadline(), Some(now + Duration::seconds(100)));
    }
}

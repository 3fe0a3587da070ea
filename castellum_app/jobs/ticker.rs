//! Live resource counters. Every resource of a watched village gets its own
//! [`AccrualClock`], driven by a tokio task that sleeps until the clock's
//! next deadline and applies one unit per wakeup.

use chrono::{DateTime, TimeDelta, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::{debug, error};

use castellum_game::models::{
    accrual::{AccrualClock, AccrualReading, ClockState},
    buildings::BuildingCatalog,
    village::Village,
};
use castellum_types::{
    common::{ResourceKind, ResourceSet},
    errors::{ApplicationError, GameError},
};

/// Pins a wall-clock time to a tokio [`Instant`], so clock deadlines can be
/// slept on and tests can drive time with a paused runtime.
#[derive(Debug, Clone, Copy)]
pub struct TimeBase {
    instant: Instant,
    at: DateTime<Utc>,
}

impl TimeBase {
    pub fn now() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(at: DateTime<Utc>) -> Self {
        Self {
            instant: Instant::now(),
            at,
        }
    }

    pub fn current(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.instant.elapsed()).unwrap_or(TimeDelta::zero());
        self.at
            .checked_add_signed(elapsed)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn instant_for(&self, deadline: DateTime<Utc>) -> Instant {
        match (deadline - self.at).to_std() {
            Ok(offset) => self.instant + offset,
            Err(_) => self.instant,
        }
    }
}

/// A running clock. Dropping the handle aborts its task.
pub struct ClockHandle {
    clock: Arc<Mutex<AccrualClock>>,
    task: JoinHandle<()>,
    time_base: TimeBase,
}

impl ClockHandle {
    pub fn spawn(reading: AccrualReading, time_base: TimeBase) -> Result<Self, GameError> {
        let mut clock = AccrualClock::new(reading);
        clock.start(time_base.current())?;

        let clock = Arc::new(Mutex::new(clock));
        let task = tokio::spawn(drive(clock.clone(), time_base));

        Ok(Self {
            clock,
            task,
            time_base,
        })
    }

    pub async fn snapshot(&self) -> AccrualClock {
        self.clock.lock().await.clone()
    }

    pub async fn amount(&self) -> u32 {
        self.clock.lock().await.amount()
    }

    pub async fn state(&self) -> ClockState {
        self.clock.lock().await.state()
    }

    /// Re-anchors the clock on a new reading and restarts its task.
    pub async fn reset(&mut self, reading: AccrualReading) -> Result<ClockState, GameError> {
        let mut clock = self.clock.lock().await;
        self.task.abort();

        let state = match clock.reset(reading, self.time_base.current()) {
            Ok(state) => state,
            Err(e) => {
                clock.cancel();
                return Err(e);
            }
        };
        drop(clock);

        self.task = tokio::spawn(drive(self.clock.clone(), self.time_base));
        Ok(state)
    }

    pub async fn cancel(&self) {
        let mut clock = self.clock.lock().await;
        self.task.abort();
        clock.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn drive(clock: Arc<Mutex<AccrualClock>>, time_base: TimeBase) {
    loop {
        let Some(deadline) = clock.lock().await.next_deadline() else {
            break;
        };
        time::sleep_until(time_base.instant_for(deadline)).await;

        let mut clock = clock.lock().await;
        if let Err(e) = clock.advance(time_base.current()) {
            error!(error = %e, "Accrual clock stopped");
            clock.cancel();
            break;
        }
    }
}

/// Registry of the running clocks, keyed by village and resource.
pub struct AccrualTicker {
    catalog: Arc<BuildingCatalog>,
    time_base: TimeBase,
    clocks: Mutex<HashMap<(u32, ResourceKind), ClockHandle>>,
}

impl AccrualTicker {
    pub fn new(catalog: Arc<BuildingCatalog>, time_base: TimeBase) -> Self {
        Self {
            catalog,
            time_base,
            clocks: Mutex::new(HashMap::new()),
        }
    }

    /// Starts the clocks of a village, or re-anchors them if the village is
    /// already watched. Call it again after every change to the stored state.
    pub async fn watch(&self, village: &Village) -> Result<(), ApplicationError> {
        let readings = village.accrual_readings(&self.catalog)?;
        let mut clocks = self.clocks.lock().await;

        for (kind, reading) in readings {
            match clocks.get_mut(&(village.id, kind)) {
                Some(handle) => {
                    handle.reset(reading).await?;
                }
                None => {
                    let handle = ClockHandle::spawn(reading, self.time_base)?;
                    clocks.insert((village.id, kind), handle);
                }
            }
        }

        debug!(village_id = village.id, "Watching village resources");
        Ok(())
    }

    pub async fn unwatch(&self, village_id: u32) {
        self.clocks
            .lock()
            .await
            .retain(|(id, _), _| *id != village_id);
    }

    /// Live amounts, `None` if the village is not watched.
    pub async fn resources(&self, village_id: u32) -> Option<ResourceSet> {
        let clocks = self.clocks.lock().await;
        let mut resources = ResourceSet::default();

        for kind in ResourceKind::ALL {
            let handle = clocks.get(&(village_id, kind))?;
            resources.set(kind, handle.amount().await);
        }
        Some(resources)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use std::time::Duration;

    use castellum_game::test_utils::{VillageFactoryOptions, village_factory};

    use super::*;

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

    #[tokio::test(start_paused = true)]
    async fn test_clock_ticks_one_unit_per_interval() {
        // one unit per second
        let handle = ClockHandle::spawn(reading(100, 3600, 800), TimeBase::starting_at(epoch()))
            .unwrap();
        assert_eq!(handle.state().await, ClockState::CatchingUp);

        time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(handle.amount().await, 110);
        assert_eq!(handle.state().await, ClockState::Ticking);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_catches_up_and_saturates() {
        let time_base = TimeBase::starting_at(epoch() + TimeDelta::seconds(5));
        let handle = ClockHandle::spawn(reading(790, 3600, 800), time_base).unwrap();
        assert_eq!(handle.amount().await, 795);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(handle.amount().await, 800);
        assert_eq!(handle.state().await, ClockState::Saturated);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_clock_stops_ticking() {
        let handle = ClockHandle::spawn(reading(0, 3600, 800), TimeBase::starting_at(epoch()))
            .unwrap();

        time::sleep(Duration::from_millis(2_500)).await;
        handle.cancel().await;
        time::sleep(Duration::from_secs(10)).await;

        assert_eq!(handle.amount().await, 2);
        assert_eq!(handle.state().await, ClockState::Idle);
        assert_eq!(handle.snapshot().await.next_deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_reanchors_the_clock() {
        let time_base = TimeBase::starting_at(epoch());
        let mut handle = ClockHandle::spawn(reading(100, 3600, 800), time_base).unwrap();
        time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(handle.amount().await, 105);

        // 50 spent at the current time, production doubled
        let spent = AccrualReading {
            amount: 55,
            updated_at: time_base.current(),
            hourly: 7200,
            capacity: 800,
        };
        assert_eq!(handle.reset(spent).await.unwrap(), ClockState::CatchingUp);

        time::sleep(Duration::from_millis(2_250)).await;
        assert_eq!(handle.amount().await, 59);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_clock_stops_without_affecting_others() {
        // the second deadline is past the last representable instant
        let edge = DateTime::<Utc>::MAX_UTC - TimeDelta::seconds(1);
        let failing = ClockHandle::spawn(
            AccrualReading {
                amount: 0,
                updated_at: edge,
                hourly: 3600,
                capacity: 800,
            },
            TimeBase::starting_at(edge),
        )
        .unwrap();
        let healthy = ClockHandle::spawn(reading(0, 3600, 800), TimeBase::starting_at(epoch()))
            .unwrap();

        time::sleep(Duration::from_millis(3_500)).await;

        assert_eq!(failing.amount().await, 1);
        assert_eq!(failing.state().await, ClockState::Idle);
        assert!(failing.is_finished());

        assert_eq!(healthy.amount().await, 3);
        assert_eq!(healthy.state().await, ClockState::Ticking);
        assert!(!healthy.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_time_base_saturates_at_the_last_instant() {
        let time_base = TimeBase::starting_at(DateTime::<Utc>::MAX_UTC - TimeDelta::seconds(1));
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(time_base.current(), DateTime::<Utc>::MAX_UTC);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_production_stays_idle() {
        let handle = ClockHandle::spawn(reading(10, 0, 800), TimeBase::starting_at(epoch()))
            .unwrap();
        time::sleep(Duration::from_secs(3600)).await;

        assert_eq!(handle.amount().await, 10);
        assert_eq!(handle.state().await, ClockState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_tracks_watched_villages() {
        let catalog = Arc::new(BuildingCatalog::standard());
        let village = village_factory(VillageFactoryOptions {
            now: Some(epoch()),
            ..Default::default()
        });
        let ticker = AccrualTicker::new(catalog, TimeBase::starting_at(epoch()));

        assert_eq!(ticker.resources(village.id).await, None);
        ticker.watch(&village).await.unwrap();
        assert_eq!(
            ticker.resources(village.id).await,
            Some(ResourceSet::splat(750))
        );

        time::sleep(Duration::from_secs(1801)).await;
        assert_eq!(
            ticker.resources(village.id).await,
            Some(ResourceSet::new(756, 756, 756, 757))
        );

        ticker.unwatch(village.id).await;
        assert_eq!(ticker.resources(village.id).await, None);
    }
}

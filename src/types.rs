use chrono::{prelude::DateTime, Local, NaiveDate, Timelike};
use std::time::{SystemTime, UNIX_EPOCH};

// A Tick is a timestamp in milliseconds since the unix epoch.
pub type Tick = u64;

pub const MILLISECONDS: Tick = 1;
pub const SECONDS: Tick = 1000 * MILLISECONDS;
pub const MINUTES: Tick = 60 * SECONDS;
pub const HOURS: Tick = 60 * MINUTES;

pub type ExhibitionId = u32;
pub type BracketId = uuid::Uuid;

pub type AppResult<T> = Result<T, anyhow::Error>;

pub trait SystemTimeTick {
    fn now() -> Self;
    fn from_system_time(time: SystemTime) -> Self;
    fn as_secs(&self) -> Tick;
    fn as_system_time(&self) -> SystemTime;
    fn as_local_date(&self) -> NaiveDate;
    fn formatted_as_time(&self) -> String;
    fn formatted(&self) -> String;
}

impl SystemTimeTick for Tick {
    fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    fn from_system_time(time: SystemTime) -> Tick {
        time.duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as Tick)
            .unwrap_or_default()
    }

    fn as_secs(&self) -> Tick {
        self / SECONDS
    }

    fn as_system_time(&self) -> SystemTime {
        UNIX_EPOCH + std::time::Duration::from_millis(*self)
    }

    fn as_local_date(&self) -> NaiveDate {
        let dt: DateTime<Local> = self.as_system_time().into();
        dt.date_naive()
    }

    fn formatted_as_time(&self) -> String {
        let dt: DateTime<Local> = self.as_system_time().into();
        format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
    }

    fn formatted(&self) -> String {
        let millis = self % SECONDS;
        let seconds = self.as_secs() % 60;
        let minutes = (self / MINUTES) % 60;
        let hours = self / HOURS;

        if hours > 0 {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        } else if minutes > 0 {
            format!("{minutes:02}:{seconds:02}")
        } else {
            format!("{seconds}.{:01}s", millis / 100)
        }
    }
}

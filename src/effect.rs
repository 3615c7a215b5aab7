//! Effects - side effects declared by the reducer

use std::time::Duration;

use crate::city::City;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run one fetch cycle (current conditions + forecast) for the city
    FetchWeather { city: City },
    /// Replace the fetch timer: fire `SessionPollDue(session)` after `after`
    SchedulePoll { session: u64, after: Duration },
    /// Replace the alert-check timer: fire `SessionAlertCheckDue(session)` after `after`
    ScheduleAlertCheck { session: u64, after: Duration },
}

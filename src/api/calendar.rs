use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter;
use crate::{
    consts,
    models::{
        calendar::{AlertEvent, EventStatus, EventType},
        police::Urgency,
    },
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    #[serde(default, rename = "type", deserialize_with = "filter::selector")]
    pub event_type: Option<EventType>,
    #[serde(default, deserialize_with = "filter::selector")]
    pub priority: Option<Urgency>,
    /// Day shown in the detail panel, defaults to today
    pub date: Option<NaiveDate>,
}

pub fn filter_events(events: Vec<AlertEvent>, query: &CalendarQuery) -> Vec<AlertEvent> {
    events
        .into_iter()
        .filter(|e| {
            filter::matches_selector(query.event_type.as_ref(), &e.event_type)
                && filter::matches_selector(query.priority.as_ref(), &e.priority)
        })
        .collect()
}

/// After today and within the upcoming window
pub fn is_upcoming(event: &AlertEvent, today: NaiveDate) -> bool {
    let days = event.date.signed_duration_since(today).num_days();
    days > 0 && days <= consts::CALENDAR_UPCOMING_WINDOW_DAYS
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct CalendarStats {
    pub today: usize,
    pub upcoming: usize,
    pub overdue: usize,
    pub total: usize,
}

pub fn calendar_stats(events: &[AlertEvent], today: NaiveDate) -> CalendarStats {
    CalendarStats {
        today: events.iter().filter(|e| e.date == today).count(),
        upcoming: events.iter().filter(|e| is_upcoming(e, today)).count(),
        overdue: events
            .iter()
            .filter(|e| e.status == EventStatus::Vencido)
            .count(),
        total: events.len(),
    }
}

#[derive(Debug, Serialize)]
pub struct CalendarPage {
    /// Filtered events by ascending date
    pub events: Vec<AlertEvent>,
    pub selected_date: NaiveDate,
    pub selected_day_events: Vec<AlertEvent>,
    pub stats: CalendarStats,
}

pub fn build_calendar_page(
    events: Vec<AlertEvent>,
    query: &CalendarQuery,
    today: NaiveDate,
) -> CalendarPage {
    let stats = calendar_stats(&events, today);
    let selected_date = query.date.unwrap_or(today);

    let mut events = filter_events(events, query);
    events.sort_by_key(|e| e.date);

    let selected_day_events = events
        .iter()
        .filter(|e| e.date == selected_date)
        .cloned()
        .collect();

    CalendarPage {
        events,
        selected_date,
        selected_day_events,
        stats,
    }
}

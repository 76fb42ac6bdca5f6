//! Client-side payload translation applied during a refresh round.
//!
//! The backend delivers some fields in raw form: checkpoint codes instead
//! of display names, partially masked plates, and structured plate-clone
//! reports instead of display strings. These helpers normalize them into
//! what the dashboard shows.

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::warn;

use crate::config;
use crate::models::{AlertRecord, CloneReport, RawWarning};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Translate a checkpoint code to its display name.
///
/// Unknown codes are logged and passed through untranslated so new backend
/// stations never silently disappear from the UI. Values that already are
/// display names pass through without a warning.
pub fn station_display_name(raw: &str) -> String {
    let table = config::station_names();
    if let Some(name) = table.get(raw) {
        return (*name).to_string();
    }
    if !table.values().any(|name| *name == raw) {
        warn!(code = raw, "checkpoint code missing from translation table, passing through");
    }
    raw.to_string()
}

/// Replace masked plate characters (`*`/`?`) with randomized digits.
///
/// Demo deployments deliver privacy-masked plates; the big screen shows a
/// plausible-looking plate instead of asterisks.
pub fn fill_masked_plate(plate: &str) -> String {
    let mut rng = rand::thread_rng();
    plate
        .chars()
        .map(|c| {
            if c == '*' || c == '?' {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}

/// Turn one raw warning entry into a display-ready [`AlertRecord`].
///
/// Structured reports become a trajectory message with the elapsed minutes
/// between the two sightings; pre-formatted strings from older backends
/// pass through as the message with the remaining fields left empty.
pub fn synthesize_warning(raw: RawWarning) -> AlertRecord {
    match raw {
        RawWarning::Formatted(message) => AlertRecord {
            plate: String::new(),
            message,
            time: String::new(),
            duration: String::new(),
        },
        RawWarning::Report(report) => synthesize_report(report),
    }
}

fn synthesize_report(report: CloneReport) -> AlertRecord {
    let prev = station_display_name(&report.prev_kkmc);
    let curr = station_display_name(&report.curr_kkmc);

    let (message, duration) = match elapsed_minutes(&report.prev_time, &report.curr_time) {
        Some(minutes) => (
            format!("{}分钟内从 [{}] 移动到 [{}]", minutes, prev, curr),
            format!("{}分钟", minutes),
        ),
        None => {
            warn!(
                prev_time = %report.prev_time,
                curr_time = %report.curr_time,
                "unparseable sighting timestamps in plate-clone report"
            );
            (format!("从 [{}] 移动到 [{}]", prev, curr), "-".to_string())
        }
    };

    AlertRecord {
        plate: fill_masked_plate(&report.hphm),
        message,
        time: report.curr_time,
        duration,
    }
}

/// Whole minutes elapsed between two `YYYY-MM-DD HH:MM:SS` timestamps.
/// Clamped at zero for out-of-order sightings.
fn elapsed_minutes(from: &str, to: &str) -> Option<i64> {
    let from = NaiveDateTime::parse_from_str(from, TIME_FORMAT).ok()?;
    let to = NaiveDateTime::parse_from_str(to, TIME_FORMAT).ok()?;
    Some((to - from).num_minutes().max(0))
}

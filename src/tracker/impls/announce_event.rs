use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;

impl FromStr for AnnounceEvent {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" | "empty" => Ok(AnnounceEvent::None),
            "started" => Ok(AnnounceEvent::Started),
            "stopped" => Ok(AnnounceEvent::Stopped),
            "completed" => Ok(AnnounceEvent::Completed),
            _ => Err(TrackerError::MalformedRequest(String::from("invalid event"))),
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AnnounceEvent::None => write!(f, "none"),
            AnnounceEvent::Completed => write!(f, "completed"),
            AnnounceEvent::Started => write!(f, "started"),
            AnnounceEvent::Stopped => write!(f, "stopped"),
        }
    }
}

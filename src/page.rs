use chrono::{Datelike, Utc};

pub const OWNER: &str = "Kamil Solanki";
pub const TITLE: &str = "Kamil Solanki | Front-End Developer";
pub const AWAY_TITLE: &str = "Come Back! - Kamil Solanki";

/// Document title, switched while the tab is in the background.
pub fn page_title(hidden: bool) -> &'static str {
    if hidden {
        AWAY_TITLE
    } else {
        TITLE
    }
}

pub fn copyright_year() -> i32 {
    Utc::now().year()
}

pub fn build_time() -> &'static str {
    env!("BUILD_TIME")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_tracks_visibility() {
        assert_eq!(page_title(false), "Kamil Solanki | Front-End Developer");
        assert_eq!(page_title(true), "Come Back! - Kamil Solanki");
    }

    #[test]
    fn build_time_is_stamped() {
        assert!(chrono::DateTime::parse_from_rfc3339(build_time()).is_ok());
        assert!(copyright_year() >= 2024);
    }
}

use std::env;

/// One week. Larger values overflow `chrono::Duration`.
pub const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub submit_delay_ms: u64,
    pub session_ttl_minutes: i64,
    pub business_name: String,
    pub business_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            submit_delay_ms: 1500,
            session_ttl_minutes: 30,
            business_name: "SerenityScheduler".to_string(),
            business_address: "123 Beauty Lane, Serene City, 12345".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            submit_delay_ms: env::var("SUBMIT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.submit_delay_ms),
            session_ttl_minutes: parse_session_ttl(env::var("SESSION_TTL_MINUTES").ok().as_deref())
                .unwrap_or(defaults.session_ttl_minutes),
            business_name: env::var("BUSINESS_NAME").unwrap_or(defaults.business_name),
            business_address: env::var("BUSINESS_ADDRESS").unwrap_or(defaults.business_address),
        }
    }
}

fn parse_session_ttl(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|m| *m > 0)
        .map(|m| m.min(MAX_SESSION_TTL_MINUTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_parsing() {
        assert_eq!(parse_session_ttl(Some("45")), Some(45));
        assert_eq!(parse_session_ttl(Some("0")), None);
        assert_eq!(parse_session_ttl(Some("-5")), None);
        assert_eq!(parse_session_ttl(Some("soon")), None);
        assert_eq!(parse_session_ttl(None), None);
    }

    #[test]
    fn test_huge_session_ttl_is_capped() {
        let ttl = parse_session_ttl(Some("9223372036854775807")).unwrap();
        assert_eq!(ttl, MAX_SESSION_TTL_MINUTES);
        assert!(chrono::Duration::try_minutes(ttl).is_some());
    }
}

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use std::str::FromStr;
use std::time::Duration;

use crate::scheduling::zone::PracticeZone;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub app_env: String,
    pub app_name: String,
    /// Zone the practice's business hours are kept in.
    pub practice_zone: PracticeZone,
    /// Longest inclusive date range one availability query may cover.
    pub max_availability_days: i64,
    pub slot_registry_capacity: u64,
    pub slot_registry_ttl: Duration,
    /// Refuse bookings for slot ids no availability query handed out.
    pub require_registered_slot: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practice_zone = match lookup("PRACTICE_TIMEZONE") {
            Some(raw) => {
                let tz: Tz = raw.trim().parse().map_err(|e| {
                    anyhow!("invalid value for PRACTICE_TIMEZONE: {:?} ({})", raw, e)
                })?;
                PracticeZone::Named(tz)
            }
            None => PracticeZone::Local,
        };

        let max_availability_days = parse_or(&lookup, "MAX_AVAILABILITY_DAYS", 90)?;
        if max_availability_days < 1 {
            return Err(anyhow!(
                "MAX_AVAILABILITY_DAYS must be at least 1, got {}",
                max_availability_days
            ));
        }

        Ok(Settings {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "APP_PORT", 8000)?,
            app_env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            app_name: lookup("APP_NAME")
                .unwrap_or_else(|| "Healthcare Appointment API".to_string()),
            practice_zone,
            max_availability_days,
            slot_registry_capacity: parse_or(&lookup, "SLOT_REGISTRY_CAPACITY", 10_000)?,
            slot_registry_ttl: Duration::from_secs(parse_or(
                &lookup,
                "SLOT_REGISTRY_TTL_SECS",
                3_600,
            )?),
            require_registered_slot: parse_or(&lookup, "REQUIRE_REGISTERED_SLOT", false)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid value for {}: {:?}", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.app_env, "development");
        assert_eq!(settings.practice_zone, PracticeZone::Local);
        assert_eq!(settings.max_availability_days, 90);
        assert_eq!(settings.slot_registry_ttl, Duration::from_secs(3_600));
        assert!(!settings.require_registered_slot);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = settings_from(&[("APP_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));

        let err = settings_from(&[("PRACTICE_TIMEZONE", "America/Nowhere")]).unwrap_err();
        assert!(err.to_string().contains("PRACTICE_TIMEZONE"));

        let err = settings_from(&[("MAX_AVAILABILITY_DAYS", "0")]).unwrap_err();
        assert!(err.to_string().contains("MAX_AVAILABILITY_DAYS"));
    }

    #[test]
    fn reads_dotenv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "APP_PORT=9100").unwrap();
        writeln!(file, "PRACTICE_TIMEZONE=America/Toronto").unwrap();
        writeln!(file, "MAX_AVAILABILITY_DAYS=31").unwrap();
        writeln!(file, "REQUIRE_REGISTERED_SLOT=true").unwrap();

        let map: HashMap<String, String> = dotenv::from_path_iter(file.path())
            .unwrap()
            .map(|entry| entry.unwrap())
            .collect();
        let settings = Settings::from_lookup(|key| map.get(key).cloned()).unwrap();

        assert_eq!(settings.port, 9100);
        assert_eq!(
            settings.practice_zone,
            PracticeZone::Named(chrono_tz::America::Toronto)
        );
        assert_eq!(settings.max_availability_days, 31);
        assert!(settings.require_registered_slot);
    }
}

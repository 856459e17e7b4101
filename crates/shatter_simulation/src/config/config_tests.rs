//! Tests for ShatterConfig.

#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, ShatterConfig};

    #[test]
    fn test_default_config_is_valid() {
        let config = ShatterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shot_radius, 8.0);
        assert_eq!(config.flight_ttl, 12_000);
        assert!((config.inner_radius() - 6.4).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShatterConfig::from_json_str(r#"{ "shot_radius": 12.0, "seed": 7 }"#)
            .expect("partial config should parse");

        assert_eq!(config.shot_radius, 12.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.inner_ratio, 0.8);
        assert_eq!(config.cooldown_secs, 0.8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_radius = ShatterConfig { shot_radius: 0.0, ..Default::default() };
        assert!(matches!(bad_radius.validate(), Err(ConfigError::NonPositiveRadius(_))));

        let bad_ratio = ShatterConfig { inner_ratio: 1.5, ..Default::default() };
        assert!(matches!(bad_ratio.validate(), Err(ConfigError::InnerRatioOutOfRange(_))));

        let bad_cooldown = ShatterConfig {
            resolve_delay_secs: 1.0,
            cooldown_secs: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            bad_cooldown.validate(),
            Err(ConfigError::CooldownShorterThanResolve { .. })
        ));

        let bad_ttl = ShatterConfig { flight_ttl: 100_000, ..Default::default() };
        assert!(matches!(bad_ttl.validate(), Err(ConfigError::FlightTtlOutOfRange { .. })));

        // Отрицательный jitter → пустой gen_range при первом попадании
        let result = ShatterConfig::from_json_str(r#"{ "z_jitter": -0.1 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSpread { name: "z_jitter", .. })
        ));

        let bad_disc = ShatterConfig { disc_radius: f32::NAN, ..Default::default() };
        assert!(matches!(
            bad_disc.validate(),
            Err(ConfigError::InvalidSpread { name: "disc_radius", .. })
        ));

        let bad_speed = ShatterConfig { speed_factor: f32::INFINITY, ..Default::default() };
        assert!(matches!(
            bad_speed.validate(),
            Err(ConfigError::InvalidSpread { name: "speed_factor", .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = ShatterConfig::from_json_str("{ shot_radius: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

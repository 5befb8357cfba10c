//! # Schema Flows
//!
//! The signup schema driven through the bare form engine, with a city cache
//! filled from the scripted directory.

#[cfg(test)]
mod tests {
    use sf_01_form_engine::{FormEngine, EMAIL_INVALID_MESSAGE, REQUIRED_MESSAGE};
    use sf_02_location_directory::{CityCache, DirectoryConfig, InMemoryStorage, LocationSession};
    use sf_03_signup_form::{
        signup_schema, CITY, EMAIL, FIELD_KEYS, FIRST_NAME, LAST_NAME, PASSWORD, STATE,
    };

    use crate::integration::directory_fixture;

    async fn fetched_cities(states: &[&str]) -> CityCache {
        let session = LocationSession::new(
            DirectoryConfig::for_testing(),
            directory_fixture(),
            InMemoryStorage::new(),
        );
        session.bootstrap().await;
        for state in states {
            session.fetch_cities_for_state(state).await;
        }
        session.city_cache()
    }

    #[test]
    fn test_blank_form_fails_every_field() {
        let mut engine = FormEngine::initialize(signup_schema());

        assert!(!engine.validate_form(&CityCache::new()));
        for key in FIELD_KEYS {
            assert_eq!(engine.error(key).unwrap(), Some(REQUIRED_MESSAGE), "{key}");
        }
    }

    #[test]
    fn test_set_value_and_validate_matches_separate_steps() {
        let cities = CityCache::new();
        let mut combined = FormEngine::initialize(signup_schema());
        let mut stepwise = FormEngine::initialize(signup_schema());

        let valid = combined
            .set_value_and_validate(EMAIL, "not-an-email", &cities)
            .unwrap();
        stepwise.set_value(EMAIL, "not-an-email").unwrap();
        let stepwise_valid = stepwise.validate(EMAIL, &cities).unwrap();

        assert!(!valid);
        assert_eq!(valid, stepwise_valid);
        assert_eq!(combined.state(), stepwise.state());
        assert_eq!(combined.error(EMAIL).unwrap(), Some(EMAIL_INVALID_MESSAGE));
    }

    #[test]
    fn test_clear_error_then_validate_restores_message() {
        let cities = CityCache::new();
        let mut engine = FormEngine::initialize(signup_schema());

        assert!(!engine.validate(FIRST_NAME, &cities).unwrap());
        engine.clear_error(FIRST_NAME).unwrap();
        assert_eq!(engine.error(FIRST_NAME).unwrap(), None);

        assert!(!engine.validate(FIRST_NAME, &cities).unwrap());
        assert_eq!(engine.error(FIRST_NAME).unwrap(), Some(REQUIRED_MESSAGE));
    }

    #[tokio::test]
    async fn test_city_rule_follows_fetched_cities() {
        let cities = fetched_cities(&["Texas", "Wyoming"]).await;
        let mut engine = FormEngine::initialize(signup_schema());

        engine.set_value(STATE, "Wyoming").unwrap();
        assert!(engine.validate(CITY, &cities).unwrap());

        engine.set_value(STATE, "Texas").unwrap();
        assert!(!engine.validate(CITY, &cities).unwrap());
        assert!(engine.set_value_and_validate(CITY, "Austin", &cities).unwrap());

        engine.set_value(STATE, "Ohio").unwrap();
        engine.set_value(CITY, "").unwrap();
        assert!(!engine.validate(CITY, &cities).unwrap());
    }

    #[tokio::test]
    async fn test_complete_form_passes_and_keeps_order() {
        let cities = fetched_cities(&["Wyoming"]).await;
        let mut engine = FormEngine::initialize(signup_schema());

        for (key, value) in [
            (FIRST_NAME, "Jane"),
            (LAST_NAME, "Doe"),
            (STATE, "Wyoming"),
            (EMAIL, "jane.doe@example.com"),
            (PASSWORD, "correct horse"),
        ] {
            engine.set_value(key, value).unwrap();
        }

        assert!(engine.validate_form(&cities));
        let values = engine.get_values();
        assert_eq!(values.keys().map(String::as_str).collect::<Vec<_>>(), FIELD_KEYS.to_vec());
        assert_eq!(values[CITY], "");

        engine.reset();
        assert_eq!(engine.value(FIRST_NAME).unwrap(), "");
        assert!(!engine.validate_form(&cities));
    }
}

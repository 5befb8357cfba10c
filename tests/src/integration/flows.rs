//! # Signup Flows
//!
//! End-to-end journeys through the signup form backed by a scripted
//! directory service.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use sf_02_location_directory::{
        DirectoryConfig, InMemoryStorage, LocationSession, MockTransport, ResourceStatus,
    };
    use sf_03_signup_form::{SignupError, SignupForm, CITY, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD};

    use crate::integration::{cities_url, directory_fixture, states_url, token_url};

    type Form = SignupForm<MockTransport, InMemoryStorage>;

    async fn open_form(transport: &MockTransport) -> Form {
        let session = Arc::new(LocationSession::new(
            DirectoryConfig::for_testing(),
            transport.clone(),
            InMemoryStorage::new(),
        ));
        session.bootstrap().await;
        SignupForm::new(session)
    }

    fn fill_identity(form: &mut Form) {
        form.change_text(FIRST_NAME, "Jane").unwrap();
        form.change_text(LAST_NAME, "Doe").unwrap();
        form.change_text(EMAIL, "jane.doe@example.com").unwrap();
        form.change_text(PASSWORD, "correct horse").unwrap();
    }

    // =========================================================================
    // HAPPY PATHS
    // =========================================================================

    #[tokio::test]
    async fn test_full_signup_with_city() {
        let transport = directory_fixture();
        let mut form = open_form(&transport).await;

        fill_identity(&mut form);
        form.select_state("Texas").await.unwrap();
        assert_eq!(form.city_dropdown().options, vec!["Austin", "Houston"]);
        form.select_city("Houston").unwrap();

        let values = form.submit().unwrap();
        assert_eq!(values.state, "Texas");
        assert_eq!(values.city, "Houston");
        assert_eq!(values.email, "jane.doe@example.com");

        assert_eq!(transport.call_count(&token_url()), 1);
        assert_eq!(transport.call_count(&states_url()), 1);
        assert_eq!(transport.call_count(&cities_url("Texas")), 1);
    }

    #[tokio::test]
    async fn test_signup_in_state_without_cities() {
        let transport = directory_fixture();
        let mut form = open_form(&transport).await;

        fill_identity(&mut form);
        form.select_state("Wyoming").await.unwrap();

        let city = form.city_dropdown();
        assert!(city.disabled);
        assert_eq!(city.placeholder(), "N/A");

        let values = form.submit().unwrap();
        assert_eq!(values.city, "");
    }

    #[tokio::test]
    async fn test_switching_states_reuses_cache() {
        let transport = directory_fixture();
        let mut form = open_form(&transport).await;

        form.select_state("Texas").await.unwrap();
        form.select_city("Austin").unwrap();
        form.select_state("Wyoming").await.unwrap();
        form.select_state("Texas").await.unwrap();

        assert_eq!(form.value(CITY).unwrap(), "");
        assert_eq!(transport.call_count(&cities_url("Texas")), 1);
        assert_eq!(transport.call_count(&cities_url("Wyoming")), 1);
    }

    // =========================================================================
    // FAILURES
    // =========================================================================

    #[tokio::test]
    async fn test_cities_outage_keeps_city_required() {
        let transport = directory_fixture();
        let mut form = open_form(&transport).await;

        fill_identity(&mut form);
        form.select_state("Ohio").await.unwrap();

        let session = form.session();
        assert_eq!(session.cities_status("Ohio"), ResourceStatus::Failed);
        assert_eq!(
            form.state_dropdown().error.as_deref(),
            Some("Error fetching cities for state Ohio.")
        );
        assert_eq!(
            form.submit(),
            Err(SignupError::Invalid {
                fields: vec![CITY.to_string()]
            })
        );
    }

    #[tokio::test]
    async fn test_token_outage_blocks_everything_downstream() {
        let transport = directory_fixture();
        transport.fail(token_url());
        let mut form = open_form(&transport).await;

        assert!(form.state_dropdown().options.is_empty());
        form.select_state("Texas").await.unwrap();

        assert_eq!(transport.call_count(&states_url()), 0);
        assert_eq!(transport.call_count(&cities_url("Texas")), 0);
        assert_eq!(
            form.session().error().as_deref(),
            Some("Error fetching authentication token.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_production_retry_schedule_for_cities() {
        let transport = directory_fixture();
        let session = LocationSession::new(
            DirectoryConfig {
                base_url: crate::integration::BASE_URL.to_string(),
                ..DirectoryConfig::default()
            },
            transport.clone(),
            InMemoryStorage::new(),
        );
        session.ensure_token().await;

        let started = tokio::time::Instant::now();
        session.fetch_cities_for_state("Ohio").await;

        assert_eq!(transport.call_count(&cities_url("Ohio")), 4);
        assert!(started.elapsed() >= Duration::from_millis(3 * 2000));
    }

    // =========================================================================
    // CONCURRENCY
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_bootstraps_share_requests() {
        let transport = directory_fixture().with_latency(Duration::from_millis(25));
        let session = LocationSession::new(
            DirectoryConfig::for_testing(),
            transport.clone(),
            InMemoryStorage::new(),
        );

        tokio::join!(session.bootstrap(), session.bootstrap());

        assert_eq!(transport.call_count(&token_url()), 1);
        assert_eq!(transport.call_count(&states_url()), 1);
        assert_eq!(session.states().len(), 3);
        assert!(!session.loading());
    }
}

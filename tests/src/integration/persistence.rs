//! # Persistence Flows
//!
//! The auth token outlives a session when file storage backs it.

#[cfg(test)]
mod tests {
    use sf_02_location_directory::{
        DirectoryConfig, DurableStorage, FileStorage, LocationSession, ResourceStatus,
        AUTH_TOKEN_KEY,
    };
    use signup_runtime::{RuntimeConfig, SignupRuntime};
    use tempfile::TempDir;

    use crate::integration::{directory_fixture, token_url};

    #[tokio::test]
    async fn test_token_survives_restart() {
        let dir = TempDir::new().unwrap();
        let transport = directory_fixture();

        let first = LocationSession::new(
            DirectoryConfig::for_testing(),
            transport.clone(),
            FileStorage::in_dir(dir.path()).unwrap(),
        );
        first.bootstrap().await;
        drop(first);

        let second = LocationSession::new(
            DirectoryConfig::for_testing(),
            transport.clone(),
            FileStorage::in_dir(dir.path()).unwrap(),
        );
        assert_eq!(second.token_status(), ResourceStatus::Present);
        second.bootstrap().await;

        assert_eq!(transport.call_count(&token_url()), 1);
        assert_eq!(second.states().len(), 3);
    }

    #[tokio::test]
    async fn test_corrupt_storage_falls_back_to_fetch() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(dir.path()).unwrap();
        std::fs::write(storage.path(), b"not json").unwrap();
        let transport = directory_fixture();

        let session = LocationSession::new(DirectoryConfig::for_testing(), transport.clone(), storage);
        assert_eq!(session.token_status(), ResourceStatus::Absent);
        session.ensure_token().await;

        assert_eq!(session.auth_token().as_deref(), Some("fixture-token"));
        let reopened = FileStorage::in_dir(dir.path()).unwrap();
        assert_eq!(
            reopened.get(AUTH_TOKEN_KEY).unwrap().as_deref(),
            Some("fixture-token")
        );
    }

    #[tokio::test]
    async fn test_runtime_with_file_storage() {
        let dir = TempDir::new().unwrap();
        let config = RuntimeConfig::for_testing(dir.path());
        let storage = FileStorage::in_dir(&config.data_dir).unwrap();
        let runtime = SignupRuntime::with_ports(config, directory_fixture(), storage);

        runtime.start().await;
        let form = runtime.form();
        assert_eq!(form.state_dropdown().options, vec!["Texas", "Wyoming", "Ohio"]);
    }
}

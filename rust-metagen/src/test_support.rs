use crate::client::{ApiClient, ClientConfig, ClientInner, HttpOptions, DEFAULT_MODEL};
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
    let _guard = ENV_LOCK.lock().unwrap();
    let backup: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| ((*key).to_string(), std::env::var(key).ok()))
        .collect();
    for (key, value) in vars {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
    f();
    for (key, value) in backup {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

pub fn test_client_inner_with_base(base_url: &str) -> ClientInner {
    test_client_inner_with_model(base_url, DEFAULT_MODEL)
}

pub fn test_client_inner_with_model(base_url: &str, model: &str) -> ClientInner {
    let http_options = HttpOptions {
        base_url: Some(base_url.to_string()),
        ..Default::default()
    };
    let config = ClientConfig {
        api_key: "test-key".into(),
        model: model.to_string(),
        http_options,
    };
    let api_client = ApiClient::new(&config);
    ClientInner {
        http: reqwest::Client::new(),
        config,
        api_client,
    }
}

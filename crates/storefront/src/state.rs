use crate::{config::Config, di::DependenciesInject};
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let di_container = DependenciesInject::new(pool, &config.checkout);

        Self { di_container }
    }
}

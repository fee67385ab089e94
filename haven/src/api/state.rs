use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::db::Database;

/// Shared request context: configuration, the store, and the random
/// source feeding the mock scoring engines.
///
/// The RNG is owned here and injected into the pure services as drawn
/// samples, so tests can seed it and assert exact responses.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    rng: Arc<Mutex<SmallRng>>,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        Self::with_seed(config, db, rand::random())
    }

    pub fn with_seed(config: Config, db: Database, seed: u64) -> Self {
        Self {
            config: Arc::new(config),
            db,
            rng: Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))),
        }
    }

    /// One uniform sample from [0, 1).
    pub fn sample(&self) -> f64 {
        self.with_rng(|rng| rng.gen())
    }

    pub fn with_rng<T>(&self, f: impl FnOnce(&mut SmallRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

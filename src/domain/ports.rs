use crate::domain::model::TabularResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Read-only source of 2D string tables, addressed by range name.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch_table(&self, range: &str) -> Result<TabularResponse>;
}

/// String key/value persistence for UI preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn spreadsheet_id(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        self.origin + *offset
    }
}

#[async_trait]
impl<T: TableSource + ?Sized> TableSource for std::sync::Arc<T> {
    async fn fetch_table(&self, range: &str) -> Result<TabularResponse> {
        (**self).fetch_table(range).await
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

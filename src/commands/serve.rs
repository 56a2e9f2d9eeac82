//! `procompare serve`: run the reverse proxy.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;
use crate::proxy::{self, ProxyConfig, StaticMockStore};

pub async fn handle_serve(port: Option<u16>) -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut config = ProxyConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }

    proxy::serve(config, Arc::new(StaticMockStore::default())).await
}

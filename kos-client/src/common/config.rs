use std::time::Duration;

use serde::Deserialize;

/// HTTP/2 settings used by [GrpcClient](super::grpc_client::GrpcClient) when it opens a
/// connection. Every field has a default so the struct can be embedded in a larger
/// configuration file and only partially specified.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GrpcClientConfig {
    pub initial_stream_window_size: u32,
    pub initial_connection_window_size: u32,
    pub max_send_buf_size: usize,
    pub max_concurrent_reset_streams: usize,
    /// ping frames are sent at this interval, `None` disables keep-alive
    pub keep_alive_interval_secs: Option<u64>,
    /// the connection is dropped when a ping is not answered within this delay
    pub keep_alive_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            initial_stream_window_size: 65535,
            initial_connection_window_size: 65535,
            max_send_buf_size: 16384,
            max_concurrent_reset_streams: 2,
            keep_alive_interval_secs: Some(120),
            keep_alive_timeout_secs: 300,
            user_agent: concat!("kos-client/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl GrpcClientConfig {
    pub fn keep_alive_interval(&self) -> Option<Duration> {
        self.keep_alive_interval_secs.map(Duration::from_secs)
    }

    pub fn keep_alive_timeout(&self) -> Duration {
        Duration::from_secs(self.keep_alive_timeout_secs)
    }
}

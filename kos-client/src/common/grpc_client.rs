use async_executor::Task;
use async_io::Timer;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures_lite::{ready, Future, FutureExt};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::client::conn::http2::SendRequest;
use hyper::header::HeaderMap;
use hyper::rt::{self, Sleep};
use hyper::{http::status, Method, Request};
use prost::Message;
use std::marker::PhantomData;
use std::pin::Pin;
use std::rc::Rc;
use std::task::Poll;
use std::time::Instant;
use thiserror::Error;

use super::config::GrpcClientConfig;
use super::exec::Executor;

const GRPC_HEADER_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum GrpcClientError {
    #[error(transparent)]
    ConversionError(#[from] std::num::TryFromIntError),
    #[error(transparent)]
    MessageEncodingError(#[from] prost::EncodeError),
    #[error(transparent)]
    MessageDecodingError(#[from] prost::DecodeError),
    #[error("http request error {0}")]
    HttpStatusError(status::StatusCode),
    #[error(transparent)]
    HyperError(#[from] hyper::Error),
    #[error(transparent)]
    HyperHttpError(#[from] hyper::http::Error),
    #[error("grpc error code {code:?}, message {message:?}")]
    GrpcError { code: i32, message: String },
    #[error("frame error {0}")]
    FrameError(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),
    #[error("unsupported uri {0}, expected http://host:port")]
    UnsupportedUri(String),
}

/// A channel able to carry unary gRPC calls. Service clients only ever talk to the remote
/// end through this trait; each call blocks until the reply (or a fault) arrives.
pub trait GrpcChannel {
    fn unary<Req, Resp>(&self, path: &str, request: Req) -> Result<Resp, GrpcClientError>
    where
        Req: Message,
        Resp: Message + Default;
}

/// Wrap a message into a length prefixed gRPC frame (uncompressed)
pub fn encode_request<T>(req: T) -> Result<Bytes, GrpcClientError>
where
    T: Message,
{
    let mut buf = BytesMut::with_capacity(req.encoded_len() + GRPC_HEADER_LEN);
    buf.put_u8(0);
    buf.put_u32(req.encoded_len().try_into()?);

    let mut msg = buf.split_off(GRPC_HEADER_LEN);
    req.encode(&mut msg)?;
    buf.unsplit(msg);

    Ok(buf.into())
}

/// Decode the first length prefixed gRPC frame of a response body
pub fn decode_response<T>(mut body: Bytes) -> Result<T, GrpcClientError>
where
    T: Message + Default,
{
    if body.len() < GRPC_HEADER_LEN {
        return Err(GrpcClientError::FrameError(format!(
            "expected at least {} bytes, got {}",
            GRPC_HEADER_LEN,
            body.len()
        )));
    }
    if body.get_u8() != 0 {
        return Err(GrpcClientError::FrameError(
            "compressed messages are not supported".to_owned(),
        ));
    }
    let len: usize = body.get_u32().try_into()?;
    if body.len() < len {
        return Err(GrpcClientError::FrameError(format!(
            "message truncated, expected {} bytes, got {}",
            len,
            body.len()
        )));
    }
    Ok(T::decode(body.split_to(len))?)
}

/// Extract the gRPC status carried by a header block, `None` when no `grpc-status` is set
fn grpc_status(map: &HeaderMap) -> Option<Result<(), GrpcClientError>> {
    let status = map.get("grpc-status")?;
    // if we get an unparsable grpc status message we default to -1 (not a valid grpc error code)
    let code = status.to_str().unwrap_or("").parse::<i32>().unwrap_or(-1);
    if code == 0 {
        return Some(Ok(()));
    }
    let message = map
        .get("grpc-message")
        .and_then(|m| m.to_str().ok())
        .unwrap_or("")
        .to_owned();
    Some(Err(GrpcClientError::GrpcError { code, message }))
}

/// HTTP/2 gRPC client driven by the thread local [Executor]. The connection task only runs
/// while the creating thread is blocked in a call, so the client is not `Send`.
pub struct GrpcClient {
    executor: Executor,
    http2_connection: SendRequest<BoxBody<Bytes, hyper::Error>>,
    #[allow(dead_code)]
    http2_task: Option<Task<()>>,
    uri: String,
    user_agent: String,
    _not_send: PhantomData<Rc<()>>,
}

struct AsyncioSleep(Timer);

impl Sleep for AsyncioSleep {}

impl AsyncioSleep {
    fn reset(mut self: Pin<&mut Self>, deadline: Instant) {
        self.0.set_at(deadline)
    }
}

impl Future for AsyncioSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        let _ = ready!(self.0.poll(cx));
        Poll::Ready(())
    }
}

#[derive(Default, Clone, Debug)]
struct H2Timer;

impl rt::Timer for H2Timer {
    fn sleep(&self, duration: std::time::Duration) -> std::pin::Pin<Box<dyn rt::Sleep>> {
        Box::pin(AsyncioSleep(Timer::after(duration)))
    }
    fn sleep_until(&self, deadline: std::time::Instant) -> std::pin::Pin<Box<dyn rt::Sleep>> {
        Box::pin(AsyncioSleep(Timer::at(deadline)))
    }
    fn reset(
        &self,
        sleep: &mut std::pin::Pin<Box<dyn rt::Sleep>>,
        new_deadline: std::time::Instant,
    ) {
        if let Some(timer) = sleep.as_mut().downcast_mut_pin::<AsyncioSleep>() {
            timer.reset(new_deadline)
        }
    }
}

impl GrpcClient {
    /// Perform the HTTP/2 handshake over `io` and spawn the connection driver on `executor`.
    /// `uri` is the scheme and authority prepended to every call path.
    pub async fn new<T>(
        io: T,
        executor: Executor,
        uri: &str,
        config: &GrpcClientConfig,
    ) -> Result<GrpcClient, GrpcClientError>
    where
        T: rt::Read + rt::Write + Unpin + 'static,
    {
        let (http2_connection, conn) = hyper::client::conn::http2::Builder::new(executor.clone())
            .initial_stream_window_size(config.initial_stream_window_size)
            .initial_connection_window_size(config.initial_connection_window_size)
            .max_concurrent_reset_streams(config.max_concurrent_reset_streams)
            .max_send_buf_size(config.max_send_buf_size)
            .keep_alive_interval(config.keep_alive_interval())
            .keep_alive_timeout(config.keep_alive_timeout())
            .timer(H2Timer)
            .handshake::<T, BoxBody<Bytes, hyper::Error>>(io)
            .await?;

        let http2_task = executor.spawn(async move {
            if let Err(e) = conn.await {
                log::error!("GrpcClient failed with {:?}", e);
            }
        });
        Ok(Self {
            executor,
            http2_connection,
            http2_task: Some(http2_task),
            uri: uri.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            _not_send: PhantomData,
        })
    }

    /// Open a plain TCP connection to `uri` (`http://host:port`) and block until the
    /// HTTP/2 handshake completes.
    #[cfg(feature = "native")]
    pub fn connect(uri: &str, config: &GrpcClientConfig) -> Result<GrpcClient, GrpcClientError> {
        use crate::native::tcp::NativeStream;
        use std::net::ToSocketAddrs;

        let parsed: hyper::Uri = uri.parse()?;
        if parsed.scheme_str() != Some("http") {
            return Err(GrpcClientError::UnsupportedUri(uri.to_owned()));
        }
        let authority = parsed
            .authority()
            .ok_or_else(|| GrpcClientError::UnsupportedUri(uri.to_owned()))?;
        let addr = authority
            .as_str()
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| GrpcClientError::UnsupportedUri(uri.to_owned()))?;
        log::info!("connecting to {} ({})", uri, addr);

        let executor = Executor::new();
        let stream = executor.block_on(NativeStream::connect(addr))?;
        executor.block_on(GrpcClient::new(stream, executor.clone(), uri, config))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub(crate) fn build_request<B: Body>(
        &self,
        path: &str,
        body: B,
    ) -> Result<Request<B>, GrpcClientError> {
        let mut uri = self.uri.to_owned();
        uri.push_str(path);

        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/grpc")
            .header("te", "trailers")
            .header("user-agent", self.user_agent.as_str())
            .body(body)
            .map_err(GrpcClientError::HyperHttpError)
    }

    pub(crate) async fn send_request(
        &self,
        r: Request<BoxBody<Bytes, hyper::Error>>,
    ) -> Result<(Bytes, HeaderMap), GrpcClientError> {
        let mut http2_connection = self.http2_connection.clone();
        // verify if the server can accept a new HTTP2 stream
        http2_connection.ready().await?;

        let response = http2_connection.send_request(r).await?;

        let (part, body) = response.into_parts();

        if part.status != status::StatusCode::OK {
            log::error!("received status code {}", part.status.to_string());
            return Err(GrpcClientError::HttpStatusError(part.status));
        }

        // a trailers-only response carries the grpc status in the headers
        if let Some(Err(e)) = grpc_status(&part.headers) {
            return Err(e);
        }

        let body = body.collect().await?;

        match body.trailers() {
            Some(trailers) => grpc_status(trailers).unwrap_or_else(|| {
                Err(GrpcClientError::GrpcError {
                    code: 0,
                    message: "received grpc trailers without a grpc-status".to_owned(),
                })
            })?,
            None if part.headers.contains_key("grpc-status") => {}
            None => {
                return Err(GrpcClientError::GrpcError {
                    code: 0,
                    message: "response ended without a grpc-status".to_owned(),
                })
            }
        }
        Ok((body.to_bytes(), part.headers))
    }

    pub(crate) async fn send_unary<Req, Resp>(
        &self,
        path: &str,
        request: Req,
    ) -> Result<Resp, GrpcClientError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let body = encode_request(request)?;
        let r = self.build_request(
            path,
            BodyExt::boxed(Full::new(body).map_err(|never| match never {})),
        )?;
        let (response, _) = self.send_request(r).await?;
        decode_response(response)
    }
}

impl GrpcChannel for GrpcClient {
    fn unary<Req, Resp>(&self, path: &str, request: Req) -> Result<Resp, GrpcClientError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        log::debug!("calling {}", path);
        self.executor.block_on(self.send_unary(path, request))
    }
}

use async_io::Async;
use futures_lite::{ready, AsyncRead, AsyncWrite};
use hyper::rt;
use std::mem::MaybeUninit;
use std::net::{SocketAddr, TcpStream};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Plain TCP stream usable as a hyper HTTP/2 transport
pub struct NativeStream(Async<TcpStream>);

impl NativeStream {
    pub fn new(stream: Async<TcpStream>) -> Self {
        Self(stream)
    }

    pub async fn connect(addr: SocketAddr) -> Result<Self, std::io::Error> {
        let stream = Async::<TcpStream>::connect(addr).await?;
        stream.get_ref().set_nodelay(true)?;
        Ok(Self(stream))
    }
}

impl From<Async<TcpStream>> for NativeStream {
    fn from(stream: Async<TcpStream>) -> Self {
        Self::new(stream)
    }
}

impl rt::Read for NativeStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        mut buf: rt::ReadBufCursor<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        // SAFETY: the reader only writes initialized bytes and we advance by exactly that count
        let uninit_buf = unsafe { &mut *(buf.as_mut() as *mut [MaybeUninit<u8>] as *mut [u8]) };
        let s = &mut self.0;
        futures_lite::pin!(s);
        match ready!(s.poll_read(cx, uninit_buf)) {
            Ok(n) => {
                unsafe { buf.advance(n) };
                Poll::Ready(Ok(()))
            }
            Err(e) => Poll::Ready(Err(e)),
        }
    }
}

impl rt::Write for NativeStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<Result<usize, std::io::Error>> {
        let s = &mut self.0;
        futures_lite::pin!(s);
        s.poll_write(cx, buf)
    }
    fn poll_flush(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        let s = &mut self.0;
        futures_lite::pin!(s);
        s.poll_flush(cx)
    }
    fn poll_shutdown(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), std::io::Error>> {
        let s = &mut self.0;
        futures_lite::pin!(s);
        s.poll_close(cx)
    }
}

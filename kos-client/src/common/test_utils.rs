use std::{cell::RefCell, collections::VecDeque};

use bytes::Bytes;
use prost::Message;

use super::grpc_client::{GrpcChannel, GrpcClientError};

/// Channel double recording every call and replying with queued messages
#[derive(Default)]
pub(crate) struct RecordingChannel {
    calls: RefCell<Vec<(String, Bytes)>>,
    replies: RefCell<VecDeque<Result<Bytes, GrpcClientError>>>,
}

impl RecordingChannel {
    pub(crate) fn reply_with<M: Message>(self, reply: M) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(reply.encode_to_vec().into()));
        self
    }

    pub(crate) fn fail_with(self, err: GrpcClientError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    /// Path and decoded request of the `n`th call
    pub(crate) fn call<M: Message + Default>(&self, n: usize) -> (String, M) {
        let calls = self.calls.borrow();
        let (path, body) = &calls[n];
        (path.clone(), M::decode(body.clone()).unwrap())
    }

    pub(crate) fn raw_call(&self, n: usize) -> Bytes {
        self.calls.borrow()[n].1.clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl GrpcChannel for RecordingChannel {
    fn unary<Req, Resp>(&self, path: &str, request: Req) -> Result<Resp, GrpcClientError>
    where
        Req: Message,
        Resp: Message + Default,
    {
        self.calls
            .borrow_mut()
            .push((path.to_owned(), request.encode_to_vec().into()));
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Bytes::new()))?;
        Ok(Resp::decode(reply)?)
    }
}

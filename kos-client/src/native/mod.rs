//! Host-side transport for [GrpcClient](crate::common::grpc_client::GrpcClient).
pub mod tcp;

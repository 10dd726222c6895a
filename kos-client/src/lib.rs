//! Client library for the KOS actuator and simulation services.
//!
//! The service clients in [common::actuator] and [common::sim] borrow any
//! [common::grpc_client::GrpcChannel]; [common::grpc_client::GrpcClient] is the
//! HTTP/2 implementation of that channel.
//!
//! ```no_run
//! use kos_client::common::{
//!     actuator::{ActuatorCommand, ActuatorServiceClient},
//!     config::GrpcClientConfig,
//!     grpc_client::GrpcClient,
//! };
//!
//! let channel = GrpcClient::connect("http://127.0.0.1:50051", &GrpcClientConfig::default())?;
//! let actuators = ActuatorServiceClient::new(&channel);
//! let results = actuators.command_actuators(&[ActuatorCommand::new(1).with_position(90.0)])?;
//! # Ok::<(), kos_client::common::grpc_client::GrpcClientError>(())
//! ```

pub mod common;

#[cfg(feature = "native")]
pub mod native;

/// gRPC protobuf utilities, auto-generated
pub mod google {
    pub mod rpc {
        #![allow(clippy::derive_partial_eq_without_eq)]
        include!("gen/google.rpc.rs");
    }
    pub mod longrunning {
        #![allow(clippy::derive_partial_eq_without_eq)]
        include!("gen/google.longrunning.rs");
    }
}

/// gRPC prototypes for the KOS services, auto-generated
pub mod proto {

    // Don't bother to clippy generated proto code
    #![allow(clippy::all)]

    pub mod common {
        include!("gen/kos.common.rs");
    }
    pub mod actuator {
        include!("gen/kos.actuator.rs");
    }
    pub mod sim {
        include!("gen/kos.sim.rs");
    }
}

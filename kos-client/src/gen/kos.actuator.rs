// @generated
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActuatorCommand {
    #[prost(uint32, tag="1")]
    pub actuator_id: u32,
    /// target position in degrees
    #[prost(double, optional, tag="2")]
    pub position: ::core::option::Option<f64>,
    /// target velocity in degrees per second
    #[prost(double, optional, tag="3")]
    pub velocity: ::core::option::Option<f64>,
    /// feed-forward torque in newton meters
    #[prost(double, optional, tag="4")]
    pub torque: ::core::option::Option<f64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommandActuatorsRequest {
    #[prost(message, repeated, tag="1")]
    pub commands: ::prost::alloc::vec::Vec<ActuatorCommand>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommandActuatorsResponse {
    /// one result per command, in request order
    #[prost(message, repeated, tag="1")]
    pub results: ::prost::alloc::vec::Vec<super::common::ActionResult>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigureActuatorRequest {
    #[prost(uint32, tag="1")]
    pub actuator_id: u32,
    #[prost(double, optional, tag="2")]
    pub kp: ::core::option::Option<f64>,
    #[prost(double, optional, tag="3")]
    pub kd: ::core::option::Option<f64>,
    #[prost(double, optional, tag="4")]
    pub ki: ::core::option::Option<f64>,
    #[prost(double, optional, tag="5")]
    pub max_torque: ::core::option::Option<f64>,
    #[prost(double, optional, tag="6")]
    pub protective_torque: ::core::option::Option<f64>,
    /// seconds the protective torque may be exceeded before the actuator trips
    #[prost(float, optional, tag="7")]
    pub protection_time: ::core::option::Option<f32>,
    #[prost(bool, optional, tag="8")]
    pub torque_enabled: ::core::option::Option<bool>,
    #[prost(uint32, optional, tag="9")]
    pub new_actuator_id: ::core::option::Option<u32>,
    #[prost(bool, optional, tag="10")]
    pub zero_position: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CalibrateActuatorRequest {
    #[prost(uint32, tag="1")]
    pub actuator_id: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CalibrateActuatorResponse {
}
/// Metadata attached to the long running calibration operation
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CalibrateActuatorMetadata {
    #[prost(uint32, tag="1")]
    pub actuator_id: u32,
    /// one of "calibrating", "calibrated", "timeout"
    #[prost(string, optional, tag="2")]
    pub status: ::core::option::Option<::prost::alloc::string::String>,
}
impl ::prost::Name for CalibrateActuatorMetadata {
    const NAME: &'static str = "CalibrateActuatorMetadata";
    const PACKAGE: &'static str = "kos.actuator";
    fn full_name() -> ::prost::alloc::string::String {
        "kos.actuator.CalibrateActuatorMetadata".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "type.googleapis.com/kos.actuator.CalibrateActuatorMetadata".into()
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActuatorsStateRequest {
    /// empty means every actuator known to the server
    #[prost(uint32, repeated, tag="1")]
    pub actuator_ids: ::prost::alloc::vec::Vec<u32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActuatorsStateResponse {
    #[prost(message, repeated, tag="1")]
    pub states: ::prost::alloc::vec::Vec<ActuatorStateResponse>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActuatorStateResponse {
    #[prost(uint32, tag="1")]
    pub actuator_id: u32,
    #[prost(bool, tag="2")]
    pub online: bool,
    #[prost(double, optional, tag="3")]
    pub position: ::core::option::Option<f64>,
    #[prost(double, optional, tag="4")]
    pub velocity: ::core::option::Option<f64>,
    #[prost(double, optional, tag="5")]
    pub torque: ::core::option::Option<f64>,
    #[prost(double, optional, tag="6")]
    pub temperature: ::core::option::Option<f64>,
    #[prost(float, optional, tag="7")]
    pub voltage: ::core::option::Option<f32>,
    #[prost(float, optional, tag="8")]
    pub current: ::core::option::Option<f32>,
}
// @@protoc_insertion_point(module)

// @generated
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DefaultPosition {
    /// generalized joint positions
    #[prost(float, repeated, tag="1")]
    pub qpos: ::prost::alloc::vec::Vec<f32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetRequest {
    #[prost(message, optional, tag="1")]
    pub initial_state: ::core::option::Option<DefaultPosition>,
    #[prost(bool, optional, tag="2")]
    pub randomize: ::core::option::Option<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetPausedRequest {
    #[prost(bool, tag="1")]
    pub paused: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StepRequest {
    #[prost(uint32, tag="1")]
    pub num_steps: u32,
    /// seconds per step, server default when unset
    #[prost(float, optional, tag="2")]
    pub step_size: ::core::option::Option<f32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimulationParameters {
    #[prost(float, optional, tag="1")]
    pub time_scale: ::core::option::Option<f32>,
    #[prost(float, optional, tag="2")]
    pub gravity: ::core::option::Option<f32>,
    #[prost(message, optional, tag="3")]
    pub initial_state: ::core::option::Option<DefaultPosition>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetParametersRequest {
    #[prost(message, optional, tag="1")]
    pub parameters: ::core::option::Option<SimulationParameters>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetParametersResponse {
    #[prost(message, optional, tag="1")]
    pub parameters: ::core::option::Option<SimulationParameters>,
    #[prost(message, optional, tag="2")]
    pub error: ::core::option::Option<super::common::Error>,
}
// @@protoc_insertion_point(module)

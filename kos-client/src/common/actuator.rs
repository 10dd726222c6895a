//! Client for `kos.actuator.ActuatorService`.
//!
//! Calibration runs server side as a long running operation: [ActuatorServiceClient::calibrate]
//! starts it and [ActuatorServiceClient::get_calibration_status] polls it. Nothing is tracked
//! locally, every call is a single request to the server.
use std::collections::HashMap;

use super::calibration::{CalibrationMetadata, CalibrationStatus};
use super::grpc_client::{GrpcChannel, GrpcClientError};
use crate::google::longrunning::{GetOperationRequest, Operation};
use crate::proto::{
    actuator::{
        self as pb, ActuatorStateResponse, CalibrateActuatorRequest, CommandActuatorsRequest,
        CommandActuatorsResponse, ConfigureActuatorRequest, GetActuatorsStateRequest,
        GetActuatorsStateResponse,
    },
    common::ActionResponse,
};

const CALIBRATE_ACTUATOR: &str = "/kos.actuator.ActuatorService/CalibrateActuator";
const COMMAND_ACTUATORS: &str = "/kos.actuator.ActuatorService/CommandActuators";
const CONFIGURE_ACTUATOR: &str = "/kos.actuator.ActuatorService/ConfigureActuator";
const GET_ACTUATORS_STATE: &str = "/kos.actuator.ActuatorService/GetActuatorsState";
const GET_OPERATION: &str = "/google.longrunning.Operations/GetOperation";

const CALIBRATION_OPERATION_PREFIX: &str = "operations/calibrate_actuator/";

/// Target for a single actuator, unset fields are left out of the request
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActuatorCommand {
    pub actuator_id: u32,
    pub position: Option<f64>,
    pub velocity: Option<f64>,
    pub torque: Option<f64>,
}

impl ActuatorCommand {
    pub fn new(actuator_id: u32) -> Self {
        Self {
            actuator_id,
            ..Default::default()
        }
    }
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }
    pub fn with_torque(mut self, torque: f64) -> Self {
        self.torque = Some(torque);
        self
    }
}

impl From<&ActuatorCommand> for pb::ActuatorCommand {
    fn from(cmd: &ActuatorCommand) -> Self {
        Self {
            actuator_id: cmd.actuator_id,
            position: cmd.position,
            velocity: cmd.velocity,
            torque: cmd.torque,
        }
    }
}

/// Sparse update of an actuator's settings, the server keeps its current value for every
/// field left unset
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActuatorConfiguration {
    pub actuator_id: u32,
    pub kp: Option<f64>,
    pub kd: Option<f64>,
    pub ki: Option<f64>,
    pub max_torque: Option<f64>,
    pub protective_torque: Option<f64>,
    pub protection_time: Option<f32>,
    pub torque_enabled: Option<bool>,
    pub new_actuator_id: Option<u32>,
    pub zero_position: Option<bool>,
}

impl ActuatorConfiguration {
    pub fn new(actuator_id: u32) -> Self {
        Self {
            actuator_id,
            ..Default::default()
        }
    }
    pub fn with_gains(mut self, kp: f64, kd: f64, ki: f64) -> Self {
        self.kp = Some(kp);
        self.kd = Some(kd);
        self.ki = Some(ki);
        self
    }
    pub fn with_kp(mut self, kp: f64) -> Self {
        self.kp = Some(kp);
        self
    }
    pub fn with_kd(mut self, kd: f64) -> Self {
        self.kd = Some(kd);
        self
    }
    pub fn with_ki(mut self, ki: f64) -> Self {
        self.ki = Some(ki);
        self
    }
    pub fn with_max_torque(mut self, max_torque: f64) -> Self {
        self.max_torque = Some(max_torque);
        self
    }
    /// torque above `protective_torque` for longer than `protection_time` seconds trips the
    /// actuator
    pub fn with_protection(mut self, protective_torque: f64, protection_time: f32) -> Self {
        self.protective_torque = Some(protective_torque);
        self.protection_time = Some(protection_time);
        self
    }
    pub fn with_torque_enabled(mut self, enabled: bool) -> Self {
        self.torque_enabled = Some(enabled);
        self
    }
    pub fn with_new_actuator_id(mut self, new_actuator_id: u32) -> Self {
        self.new_actuator_id = Some(new_actuator_id);
        self
    }
    pub fn with_zero_position(mut self, zero_position: bool) -> Self {
        self.zero_position = Some(zero_position);
        self
    }
}

impl From<&ActuatorConfiguration> for ConfigureActuatorRequest {
    fn from(cfg: &ActuatorConfiguration) -> Self {
        Self {
            actuator_id: cfg.actuator_id,
            kp: cfg.kp,
            kd: cfg.kd,
            ki: cfg.ki,
            max_torque: cfg.max_torque,
            protective_torque: cfg.protective_torque,
            protection_time: cfg.protection_time,
            torque_enabled: cfg.torque_enabled,
            new_actuator_id: cfg.new_actuator_id,
            zero_position: cfg.zero_position,
        }
    }
}

/// Index actuator states by id, the server does not promise to answer in request order.
/// When an id is reported more than once the last entry wins.
pub fn states_by_id(response: &GetActuatorsStateResponse) -> HashMap<u32, &ActuatorStateResponse> {
    let mut states = HashMap::with_capacity(response.states.len());
    for state in &response.states {
        if states.insert(state.actuator_id, state).is_some() {
            log::warn!(
                "actuator {} reported more than once, keeping the last state",
                state.actuator_id
            );
        }
    }
    states
}

pub struct ActuatorServiceClient<'a, C> {
    channel: &'a C,
}

impl<'a, C> ActuatorServiceClient<'a, C>
where
    C: GrpcChannel,
{
    pub fn new(channel: &'a C) -> Self {
        Self { channel }
    }

    /// Start calibrating an actuator, returns the metadata of the operation the server created
    pub fn calibrate(&self, actuator_id: u32) -> Result<CalibrationMetadata, GrpcClientError> {
        let operation: Operation = self
            .channel
            .unary(CALIBRATE_ACTUATOR, CalibrateActuatorRequest { actuator_id })?;
        Ok(CalibrationMetadata::from_any(operation.metadata.as_ref()))
    }

    /// Poll the calibration operation of an actuator, `None` when the server reports no status
    pub fn get_calibration_status(
        &self,
        actuator_id: u32,
    ) -> Result<Option<CalibrationStatus>, GrpcClientError> {
        let request = GetOperationRequest {
            name: format!("{}{}", CALIBRATION_OPERATION_PREFIX, actuator_id),
        };
        let operation: Operation = self.channel.unary(GET_OPERATION, request)?;
        Ok(CalibrationMetadata::from_any(operation.metadata.as_ref()).status)
    }

    /// Send every command in one request, the response holds one result per command in the
    /// same order
    pub fn command_actuators(
        &self,
        commands: &[ActuatorCommand],
    ) -> Result<CommandActuatorsResponse, GrpcClientError> {
        let request = CommandActuatorsRequest {
            commands: commands.iter().map(Into::into).collect(),
        };
        self.channel.unary(COMMAND_ACTUATORS, request)
    }

    pub fn configure_actuator(
        &self,
        config: &ActuatorConfiguration,
    ) -> Result<ActionResponse, GrpcClientError> {
        let request: ConfigureActuatorRequest = config.into();
        self.channel.unary(CONFIGURE_ACTUATOR, request)
    }

    /// State of the listed actuators, or of every actuator when `actuator_ids` is `None` or
    /// empty. See [states_by_id] for order independent access.
    pub fn get_actuators_state(
        &self,
        actuator_ids: Option<&[u32]>,
    ) -> Result<GetActuatorsStateResponse, GrpcClientError> {
        let request = GetActuatorsStateRequest {
            actuator_ids: actuator_ids.map(<[u32]>::to_vec).unwrap_or_default(),
        };
        self.channel.unary(GET_ACTUATORS_STATE, request)
    }
}

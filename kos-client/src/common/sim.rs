//! Client for `kos.sim.SimulationService`.
use super::grpc_client::{GrpcChannel, GrpcClientError};
use crate::proto::{
    common::ActionResponse,
    sim::{
        DefaultPosition, GetParametersResponse, ResetRequest, SetParametersRequest,
        SetPausedRequest, SimulationParameters, StepRequest,
    },
};

const RESET: &str = "/kos.sim.SimulationService/Reset";
const SET_PAUSED: &str = "/kos.sim.SimulationService/SetPaused";
const STEP: &str = "/kos.sim.SimulationService/Step";
const SET_PARAMETERS: &str = "/kos.sim.SimulationService/SetParameters";
const GET_PARAMETERS: &str = "/kos.sim.SimulationService/GetParameters";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetOptions {
    /// joint positions to reset to, server default pose when unset
    pub qpos: Option<Vec<f32>>,
    pub randomize: Option<bool>,
}

impl ResetOptions {
    pub fn with_initial_state(mut self, qpos: Vec<f32>) -> Self {
        self.qpos = Some(qpos);
        self
    }
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = Some(randomize);
        self
    }
}

impl From<&ResetOptions> for ResetRequest {
    fn from(opts: &ResetOptions) -> Self {
        Self {
            initial_state: opts
                .qpos
                .as_ref()
                .map(|qpos| DefaultPosition { qpos: qpos.clone() }),
            randomize: opts.randomize,
        }
    }
}

/// Parameters to change, the server keeps its current value for every unset field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationParameterUpdate {
    pub time_scale: Option<f32>,
    pub gravity: Option<f32>,
    pub qpos: Option<Vec<f32>>,
}

impl SimulationParameterUpdate {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = Some(time_scale);
        self
    }
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = Some(gravity);
        self
    }
    pub fn with_initial_state(mut self, qpos: Vec<f32>) -> Self {
        self.qpos = Some(qpos);
        self
    }
}

impl From<&SimulationParameterUpdate> for SimulationParameters {
    fn from(update: &SimulationParameterUpdate) -> Self {
        Self {
            time_scale: update.time_scale,
            gravity: update.gravity,
            initial_state: update
                .qpos
                .as_ref()
                .map(|qpos| DefaultPosition { qpos: qpos.clone() }),
        }
    }
}

pub struct SimServiceClient<'a, C> {
    channel: &'a C,
}

impl<'a, C> SimServiceClient<'a, C>
where
    C: GrpcChannel,
{
    pub fn new(channel: &'a C) -> Self {
        Self { channel }
    }

    pub fn reset(&self, options: &ResetOptions) -> Result<ActionResponse, GrpcClientError> {
        let request: ResetRequest = options.into();
        self.channel.unary(RESET, request)
    }

    pub fn set_paused(&self, paused: bool) -> Result<ActionResponse, GrpcClientError> {
        self.channel.unary(SET_PAUSED, SetPausedRequest { paused })
    }

    /// Advance the simulation by `num_steps` steps of `step_size` seconds (server default when
    /// `None`). Returns once the server has run every step.
    pub fn step(
        &self,
        num_steps: u32,
        step_size: Option<f32>,
    ) -> Result<ActionResponse, GrpcClientError> {
        self.channel.unary(
            STEP,
            StepRequest {
                num_steps,
                step_size,
            },
        )
    }

    pub fn step_once(&self) -> Result<ActionResponse, GrpcClientError> {
        self.step(1, None)
    }

    pub fn set_parameters(
        &self,
        update: &SimulationParameterUpdate,
    ) -> Result<ActionResponse, GrpcClientError> {
        let request = SetParametersRequest {
            parameters: Some(update.into()),
        };
        self.channel.unary(SET_PARAMETERS, request)
    }

    pub fn get_parameters(&self) -> Result<GetParametersResponse, GrpcClientError> {
        self.channel.unary(GET_PARAMETERS, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::RecordingChannel;
    use crate::proto::common::{Error, ErrorCode};

    fn ok() -> ActionResponse {
        ActionResponse {
            success: true,
            error: None,
        }
    }

    #[test_log::test]
    fn test_reset_randomize_only() {
        let channel = RecordingChannel::default().reply_with(ok());
        let sim = SimServiceClient::new(&channel);

        let resp = sim
            .reset(&ResetOptions::default().with_randomize(true))
            .unwrap();
        assert!(resp.success);

        let (path, req) = channel.call::<ResetRequest>(0);
        assert_eq!(path, "/kos.sim.SimulationService/Reset");
        assert_eq!(req.initial_state, None);
        assert_eq!(req.randomize, Some(true));
    }

    #[test_log::test]
    fn test_reset_with_initial_state() {
        let channel = RecordingChannel::default().reply_with(ok()).reply_with(ok());
        let sim = SimServiceClient::new(&channel);

        let qpos = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        sim.reset(&ResetOptions::default().with_initial_state(qpos.clone()))
            .unwrap();
        let (_, req) = channel.call::<ResetRequest>(0);
        assert_eq!(req.initial_state.unwrap().qpos, qpos);
        assert_eq!(req.randomize, None);

        sim.reset(&ResetOptions::default()).unwrap();
        assert!(channel.raw_call(1).is_empty());
    }

    #[test_log::test]
    fn test_set_paused() {
        let channel = RecordingChannel::default().reply_with(ok()).reply_with(ok());
        let sim = SimServiceClient::new(&channel);
        sim.set_paused(true).unwrap();
        sim.set_paused(false).unwrap();
        let (path, req) = channel.call::<SetPausedRequest>(0);
        assert_eq!(path, "/kos.sim.SimulationService/SetPaused");
        assert!(req.paused);
        let (_, req) = channel.call::<SetPausedRequest>(1);
        assert!(!req.paused);
    }

    #[test_log::test]
    fn test_step() {
        let channel = RecordingChannel::default().reply_with(ok()).reply_with(ok());
        let sim = SimServiceClient::new(&channel);

        sim.step_once().unwrap();
        let (path, req) = channel.call::<StepRequest>(0);
        assert_eq!(path, "/kos.sim.SimulationService/Step");
        assert_eq!(req.num_steps, 1);
        assert_eq!(req.step_size, None);

        sim.step(250, Some(0.002)).unwrap();
        let (_, req) = channel.call::<StepRequest>(1);
        assert_eq!(req.num_steps, 250);
        assert_eq!(req.step_size, Some(0.002));
    }

    #[test_log::test]
    fn test_set_parameters_is_sparse() {
        let channel = RecordingChannel::default().reply_with(ok()).reply_with(ok());
        let sim = SimServiceClient::new(&channel);

        sim.set_parameters(&SimulationParameterUpdate::default().with_gravity(9.81))
            .unwrap();
        let (path, req) = channel.call::<SetParametersRequest>(0);
        assert_eq!(path, "/kos.sim.SimulationService/SetParameters");
        let params = req.parameters.unwrap();
        assert_eq!(params.gravity, Some(9.81));
        assert_eq!(params.time_scale, None);
        assert_eq!(params.initial_state, None);

        let update = SimulationParameterUpdate::default()
            .with_time_scale(0.5)
            .with_gravity(0.0)
            .with_initial_state(vec![0.1, 0.2]);
        sim.set_parameters(&update).unwrap();
        let (_, req) = channel.call::<SetParametersRequest>(1);
        let params = req.parameters.unwrap();
        assert_eq!(params.time_scale, Some(0.5));
        // zero gravity is a value, not an absent field
        assert_eq!(params.gravity, Some(0.0));
        assert_eq!(params.initial_state.unwrap().qpos, vec![0.1, 0.2]);
    }

    #[test_log::test]
    fn test_get_parameters() {
        let reply = GetParametersResponse {
            parameters: Some(SimulationParameters {
                time_scale: Some(1.0),
                gravity: Some(9.81),
                initial_state: None,
            }),
            error: Some(Error {
                code: ErrorCode::NotImplemented as i32,
                message: "initial state not tracked".to_owned(),
            }),
        };
        let channel = RecordingChannel::default().reply_with(reply.clone());
        let sim = SimServiceClient::new(&channel);

        assert_eq!(sim.get_parameters().unwrap(), reply);
        assert_eq!(channel.call_count(), 1);
        assert!(channel.raw_call(0).is_empty());
        let (path, ()) = channel.call::<()>(0);
        assert_eq!(path, "/kos.sim.SimulationService/GetParameters");
    }

    #[test_log::test]
    fn test_transport_errors_propagate() {
        let channel = RecordingChannel::default().fail_with(GrpcClientError::FrameError(
            "stream reset".to_owned(),
        ));
        let sim = SimServiceClient::new(&channel);
        assert!(matches!(
            sim.step(10, None),
            Err(GrpcClientError::FrameError(_))
        ));
    }
}

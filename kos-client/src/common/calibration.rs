//! Decoding of the metadata attached to long running calibration operations.
//!
//! Operation metadata travels as a `google.protobuf.Any`; a payload of another type, an empty
//! payload or a payload that fails to decode is reported as absent data, never as an error.
use std::fmt::{self, Display};
use std::str::FromStr;

use prost::Name;
use prost_types::Any;
use thiserror::Error;

use crate::proto::actuator::CalibrateActuatorMetadata;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalibrationStatus {
    Calibrating,
    Calibrated,
    Timeout,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown calibration status `{0}`")]
pub struct UnknownCalibrationStatus(pub String);

impl CalibrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calibrating => "calibrating",
            Self::Calibrated => "calibrated",
            Self::Timeout => "timeout",
        }
    }
}

impl FromStr for CalibrationStatus {
    type Err = UnknownCalibrationStatus;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calibrating" => Ok(Self::Calibrating),
            "calibrated" => Ok(Self::Calibrated),
            "timeout" => Ok(Self::Timeout),
            other => Err(UnknownCalibrationStatus(other.to_owned())),
        }
    }
}

impl Display for CalibrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of a long running operation, resolved against the schemas this crate knows about
#[derive(Clone, Debug, PartialEq)]
pub enum OperationMetadata {
    Calibration(CalibrateActuatorMetadata),
    Unknown { type_url: String },
}

/// Full name part of a type url, `type.googleapis.com/pkg.Msg` -> `pkg.Msg`
fn full_name(type_url: &str) -> &str {
    type_url.rsplit_once('/').map_or(type_url, |(_, name)| name)
}

impl OperationMetadata {
    pub fn decode(any: &Any) -> Self {
        if full_name(&any.type_url) == CalibrateActuatorMetadata::full_name() {
            match any.to_msg::<CalibrateActuatorMetadata>() {
                Ok(metadata) => return Self::Calibration(metadata),
                Err(e) => log::debug!("couldn't decode {}: {}", any.type_url, e),
            }
        } else {
            log::debug!("ignoring operation metadata of type `{}`", any.type_url);
        }
        Self::Unknown {
            type_url: any.type_url.clone(),
        }
    }
}

/// Decoded view of a calibration operation's metadata, both fields are `None` when the payload
/// is not calibration metadata
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalibrationMetadata {
    pub actuator_id: Option<u32>,
    pub status: Option<CalibrationStatus>,
}

impl CalibrationMetadata {
    pub fn from_any(metadata: Option<&Any>) -> Self {
        match metadata.map(OperationMetadata::decode) {
            Some(OperationMetadata::Calibration(metadata)) => metadata.into(),
            _ => Self::default(),
        }
    }
}

impl From<CalibrateActuatorMetadata> for CalibrationMetadata {
    fn from(metadata: CalibrateActuatorMetadata) -> Self {
        let status = metadata
            .status
            .as_deref()
            .and_then(|s| match s.parse::<CalibrationStatus>() {
                Ok(status) => Some(status),
                Err(e) => {
                    log::warn!("actuator {}: {}", metadata.actuator_id, e);
                    None
                }
            });
        Self {
            actuator_id: Some(metadata.actuator_id),
            status,
        }
    }
}

impl Display for CalibrationMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalibrationMetadata(actuator_id=")?;
        match self.actuator_id {
            Some(id) => write!(f, "{}", id)?,
            None => write!(f, "None")?,
        }
        write!(f, ", status=")?;
        match self.status {
            Some(status) => write!(f, "{})", status),
            None => write!(f, "None)"),
        }
    }
}

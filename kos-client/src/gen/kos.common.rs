// @generated
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Error {
    #[prost(enumeration="ErrorCode", tag="1")]
    pub code: i32,
    #[prost(string, tag="2")]
    pub message: ::prost::alloc::string::String,
}
/// Outcome of an action that does not target a specific actuator
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionResponse {
    #[prost(bool, tag="1")]
    pub success: bool,
    #[prost(message, optional, tag="2")]
    pub error: ::core::option::Option<Error>,
}
/// Outcome of an action targeting a single actuator
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionResult {
    #[prost(uint32, tag="1")]
    pub actuator_id: u32,
    #[prost(bool, tag="2")]
    pub success: bool,
    #[prost(message, optional, tag="3")]
    pub error: ::core::option::Option<Error>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ErrorCode {
    Unknown = 0,
    NotImplemented = 1,
    InvalidArgument = 2,
    HardwareFailure = 3,
    Timeout = 4,
    Unauthorized = 5,
}
impl ErrorCode {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::HardwareFailure => "HARDWARE_FAILURE",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "UNKNOWN" => Some(Self::Unknown),
            "NOT_IMPLEMENTED" => Some(Self::NotImplemented),
            "INVALID_ARGUMENT" => Some(Self::InvalidArgument),
            "HARDWARE_FAILURE" => Some(Self::HardwareFailure),
            "TIMEOUT" => Some(Self::Timeout),
            "UNAUTHORIZED" => Some(Self::Unauthorized),
            _ => None,
        }
    }
}
// @@protoc_insertion_point(module)

use serde_json::Value;
use crate::rpc::enums::flag_argument::FlagArgument;
use crate::rpc::errors::RpcError;

impl FlagArgument {
    pub fn decode(name: &str, value: Option<&Value>) -> Result<FlagArgument, RpcError> {
        match value {
            None | Some(Value::Null) => Ok(FlagArgument::Absent),
            Some(Value::Bool(flag)) => Ok(FlagArgument::Bool(*flag)),
            Some(Value::Number(number)) => number.as_f64()
                .map(FlagArgument::Number)
                .ok_or_else(|| RpcError::invalid_argument(name, "not a number")),
            Some(_) => Err(RpcError::invalid_argument(name, "expected a boolean or a number")),
        }
    }

    pub fn is_set(&self) -> bool {
        match self {
            FlagArgument::Absent => false,
            FlagArgument::Bool(flag) => *flag,
            FlagArgument::Number(number) => *number != 0.0,
        }
    }
}

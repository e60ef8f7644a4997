use log::warn;
use serde_json::Value;
use crate::registry::structs::identity_registry::IdentityRegistry;
use crate::rpc::enums::id_entry::IdEntry;
use crate::rpc::enums::ids_argument::IdsArgument;
use crate::rpc::errors::RpcError;

const RECENTLY_ACTIVE: &str = "recently-active";

impl IdsArgument {
    pub fn decode(value: Option<&Value>) -> Result<IdsArgument, RpcError> {
        match value {
            None | Some(Value::Null) => Ok(IdsArgument::All),
            Some(Value::String(text)) if text == RECENTLY_ACTIVE => Ok(IdsArgument::RecentlyActive),
            Some(Value::Number(number)) => number.as_i64()
                .map(IdsArgument::Single)
                .ok_or_else(|| RpcError::invalid_argument("ids", "IDs must be integers")),
            Some(Value::Array(entries)) => entries.iter()
                .map(|entry| match entry {
                    Value::Number(number) => number.as_i64()
                        .map(IdEntry::Id)
                        .ok_or_else(|| RpcError::invalid_argument("ids", "IDs must be integers")),
                    Value::String(hash) => Ok(IdEntry::Hash(hash.clone())),
                    _ => Err(RpcError::invalid_argument("ids", "entries must be numbers or hash strings")),
                })
                .collect::<Result<Vec<IdEntry>, RpcError>>()
                .map(IdsArgument::List),
            Some(_) => Err(RpcError::invalid_argument("ids", "expected a number, an array or \"recently-active\"")),
        }
    }

    /// Live IDs addressed by the argument, in request order. Unknown hashes and
    /// tombstoned or unassigned IDs are dropped.
    pub fn resolve(&self, registry: &IdentityRegistry) -> Vec<i64> {
        let ids = match self {
            IdsArgument::All | IdsArgument::RecentlyActive => return registry.resolve_all(),
            IdsArgument::Single(id) => vec![*id],
            IdsArgument::List(entries) => entries.iter()
                .filter_map(|entry| match entry {
                    IdEntry::Id(id) => Some(*id),
                    IdEntry::Hash(hash) => match registry.id_of(hash) {
                        Ok(id) => Some(id),
                        Err(error) => {
                            warn!("[RPC] Skipping ID: {error}");
                            None
                        }
                    },
                })
                .collect(),
        };
        ids.into_iter().filter(|id| registry.resolve(*id).is_some()).collect()
    }

    /// Like [`IdsArgument::resolve`], paired with the hash behind each ID.
    pub fn resolve_hashes(&self, registry: &IdentityRegistry) -> Vec<(i64, String)> {
        self.resolve(registry).into_iter()
            .filter_map(|id| registry.resolve(id).map(|hash| (id, hash)))
            .collect()
    }
}

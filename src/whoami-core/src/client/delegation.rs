//! Delegation chains in the JSON form produced by Internet Identity.
//!
//! ```text
//! {
//!   "delegations": [
//!     {
//!       "delegation": { "expiration": "1655f29d787c0000", "pubkey": "302a...", "targets": [...] },
//!       "signature": "ba46e..."
//!     }
//!   ],
//!   "publicKey": "303c..."
//! }
//! ```
//!
//! Expirations are hex-encoded nanoseconds since the UNIX epoch; keys, signatures and
//! targets are hex-encoded bytes.
use crate::error::delegation::DelegationError;
use crate::error::delegation::DelegationError::{
    ClockBeforeEpoch, EmptyChain, Expired, InvalidExpiration, InvalidHex, InvalidTarget,
    ParseChainFailed,
};
use candid::Principal;
use ic_agent::identity::{Delegation, SignedDelegation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct JsonDelegation {
    pub expiration: String,
    pub pubkey: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignedJsonDelegation {
    pub delegation: JsonDelegation,
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDelegationChain {
    pub delegations: Vec<SignedJsonDelegation>,
    pub public_key: String,
}

/// A decoded chain that was unexpired when it was checked.
#[derive(Clone, Debug)]
pub struct DelegationChain {
    public_key: Vec<u8>,
    delegations: Vec<SignedDelegation>,
}

impl SignedJsonDelegation {
    pub fn to_signed_delegation(&self, now_nanos: u64) -> Result<SignedDelegation, DelegationError> {
        let expiration = u64::from_str_radix(&self.delegation.expiration, 16)
            .map_err(|err| InvalidExpiration(self.delegation.expiration.clone(), err))?;
        if expiration < now_nanos {
            return Err(Expired());
        }

        let pubkey =
            hex::decode(&self.delegation.pubkey).map_err(|err| InvalidHex("pubkey", err))?;
        let targets = self
            .delegation
            .targets
            .as_ref()
            .map(|targets| {
                targets
                    .iter()
                    .map(|t| parse_target(t))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        let signature = hex::decode(&self.signature).map_err(|err| InvalidHex("signature", err))?;

        Ok(SignedDelegation {
            delegation: Delegation {
                pubkey,
                expiration,
                targets,
            },
            signature,
        })
    }
}

fn parse_target(target: &str) -> Result<Principal, DelegationError> {
    let bytes = hex::decode(target).map_err(|err| InvalidHex("targets", err))?;
    Principal::try_from_slice(&bytes).map_err(|_| InvalidTarget(target.to_string()))
}

impl JsonDelegationChain {
    pub fn parse(json: &str) -> Result<Self, DelegationError> {
        serde_json::from_str(json.trim()).map_err(ParseChainFailed)
    }

    /// Decodes the chain, rejecting it if it is empty or any link has expired at `now_nanos`.
    pub fn to_delegation_chain(&self, now_nanos: u64) -> Result<DelegationChain, DelegationError> {
        if self.delegations.is_empty() {
            return Err(EmptyChain());
        }
        let public_key =
            hex::decode(&self.public_key).map_err(|err| InvalidHex("publicKey", err))?;
        let delegations = self
            .delegations
            .iter()
            .map(|d| d.to_signed_delegation(now_nanos))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DelegationChain {
            public_key,
            delegations,
        })
    }
}

impl DelegationChain {
    /// The principal this chain authenticates: the self-authenticating principal of the
    /// chain's root key.
    pub fn principal(&self) -> Principal {
        Principal::self_authenticating(&self.public_key)
    }

    #[cfg(test)]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    #[cfg(test)]
    pub fn delegations(&self) -> &[SignedDelegation] {
        &self.delegations
    }

    /// When the first link of the chain expires.
    pub fn expiration(&self) -> u64 {
        self.delegations
            .iter()
            .map(|d| d.delegation.expiration)
            .min()
            .unwrap_or(0)
    }
}

pub fn current_time_nanos() -> Result<u64, DelegationError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(ClockBeforeEpoch)?;
    Ok(elapsed.as_nanos() as u64)
}

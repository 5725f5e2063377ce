// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Code tables used by visitor, person and door resources.
//!
//! The service is not consistent about how it encodes these codes: the same
//! field may arrive as `1` or `"1"`. All types here accept both and always
//! serialize back to a number.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use artemis_core::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Read an integer code that may be encoded as a JSON number or string.
fn deserialize_numeric<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Int(i64),
        Str(String),
    }

    match Numeric::deserialize(deserializer)? {
        Numeric::Int(v) => Ok(v),
        Numeric::Str(v) => v
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid numeric code: {v:?}"))),
    }
}

fn parse_numeric(s: &str) -> artemis_core::Result<i64> {
    s.trim().parse().map_err(|e| {
        Error::response_invalid(format!("invalid numeric code: {s:?}")).with_source(e)
    })
}

macro_rules! code_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                deserialize_numeric(deserializer).map(Self::from_code)
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> artemis_core::Result<Self> {
                parse_numeric(s).map(Self::from_code)
            }
        }
    };
}

/// Gender of a person or visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// `0`, also used for any code the service adds later.
    #[default]
    Unknown,
    /// `1`
    Male,
    /// `2`
    Female,
}

impl Gender {
    /// Map a service code.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Gender::Male,
            2 => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    /// The service code.
    pub fn code(&self) -> i64 {
        match self {
            Gender::Unknown => 0,
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Unknown => write!(f, "Unknown"),
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

code_serde!(Gender);

/// Status of a visitor register record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitorStatus {
    /// `0`
    CheckedIn,
    /// `1`
    CheckedOut,
    /// `2`
    AutoCheckedOut,
    /// `3`
    SelfServiceOut,
    /// `4`
    Overstay,
    /// Any other code.
    Other(i64),
}

impl VisitorStatus {
    /// Map a service code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => VisitorStatus::CheckedIn,
            1 => VisitorStatus::CheckedOut,
            2 => VisitorStatus::AutoCheckedOut,
            3 => VisitorStatus::SelfServiceOut,
            4 => VisitorStatus::Overstay,
            v => VisitorStatus::Other(v),
        }
    }

    /// The service code.
    pub fn code(&self) -> i64 {
        match self {
            VisitorStatus::CheckedIn => 0,
            VisitorStatus::CheckedOut => 1,
            VisitorStatus::AutoCheckedOut => 2,
            VisitorStatus::SelfServiceOut => 3,
            VisitorStatus::Overstay => 4,
            VisitorStatus::Other(v) => *v,
        }
    }
}

impl Display for VisitorStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitorStatus::CheckedIn => write!(f, "Checked In"),
            VisitorStatus::CheckedOut => write!(f, "Checked Out"),
            VisitorStatus::AutoCheckedOut => write!(f, "Auto Checked Out"),
            VisitorStatus::SelfServiceOut => write!(f, "Self-Service Out"),
            VisitorStatus::Overstay => write!(f, "Overstay / Not Checked Out"),
            VisitorStatus::Other(v) => write!(f, "Status {v}"),
        }
    }
}

code_serde!(VisitorStatus);

/// State of an access control door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorState {
    /// `0`
    Closed,
    /// `1`
    Open,
    /// `2`, reported by the device itself.
    Unknown,
    /// `3`
    Fault,
    /// `4`
    Locked,
    /// A code outside the table, displayed as `N/A`.
    NotAvailable(i64),
}

impl DoorState {
    /// Map a service code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => DoorState::Closed,
            1 => DoorState::Open,
            2 => DoorState::Unknown,
            3 => DoorState::Fault,
            4 => DoorState::Locked,
            v => DoorState::NotAvailable(v),
        }
    }

    /// The service code.
    pub fn code(&self) -> i64 {
        match self {
            DoorState::Closed => 0,
            DoorState::Open => 1,
            DoorState::Unknown => 2,
            DoorState::Fault => 3,
            DoorState::Locked => 4,
            DoorState::NotAvailable(v) => *v,
        }
    }
}

impl Display for DoorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorState::Closed => write!(f, "Closed"),
            DoorState::Open => write!(f, "Open"),
            DoorState::Unknown => write!(f, "Unknown"),
            DoorState::Fault => write!(f, "Fault"),
            DoorState::Locked => write!(f, "Locked"),
            DoorState::NotAvailable(_) => write!(f, "N/A"),
        }
    }
}

code_serde!(DoorState);

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

//! Paths of the Artemis OpenAPI endpoints used by this crate.
//!
//! All endpoints take a JSON body and are called with `POST`.

// Common
/// Platform version, useful as a connectivity and credential check.
pub const VERSION: &str = "/artemis/api/common/v1/version";

// Visitor
/// Register a visitor appointment.
pub const VISITOR_APPOINTMENT: &str = "/artemis/api/visitor/v1/appointment";
/// Register a visitor appointment with the v2 payload.
pub const VISITOR_APPOINTMENT_V2: &str = "/artemis/api/visitor/v2/appointment";
/// Cancel a visitor appointment.
pub const VISITOR_APPOINTMENT_DELETE: &str = "/artemis/api/visitor/v1/appointment/single/delete";
/// Query the status of appointments.
pub const VISITOR_STATUS: &str = "/artemis/api/visitor/v1/appointment/getVisitorStatus";
/// Query visitor information in pages.
pub const VISITOR_INFO: &str = "/artemis/api/visitor/v1/visitor/visitorInfo";
/// Query a single visitor.
pub const VISITOR_SINGLE_INFO: &str = "/artemis/api/visitor/v1/visitor/single/visitorinfo";
/// Query the visitor list.
pub const VISITOR_LIST: &str = "/artemis/api/visitor/v1/visitor/queryVisitorList";
/// Check a visitor out by appointment record.
pub const VISITOR_CHECK_OUT: &str = "/artemis/api/visitor/v1/visitor/checkOut";
/// Sign a visitor out at a given time.
pub const VISITOR_OUT: &str = "/artemis/api/visitor/v1/visitor/out";
/// Fetch the QR code of a visitor.
pub const VISITOR_QR_CODE: &str = "/artemis/api/visitor/v1/visitor/qr/get";
/// List visitor groups.
pub const VISITOR_GROUPS: &str = "/artemis/api/visitor/v1/visitorgroups";
/// Members of a visitor group.
pub const VISITOR_GROUP_INFO: &str = "/artemis/api/visitor/v1/visitorgroups/groupinfo";
/// Visitor register records.
pub const VISITOR_REGISTER_RECORD: &str =
    "/artemis/api/visitor/v1/register/getVistorRegisterRecord";

// Person
/// List persons.
pub const PERSON_LIST: &str = "/artemis/api/resource/v1/person/personList";
/// Add a person.
pub const PERSON_ADD: &str = "/artemis/api/resource/v1/person/single/add";
/// Update a person.
pub const PERSON_UPDATE: &str = "/artemis/api/resource/v1/person/single/update";
/// Delete a person.
pub const PERSON_DELETE: &str = "/artemis/api/resource/v1/person/single/delete";

// Vehicle
/// List vehicles.
pub const VEHICLE_LIST: &str = "/artemis/api/resource/v1/vehicle/vehicleList";
/// Add a vehicle.
pub const VEHICLE_ADD: &str = "/artemis/api/resource/v1/vehicle/single/add";
/// Update a vehicle.
pub const VEHICLE_UPDATE: &str = "/artemis/api/resource/v1/vehicle/single/update";
/// Delete a vehicle.
pub const VEHICLE_DELETE: &str = "/artemis/api/resource/v1/vehicle/single/delete";
/// List vehicle groups.
pub const VEHICLE_GROUP_LIST: &str = "/artemis/api/resource/v1/vehicleGroup/vehicleGroupList";
/// Add a vehicle group.
pub const VEHICLE_GROUP_ADD: &str = "/artemis/api/resource/v1/vehicleGroup/single/add";
/// Update a vehicle group.
pub const VEHICLE_GROUP_UPDATE: &str = "/artemis/api/resource/v1/vehicleGroup/single/update";
/// Delete a vehicle group.
pub const VEHICLE_GROUP_DELETE: &str = "/artemis/api/resource/v1/vehicleGroup/single/delete";

// Access control
/// List doors.
pub const DOOR_LIST: &str = "/artemis/api/resource/v1/acsDoor/acsDoorList";
/// List doors with filters.
pub const DOOR_ADVANCE_LIST: &str = "/artemis/api/resource/v1/acsDoor/advance/acsDoorList";
/// List access control devices.
pub const DEVICE_LIST: &str = "/artemis/api/resource/v1/acsDevice/acsDeviceList";

// Organization
/// Add an organization.
pub const ORG_ADD: &str = "/artemis/api/resource/v1/org/single/add";
/// List regions.
pub const REGIONS: &str = "/artemis/api/resource/v1/regions";
/// List sub regions of a region.
pub const SUB_REGIONS: &str = "/artemis/api/resource/v1/regions/subRegions";

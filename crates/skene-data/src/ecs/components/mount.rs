// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::ecs::{Component, EntityId};

/// A component holding a single attached entity.
///
/// Attachments declared inline in the scene description are materialized as
/// child entities and linked here immediately; attachments declared by
/// reference hold [`EntityId::PLACEHOLDER`] until the resolution pass
/// patches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount {
    /// The attached entity.
    pub attachment: EntityId,
}

impl Component for Mount {}

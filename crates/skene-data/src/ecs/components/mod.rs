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

mod camera;
mod gizmo_tag;
mod label;
mod mount;
mod parent_link;
mod path;
mod position;
mod shape;

pub use camera::*;
pub use gizmo_tag::*;
pub use label::*;
pub use mount::*;
pub use parent_link::*;
pub use path::*;
pub use position::*;
pub use shape::*;

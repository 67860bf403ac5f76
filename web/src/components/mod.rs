// Copyright 2022 Jeremy Wall
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
pub mod admin_link;
pub mod login_form;
pub mod recipe_card;
pub mod recipe_form;
pub mod recipe_list;
pub mod status;
pub mod toast;

pub use admin_link::*;
pub use login_form::*;
pub use recipe_card::*;
pub use recipe_form::*;
pub use recipe_list::*;
pub use status::*;
